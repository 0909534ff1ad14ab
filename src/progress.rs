//! Progress reporting for mesh generation.
//!
//! Generation runs in a fixed sequence of stages (parameter ranges, nodes,
//! cells, assembly). Callers that want to show progress or timing pass a
//! [`Progress`] to [`generate_with_progress`](crate::sphere::generate_with_progress).
//!
//! # Example
//!
//! ```
//! use sphere_mesh::progress::Progress;
//! use sphere_mesh::sphere::{generate_with_progress, SphereOptions};
//!
//! let progress = Progress::new(|current, total, message| {
//!     println!("[{}/{}] {}", current, total, message);
//! });
//!
//! let mesh = generate_with_progress(&SphereOptions::default(), &progress).unwrap();
//! assert_eq!(mesh.num_vertices(), 162);
//! ```

/// A progress callback that receives updates during generation.
///
/// The callback receives:
/// - `current`: Current step (0-based; equal to `total` once finished)
/// - `total`: Total number of steps
/// - `message`: Description of the current operation
pub struct Progress {
    callback: Box<dyn Fn(usize, usize, &str) + Send + Sync>,
}

impl Progress {
    /// Create a new progress reporter with the given callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(usize, usize, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Report progress.
    #[inline]
    pub fn report(&self, current: usize, total: usize, message: &str) {
        (self.callback)(current, total, message);
    }

    /// Create a no-op progress reporter that discards all updates.
    pub fn none() -> Self {
        Self::new(|_, _, _| {})
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progress").finish_non_exhaustive()
    }
}
