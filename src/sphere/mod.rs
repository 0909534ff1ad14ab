//! Latitude/longitude sphere generation.
//!
//! A sphere is described by two resolutions: the number of latitude circles
//! `n_theta` (both poles count as circles) and the number of points on each
//! interior circle `n_phi`. Generation runs four stages, each in its own
//! module:
//!
//! 1. [`params`]: longitude and latitude sample ranges
//! 2. [`nodes`]: vertex positions, poles included
//! 3. [`elements`]: triangle connectivity (pole fans and body bands)
//! 4. [`assemble`]: count checks and packaging into a [`TriangleMesh`]
//!
//! The result always has `n_phi * (n_theta - 2) + 2` vertices and
//! `2 * n_phi * (n_theta - 2)` triangles and is a closed surface.
//!
//! # Example
//!
//! ```
//! use sphere_mesh::sphere::{generate, SphereOptions};
//!
//! let options = SphereOptions::new(4, 4).with_radius(2.0);
//! let mesh = generate(&options).unwrap();
//!
//! assert_eq!(mesh.num_vertices(), 10);
//! assert_eq!(mesh.num_faces(), 16);
//! assert!(mesh.topology().is_closed());
//! ```

pub mod assemble;
pub mod elements;
pub mod layout;
pub mod nodes;
pub mod params;

pub use assemble::assemble;
pub use elements::generate_elements;
pub use layout::SphereLayout;
pub use nodes::generate_nodes;
pub use params::ParameterRanges;

use crate::error::{MeshError, Result};
use crate::mesh::TriangleMesh;
use crate::progress::Progress;

/// Options for sphere generation.
#[derive(Debug, Clone)]
pub struct SphereOptions {
    /// Sphere radius (must be positive and finite).
    pub radius: f64,

    /// Number of latitude circles, both poles included (at least 3).
    pub num_circles: usize,

    /// Number of points on every interior latitude circle (at least 3).
    pub num_points_per_circle: usize,

    /// Whether to use parallel execution (default: true).
    pub parallel: bool,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            num_circles: 10,
            num_points_per_circle: 20,
            parallel: true,
        }
    }
}

impl SphereOptions {
    /// Create options with the given resolution and a unit radius.
    pub fn new(num_circles: usize, num_points_per_circle: usize) -> Self {
        Self {
            num_circles,
            num_points_per_circle,
            ..Self::default()
        }
    }

    /// Set the sphere radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check the options and return the resulting vertex layout.
    pub fn validate(&self) -> Result<SphereLayout> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MeshError::invalid_param(
                "radius",
                self.radius,
                "must be positive and finite",
            ));
        }
        SphereLayout::new(self.num_circles, self.num_points_per_circle)
    }
}

/// Generate a sphere mesh.
///
/// Invalid options are reported as [`MeshError::InvalidParameter`] before
/// anything is allocated.
pub fn generate(options: &SphereOptions) -> Result<TriangleMesh> {
    generate_with_progress(options, &Progress::none())
}

/// Generate a sphere mesh, reporting each stage to `progress`.
pub fn generate_with_progress(
    options: &SphereOptions,
    progress: &Progress,
) -> Result<TriangleMesh> {
    const STAGES: usize = 4;

    let layout = options.validate()?;
    log::debug!(
        "generating sphere: radius={}, circles={}, points per circle={}, parallel={}",
        options.radius,
        layout.num_circles(),
        layout.points_per_circle(),
        options.parallel
    );

    progress.report(0, STAGES, "Computing parameter ranges");
    let ranges = ParameterRanges::new(&layout);

    progress.report(1, STAGES, "Creating nodes");
    let nodes = generate_nodes(&layout, &ranges, options.radius, options.parallel);

    progress.report(2, STAGES, "Creating cells");
    let elements = generate_elements(&layout, options.parallel)?;

    progress.report(3, STAGES, "Assembling mesh");
    let mesh = assemble(&layout, nodes, elements)?;

    progress.report(STAGES, STAGES, "Done");
    log::debug!(
        "generated sphere with {} nodes and {} elements",
        mesh.num_vertices(),
        mesh.num_faces()
    );
    Ok(mesh)
}
