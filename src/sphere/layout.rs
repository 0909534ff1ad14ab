//! Index arithmetic shared by node and element generation.
//!
//! Vertices are numbered south pole first, then the interior latitude rows
//! from south to north (each row in longitude order), then the north pole:
//!
//! ```text
//! 0                      south pole
//! 1 + row * n_phi + col  interior rows, row in 0..n_theta-2, col in 0..n_phi
//! n_phi * (n_theta-2)+1  north pole
//! ```

use crate::error::{MeshError, Result};

/// Smallest number of latitude circles (including both poles).
pub const MIN_CIRCLES: usize = 3;

/// Smallest number of longitude samples per circle.
pub const MIN_POINTS_PER_CIRCLE: usize = 3;

/// Largest number of triangles a layout may describe.
///
/// Binary STL stores the triangle count as a `u32`, so this is also the
/// largest sphere every writer can store.
pub const MAX_ELEMENTS: usize = u32::MAX as usize;

/// Resolution of a latitude/longitude sphere and its vertex numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SphereLayout {
    n_theta: usize,
    n_phi: usize,
}

impl SphereLayout {
    /// Create a layout with `n_theta` latitude circles (poles included) and
    /// `n_phi` points on every interior circle.
    ///
    /// Resolutions whose triangle count would exceed [`MAX_ELEMENTS`] are
    /// rejected, so the closed-form counts never overflow.
    pub fn new(n_theta: usize, n_phi: usize) -> Result<Self> {
        if n_theta < MIN_CIRCLES {
            return Err(MeshError::invalid_param(
                "num_circles",
                n_theta,
                "must be at least 3",
            ));
        }
        if n_phi < MIN_POINTS_PER_CIRCLE {
            return Err(MeshError::invalid_param(
                "num_points_per_circle",
                n_phi,
                "must be at least 3",
            ));
        }

        let elements = (n_theta - 2)
            .checked_mul(n_phi)
            .and_then(|cells| cells.checked_mul(2))
            .filter(|&count| count <= MAX_ELEMENTS);
        if elements.is_none() {
            return Err(MeshError::invalid_param(
                "num_circles * num_points_per_circle",
                format!("{} * {}", n_theta, n_phi),
                "too many triangles (at most u32::MAX)",
            ));
        }

        Ok(Self { n_theta, n_phi })
    }

    /// Number of latitude circles, poles included.
    #[inline]
    pub fn num_circles(&self) -> usize {
        self.n_theta
    }

    /// Number of longitude samples per interior row.
    #[inline]
    pub fn points_per_circle(&self) -> usize {
        self.n_phi
    }

    /// Number of interior latitude rows (circles minus the two poles).
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.n_theta - 2
    }

    /// Number of bands of quads between adjacent interior rows.
    #[inline]
    pub fn num_bands(&self) -> usize {
        self.n_theta - 3
    }

    /// Index of the south pole vertex.
    #[inline]
    pub fn south_pole(&self) -> usize {
        0
    }

    /// Index of the north pole vertex.
    #[inline]
    pub fn north_pole(&self) -> usize {
        self.n_phi * self.num_rows() + 1
    }

    /// Index of the vertex at interior `row` and column `col`.
    ///
    /// Columns wrap around: `col` is taken modulo the number of points per
    /// circle, so `col == n_phi` is column 0 again.
    #[inline]
    pub fn node(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.num_rows(), "row {} out of range", row);
        1 + row * self.n_phi + col % self.n_phi
    }

    /// Closed-form number of vertices.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.n_phi * self.num_rows() + 2
    }

    /// Closed-form number of triangles in one pole fan.
    #[inline]
    pub fn fan_count(&self) -> usize {
        self.n_phi
    }

    /// Closed-form number of triangles in all body bands.
    #[inline]
    pub fn body_count(&self) -> usize {
        2 * self.n_phi * self.num_bands()
    }

    /// Closed-form number of triangles.
    #[inline]
    pub fn element_count(&self) -> usize {
        2 * self.num_rows() * self.n_phi
    }
}
