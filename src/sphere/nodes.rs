//! Vertex positions.

use nalgebra::Point3;
use rayon::prelude::*;

use super::layout::SphereLayout;
use super::params::ParameterRanges;

/// Point on the unit sphere at latitude `theta` and longitude `phi`.
///
/// Longitude 0 points along +y and increases towards +x.
#[inline]
pub fn unit_point(theta: f64, phi: f64) -> Point3<f64> {
    let (sin_t, cos_t) = theta.sin_cos();
    let (sin_p, cos_p) = phi.sin_cos();
    Point3::new(cos_t * sin_p, cos_t * cos_p, sin_t)
}

/// Generate all vertex positions in layout order.
///
/// The poles are placed at `(0, 0, ∓radius)` directly rather than through
/// the trigonometric mapping, so they are exact.
pub fn generate_nodes(
    layout: &SphereLayout,
    ranges: &ParameterRanges,
    radius: f64,
    parallel: bool,
) -> Vec<Point3<f64>> {
    let n_phi = layout.points_per_circle();
    let interior = layout.num_rows() * n_phi;
    let row_point = |k: usize| unit_point(ranges.theta[k / n_phi], ranges.phi[k % n_phi]) * radius;

    let mut nodes = Vec::with_capacity(layout.node_count());
    nodes.push(Point3::new(0.0, 0.0, -radius));
    if parallel {
        nodes.par_extend((0..interior).into_par_iter().map(row_point));
    } else {
        nodes.extend((0..interior).map(row_point));
    }
    nodes.push(Point3::new(0.0, 0.0, radius));

    log::trace!("generated {} nodes ({} interior)", nodes.len(), interior);
    nodes
}
