//! Triangle connectivity.
//!
//! Triangles are emitted in three zones:
//!
//! 1. the south pole fan, `n_phi` triangles `(S, row0[j], row0[j+1])`;
//! 2. the body bands between adjacent interior rows, two triangles per quad,
//!    split along the diagonal from `row_i[j]` to `row_{i+1}[j+1]`. All
//!    non-seam quads come first (row by row), followed by the seam quad of
//!    every band (column `n_phi-1` joined back to column 0);
//! 3. the north pole fan, `n_phi` triangles `(last[j+1], last[j], N)`.
//!
//! Columns are taken modulo `n_phi`, so the closing triangle of each fan and
//! the seam quads come out of the same formulas as every other element.
//! Each element is a function of its position inside its zone only, which
//! lets every zone be filled in parallel.

use rayon::prelude::*;

use super::layout::SphereLayout;
use crate::error::{MeshError, Result};
use crate::mesh::Triangle;

/// Triangle `j` of the south pole fan.
#[inline]
pub fn south_fan(layout: &SphereLayout, j: usize) -> Triangle {
    [layout.south_pole(), layout.node(0, j), layout.node(0, j + 1)]
}

/// Triangle `j` of the north pole fan.
#[inline]
pub fn north_fan(layout: &SphereLayout, j: usize) -> Triangle {
    let last = layout.num_rows() - 1;
    [layout.node(last, j + 1), layout.node(last, j), layout.north_pole()]
}

/// The two triangles covering the quad between rows `row`, `row + 1` and
/// columns `col`, `col + 1`.
#[inline]
pub fn body_quad(layout: &SphereLayout, row: usize, col: usize) -> [Triangle; 2] {
    let a = layout.node(row, col);
    let b = layout.node(row, col + 1);
    let c = layout.node(row + 1, col + 1);
    let d = layout.node(row + 1, col);
    [[a, b, c], [a, c, d]]
}

/// Triangle `k` of the body zone, `k < layout.body_count()`.
pub fn body_triangle(layout: &SphereLayout, k: usize) -> Triangle {
    let n_phi = layout.points_per_circle();
    let inner = 2 * (n_phi - 1) * layout.num_bands();

    let (row, col, half) = if k < inner {
        let quad = k / 2;
        (quad / (n_phi - 1), quad % (n_phi - 1), k % 2)
    } else {
        let seam = k - inner;
        (seam / 2, n_phi - 1, seam % 2)
    };
    body_quad(layout, row, col)[half]
}

/// Generate all triangles in zone order.
///
/// Fails with [`MeshError::InternalConsistency`] if the number of triangles
/// produced differs from [`SphereLayout::element_count`].
pub fn generate_elements(layout: &SphereLayout, parallel: bool) -> Result<Vec<Triangle>> {
    let expected = layout.element_count();
    let mut elements = Vec::with_capacity(expected);

    fill(&mut elements, layout.fan_count(), parallel, |j| south_fan(layout, j));
    fill(&mut elements, layout.body_count(), parallel, |k| body_triangle(layout, k));
    fill(&mut elements, layout.fan_count(), parallel, |j| north_fan(layout, j));

    if elements.len() != expected {
        return Err(MeshError::inconsistent("element count", expected, elements.len()));
    }

    log::trace!(
        "generated {} elements ({} per fan, {} body)",
        elements.len(),
        layout.fan_count(),
        layout.body_count()
    );
    Ok(elements)
}

fn fill<F>(out: &mut Vec<Triangle>, len: usize, parallel: bool, element: F)
where
    F: Fn(usize) -> Triangle + Sync + Send,
{
    if parallel {
        out.par_extend((0..len).into_par_iter().map(element));
    } else {
        out.extend((0..len).map(element));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_4x4_connectivity() {
        let layout = SphereLayout::new(4, 4).unwrap();
        let elements = generate_elements(&layout, false).unwrap();

        let expected: Vec<Triangle> = vec![
            // south fan
            [0, 1, 2],
            [0, 2, 3],
            [0, 3, 4],
            [0, 4, 1],
            // body, non-seam quads
            [1, 2, 6],
            [1, 6, 5],
            [2, 3, 7],
            [2, 7, 6],
            [3, 4, 8],
            [3, 8, 7],
            // body, seam quad
            [4, 1, 5],
            [4, 5, 8],
            // north fan
            [6, 5, 9],
            [7, 6, 9],
            [8, 7, 9],
            [5, 8, 9],
        ];
        assert_eq!(elements, expected);
    }

    #[test]
    fn test_5x3_connectivity_orders_seams_after_all_bands() {
        let layout = SphereLayout::new(5, 3).unwrap();
        let elements = generate_elements(&layout, false).unwrap();

        let expected: Vec<Triangle> = vec![
            // south fan
            [0, 1, 2],
            [0, 2, 3],
            [0, 3, 1],
            // band 0, non-seam quads
            [1, 2, 5],
            [1, 5, 4],
            [2, 3, 6],
            [2, 6, 5],
            // band 1, non-seam quads
            [4, 5, 8],
            [4, 8, 7],
            [5, 6, 9],
            [5, 9, 8],
            // seam quads of band 0, then band 1
            [3, 1, 4],
            [3, 4, 6],
            [6, 4, 7],
            [6, 7, 9],
            // north fan
            [8, 7, 10],
            [9, 8, 10],
            [7, 9, 10],
        ];
        assert_eq!(elements, expected);
        assert_eq!(generate_elements(&layout, true).unwrap(), expected);
    }

    #[test]
    fn test_fans_close_through_the_seam() {
        let layout = SphereLayout::new(6, 9).unwrap();
        assert_eq!(south_fan(&layout, 8), [0, 9, 1]);

        let last_row_start = layout.node(3, 0);
        assert_eq!(
            north_fan(&layout, 8),
            [last_row_start, last_row_start + 8, layout.north_pole()]
        );
    }

    #[test]
    fn test_seam_quads_follow_inner_quads() {
        let layout = SphereLayout::new(6, 5).unwrap();
        let n_phi = 5;
        let inner = 2 * (n_phi - 1) * layout.num_bands();

        for band in 0..layout.num_bands() {
            let [t0, t1] = body_quad(&layout, band, n_phi - 1);
            assert_eq!(body_triangle(&layout, inner + 2 * band), t0);
            assert_eq!(body_triangle(&layout, inner + 2 * band + 1), t1);
            // Seam joins column n_phi-1 back to column 0
            assert_eq!(t0, [
                layout.node(band, n_phi - 1),
                layout.node(band, 0),
                layout.node(band + 1, 0),
            ]);
        }
    }

    #[test]
    fn test_single_row_has_only_fans() {
        let layout = SphereLayout::new(3, 5).unwrap();
        let elements = generate_elements(&layout, false).unwrap();

        assert_eq!(elements.len(), 10);
        assert!(elements[..5].iter().all(|t| t[0] == 0));
        assert!(elements[5..].iter().all(|t| t[2] == 6));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let layout = SphereLayout::new(11, 23).unwrap();
        assert_eq!(
            generate_elements(&layout, true).unwrap(),
            generate_elements(&layout, false).unwrap()
        );
    }
}
