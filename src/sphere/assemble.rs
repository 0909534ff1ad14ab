//! Final count check and packaging of the generated mesh.

use nalgebra::Point3;

use super::layout::SphereLayout;
use crate::error::{MeshError, Result};
use crate::mesh::{Triangle, TriangleMesh};

/// Package generated nodes and elements into a [`TriangleMesh`].
///
/// Re-checks the closed-form node and element counts and that every index
/// refers to an existing node. Any disagreement is a generator defect and is
/// returned as [`MeshError::InternalConsistency`].
pub fn assemble(
    layout: &SphereLayout,
    nodes: Vec<Point3<f64>>,
    elements: Vec<Triangle>,
) -> Result<TriangleMesh> {
    if nodes.len() != layout.node_count() {
        return Err(MeshError::inconsistent("node count", layout.node_count(), nodes.len()));
    }
    if elements.len() != layout.element_count() {
        return Err(MeshError::inconsistent(
            "element count",
            layout.element_count(),
            elements.len(),
        ));
    }
    if let Some(&bad) = elements.iter().flatten().find(|&&v| v >= nodes.len()) {
        return Err(MeshError::inconsistent("largest node index", nodes.len() - 1, bad));
    }

    Ok(TriangleMesh::from_raw(nodes, elements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::elements::generate_elements;

    fn nodes(n: usize) -> Vec<Point3<f64>> {
        vec![Point3::origin(); n]
    }

    #[test]
    fn test_accepts_consistent_parts() {
        let layout = SphereLayout::new(4, 4).unwrap();
        let elements = generate_elements(&layout, false).unwrap();
        let mesh = assemble(&layout, nodes(10), elements).unwrap();
        assert_eq!(mesh.num_vertices(), 10);
        assert_eq!(mesh.num_faces(), 16);
    }

    #[test]
    fn test_rejects_node_count_mismatch() {
        let layout = SphereLayout::new(4, 4).unwrap();
        let elements = generate_elements(&layout, false).unwrap();
        let err = assemble(&layout, nodes(9), elements).unwrap_err();
        assert!(err.is_internal());
        assert!(matches!(
            err,
            MeshError::InternalConsistency { what: "node count", expected: 10, actual: 9 }
        ));
    }

    #[test]
    fn test_rejects_element_count_mismatch() {
        let layout = SphereLayout::new(4, 4).unwrap();
        let mut elements = generate_elements(&layout, false).unwrap();
        elements.pop();
        let err = assemble(&layout, nodes(10), elements).unwrap_err();
        assert!(matches!(
            err,
            MeshError::InternalConsistency { expected: 16, actual: 15, .. }
        ));
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let layout = SphereLayout::new(4, 4).unwrap();
        let mut elements = generate_elements(&layout, false).unwrap();
        elements[3] = [0, 4, 10];
        let err = assemble(&layout, nodes(10), elements).unwrap_err();
        assert!(matches!(
            err,
            MeshError::InternalConsistency { expected: 9, actual: 10, .. }
        ));
    }
}
