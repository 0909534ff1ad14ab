//! Deterministic topology tests for generated spheres.
//!
//! Checks closedness, Euler characteristic, vertex valences and the
//! longitude seam on a handful of fixed resolutions. Randomized versions of
//! the same properties live in `proptest_sphere.rs`.

use std::collections::HashSet;

use approx::assert_relative_eq;
use nalgebra::Point3;
use sphere_mesh::prelude::*;

fn sphere(n_theta: usize, n_phi: usize) -> TriangleMesh {
    generate(&SphereOptions::new(n_theta, n_phi)).unwrap()
}

// =============================================================================
// KNOWN CONFIGURATIONS
// =============================================================================

#[test]
fn test_4x4_sphere() {
    let mesh = sphere(4, 4);

    assert_eq!(mesh.num_vertices(), 10);
    assert_eq!(mesh.num_faces(), 16);
    assert_eq!(*mesh.position(0), Point3::new(0.0, 0.0, -1.0));
    assert_eq!(*mesh.position(9), Point3::new(0.0, 0.0, 1.0));

    let south = mesh.faces().iter().filter(|t| t.contains(&0)).count();
    let north = mesh.faces().iter().filter(|t| t.contains(&9)).count();
    assert_eq!(south, 4);
    assert_eq!(north, 4);
    assert_eq!(mesh.num_faces() - south - north, 8);

    let topology = mesh.topology();
    assert!(topology.is_closed());
    assert_eq!(topology.num_edges(), 24);
    assert_eq!(topology.euler_characteristic(), 2);
}

#[test]
fn test_single_row_sphere_is_closed() {
    for n_phi in [3, 4, 7, 32] {
        let mesh = sphere(3, n_phi);
        let layout = SphereLayout::new(3, n_phi).unwrap();

        assert_eq!(mesh.num_faces(), 2 * n_phi);
        let topology = mesh.topology();
        assert!(topology.is_closed(), "n_phi = {}", n_phi);
        assert_eq!(topology.euler_characteristic(), 2);

        assert_eq!(topology.vertex_valence(layout.south_pole()), n_phi);
        assert_eq!(topology.vertex_valence(layout.north_pole()), n_phi);
        for col in 0..n_phi {
            assert_eq!(topology.vertex_valence(layout.node(0, col)), 4);
        }
    }
}

#[test]
fn test_minimal_sphere() {
    // Triangular bipyramid: two 3-triangle fans sharing the equator edges
    // (5 vertices, 6 faces)
    let mesh = sphere(3, 3);
    assert_eq!(mesh.num_vertices(), 5);
    assert_eq!(mesh.num_faces(), 6);
    assert!(mesh.topology().is_closed());
}

// =============================================================================
// VALENCE
// =============================================================================

#[test]
fn test_valences_by_row() {
    let (n_theta, n_phi) = (9, 12);
    let mesh = sphere(n_theta, n_phi);
    let layout = SphereLayout::new(n_theta, n_phi).unwrap();
    let topology = mesh.topology();

    assert_eq!(topology.vertex_valence(layout.south_pole()), n_phi);
    assert_eq!(topology.vertex_valence(layout.north_pole()), n_phi);

    let last = layout.num_rows() - 1;
    for row in 0..layout.num_rows() {
        let expected = if row == 0 || row == last { 5 } else { 6 };
        for col in 0..n_phi {
            assert_eq!(
                topology.vertex_valence(layout.node(row, col)),
                expected,
                "row {} col {}",
                row,
                col
            );
        }
    }

    let total: usize = topology.valences().iter().sum();
    assert_eq!(total, 3 * mesh.num_faces());
}

// =============================================================================
// SEAM
// =============================================================================

#[test]
fn test_seam_triangles_present_once() {
    let (n_theta, n_phi) = (7, 10);
    let mesh = sphere(n_theta, n_phi);
    let layout = SphereLayout::new(n_theta, n_phi).unwrap();
    let topology = mesh.topology();

    for row in 0..layout.num_rows() {
        let first = layout.node(row, 0);
        let last = layout.node(row, n_phi - 1);

        // The seam edge is shared by exactly one triangle on each side
        assert_eq!(topology.edge_multiplicity(first, last), 2, "row {}", row);

        let joining = mesh
            .faces()
            .iter()
            .filter(|t| t.contains(&first) && t.contains(&last))
            .count();
        assert_eq!(joining, 2, "row {}", row);
    }
}

#[test]
fn test_no_duplicate_triangles() {
    let mesh = sphere(8, 9);
    let unique: HashSet<[usize; 3]> = mesh
        .faces()
        .iter()
        .map(|t| {
            let mut sorted = *t;
            sorted.sort_unstable();
            sorted
        })
        .collect();
    assert_eq!(unique.len(), mesh.num_faces());
}

// =============================================================================
// GEOMETRY
// =============================================================================

#[test]
fn test_surface_area_approaches_sphere() {
    let radius = 2.0;
    let mesh = generate(&SphereOptions::new(60, 120).with_radius(radius)).unwrap();
    let exact = 4.0 * std::f64::consts::PI * radius * radius;

    let area = mesh.surface_area();
    assert!(area < exact);
    assert_relative_eq!(area, exact, max_relative = 1e-2);
}

#[test]
fn test_bounding_box_spans_poles() {
    let mesh = generate(&SphereOptions::new(11, 16).with_radius(3.0)).unwrap();
    let (min, max) = mesh.bounding_box().unwrap();
    assert_eq!(min.z, -3.0);
    assert_eq!(max.z, 3.0);
    assert!(max.x <= 3.0 && min.x >= -3.0);
}
