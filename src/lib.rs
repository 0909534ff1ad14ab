//! # sphere-mesh
//!
//! Deterministic triangulation of the sphere from a latitude/longitude
//! parametrization, for quick finite-volume and finite-element prototyping.
//!
//! A sphere is described by a radius and two resolutions: the number of
//! latitude circles (both poles count as circles) and the number of points on
//! every interior circle. The generated mesh is a closed surface whose vertex
//! and triangle numbering depend only on those two integers.
//!
//! ## Features
//!
//! - **Closed-form topology**: node and element counts, pole fans and the
//!   longitude seam all follow from index arithmetic, checked on every run
//! - **Parallel generation**: nodes and elements are filled with rayon,
//!   with output identical to a sequential run
//! - **Multiple file formats**: OBJ, STL, PLY, legacy VTK
//! - **Topology checks**: edge multiplicities, valences, Euler characteristic
//!
//! ## Quick Start
//!
//! ```
//! use sphere_mesh::prelude::*;
//!
//! let options = SphereOptions::default().with_radius(2.0);
//! let mesh = generate(&options).unwrap();
//!
//! // 10 circles (8 interior rows) with 20 points each, plus two poles
//! assert_eq!(mesh.num_vertices(), 162);
//! assert_eq!(mesh.num_faces(), 320);
//!
//! let topology = mesh.topology();
//! assert!(topology.is_closed());
//! assert_eq!(topology.euler_characteristic(), 2);
//! ```
//!
//! ## Writing Meshes
//!
//! ```no_run
//! use sphere_mesh::prelude::*;
//!
//! let mesh = generate(&SphereOptions::new(30, 60)).unwrap();
//! sphere_mesh::io::save(&mesh, "sphere.vtk").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod io;
pub mod mesh;
pub mod progress;
pub mod sphere;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use sphere_mesh::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{Topology, Triangle, TriangleMesh};
    pub use crate::progress::Progress;
    pub use crate::sphere::{generate, generate_with_progress, SphereLayout, SphereOptions};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
