//! Core mesh data structures.
//!
//! The primary type is [`TriangleMesh`], an immutable face-vertex triangle
//! mesh: a list of vertex positions and a list of triangles, each triangle
//! being three indices into the vertex list. It is the value handed from the
//! generator to the file writers.
//!
//! # Construction
//!
//! Meshes are normally produced by [`crate::sphere::generate`]. Arbitrary
//! face-vertex data can be wrapped with [`TriangleMesh::new`], which checks
//! that every index is in range and that no triangle is degenerate:
//!
//! ```
//! use sphere_mesh::mesh::TriangleMesh;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//!
//! let mesh = TriangleMesh::new(vertices, faces).unwrap();
//! assert_eq!(mesh.num_vertices(), 3);
//! assert_eq!(mesh.num_faces(), 1);
//! ```

pub mod topology;

use nalgebra::{Point3, Vector3};

use crate::error::{MeshError, Result};

pub use topology::Topology;

/// A triangle, as three indices into the vertex list.
pub type Triangle = [usize; 3];

/// An immutable triangle mesh in face-vertex form.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<Point3<f64>>,
    faces: Vec<Triangle>,
}

impl TriangleMesh {
    /// Build a mesh from vertex positions and triangles.
    ///
    /// Returns an error if a triangle references a vertex that does not
    /// exist or repeats a vertex.
    pub fn new(vertices: Vec<Point3<f64>>, faces: Vec<Triangle>) -> Result<Self> {
        for (fi, face) in faces.iter().enumerate() {
            for &vi in face {
                if vi >= vertices.len() {
                    return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
                }
            }
            if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
                return Err(MeshError::DegenerateFace { face: fi });
            }
        }

        Ok(Self::from_raw(vertices, faces))
    }

    /// Wrap already-validated data.
    pub(crate) fn from_raw(vertices: Vec<Point3<f64>>, faces: Vec<Triangle>) -> Self {
        Self { vertices, faces }
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Vertex positions, in index order.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Triangles, in generation order.
    #[inline]
    pub fn faces(&self) -> &[Triangle] {
        &self.faces
    }

    /// Position of a vertex.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[inline]
    pub fn position(&self, v: usize) -> &Point3<f64> {
        &self.vertices[v]
    }

    /// The three corner positions of a triangle.
    pub fn face_positions(&self, f: usize) -> [Point3<f64>; 3] {
        let [a, b, c] = self.faces[f];
        [self.vertices[a], self.vertices[b], self.vertices[c]]
    }

    /// Unit normal of a triangle, following its winding.
    pub fn face_normal(&self, f: usize) -> Vector3<f64> {
        let [p0, p1, p2] = self.face_positions(f);
        let e1 = p1 - p0;
        let e2 = p2 - p0;
        e1.cross(&e2).normalize()
    }

    /// Area of a triangle.
    pub fn face_area(&self, f: usize) -> f64 {
        let [p0, p1, p2] = self.face_positions(f);
        let e1 = p1 - p0;
        let e2 = p2 - p0;
        0.5 * e1.cross(&e2).norm()
    }

    /// Total surface area of the mesh.
    pub fn surface_area(&self) -> f64 {
        (0..self.num_faces()).map(|f| self.face_area(f)).sum()
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = self.vertices.first()?;
        let mut min = *first;
        let mut max = *first;

        for p in &self.vertices {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }

        Some((min, max))
    }

    /// Undirected edge and valence analysis of this mesh.
    pub fn topology(&self) -> Topology {
        Topology::analyze(self)
    }

    /// Consume the mesh, returning its vertex and triangle lists.
    pub fn into_parts(self) -> (Vec<Point3<f64>>, Vec<Triangle>) {
        (self.vertices, self.faces)
    }
}
