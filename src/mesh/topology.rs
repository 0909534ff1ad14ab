//! Combinatorial analysis of a triangle mesh.
//!
//! [`Topology`] counts how many triangles share each undirected edge and how
//! many triangles touch each vertex. From those counts it answers the
//! questions used to check a generated sphere: is the surface closed (every
//! edge shared by exactly two triangles), what is its Euler characteristic,
//! and what is the valence of a given vertex.

use std::collections::HashMap;

use super::TriangleMesh;

/// Edge multiplicities and vertex valences of a triangle mesh.
#[derive(Debug, Clone)]
pub struct Topology {
    num_vertices: usize,
    num_faces: usize,
    /// Undirected edge `(min, max)` -> number of incident triangles.
    edges: HashMap<(usize, usize), usize>,
    /// Number of triangles incident to each vertex.
    valence: Vec<usize>,
}

impl Topology {
    /// Analyze a mesh.
    pub fn analyze(mesh: &TriangleMesh) -> Self {
        let mut edges: HashMap<(usize, usize), usize> =
            HashMap::with_capacity(mesh.num_faces() * 3 / 2);
        let mut valence = vec![0; mesh.num_vertices()];

        for &[v0, v1, v2] in mesh.faces() {
            for (a, b) in [(v0, v1), (v1, v2), (v2, v0)] {
                *edges.entry(edge_key(a, b)).or_insert(0) += 1;
            }
            valence[v0] += 1;
            valence[v1] += 1;
            valence[v2] += 1;
        }

        Self {
            num_vertices: mesh.num_vertices(),
            num_faces: mesh.num_faces(),
            edges,
            valence,
        }
    }

    /// Number of distinct undirected edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of triangles sharing the edge `(a, b)`, in either direction.
    pub fn edge_multiplicity(&self, a: usize, b: usize) -> usize {
        self.edges.get(&edge_key(a, b)).copied().unwrap_or(0)
    }

    /// Edges used by exactly one triangle, sorted.
    pub fn boundary_edges(&self) -> Vec<(usize, usize)> {
        self.edges_where(|count| count == 1)
    }

    /// Edges used by more than two triangles, sorted.
    pub fn non_manifold_edges(&self) -> Vec<(usize, usize)> {
        self.edges_where(|count| count > 2)
    }

    /// Number of triangles incident to vertex `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    pub fn vertex_valence(&self, v: usize) -> usize {
        self.valence[v]
    }

    /// Incident triangle counts for all vertices, in index order.
    pub fn valences(&self) -> &[usize] {
        &self.valence
    }

    /// Euler characteristic `V - E + F`.
    pub fn euler_characteristic(&self) -> i64 {
        self.num_vertices as i64 - self.num_edges() as i64 + self.num_faces as i64
    }

    /// Whether every edge is shared by exactly two triangles.
    pub fn is_closed(&self) -> bool {
        self.num_faces > 0 && self.edges.values().all(|&count| count == 2)
    }

    fn edges_where(&self, keep: impl Fn(usize) -> bool) -> Vec<(usize, usize)> {
        let mut out: Vec<(usize, usize)> = self
            .edges
            .iter()
            .filter(|(_, count)| keep(**count))
            .map(|(&edge, _)| edge)
            .collect();
        out.sort_unstable();
        out
    }
}

#[inline]
fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
