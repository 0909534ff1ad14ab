//! Mesh file output.
//!
//! This module writes a [`TriangleMesh`] to disk in several common formats.
//!
//! # Supported Formats
//!
//! | Format | Extension | Notes |
//! |--------|-----------|-------|
//! | Wavefront OBJ | `.obj` | ASCII, 1-based indices |
//! | STL | `.stl` | Binary, per-face normals |
//! | PLY | `.ply` | ASCII Stanford polygon format |
//! | VTK | `.vtk` | Legacy ASCII unstructured grid |
//!
//! # Usage
//!
//! The format is picked from the file extension:
//!
//! ```no_run
//! use sphere_mesh::io::save;
//! use sphere_mesh::sphere::{generate, SphereOptions};
//!
//! let mesh = generate(&SphereOptions::default()).unwrap();
//! save(&mesh, "sphere.vtk").unwrap();
//! ```
//!
//! Format-specific functions are also available:
//!
//! ```no_run
//! use sphere_mesh::io::ply;
//! # use sphere_mesh::sphere::{generate, SphereOptions};
//! # let mesh = generate(&SphereOptions::default()).unwrap();
//! ply::save(&mesh, "sphere.ply").unwrap();
//! ```

pub mod obj;
pub mod ply;
pub mod stl;
pub mod vtk;

use std::path::Path;

use crate::error::{MeshError, Result};
use crate::mesh::TriangleMesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Wavefront OBJ format.
    Obj,
    /// STL (stereolithography) format.
    Stl,
    /// PLY (Stanford polygon) format.
    Ply,
    /// Legacy VTK format.
    Vtk,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "obj" => Some(Format::Obj),
            "stl" => Some(Format::Stl),
            "ply" => Some(Format::Ply),
            "vtk" => Some(Format::Vtk),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

/// Save a mesh to a file with automatic format detection.
///
/// The format is determined by the file extension.
pub fn save<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| MeshError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    log::debug!("writing {:?} mesh to {}", format, path.display());
    match format {
        Format::Obj => obj::save(mesh, path),
        Format::Stl => stl::save(mesh, path),
        Format::Ply => ply::save(mesh, path),
        Format::Vtk => vtk::save(mesh, path),
    }
}
