//! Legacy VTK format output.
//!
//! Writes an ASCII `UNSTRUCTURED_GRID` dataset, the format finite-volume and
//! finite-element toolchains (ParaView, VisIt, meshio) read most readily.
//! Every cell is a VTK triangle (cell type 5).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::mesh::TriangleMesh;

/// VTK cell type code for a linear triangle.
pub const VTK_TRIANGLE: u8 = 5;

/// Save a mesh to a legacy VTK file.
pub fn save<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a mesh as a legacy ASCII VTK unstructured grid.
pub fn write<W: Write>(mesh: &TriangleMesh, writer: &mut W) -> Result<()> {
    writeln!(writer, "# vtk DataFile Version 3.0")?;
    writeln!(writer, "Generated by sphere-mesh")?;
    writeln!(writer, "ASCII")?;
    writeln!(writer, "DATASET UNSTRUCTURED_GRID")?;

    writeln!(writer, "POINTS {} double", mesh.num_vertices())?;
    for v in mesh.vertices() {
        writeln!(writer, "{} {} {}", v.x, v.y, v.z)?;
    }

    // Each cell entry is its vertex count followed by the indices
    writeln!(writer, "CELLS {} {}", mesh.num_faces(), 4 * mesh.num_faces())?;
    for f in mesh.faces() {
        writeln!(writer, "3 {} {} {}", f[0], f[1], f[2])?;
    }

    writeln!(writer, "CELL_TYPES {}", mesh.num_faces())?;
    for _ in mesh.faces() {
        writeln!(writer, "{}", VTK_TRIANGLE)?;
    }

    Ok(())
}
