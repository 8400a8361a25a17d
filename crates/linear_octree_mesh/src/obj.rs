use crate::BoundaryMesh;

use std::io::{self, Write};

/// Writes `mesh` in the Wavefront OBJ text format: one `v x y z` line per vertex, then one `f a b c` line per triangle with
/// 1-based vertex indices.
pub fn write_obj(mesh: &BoundaryMesh, mut writer: impl Write) -> io::Result<()> {
    for p in mesh.positions.iter() {
        writeln!(writer, "v {} {} {}", p.x(), p.y(), p.z())?;
    }
    for triangle in mesh.indices.chunks_exact(3) {
        writeln!(
            writer,
            "f {} {} {}",
            triangle[0] + 1,
            triangle[1] + 1,
            triangle[2] + 1
        )?;
    }

    writer.flush()
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
