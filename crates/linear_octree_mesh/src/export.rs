use crate::{write_obj, BoundaryMesh};

use linear_octree_core::CodeWord;
use linear_octree_storage::Octree;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Mesh file formats that can be named. Only `Obj` can currently be written.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ExportFormat {
    Obj,
    Stl,
    Ply,
}

impl ExportFormat {
    /// The conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Obj => "obj",
            ExportFormat::Stl => "stl",
            ExportFormat::Ply => "ply",
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, ExportFormat::Obj)
    }

    /// Guesses the format from the extension of `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ExportError::UnsupportedFormat(path.display().to_string()))?;

        extension.parse()
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    /// Parses a format name or file extension, ignoring case and a leading dot.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "obj" => Ok(ExportFormat::Obj),
            "stl" => Ok(ExportFormat::Stl),
            "ply" => Ok(ExportFormat::Ply),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported mesh format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to write mesh: {0}")]
    Io(#[from] io::Error),
}

/// Writes the boundary mesh of `octree` to `writer` in `format`.
///
/// Fails with `ExportError::UnsupportedFormat` before writing anything if `format` can't be written.
pub fn export_mesh<W: CodeWord>(
    octree: &Octree<W>,
    format: ExportFormat,
    writer: impl Write,
) -> Result<(), ExportError> {
    check_supported(format)?;

    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("export_mesh", %format).entered();

    let mesh = BoundaryMesh::from(octree);

    #[cfg(feature = "tracing")]
    tracing::info!(
        num_vertices = mesh.positions.len(),
        num_triangles = mesh.num_triangles(),
        "exporting boundary mesh"
    );

    match format {
        ExportFormat::Obj => write_obj(&mesh, writer)?,
        ExportFormat::Stl | ExportFormat::Ply => {
            return Err(ExportError::UnsupportedFormat(format.to_string()))
        }
    }

    Ok(())
}

/// Same as `export_mesh`, but creates (or truncates) the file at `path`. No file is created for an unsupported format.
pub fn export_mesh_to_file<W: CodeWord>(
    octree: &Octree<W>,
    path: impl AsRef<Path>,
    format: ExportFormat,
) -> Result<(), ExportError> {
    check_supported(format)?;

    let file = File::create(path)?;

    export_mesh(octree, format, BufWriter::new(file))
}

fn check_supported(format: ExportFormat) -> Result<(), ExportError> {
    if format.is_supported() {
        Ok(())
    } else {
        Err(ExportError::UnsupportedFormat(format.to_string()))
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;

    use linear_octree_core::LocationCode32;
    use linear_octree_storage::Octree32;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_format_names() {
        assert_eq!("obj".parse::<ExportFormat>().unwrap(), ExportFormat::Obj);
        assert_eq!(".OBJ".parse::<ExportFormat>().unwrap(), ExportFormat::Obj);
        assert_eq!("Ply".parse::<ExportFormat>().unwrap(), ExportFormat::Ply);
        assert!(matches!(
            "gltf".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat(name)) if name == "gltf"
        ));
        assert_eq!(
            ExportFormat::from_path("out/sphere.stl").unwrap(),
            ExportFormat::Stl
        );
        assert!(ExportFormat::from_path("no_extension").is_err());
    }

    #[test]
    fn unsupported_format_writes_nothing() {
        let octree = Octree32::new_full();

        for &format in [ExportFormat::Stl, ExportFormat::Ply].iter() {
            let mut out = Vec::new();
            let result = export_mesh(&octree, format, &mut out);

            assert!(matches!(result, Err(ExportError::UnsupportedFormat(_))));
            assert!(out.is_empty());
        }
    }

    #[test]
    fn export_obj_of_single_octant() {
        let mut octree = Octree32::new_empty();
        octree.set(LocationCode32::new(0b1111).unwrap());

        let mut out = Vec::new();
        export_mesh(&octree, ExportFormat::Obj, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 8);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 12);
        assert!(text.contains("v 512 512 512\n"));
        assert!(text.contains("v 256 256 256\n"));
    }

    #[test]
    fn export_to_file() {
        let path = std::env::temp_dir().join(format!(
            "linear_octree_export_{}.obj",
            std::process::id()
        ));
        let octree = Octree32::new_full();

        export_mesh_to_file(&octree, &path, ExportFormat::Obj).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(text.lines().count(), 8 + 12);

        let unsupported = std::env::temp_dir().join(format!(
            "linear_octree_export_{}.ply",
            std::process::id()
        ));
        assert!(export_mesh_to_file(&octree, &unsupported, ExportFormat::Ply).is_err());
        assert!(!unsupported.exists());
    }
}
