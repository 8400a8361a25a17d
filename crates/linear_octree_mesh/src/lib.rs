#![deny(
    rust_2018_compatibility,
    rust_2018_idioms,
    nonstandard_style,
    unused,
    future_incompatible
)]
#![warn(clippy::doc_markdown)]

//! Boundary meshes for linear octrees.
//!
//! `boundary_quads` finds the faces between filled and non-filled space. Large filled octants produce large faces, so the
//! mesh is only as fine as the tree is around each face. `BoundaryMesh` welds the quads into an indexed triangle mesh, and
//! `export_mesh` writes it out.
//!
//! ```
//! use linear_octree_core::prelude::*;
//! use linear_octree_mesh::prelude::*;
//! use linear_octree_storage::prelude::*;
//!
//! let mut octree = Octree32::new_empty();
//! octree.set(LocationCode32::ROOT.child(OctantIndex::ALL[0]).unwrap());
//!
//! let mut obj = Vec::new();
//! export_mesh(&octree, ExportFormat::Obj, &mut obj).unwrap();
//!
//! assert!("stl".parse::<ExportFormat>().map_or(false, |f| !f.is_supported()));
//! ```

mod boundary;
mod export;
mod obj;
mod quad;

pub use boundary::*;
pub use export::*;
pub use obj::*;
pub use quad::*;

pub mod prelude {
    pub use super::{
        boundary_quads, export_mesh, export_mesh_to_file, write_obj, BoundaryMesh, BoundaryQuad,
        ExportError, ExportFormat,
    };
}
