//! A sparse, implicit octree addressed by linear location codes.
//!
//! A cubic domain is recursively subdivided into eight octants, and only the boundary between fully occupied and fully empty
//! subtrees is stored. Every node is addressed by a single integer whose highest set bit marks the depth.
//!
//! This library is organized into several crates:
//! - **core**: the `LocationCode` algebra, octant indices and grid coordinates
//! - **storage**: the sparse `Octree` store with `set`, `clear` and volume queries
//! - **mesh**: boundary mesh extraction and export to OBJ
//!
//! ```
//! use linear_octree::prelude::*;
//!
//! let mut octree = Octree32::new_empty();
//! let code = LocationCode::ROOT.child(OctantIndex::new(3).unwrap()).unwrap();
//! octree.set(code);
//!
//! assert_eq!(octree.volume(), 0.125);
//! ```

pub use linear_octree_core as core;
pub use linear_octree_storage as storage;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::storage::prelude::*;

    #[cfg(feature = "mesh")]
    pub use super::mesh::prelude::*;
}

#[cfg(feature = "mesh")]
pub use linear_octree_mesh as mesh;
