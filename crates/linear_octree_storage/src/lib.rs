#![deny(
    rust_2018_compatibility,
    rust_2018_idioms,
    nonstandard_style,
    unused,
    future_incompatible
)]
#![warn(clippy::doc_markdown)]

//! Sparse storage for a linear octree.
//!
//! The `Octree` is a hash map from `LocationCode` to `NodeRecord`. Only nodes on the boundary between full and empty space
//! take up an entry; uniformly full or empty octants are implied by the bits of their parent's record. Because every node is
//! addressed by a computable code, no parent or child pointers are ever stored.
//!
//! Two widths of code are supported: `Octree32` (max depth 9, i.e. a `512^3` grid) and `Octree64` (max depth 20, i.e. a
//! `2^20` edge length).

pub mod bitset;
pub mod node;
pub mod octree;

pub use bitset::Bitset8;
pub use node::{ChildState, NodeRecord};
pub use octree::{
    NodeMap, NodeMapDump, Occupancy, Octree, Octree32, Octree64, OctreeNode, OctreeVisitor,
    VisitStatus,
};

// Hash map to use for small keys like `LocationCode`.
pub type SmallKeyHashMap<K, V> = ahash::AHashMap<K, V>;

pub mod prelude {
    pub use super::{
        Bitset8, ChildState, NodeMap, NodeMapDump, NodeRecord, Occupancy, Octree, Octree32,
        Octree64, OctreeNode, OctreeVisitor, SmallKeyHashMap, VisitStatus,
    };
}
