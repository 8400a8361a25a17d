//! The `Octree` type is a sparse, implicit octree stored as a hash map from `LocationCode` to `NodeRecord`. Often referred
//! to as a "hashed octree" or "linear octree."
//!
//! Every node is either a branch node or a leaf node. Branch nodes are the nodes that actually occupy a
//! `(LocationCode, NodeRecord)` entry in the hash map. Leaf nodes do not take up any space; they are implied by the bits of
//! their parent's record, which say whether the leaf octant is entirely full or entirely empty. The root always has a record,
//! even when the whole domain is empty or full.
//!
//! The store maintains these invariants after every operation:
//! - every non-root record is reachable from the root through "open" bits
//! - no non-root record has all 8 children filled; it is collapsed into a "filled" bit of its parent instead
//! - no non-root record is empty; it is removed and the parent's bits for it are cleared
//!
//! # Example
//!
//! ```
//! use linear_octree_core::prelude::*;
//! use linear_octree_storage::prelude::*;
//!
//! let mut octree = Octree32::new_empty();
//!
//! // Fill all 8 children of the first octant. They collapse into a single "filled" bit at the root.
//! let parent = LocationCode32::ROOT.child(OctantIndex::ALL[0]).unwrap();
//! for &i in OctantIndex::ALL.iter() {
//!     octree.set(parent.child(i).unwrap());
//! }
//!
//! assert_eq!(octree.num_nodes(), 1);
//! assert_eq!(octree.occupancy(parent), Occupancy::Full);
//! assert_eq!(octree.volume(), 0.125);
//! ```
//!
//! # Traversal
//!
//! `Octree::visit_branches_and_filled_leaves_in_preorder` walks the stored branches and the implicit full leaves using the
//! `OctreeVisitor` trait. Any closure of the form `FnMut(&OctreeNode<W>) -> VisitStatus` is a visitor.

mod dump;
mod store;
mod visit;

pub use dump::NodeMapDump;
pub use store::{NodeMap, Occupancy, Octree, Octree32, Octree64};
pub use visit::{OctreeNode, OctreeVisitor, VisitStatus};
