use crate::{ChildState, NodeRecord, SmallKeyHashMap};

use linear_octree_core::prelude::*;
use std::collections::hash_map::Entry;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The sparse map from node address to node state.
pub type NodeMap<W> = SmallKeyHashMap<LocationCode<W>, NodeRecord>;

/// A sparse octree over a cubic grid of `2^W::MAX_DEPTH` cells per edge, storing only the boundary between full and empty
/// octants. See the module docs for the invariants.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Octree<W: CodeWord> {
    // Save memory by using location codes as hash map keys instead of node pointers. A record is only 2 bytes.
    nodes: NodeMap<W>,
}

/// An `Octree` with 32-bit location codes, max depth 9.
pub type Octree32 = Octree<u32>;
/// An `Octree` with 64-bit location codes, max depth 20.
pub type Octree64 = Octree<u64>;

/// How much of a node's octant is filled.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Occupancy {
    Empty,
    Full,
    Partial,
}

impl<W: CodeWord> Octree<W> {
    /// Make a set that is either entirely `full` or entirely empty. `capacity` is only a hint for how many records to
    /// pre-allocate.
    pub fn new(full: bool, capacity: usize) -> Self {
        let mut octree = Self {
            nodes: NodeMap::default(),
        };
        if full {
            octree.set_root();
        } else {
            octree.clear_root();
        }
        octree.reserve(capacity);

        octree
    }

    pub fn new_empty() -> Self {
        Self::new(false, 0)
    }

    pub fn new_full() -> Self {
        Self::new(true, 0)
    }

    /// An empty set with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(false, capacity)
    }

    pub fn reserve(&mut self, capacity: usize) {
        self.nodes.reserve(capacity);
    }

    /// The deepest level of the tree.
    #[inline]
    pub fn max_depth() -> u8 {
        W::MAX_DEPTH
    }

    /// Edge length of the whole domain in cells.
    #[inline]
    pub fn edge_length() -> u32 {
        LocationCode::<W>::grid_edge_length()
    }

    /// Fill the entire domain.
    pub fn set_root(&mut self) {
        self.nodes.clear();
        self.nodes
            .insert(LocationCode::ROOT, NodeRecord::ALL_CHILDREN_FILLED);
    }

    /// Empty the entire domain.
    pub fn clear_root(&mut self) {
        self.nodes.clear();
        self.nodes.insert(LocationCode::ROOT, NodeRecord::EMPTY);
    }

    /// The record of the node at `code`, if it is a branch. `None` means the octant is uniform: either empty, or full because
    /// some ancestor has it filled.
    #[inline]
    pub fn node(&self, code: LocationCode<W>) -> Option<NodeRecord> {
        self.nodes.get(&code).copied()
    }

    /// Read-only access to every stored record.
    #[inline]
    pub fn node_map(&self) -> &NodeMap<W> {
        &self.nodes
    }

    /// The number of stored records, including the root.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` iff no cell is filled.
    pub fn is_empty(&self) -> bool {
        self.root_record().is_empty()
    }

    /// Returns `true` iff every cell is filled.
    pub fn is_full(&self) -> bool {
        self.root_record().is_all_filled()
    }

    fn root_record(&self) -> NodeRecord {
        self.nodes
            .get(&LocationCode::ROOT)
            .copied()
            .unwrap_or(NodeRecord::EMPTY)
    }

    /// Mark the entire octant at `code` as filled. Setting an octant that is already full has no effect.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn set(&mut self, code: LocationCode<W>) {
        let parent_code = match code.parent() {
            Some(parent_code) => parent_code,
            None => {
                self.set_root();
                return;
            }
        };
        let parent_depth = parent_code.depth();

        // Open a path from the root down to the parent.
        for depth in 0..parent_depth {
            let ancestor_code = code.ancestor_at_depth(depth);
            let child = code.octant_at_depth(depth);
            match self.nodes.entry(ancestor_code) {
                Entry::Vacant(entry) => {
                    entry.insert(NodeRecord::with_open_child(child));
                }
                Entry::Occupied(mut entry) => {
                    let record = entry.get_mut();
                    if record.child_state(child) == ChildState::Filled {
                        // The whole target octant is inside a full ancestor octant.
                        return;
                    }
                    record.set_child_open(child);
                }
            }
        }

        let child = code.final_child_index();
        match self.nodes.entry(parent_code) {
            Entry::Vacant(entry) => {
                // Every record on the path was just created, so there is nothing below to erase or above to collapse.
                entry.insert(NodeRecord::with_filled_child(child));
                return;
            }
            Entry::Occupied(mut entry) => {
                entry.get_mut().set_child_filled(child);
            }
        }

        // Any finer detail below the target is superseded.
        self.erase_node(code);

        self.collapse_filled(parent_code);
    }

    /// Mark the entire octant at `code` as empty. Clearing an octant that is already empty has no effect.
    ///
    /// This mirrors `set`: a filled ancestor octant on the path is split into a record with all 8 children filled, so that
    /// only the target octant loses its cells. Afterwards, records left without any children are removed all the way up.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn clear(&mut self, code: LocationCode<W>) {
        let parent_code = match code.parent() {
            Some(parent_code) => parent_code,
            None => {
                self.clear_root();
                return;
            }
        };
        let parent_depth = parent_code.depth();

        for depth in 0..parent_depth {
            let ancestor_code = code.ancestor_at_depth(depth);
            let child = code.octant_at_depth(depth);
            let state = match self.nodes.get(&ancestor_code) {
                Some(record) => record.child_state(child),
                None => ChildState::Empty,
            };
            match state {
                ChildState::Empty => {
                    // The whole target octant is inside an empty ancestor octant.
                    return;
                }
                ChildState::Open => (),
                ChildState::Filled => {
                    if let Some(record) = self.nodes.get_mut(&ancestor_code) {
                        record.set_child_open(child);
                    }
                    self.nodes.insert(
                        code.ancestor_at_depth(depth + 1),
                        NodeRecord::ALL_CHILDREN_FILLED,
                    );

                    #[cfg(feature = "tracing")]
                    tracing::trace!(?ancestor_code, %child, "split filled octant");
                }
            }
        }

        let child = code.final_child_index();
        let state = match self.nodes.get_mut(&parent_code) {
            Some(record) => {
                let state = record.child_state(child);
                record.clear_child(child);

                state
            }
            None => ChildState::Empty,
        };
        match state {
            ChildState::Empty => return,
            ChildState::Filled => (),
            ChildState::Open => self.erase_node(code),
        }

        self.collapse_empty(parent_code);
    }

    /// Starting at `code` and walking towards the root, replace every record with all children filled by a "filled" bit in
    /// its parent.
    fn collapse_filled(&mut self, mut code: LocationCode<W>) {
        while let Some(parent_code) = code.parent() {
            match self.nodes.get(&code) {
                Some(record) if record.is_all_filled() => (),
                _ => break,
            }

            self.nodes.remove(&code);
            if let Some(parent) = self.nodes.get_mut(&parent_code) {
                parent.set_child_filled(code.final_child_index());
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(?code, "collapsed full octant into parent");

            code = parent_code;
        }
    }

    /// Starting at `code` and walking towards the root, remove every record without children and clear its bits in its
    /// parent.
    fn collapse_empty(&mut self, mut code: LocationCode<W>) {
        while let Some(parent_code) = code.parent() {
            match self.nodes.get(&code) {
                Some(record) if record.is_empty() => (),
                _ => break,
            }

            self.nodes.remove(&code);
            if let Some(parent) = self.nodes.get_mut(&parent_code) {
                parent.clear_child(code.final_child_index());
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(?code, "removed empty octant from parent");

            code = parent_code;
        }
    }

    /// Removes the record at `code` and the records of all of its open descendants. Filled children have no records.
    fn erase_node(&mut self, code: LocationCode<W>) {
        if let Some(record) = self.nodes.remove(&code) {
            for child in record.open().iter_set() {
                if let Some(child_code) = code.child(child) {
                    self.erase_node(child_code);
                }
            }
        }
    }

    /// How much of the octant at `code` is filled.
    pub fn occupancy(&self, code: LocationCode<W>) -> Occupancy {
        for depth in 0..code.depth() {
            let ancestor_code = code.ancestor_at_depth(depth);
            let state = match self.nodes.get(&ancestor_code) {
                Some(record) => record.child_state(code.octant_at_depth(depth)),
                None => ChildState::Empty,
            };
            match state {
                ChildState::Empty => return Occupancy::Empty,
                ChildState::Filled => return Occupancy::Full,
                ChildState::Open => (),
            }
        }

        match self.nodes.get(&code) {
            Some(record) if record.is_all_filled() => Occupancy::Full,
            Some(record) if !record.is_empty() => Occupancy::Partial,
            _ => Occupancy::Empty,
        }
    }

    /// Returns `true` iff every cell in the octant at `code` is filled.
    #[inline]
    pub fn is_filled(&self, code: LocationCode<W>) -> bool {
        self.occupancy(code) == Occupancy::Full
    }

    /// The filled fraction of the whole domain, in `[0, 1]`.
    pub fn volume(&self) -> f32 {
        // Full occupancy sums to exactly this value. Each level down divides the volume of a child octant by 8.
        let whole = W::ONE << (W::BITS as usize - 1);
        let filled = self.node_volume(LocationCode::ROOT, whole >> 3);

        (filled.as_f64() / whole.as_f64()) as f32
    }

    fn node_volume(&self, code: LocationCode<W>, child_volume: W) -> W {
        let record = match self.nodes.get(&code) {
            Some(record) => *record,
            None => return W::zero(),
        };

        let mut sum = W::zero();
        for &child in OctantIndex::ALL.iter() {
            match record.child_state(child) {
                ChildState::Open => {
                    if let Some(child_code) = code.child(child) {
                        sum = sum + self.node_volume(child_code, child_volume >> 3);
                    }
                }
                ChildState::Filled => sum = sum + child_volume,
                ChildState::Empty => (),
            }
        }

        sum
    }
}

impl<W: CodeWord> Default for Octree<W> {
    fn default() -> Self {
        Self::new_empty()
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
