use super::Octree;
use crate::{ChildState, NodeRecord};

use linear_octree_core::prelude::*;

/// A node reached during traversal. Branches carry their stored record; full leaves are implied by a "filled" bit of their
/// parent and carry none.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OctreeNode<W: CodeWord> {
    code: LocationCode<W>,
    record: Option<NodeRecord>,
}

impl<W: CodeWord> OctreeNode<W> {
    #[inline]
    fn branch(code: LocationCode<W>, record: NodeRecord) -> Self {
        Self {
            code,
            record: Some(record),
        }
    }

    #[inline]
    fn filled_leaf(code: LocationCode<W>) -> Self {
        Self { code, record: None }
    }

    #[inline]
    pub fn code(&self) -> LocationCode<W> {
        self.code
    }

    /// The record of a branch, `None` for a full leaf.
    #[inline]
    pub fn record(&self) -> Option<NodeRecord> {
        self.record
    }

    #[inline]
    pub fn octant(&self) -> CubeOctant {
        self.code.octant()
    }

    /// Returns `true` iff every cell in this node's octant is filled. Only the root can be a full branch.
    #[inline]
    pub fn is_full(&self) -> bool {
        match self.record {
            Some(record) => record.is_all_filled(),
            None => true,
        }
    }
}

pub trait OctreeVisitor<W: CodeWord> {
    /// Visit a branch or full leaf of the octree.
    fn visit_octant(&mut self, node: &OctreeNode<W>) -> VisitStatus;
}

impl<W, F> OctreeVisitor<W> for F
where
    W: CodeWord,
    F: FnMut(&OctreeNode<W>) -> VisitStatus,
{
    #[inline]
    fn visit_octant(&mut self, node: &OctreeNode<W>) -> VisitStatus {
        (self)(node)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VisitStatus {
    /// Continue traversing this branch.
    Continue,
    /// Stop traversing this branch.
    Stop,
    /// Stop traversing the entire tree. No further nodes will be visited.
    ExitEarly,
}

impl<W: CodeWord> Octree<W> {
    /// Visit every branch and full leaf in the octree. This is a pre-order traversal. Children are visited in ascending octant
    /// order.
    pub fn visit_branches_and_filled_leaves_in_preorder(
        &self,
        visitor: &mut impl OctreeVisitor<W>,
    ) -> VisitStatus {
        match self.node(LocationCode::ROOT) {
            Some(record) => self.visit_branch_in_preorder(LocationCode::ROOT, record, visitor),
            None => VisitStatus::Continue,
        }
    }

    fn visit_branch_in_preorder(
        &self,
        code: LocationCode<W>,
        record: NodeRecord,
        visitor: &mut impl OctreeVisitor<W>,
    ) -> VisitStatus {
        let status = visitor.visit_octant(&OctreeNode::branch(code, record));
        if status != VisitStatus::Continue {
            return status;
        }

        for child in OctantIndex::ALL.iter().copied() {
            let child_code = match code.child(child) {
                Some(child_code) => child_code,
                None => break,
            };
            let status = match record.child_state(child) {
                ChildState::Empty => continue,
                ChildState::Filled => visitor.visit_octant(&OctreeNode::filled_leaf(child_code)),
                ChildState::Open => match self.node(child_code) {
                    Some(child_record) => {
                        self.visit_branch_in_preorder(child_code, child_record, visitor)
                    }
                    None => continue,
                },
            };
            if status == VisitStatus::ExitEarly {
                return VisitStatus::ExitEarly;
            }
        }

        VisitStatus::Continue
    }

    /// Calls `f` on the largest full octants, which together cover exactly the filled cells. A full tree yields the root.
    pub fn visit_filled_octants(&self, mut f: impl FnMut(LocationCode<W>, CubeOctant)) {
        self.visit_branches_and_filled_leaves_in_preorder(&mut |node: &OctreeNode<W>| {
            if node.is_full() {
                f(node.code(), node.octant());

                VisitStatus::Stop
            } else {
                VisitStatus::Continue
            }
        });
    }

    /// The codes of the largest full octants, in traversal order.
    pub fn filled_octants(&self) -> Vec<LocationCode<W>> {
        let mut codes = Vec::new();
        self.visit_filled_octants(|code, _| codes.push(code));

        codes
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
