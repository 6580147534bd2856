use thiserror::Error;

use crate::NodeId;

/// The key is already stored; the tree was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("key {0:?} is already present")]
pub struct DuplicateKey<K>(pub K);

/// No node carries the key; the tree was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("key {0:?} is not present")]
pub struct NotFound<K>(pub K);

/// A broken red-black or search-tree property, as reported by
/// [`Tree::validate`](crate::Tree::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("the root is red")]
    RedRoot,
    #[error("the root has a parent link")]
    RootHasParent,
    #[error("red node {child:?} has a red parent {parent:?}")]
    RedRedEdge { parent: NodeId, child: NodeId },
    #[error("the subtrees of {at:?} have different black heights")]
    BlackHeightMismatch { at: NodeId },
    #[error("key of {at:?} is out of order")]
    OrderViolation { at: NodeId },
    #[error("{child:?} does not point back to the node linking to it")]
    BrokenParentLink { child: NodeId },
    #[error("{reachable} nodes reachable from the root, {stored} stored")]
    LengthMismatch { reachable: usize, stored: usize },
}
