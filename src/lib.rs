//! A red-black tree whose nodes live in a generational arena.
//!
//! Links between nodes are [`NodeId`] handles rather than pointers: a node
//! owns its children through the tree's arena and only refers back to its
//! parent. The tree itself holds the root handle, which rotations rewrite in
//! place.
mod error;
mod fixup;
pub mod input;
mod insert;
mod link;
mod node;
mod remove;
mod rotate;
pub mod session;
mod traverse;
mod validate;

use generational_arena::{Arena, Index};

pub use error::{DuplicateKey, InvariantViolation, NotFound};
pub use traverse::DisplayEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// The one-letter tag used when rendering a tree: `r` or `b`.
    pub const fn abbrev(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Black => 'b',
        }
    }
}

/// Which child slot of its parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline(always)]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A stable handle to a node of a [`Tree`].
///
/// Handles stay valid across rotations and across the removal of other
/// nodes. Once its own node is removed, a handle never resolves again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Index);

#[derive(Clone, PartialEq)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

/// A red-black tree of unique keys.
///
/// The tree is mutated through `&mut self` only; callers sharing it across
/// threads should put the whole tree behind one lock, since a rotation
/// rewrites the links of several nodes at once.
#[derive(Debug, Clone)]
pub struct Tree<K> {
    arena: Arena<Node<K>>,
    root: Option<NodeId>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    pub fn new() -> Self {
        Tree {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Resolves a handle, or `None` if its node has been removed.
    pub fn node(&self, id: NodeId) -> Option<&Node<K>> {
        self.arena.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    // Handles reaching these two are always live: they come from the root or
    // from the links of live nodes.
    #[inline(always)]
    pub(crate) fn at(&self, id: NodeId) -> &Node<K> {
        &self.arena[id.0]
    }

    #[inline(always)]
    pub(crate) fn at_mut(&mut self, id: NodeId) -> &mut Node<K> {
        &mut self.arena[id.0]
    }
}
