use std::fmt::Debug;

use super::{Color, Node, NodeId, Side};

// Public API.
impl<K> Node<K> {
    /// A fresh leaf: red, childless, hanging off `parent`.
    pub(crate) fn new(key: K, parent: Option<NodeId>) -> Self {
        Node {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline(always)]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline(always)]
    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    #[inline(always)]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline(always)]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline(always)]
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    #[inline(always)]
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    #[inline(always)]
    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline(always)]
    pub(crate) fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

impl<K> Debug for Node<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}::({:?})", self.color, self.key))
    }
}
