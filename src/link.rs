use crate::{Color, NodeId, Side, Tree};

impl<K> Tree<K> {
    /// Which slot of its parent `node` occupies; `None` for the root, for a
    /// node its recorded parent no longer links to, or for a removed node.
    pub fn child_side(&self, node: NodeId) -> Option<Side> {
        let parent = self.node(self.node(node)?.parent?)?;
        if parent.left == Some(node) {
            Some(Side::Left)
        } else if parent.right == Some(node) {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn sibling(&self, node: NodeId) -> Option<NodeId> {
        let side = self.child_side(node)?;
        self.node(self.node(node)?.parent?)?.child(side.opposite())
    }

    /// The sibling of `node`'s parent; `None` without a grandparent.
    pub fn uncle(&self, node: NodeId) -> Option<NodeId> {
        self.sibling(self.node(node)?.parent?)
    }

    /// Absent children are black.
    #[inline(always)]
    pub(crate) fn color_of(&self, node: Option<NodeId>) -> Color {
        node.map_or(Color::Black, |id| self.at(id).color)
    }

    /// Side of `child` under `parent`, for a link known to exist.
    #[inline(always)]
    pub(crate) fn side_in(&self, parent: NodeId, child: NodeId) -> Side {
        if self.at(parent).left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Points whatever linked to `old` (its parent, or the root handle) at
    /// `new` instead. Does not touch `new`'s parent link.
    pub(crate) fn change_child(
        &mut self,
        old: NodeId,
        new: Option<NodeId>,
        parent: Option<NodeId>,
    ) {
        match parent {
            Some(parent) => {
                let side = self.side_in(parent, old);
                self.at_mut(parent).set_child(side, new);
            }
            None => self.root = new,
        }
    }

    /// Puts `new` in `old`'s place, parent link included.
    pub(crate) fn transplant(&mut self, old: NodeId, new: Option<NodeId>) {
        let parent = self.at(old).parent;
        self.change_child(old, new, parent);
        if let Some(new) = new {
            self.at_mut(new).parent = parent;
        }
    }
}
