use std::fmt::Debug;

use tracing::{debug, instrument, trace};

use crate::{Color, NodeId, NotFound, Side, Tree};

impl<K: Ord + Debug> Tree<K> {
    /// Removes `key` and hands back the stored key.
    ///
    /// A missing key is handed back in [`NotFound`] and the tree is not
    /// modified. Handles to every other node remain valid.
    #[instrument(level = "trace", skip(self))]
    pub fn remove(&mut self, key: K) -> Result<K, NotFound<K>> {
        let Some(victim) = self.get(&key) else {
            debug!(?key, "nothing to remove");
            return Err(NotFound(key));
        };

        let node = self.at(victim);
        let (left, right) = (node.left, node.right);
        let mut removed_color = node.color;
        // Where the hole left behind sits: the node now in it (possibly
        // absent) and that position's parent.
        let hole;
        let hole_parent;

        match (left, right) {
            (None, _) => {
                /*
                 * Case 1: at most one child, on the right (or none).
                 */
                hole = right;
                hole_parent = node.parent;
                self.transplant(victim, right);
            }
            (Some(_), None) => {
                /* Still case 1, but the child is on the left */
                hole = left;
                hole_parent = node.parent;
                self.transplant(victim, left);
            }
            (Some(left), Some(right)) => {
                /*
                 * Case 2: two children. The successor (leftmost under the
                 * right child) takes the victim's place and color; the hole
                 * is where the successor used to be.
                 *
                 *    (n)          (s)
                 *    / \          / \
                 *  (x) (y)  ->  (x) (y)
                 *      /            /
                 *    (s)          (c)
                 *      \
                 *      (c)
                 */
                let successor = self.leftmost(right);
                removed_color = self.at(successor).color;
                hole = self.at(successor).right;
                if successor == right {
                    hole_parent = Some(successor);
                } else {
                    hole_parent = self.at(successor).parent;
                    self.transplant(successor, hole);
                    self.at_mut(successor).right = Some(right);
                    self.at_mut(right).parent = Some(successor);
                }
                self.transplant(victim, Some(successor));
                self.at_mut(successor).left = Some(left);
                self.at_mut(left).parent = Some(successor);
                self.at_mut(successor).color = self.at(victim).color;
            }
        }

        if removed_color == Color::Black {
            self.fixup_remove(hole, hole_parent);
        }

        let Some(node) = self.arena.remove(victim.0) else {
            panic!("node {victim:?} was unlinked but is missing from the arena");
        };
        trace!(?victim, "freed");
        Ok(node.key)
    }
}

impl<K> Tree<K> {
    pub(crate) fn leftmost(&self, mut node: NodeId) -> NodeId {
        while let Some(left) = self.at(node).left {
            node = left;
        }
        node
    }

    /// Restores the black heights after a black node was unlinked.
    ///
    /// `node` is the (possibly absent) node in the unlinked position and
    /// `parent` its parent; every path through it is one black short.
    fn fixup_remove(&mut self, mut node: Option<NodeId>, mut parent: Option<NodeId>) {
        while node != self.root && self.color_of(node) == Color::Black {
            let Some(current_parent) = parent else {
                break;
            };
            let side = if self.at(current_parent).left == node {
                Side::Left
            } else {
                Side::Right
            };
            let far = side.opposite();
            // The short side's sibling carries at least one black, so it exists.
            let Some(mut sibling) = self.at(current_parent).child(far) else {
                break;
            };

            if self.at(sibling).is_red() {
                /*
                 * Case 1 - red sibling (rotate at parent towards node).
                 *
                 *     P               S
                 *    / \             / \
                 *   N   s    -->    p   Sr
                 *      / \         / \
                 *     Sl  Sr      N   Sl
                 */
                trace!(?current_parent, "remove case 1: red sibling");
                self.at_mut(sibling).color = Color::Black;
                self.at_mut(current_parent).color = Color::Red;
                self.rotate(current_parent, side);
                sibling = match self.at(current_parent).child(far) {
                    Some(sibling) => sibling,
                    None => break,
                };
            }

            let near_child = self.at(sibling).child(side);
            let far_child = self.at(sibling).child(far);
            if self.color_of(near_child) == Color::Black && self.color_of(far_child) == Color::Black
            {
                /*
                 * Case 2 - sibling color flip; the shortfall moves up to p.
                 *
                 *    (p)           (p)
                 *    / \           / \
                 *   N   S    -->  N   s
                 *      / \           / \
                 *     Sl  Sr        Sl  Sr
                 */
                trace!(?current_parent, "remove case 2: black nephews");
                self.at_mut(sibling).color = Color::Red;
                node = Some(current_parent);
                parent = self.at(current_parent).parent;
                continue;
            }

            if self.color_of(far_child) == Color::Black {
                /*
                 * Case 3 - near nephew red (rotate at sibling away from node).
                 *
                 *   (p)           (p)
                 *   / \           / \
                 *  N   S    -->  N   sl
                 *     / \             \
                 *    sl  Sr            S
                 *                       \
                 *                        Sr
                 */
                trace!(?current_parent, "remove case 3: near nephew red");
                if let Some(near_child) = near_child {
                    self.at_mut(near_child).color = Color::Black;
                }
                self.at_mut(sibling).color = Color::Red;
                self.rotate(sibling, far);
                sibling = match self.at(current_parent).child(far) {
                    Some(sibling) => sibling,
                    None => break,
                };
            }

            /*
             * Case 4 - far nephew red (rotate at parent towards node, then
             * s takes p's color, p and sr turn black).
             *
             *      (p)             (s)
             *      / \             / \
             *     N   S     -->   P   Sr
             *        / \         / \
             *      (sl) sr      N  (sl)
             */
            trace!(?current_parent, "remove case 4: far nephew red");
            self.at_mut(sibling).color = self.at(current_parent).color;
            self.at_mut(current_parent).color = Color::Black;
            if let Some(far_child) = self.at(sibling).child(far) {
                self.at_mut(far_child).color = Color::Black;
            }
            self.rotate(current_parent, side);
            node = self.root;
            break;
        }

        if let Some(node) = node {
            self.at_mut(node).color = Color::Black;
        }
    }
}
