use tracing::trace;

use crate::{Color, NodeId, Tree};

impl<K> Tree<K> {
    /// Restores the red-black properties after `node` was linked in red.
    pub(crate) fn fixup_insert(&mut self, mut node: NodeId) {
        loop {
            /*
             * Loop invariant: node is red.
             */
            let Some(parent) = self.at(node).parent else {
                /*
                 * Case 1 - node is the root. Either it is the first node,
                 * or a color flip below pushed the violation all the way up.
                 */
                trace!(?node, "insert case 1: recolor root");
                self.at_mut(node).color = Color::Black;
                return;
            };

            if self.at(parent).is_black() {
                // Case 2 - black parent, nothing is violated.
                trace!(?node, "insert case 2: black parent");
                return;
            }

            let Some(grandparent) = self.at(parent).parent else {
                // A red parent without a parent is a red root: fix it as
                // Case 1 would, without rotating.
                trace!(?parent, "insert case 1: recolor red root");
                self.at_mut(parent).color = Color::Black;
                return;
            };

            let uncle = self.uncle(node);
            if let (Color::Red, Some(uncle)) = (self.color_of(uncle), uncle) {
                /*
                 * Case 3 - red uncle (color flips).
                 *
                 *       G            g
                 *      / \          / \
                 *     p   u  -->   P   U
                 *    /            /
                 *   n            n
                 *
                 * g may now have a red parent: go on from g.
                 */
                trace!(?node, "insert case 3: red uncle");
                self.at_mut(parent).color = Color::Black;
                self.at_mut(uncle).color = Color::Black;
                self.at_mut(grandparent).color = Color::Red;
                node = grandparent;
                continue;
            }

            let node_side = self.side_in(parent, node);
            let parent_side = self.side_in(grandparent, parent);
            if node_side != parent_side {
                /*
                 * Case 4 - black uncle, node is an inner grandchild
                 * (rotate at parent, away from node's side).
                 *
                 *      G             G
                 *     / \           / \
                 *    p   U  -->    n   U
                 *     \           /
                 *      n         p
                 *
                 * p is now an outer grandchild, which Case 5 settles.
                 */
                trace!(?node, "insert case 4: inner grandchild");
                self.rotate(parent, parent_side);
                node = parent;
                continue;
            }

            /*
             * Case 5 - black uncle, node is an outer grandchild
             * (rotate at grandparent, promoting parent, swap colors).
             *
             *        G           P
             *       / \         / \
             *      p   U  -->  n   g
             *     /                 \
             *    n                   U
             */
            trace!(?node, "insert case 5: outer grandchild");
            self.rotate(grandparent, parent_side.opposite());
            self.swap_colors(parent, grandparent);
            return;
        }
    }

    fn swap_colors(&mut self, a: NodeId, b: NodeId) {
        let color = self.at(a).color;
        self.at_mut(a).color = self.at(b).color;
        self.at_mut(b).color = color;
    }
}

#[cfg(test)]
mod test {
    use crate::{Color, Tree};
    use pretty_assertions::assert_eq;

    /// `(key, color, depth)` in reverse in-order, the order trees are drawn.
    fn shape(tree: &Tree<i64>) -> Vec<(i64, Color, usize)> {
        tree.display_entries()
            .iter()
            .map(|e| (*e.key, e.color, e.depth))
            .collect()
    }

    #[test]
    fn first_insert_becomes_black_root() {
        let mut tree = Tree::new();
        tree.insert(10).unwrap();
        assert_eq!(vec![(10, Color::Black, 0)], shape(&tree));
    }

    #[test]
    fn black_parent_needs_no_fix() {
        let mut tree = Tree::new();
        tree.insert(10).unwrap();
        tree.insert(5).unwrap();
        assert_eq!(vec![(10, Color::Black, 0), (5, Color::Red, 1)], shape(&tree));
    }

    #[test]
    fn outer_grandchild_rotates_grandparent() {
        let mut tree = Tree::new();
        for k in [10, 20, 30] {
            tree.insert(k).unwrap();
        }
        assert_eq!(
            vec![(30, Color::Red, 1), (20, Color::Black, 0), (10, Color::Red, 1)],
            shape(&tree)
        );
    }

    #[test]
    fn outer_grandchild_mirror() {
        let mut tree = Tree::new();
        for k in [30, 20, 10] {
            tree.insert(k).unwrap();
        }
        assert_eq!(
            vec![(30, Color::Red, 1), (20, Color::Black, 0), (10, Color::Red, 1)],
            shape(&tree)
        );
    }

    #[test]
    fn inner_grandchild_rotates_twice() {
        let mut tree = Tree::new();
        for k in [10, 30, 20] {
            tree.insert(k).unwrap();
        }
        assert_eq!(
            vec![(30, Color::Red, 1), (20, Color::Black, 0), (10, Color::Red, 1)],
            shape(&tree)
        );

        let mut tree = Tree::new();
        for k in [30, 10, 20] {
            tree.insert(k).unwrap();
        }
        assert_eq!(
            vec![(30, Color::Red, 1), (20, Color::Black, 0), (10, Color::Red, 1)],
            shape(&tree)
        );
    }

    #[test]
    fn red_uncle_flips_colors_up() {
        let mut tree = Tree::new();
        for k in [20, 10, 30, 5] {
            tree.insert(k).unwrap();
        }
        assert_eq!(
            vec![
                (30, Color::Black, 1),
                (20, Color::Black, 0),
                (10, Color::Black, 1),
                (5, Color::Red, 2),
            ],
            shape(&tree)
        );
    }

    #[test]
    fn ascending_run_stays_shallow() {
        let mut tree = Tree::new();
        for k in 1..=7 {
            tree.insert(k).unwrap();
        }
        assert!(tree.height() <= 3, "height {}", tree.height());
        assert_eq!(Color::Black, tree.node(tree.root().unwrap()).unwrap().color());
        assert!(tree.validate().is_ok());
    }
}
