use tracing::trace;

use crate::{NodeId, Side, Tree};

impl<K> Tree<K> {
    /// Left rotation around `pivot`: its right child takes its place and
    /// `pivot` becomes that child's left child.
    ///
    /// ```text
    ///       P                R
    ///      / \              / \
    ///     a   R     -->    P   c
    ///        / \          / \
    ///       b   c        a   b
    /// ```
    ///
    /// The in-order key sequence is preserved; colors are not touched, so
    /// the red-black properties are the caller's business.
    ///
    /// # Panics
    ///
    /// Panics if `pivot` has no right child.
    #[allow(dead_code)]
    pub(crate) fn rotate_left(&mut self, pivot: NodeId) {
        self.rotate(pivot, Side::Left);
    }

    /// Right rotation around `pivot`: the mirror of [`Self::rotate_left`].
    ///
    /// # Panics
    ///
    /// Panics if `pivot` has no left child.
    #[allow(dead_code)]
    pub(crate) fn rotate_right(&mut self, pivot: NodeId) {
        self.rotate(pivot, Side::Right);
    }

    /// Moves `pivot` down towards `direction`, promoting its child on the
    /// other side into its position (possibly the root).
    pub(crate) fn rotate(&mut self, pivot: NodeId, direction: Side) {
        let rising = direction.opposite();
        let Some(promoted) = self.at(pivot).child(rising) else {
            panic!("cannot rotate {direction:?} around {pivot:?}: no {rising:?} child");
        };
        let inner = self.at(promoted).child(direction);
        let parent = self.at(pivot).parent;

        // [1] the inner subtree changes hands.
        self.at_mut(pivot).set_child(rising, inner);
        if let Some(inner) = inner {
            self.at_mut(inner).parent = Some(pivot);
        }

        // [2] promoted takes pivot's slot; this may rewrite the root handle.
        self.at_mut(promoted).parent = parent;
        self.change_child(pivot, Some(promoted), parent);

        // [3] pivot hangs below promoted.
        self.at_mut(promoted).set_child(direction, Some(pivot));
        self.at_mut(pivot).parent = Some(promoted);

        trace!(?pivot, ?promoted, ?direction, "rotated");
    }
}
