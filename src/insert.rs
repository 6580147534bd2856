use std::{cmp::Ordering::*, fmt::Debug};

use tracing::{debug, instrument};

use crate::{DuplicateKey, Node, NodeId, Side, Tree};

impl<K: Ord + Debug> Tree<K> {
    /// Inserts `key`, rebalancing as needed.
    ///
    /// A key already present is handed back in [`DuplicateKey`] and the tree
    /// is not modified in any way.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, key: K) -> Result<(), DuplicateKey<K>> {
        let mut parent = None;
        let mut side = Side::Left;
        let mut link = self.root;
        while let Some(candidate) = link {
            let candidate_ref = self.at(candidate);
            side = match key.cmp(&candidate_ref.key) {
                Equal => {
                    debug!(?key, "rejecting duplicate key");
                    return Err(DuplicateKey(key));
                }
                Greater => Side::Right,
                Less => Side::Left,
            };
            parent = Some(candidate);
            link = candidate_ref.child(side);
        }

        let node = NodeId(self.arena.insert(Node::new(key, parent)));
        match parent {
            Some(parent) => self.at_mut(parent).set_child(side, Some(node)),
            None => self.root = Some(node),
        }
        self.fixup_insert(node);
        Ok(())
    }
}
