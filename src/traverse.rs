use std::{
    cmp::Ordering::*,
    fmt::{self, Display},
};

use crate::{Color, NodeId, Tree};

/// One node as drawn by [`Tree::display_entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayEntry<'a, K> {
    pub key: &'a K,
    pub color: Color,
    /// Links between the node and the root; the root sits at depth 0.
    pub depth: usize,
}

impl<K: Ord> Tree<K> {
    pub fn get(&self, key: &K) -> Option<NodeId> {
        let mut link = self.root;
        while let Some(candidate) = link {
            let candidate_ref = self.at(candidate);
            match key.cmp(&candidate_ref.key) {
                Equal => break,
                Greater => link = candidate_ref.right,
                Less => link = candidate_ref.left,
            }
        }
        link
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K> Tree<K> {
    pub fn first(&self) -> Option<&K> {
        self.root.map(|root| &self.at(self.leftmost(root)).key)
    }

    pub fn last(&self) -> Option<&K> {
        let mut node = self.root?;
        while let Some(right) = self.at(node).right {
            node = right;
        }
        Some(&self.at(node).key)
    }

    /// Every node in reverse in-order (largest key first) with its depth.
    ///
    /// Reading the entries top to bottom and indenting each by its depth
    /// draws the tree sideways, root on the left.
    pub fn display_entries(&self) -> Vec<DisplayEntry<'_, K>> {
        let mut entries = Vec::with_capacity(self.len());
        let mut pending = Vec::new();
        let mut current = self.root.map(|root| (root, 0));
        loop {
            // [1] go right as far as we can, remembering the way back.
            while let Some((id, depth)) = current {
                pending.push((id, depth));
                current = self.at(id).right.map(|right| (right, depth + 1));
            }
            // [2] emit the deepest pending node, [3] then visit its left.
            let Some((id, depth)) = pending.pop() else {
                break;
            };
            let node = self.at(id);
            entries.push(DisplayEntry {
                key: &node.key,
                color: node.color,
                depth,
            });
            current = node.left.map(|left| (left, depth + 1));
        }
        entries
    }

    /// Links on the longest root-to-node path; 0 for trees of at most one
    /// node.
    pub fn height(&self) -> usize {
        self.display_entries()
            .iter()
            .map(|entry| entry.depth)
            .max()
            .unwrap_or(0)
    }
}

/// Draws the tree sideways: one node per line, indented by one tab per
/// level, as `key (r)` or `key (b)`.
impl<K: Display> Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.display_entries() {
            for _ in 0..entry.depth {
                f.write_str("\t")?;
            }
            writeln!(f, "{} ({})", entry.key, entry.color.abbrev())?;
        }
        Ok(())
    }
}
