use crate::{Color, InvariantViolation, NodeId, Tree};

impl<K: Ord> Tree<K> {
    /// Checks every red-black and search-tree property, plus the parent
    /// links, and returns the black height of the root.
    ///
    /// Absent children count as black and are not included in the height,
    /// so an empty tree has black height 0 and a single black root 1.
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let Some(root) = self.root else {
            return match self.len() {
                0 => Ok(0),
                stored => Err(InvariantViolation::LengthMismatch {
                    reachable: 0,
                    stored,
                }),
            };
        };
        if self.at(root).parent.is_some() {
            return Err(InvariantViolation::RootHasParent);
        }
        if self.at(root).is_red() {
            return Err(InvariantViolation::RedRoot);
        }

        let mut reachable = 0;
        let black_height = self.validate_subtree(root, None, None, &mut reachable)?;
        if reachable != self.len() {
            return Err(InvariantViolation::LengthMismatch {
                reachable,
                stored: self.len(),
            });
        }
        Ok(black_height)
    }

    fn validate_subtree(
        &self,
        id: NodeId,
        lower: Option<&K>,
        upper: Option<&K>,
        reachable: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        *reachable += 1;
        // More nodes than stored means a link cycle.
        if *reachable > self.len() {
            return Err(InvariantViolation::LengthMismatch {
                reachable: *reachable,
                stored: self.len(),
            });
        }

        let node = self.at(id);
        if lower.is_some_and(|lower| node.key <= *lower)
            || upper.is_some_and(|upper| node.key >= *upper)
        {
            return Err(InvariantViolation::OrderViolation { at: id });
        }

        let mut heights = [0; 2];
        let children = [
            (node.left, lower, Some(&node.key)),
            (node.right, Some(&node.key), upper),
        ];
        for (height, (child, lower, upper)) in heights.iter_mut().zip(children) {
            let Some(child) = child else {
                continue;
            };
            if self.at(child).parent != Some(id) {
                return Err(InvariantViolation::BrokenParentLink { child });
            }
            if node.is_red() && self.at(child).is_red() {
                return Err(InvariantViolation::RedRedEdge { parent: id, child });
            }
            *height = self.validate_subtree(child, lower, upper, reachable)?;
        }

        if heights[0] != heights[1] {
            return Err(InvariantViolation::BlackHeightMismatch { at: id });
        }
        Ok(heights[0] + usize::from(node.color == Color::Black))
    }
}
