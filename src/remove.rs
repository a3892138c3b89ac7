//! Deleting values from a BST.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::forest::{Forest, NodeId};

impl Forest {
    /// Removes `value` from the BST rooted at `root` and returns the root of what's left.
    ///
    /// A matched node with at most one child is released and replaced by that child. A matched
    /// node with two children stays where it is but takes over its in-order successor's value,
    /// and the successor is removed from the right subtree instead. Holders of a `NodeId` should
    /// keep in mind that in that case the handle they had for `value` now holds a different
    /// value, and the successor's handle is the one that went stale.
    ///
    /// If `root` itself is released, its replacement inherits `root`'s parent link, and that
    /// parent now points at the replacement. Removing a value that isn't in the tree changes
    /// nothing. A `None` or stale `root` gives `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Forest;
    ///
    /// let mut forest = Forest::new();
    /// let root = forest.array_to_bst(Some(&[5, 3, 8, 1, 4, 7, 9])).unwrap();
    ///
    /// let root = forest.bst_remove(root, 5);
    /// assert_eq!(root.and_then(|id| forest.value(id)), Some(7));
    /// assert_eq!(forest.in_order_values(root), [1, 3, 4, 7, 8, 9]);
    /// ```
    pub fn bst_remove(&mut self, root: Option<NodeId>, value: i32) -> Option<NodeId> {
        let root = root.filter(|&id| self.contains(id))?;
        let parent = self.parent(root);
        let before = self.len();

        let new_root = self.remove_below(Some(root), value);
        if new_root != Some(root) {
            if let Some(new_root) = new_root {
                self.set_parent(new_root, parent);
            }
            if let Some(parent) = parent {
                self.replace_child(parent, root, new_root);
            }
        }

        if self.len() < before {
            debug!(value, "removed value");
        } else {
            trace!(value, "value not in tree");
        }
        new_root
    }

    fn remove_below(&mut self, subtree: Option<NodeId>, value: i32) -> Option<NodeId> {
        let id = subtree?;
        let node = *self.get(id)?;

        match value.cmp(&node.value()) {
            Ordering::Less => {
                let left = self.remove_below(node.left(), value);
                self.set_left(id, left);
                if let Some(left) = left {
                    self.set_parent(left, Some(id));
                }
            }
            Ordering::Greater => {
                let right = self.remove_below(node.right(), value);
                self.set_right(id, right);
                if let Some(right) = right {
                    self.set_parent(right, Some(id));
                }
            }
            Ordering::Equal => match (node.left(), node.right()) {
                (None, replacement) | (replacement, None) => {
                    self.release(id);
                    return replacement;
                }
                (Some(_), Some(right)) => {
                    let successor = self
                        .min_node(Some(right))
                        .and_then(|successor| self.value(successor))?;
                    self.set_value(id, successor);

                    let right = self.remove_below(Some(right), successor);
                    self.set_right(id, right);
                    if let Some(right) = right {
                        self.set_parent(right, Some(id));
                    }
                }
            },
        }

        Some(id)
    }
}
