//! Building a BST out of an unsorted slice.

use tracing::{debug, trace};

use crate::error::{Result, TreeError};
use crate::forest::{Forest, NodeId};

impl Forest {
    /// Builds a new BST by inserting `values` one after another with
    /// [`bst_insert`][Self::bst_insert] and returns its root.
    ///
    /// When an insert fails, the value's first position in `values` decides what happens. If
    /// it showed up earlier, this is a repeat and it is skipped, so each distinct value ends up
    /// in exactly one node. If this is its first position, something other than a duplicate went
    /// wrong: every node built so far is released and the build fails.
    ///
    /// `None` and an empty slice both give `Ok(None)`.
    ///
    /// # Errors
    ///
    /// [`TreeError::BuildAborted`] carrying the insert error, e.g. when the forest's node
    /// limit is reached.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Forest;
    ///
    /// let mut forest = Forest::new();
    /// let root = forest.array_to_bst(Some(&[3, 1, 4, 1, 5, 9, 2, 6, 1])).unwrap();
    ///
    /// assert_eq!(forest.in_order_values(root), [1, 2, 3, 4, 5, 6, 9]);
    /// assert_eq!(forest.len(), 7);
    /// ```
    pub fn array_to_bst(&mut self, values: Option<&[i32]>) -> Result<Option<NodeId>> {
        let Some(values) = values else {
            return Ok(None);
        };

        let mut root = None;
        for (index, &value) in values.iter().enumerate() {
            let Err(error) = self.bst_insert(&mut root, value) else {
                continue;
            };

            let first = values.iter().position(|&other| other == value);
            if first == Some(index) {
                let released = self.delete_tree(root);
                debug!(index, value, released, %error, "aborted building tree");
                return Err(TreeError::BuildAborted {
                    index,
                    value,
                    source: Box::new(error),
                });
            }
            trace!(index, value, "skipped repeated value");
        }

        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_in_insertion_order() {
        let mut forest = Forest::new();
        let root = forest
            .array_to_bst(Some(&[79, 47, 68, 87, 84, 91, 21, 32, 34, 2, 20, 22, 98, 1, 62, 95]))
            .unwrap();

        assert_eq!(root.and_then(|id| forest.value(id)), Some(79));
        let left = forest.left(root.unwrap());
        assert_eq!(left.and_then(|id| forest.value(id)), Some(47));
        assert_eq!(forest.size(root), 16);
        assert!(forest.is_bst(root));
        assert!(forest.links_consistent(root));
    }

    #[test]
    fn duplicates_collapse() {
        let mut forest = Forest::new();
        let root = forest
            .array_to_bst(Some(&[3, 1, 4, 1, 5, 9, 2, 6, 1]))
            .unwrap();

        assert_eq!(forest.in_order_values(root), [1, 2, 3, 4, 5, 6, 9]);
        assert_eq!(forest.len(), 7);
    }

    #[test]
    fn empty_and_missing_input() {
        let mut forest = Forest::new();
        assert_eq!(forest.array_to_bst(Some(&[])), Ok(None));
        assert_eq!(forest.array_to_bst(None), Ok(None));
        assert!(forest.is_empty());
    }

    #[test]
    fn first_occurrence_failure_aborts_and_releases() {
        let mut forest = Forest::with_node_limit(3);

        let result = forest.array_to_bst(Some(&[1, 2, 3, 4]));

        assert_eq!(
            result,
            Err(TreeError::BuildAborted {
                index: 3,
                value: 4,
                source: Box::new(TreeError::CapacityExceeded { limit: 3 }),
            })
        );
        assert!(forest.is_empty());
    }

    #[test]
    fn repeat_at_capacity_is_skipped() {
        let mut forest = Forest::with_node_limit(3);

        let root = forest.array_to_bst(Some(&[1, 2, 3, 3, 1])).unwrap();

        assert_eq!(forest.in_order_values(root), [1, 2, 3]);
    }

    #[test]
    fn abort_leaves_other_trees_alone() {
        let mut forest = Forest::with_node_limit(4);
        let other = forest.array_to_bst(Some(&[10, 20])).unwrap();

        assert!(forest.array_to_bst(Some(&[1, 2, 3])).is_err());

        assert_eq!(forest.len(), 2);
        assert_eq!(forest.in_order_values(other), [10, 20]);
    }
}
