//! In-order traversal.

use crate::forest::{Forest, NodeId};

/// Visits a subtree left-to-right, yielding each node with its value. Created by
/// [`Forest::in_order`].
///
/// # Examples
///
/// ```
/// use bintree::Forest;
///
/// let mut forest = Forest::new();
/// let root = forest.array_to_bst(Some(&[2, 3, 1])).unwrap();
///
/// let values: Vec<i32> = forest.in_order(root).map(|(_, value)| value).collect();
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub struct InOrder<'a> {
    forest: &'a Forest,
    /// Nodes whose left subtree is being visited.
    stack: Vec<NodeId>,
    next: Option<NodeId>,
}

impl Iterator for InOrder<'_> {
    type Item = (NodeId, i32);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.next.take() {
            self.stack.push(id);
            self.next = self.forest.left(id);
        }

        let id = self.stack.pop()?;
        let node = self.forest.get(id)?;
        self.next = node.right();
        Some((id, node.value()))
    }
}

impl Forest {
    /// Iterates over the subtree rooted at `root` in order. For a BST this yields the values
    /// sorted ascending.
    pub fn in_order(&self, root: Option<NodeId>) -> InOrder<'_> {
        InOrder {
            forest: self,
            stack: Vec::new(),
            next: root.filter(|&id| self.contains(id)),
        }
    }

    /// Collects the in-order sequence of values below `root`.
    pub fn in_order_values(&self, root: Option<NodeId>) -> Vec<i32> {
        self.in_order(root).map(|(_, value)| value).collect()
    }
}
