//! Lowest common ancestor queries.

use tracing::trace;

use crate::forest::{Forest, NodeId};

impl Forest {
    /// Finds the deepest node that has both `first` and `second` below it (or is one of them).
    ///
    /// A node counts as its own ancestor, so asking about a node and one of its descendants
    /// gives back the node itself. Returns `None` if either handle is missing or stale, or if the
    /// two nodes live in different trees.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Forest;
    ///
    /// let mut forest = Forest::new();
    /// let root = forest.new_root(98).unwrap();
    /// let left = forest.insert_left(root, 12).unwrap();
    /// let right = forest.insert_right(root, 402).unwrap();
    /// let deep = forest.insert_right(left, 54).unwrap();
    ///
    /// assert_eq!(forest.lowest_common_ancestor(Some(deep), Some(right)), Some(root));
    /// assert_eq!(forest.lowest_common_ancestor(Some(deep), Some(left)), Some(left));
    /// assert_eq!(forest.lowest_common_ancestor(Some(deep), None), None);
    /// ```
    pub fn lowest_common_ancestor(
        &self,
        first: Option<NodeId>,
        second: Option<NodeId>,
    ) -> Option<NodeId> {
        let (first, second) = (first?, second?);

        let root = self.root_of(first)?;
        if self.root_of(second)? != root {
            trace!(?first, ?second, "nodes are in different trees");
            return None;
        }

        let ancestor = self.find_ancestor(Some(root), first, second);
        trace!(?first, ?second, ?ancestor, "lowest common ancestor");
        ancestor
    }

    /// Searches below `subtree` for `first` and `second`. Whatever is found travels back up:
    /// either one of the two nodes, still waiting for its partner, or the ancestor itself once
    /// a node has seen them on both sides.
    fn find_ancestor(
        &self,
        subtree: Option<NodeId>,
        first: NodeId,
        second: NodeId,
    ) -> Option<NodeId> {
        let id = subtree?;
        if id == first || id == second {
            return Some(id);
        }

        let node = self.get(id)?;
        let left = self.find_ancestor(node.left(), first, second);
        let right = self.find_ancestor(node.right(), first, second);

        match (left, right) {
            (Some(_), Some(_)) => Some(id),
            (Some(found), None) => Some(found),
            (None, found) => found,
        }
    }
}
