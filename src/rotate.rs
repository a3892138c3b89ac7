//! Single rotations. Neither rotation looks at heights or balance; they only restructure.

use tracing::debug;

use crate::error::{Result, TreeError};
use crate::forest::{Forest, NodeId};

impl Forest {
    /// Rotates the subtree rooted at `root` to the left: its right child (the pivot) moves up
    /// to take `root`'s place and `root` becomes the pivot's left child. The pivot's old left
    /// subtree is handed to `root` as its new right subtree, so the in-order sequence of the
    /// subtree doesn't change.
    ///
    /// If `root` had a parent, the parent now points at the pivot. Returns the new subtree root,
    /// or `Ok(None)` if `root` is `None`.
    ///
    /// # Errors
    ///
    /// [`TreeError::MissingPivot`] if `root` has no right child, [`TreeError::StaleNode`] if
    /// `root` isn't live. The forest is untouched in both cases.
    ///
    /// # Diagram
    ///
    /// ```text
    ///    Option<parent>            Option<parent>
    ///      /                         /
    ///    root                      pivot
    ///    /  \                      /   \
    ///   x   pivot   rotate ->    root   z
    ///       /  \                 /  \
    ///      y    z               x    y
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Forest;
    ///
    /// let mut forest = Forest::new();
    /// let root = forest.array_to_bst(Some(&[98, 128, 402])).unwrap();
    /// let new_root = forest.rotate_left(root).unwrap();
    ///
    /// assert_eq!(new_root.and_then(|id| forest.value(id)), Some(128));
    /// assert_eq!(forest.in_order_values(new_root), [98, 128, 402]);
    /// ```
    pub fn rotate_left(&mut self, root: Option<NodeId>) -> Result<Option<NodeId>> {
        let Some(root) = root else {
            return Ok(None);
        };
        let node = *self.get(root).ok_or(TreeError::StaleNode(root))?;
        let pivot = node.right().ok_or(TreeError::MissingPivot(root))?;

        let inner = self.left(pivot);
        self.set_right(root, inner);
        if let Some(inner) = inner {
            self.set_parent(inner, Some(root));
        }

        self.set_parent(pivot, node.parent());
        if let Some(parent) = node.parent() {
            self.replace_child(parent, root, Some(pivot));
        }

        self.set_left(pivot, Some(root));
        self.set_parent(root, Some(pivot));

        debug!(?root, ?pivot, "rotated left");
        Ok(Some(pivot))
    }

    /// Mirror image of [`rotate_left`][Self::rotate_left]: the left child moves up and `root`
    /// becomes its right child.
    ///
    /// # Errors
    ///
    /// [`TreeError::MissingPivot`] if `root` has no left child, [`TreeError::StaleNode`] if
    /// `root` isn't live.
    ///
    /// # Diagram
    ///
    /// ```text
    ///       Option<parent>         Option<parent>
    ///         /                      /
    ///       root                   pivot
    ///       /  \                   /   \
    ///    pivot  z    rotate ->    x    root
    ///    /  \                          /  \
    ///   x    y                        y    z
    /// ```
    pub fn rotate_right(&mut self, root: Option<NodeId>) -> Result<Option<NodeId>> {
        let Some(root) = root else {
            return Ok(None);
        };
        let node = *self.get(root).ok_or(TreeError::StaleNode(root))?;
        let pivot = node.left().ok_or(TreeError::MissingPivot(root))?;

        let inner = self.right(pivot);
        self.set_left(root, inner);
        if let Some(inner) = inner {
            self.set_parent(inner, Some(root));
        }

        self.set_parent(pivot, node.parent());
        if let Some(parent) = node.parent() {
            self.replace_child(parent, root, Some(pivot));
        }

        self.set_right(pivot, Some(root));
        self.set_parent(root, Some(pivot));

        debug!(?root, ?pivot, "rotated right");
        Ok(Some(pivot))
    }
}
