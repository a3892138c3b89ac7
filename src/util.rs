//! Read-only queries shared by the tree operations and their tests.

use std::cmp::Ordering;

use crate::forest::{Forest, NodeId};

impl Forest {
    /// The node holding the smallest value in the BST rooted at `root`, found by following
    /// left links until there are none.
    pub fn min_node(&self, root: Option<NodeId>) -> Option<NodeId> {
        let mut current = root.filter(|&id| self.contains(id))?;
        while let Some(left) = self.left(current) {
            current = left;
        }
        Some(current)
    }

    /// Finds the node holding `value` in the BST rooted at `root`.
    pub fn bst_search(&self, root: Option<NodeId>, value: i32) -> Option<NodeId> {
        let mut current = root;
        while let Some(id) = current {
            let node = self.get(id)?;
            current = match value.cmp(&node.value()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Number of nodes in the subtree rooted at `root`.
    pub fn size(&self, root: Option<NodeId>) -> usize {
        self.in_order(root).count()
    }

    /// Number of edges on the longest downward path from `root`. A lone node has height 0, and
    /// so does an empty tree.
    pub fn height(&self, root: Option<NodeId>) -> usize {
        let Some(root) = root.filter(|&id| self.contains(id)) else {
            return 0;
        };

        let mut height = 0;
        let mut stack = vec![(root, 0)];
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(self.left(id).map(|left| (left, depth + 1)));
            stack.extend(self.right(id).map(|right| (right, depth + 1)));
        }
        height
    }

    /// Number of edges between `id` and the root of its tree.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.get(id)?;
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            depth += 1;
            current = parent;
        }
        Some(depth)
    }

    /// Whether the subtree rooted at `root` satisfies the strict BST ordering: every value in
    /// a left subtree is smaller than its ancestor and every value in a right subtree is
    /// larger. An empty tree is a BST; a stale `root` is not.
    pub fn is_bst(&self, root: Option<NodeId>) -> bool {
        match root {
            None => return true,
            Some(id) if !self.contains(id) => return false,
            Some(_) => {}
        }
        self.in_order(root)
            .map(|(_, value)| value)
            .collect::<Vec<_>>()
            .windows(2)
            .all(|pair| pair[0] < pair[1])
    }

    /// Whether every child in the subtree rooted at `root` points back at the node that owns
    /// it, and `root` itself is linked from its parent (if it has one).
    pub fn links_consistent(&self, root: Option<NodeId>) -> bool {
        let Some(root) = root else {
            return true;
        };
        if let Some(parent) = self.parent(root) {
            if self.left(parent) != Some(root) && self.right(parent) != Some(root) {
                return false;
            }
        }

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else {
                return false;
            };
            for child in [node.left(), node.right()].into_iter().flatten() {
                if self.parent(child) != Some(id) {
                    return false;
                }
                stack.push(child);
            }
        }
        true
    }
}
