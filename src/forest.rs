//! The node arena every tree in this crate lives in.
//!
//! A [`Forest`] owns its [`Node`]s in a `Vec` of slots and hands out [`NodeId`]s. Children are
//! owning edges (a node is released only when the remover or a teardown reaches it) while the
//! `parent` link is a plain back-reference. Because links are indices, a forest can hold many
//! disjoint trees and moving it around never breaks a parent pointer.
//!
//! # Examples
//!
//! ```
//! use bintree::Forest;
//!
//! let mut forest = Forest::new();
//! let root = forest.new_root(98).unwrap();
//! let left = forest.insert_left(root, 12).unwrap();
//! let right = forest.insert_right(root, 402).unwrap();
//!
//! assert_eq!(forest.left(root), Some(left));
//! assert_eq!(forest.right(root), Some(right));
//! assert_eq!(forest.parent(left), Some(root));
//! assert_eq!(forest.len(), 3);
//! ```

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::{Result, TreeError};

/// A handle to a node in a [`Forest`].
///
/// Two handles are equal exactly when they name the same node. Once a node is released its
/// handle goes stale: every lookup through it reports absence, even after the slot has been
/// reused by a newer node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    pub(crate) fn slot(self) -> usize {
        self.index as usize
    }
}

/// One element of a binary tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    value: i32,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

impl Node {
    fn new(value: i32, parent: Option<NodeId>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }

    /// The key stored in this node.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// The node owning this one as a child. `None` for a root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Whether this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Storage for any number of binary trees. Every tree operation in this crate is a method
/// on `Forest` that takes the handle of a (sub)tree root.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "repr::ForestRepr")
)]
pub struct Forest {
    slots: Vec<Slot>,
    /// Indices of empty slots, reused before the slot vector grows.
    free: Vec<u32>,
    len: usize,
    node_limit: Option<usize>,
}

impl Forest {
    /// Creates an empty forest with no node limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty forest with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Creates an empty forest that refuses to hold more than `limit` live nodes. Allocating
    /// past the limit fails with [`TreeError::CapacityExceeded`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Forest, TreeError};
    ///
    /// let mut forest = Forest::with_node_limit(1);
    /// forest.new_root(1).unwrap();
    ///
    /// assert_eq!(
    ///     forest.new_root(2),
    ///     Err(TreeError::CapacityExceeded { limit: 1 })
    /// );
    /// ```
    pub fn with_node_limit(limit: usize) -> Self {
        Self {
            node_limit: Some(limit),
            ..Self::default()
        }
    }

    /// The configured node limit, if any.
    pub fn node_limit(&self) -> Option<usize> {
        self.node_limit
    }

    /// Number of live nodes across all trees in the forest.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the forest holds no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Looks up a node. Stale handles give `None`.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.slot())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    /// Whether `id` names a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// The value stored at `id`.
    pub fn value(&self, id: NodeId) -> Option<i32> {
        self.get(id).map(Node::value)
    }

    /// The left child of `id`.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::left)
    }

    /// The right child of `id`.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::right)
    }

    /// The parent of `id`.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.slot())
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    pub(crate) fn set_value(&mut self, id: NodeId, value: i32) {
        if let Some(node) = self.get_mut(id) {
            node.value = value;
        }
    }

    pub(crate) fn set_left(&mut self, id: NodeId, left: Option<NodeId>) {
        if let Some(node) = self.get_mut(id) {
            node.left = left;
        }
    }

    pub(crate) fn set_right(&mut self, id: NodeId, right: Option<NodeId>) {
        if let Some(node) = self.get_mut(id) {
            node.right = right;
        }
    }

    pub(crate) fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        if let Some(node) = self.get_mut(id) {
            node.parent = parent;
        }
    }

    /// Points whichever child link of `parent` currently holds `old` at `new` instead.
    pub(crate) fn replace_child(&mut self, parent: NodeId, old: NodeId, new: Option<NodeId>) {
        if self.left(parent) == Some(old) {
            self.set_left(parent, new);
        } else if self.right(parent) == Some(old) {
            self.set_right(parent, new);
        }
    }

    fn allocate(&mut self, value: i32, parent: Option<NodeId>) -> Result<NodeId> {
        if let Some(limit) = self.node_limit {
            if self.len >= limit {
                return Err(TreeError::CapacityExceeded { limit });
            }
        }

        let node = Some(Node::new(value, parent));
        let id = match self.free.pop() {
            Some(index) => {
                let slot = self
                    .slots
                    .get_mut(index as usize)
                    .filter(|slot| slot.node.is_none())
                    .ok_or(TreeError::InvalidForest("free list names an unusable slot"))?;
                slot.node = node;
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = u32::try_from(self.slots.len()).map_err(|_| {
                    TreeError::CapacityExceeded {
                        limit: u32::MAX as usize,
                    }
                })?;
                self.slots.push(Slot {
                    generation: 0,
                    node,
                });
                NodeId {
                    index,
                    generation: 0,
                }
            }
        };
        self.len += 1;
        Ok(id)
    }

    /// Empties the slot behind `id` and returns what was in it. Links pointing at the node are
    /// left for the caller to repair.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<Node> {
        let slot = self
            .slots
            .get_mut(id.slot())
            .filter(|slot| slot.generation == id.generation)?;
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len = self.len.saturating_sub(1);
        Some(node)
    }

    /// Allocates a detached node: no parent, no children.
    pub fn new_root(&mut self, value: i32) -> Result<NodeId> {
        self.allocate(value, None)
    }

    /// Allocates a node holding `value` as the left child of `parent`. If `parent` already had
    /// a left child, it becomes the left child of the new node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Forest;
    ///
    /// let mut forest = Forest::new();
    /// let root = forest.new_root(98).unwrap();
    /// let old = forest.insert_left(root, 12).unwrap();
    /// let new = forest.insert_left(root, 54).unwrap();
    ///
    /// assert_eq!(forest.left(root), Some(new));
    /// assert_eq!(forest.left(new), Some(old));
    /// assert_eq!(forest.parent(old), Some(new));
    /// ```
    pub fn insert_left(&mut self, parent: NodeId, value: i32) -> Result<NodeId> {
        let previous = self.get(parent).ok_or(TreeError::StaleNode(parent))?.left;
        let id = self.allocate(value, Some(parent))?;
        if let Some(previous) = previous {
            self.set_left(id, Some(previous));
            self.set_parent(previous, Some(id));
        }
        self.set_left(parent, Some(id));
        Ok(id)
    }

    /// Allocates a node holding `value` as the right child of `parent`. If `parent` already had
    /// a right child, it becomes the right child of the new node.
    pub fn insert_right(&mut self, parent: NodeId, value: i32) -> Result<NodeId> {
        let previous = self.get(parent).ok_or(TreeError::StaleNode(parent))?.right;
        let id = self.allocate(value, Some(parent))?;
        if let Some(previous) = previous {
            self.set_right(id, Some(previous));
            self.set_parent(previous, Some(id));
        }
        self.set_right(parent, Some(id));
        Ok(id)
    }

    /// Inserts `value` into the BST rooted at `root` as a new leaf and returns the new node. An
    /// empty tree (`*root == None`) gets a fresh root written back through `root`.
    ///
    /// Fails with [`TreeError::Duplicate`] if the value is already present, leaving the tree
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Forest, TreeError};
    ///
    /// let mut forest = Forest::new();
    /// let mut root = None;
    ///
    /// let five = forest.bst_insert(&mut root, 5).unwrap();
    /// assert_eq!(root, Some(five));
    ///
    /// let three = forest.bst_insert(&mut root, 3).unwrap();
    /// assert_eq!(forest.left(five), Some(three));
    ///
    /// assert_eq!(forest.bst_insert(&mut root, 3), Err(TreeError::Duplicate(3)));
    /// ```
    pub fn bst_insert(&mut self, root: &mut Option<NodeId>, value: i32) -> Result<NodeId> {
        let Some(mut current) = *root else {
            let id = self.allocate(value, None)?;
            *root = Some(id);
            return Ok(id);
        };

        loop {
            let node = *self.get(current).ok_or(TreeError::StaleNode(current))?;
            match value.cmp(&node.value) {
                Ordering::Less => match node.left {
                    Some(left) => current = left,
                    None => {
                        let id = self.allocate(value, Some(current))?;
                        self.set_left(current, Some(id));
                        return Ok(id);
                    }
                },
                Ordering::Equal => return Err(TreeError::Duplicate(value)),
                Ordering::Greater => match node.right {
                    Some(right) => current = right,
                    None => {
                        let id = self.allocate(value, Some(current))?;
                        self.set_right(current, Some(id));
                        return Ok(id);
                    }
                },
            }
        }
    }

    /// Releases every node in the subtree rooted at `root` and returns how many were released.
    /// If `root` had a parent, the parent's link to it is cleared.
    pub fn delete_tree(&mut self, root: Option<NodeId>) -> usize {
        let Some(root) = root else {
            return 0;
        };
        if let Some(parent) = self.parent(root) {
            self.replace_child(parent, root, None);
        }

        let mut released = 0;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.release(id) {
                released += 1;
                stack.extend(node.left);
                stack.extend(node.right);
            }
        }

        debug!(released, "deleted tree");
        released
    }

    /// Follows parent links from `id` up to the root of its tree.
    pub fn root_of(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        let mut node = self.get(current)?;
        while let Some(parent) = node.parent {
            current = parent;
            node = self.get(current)?;
        }
        trace!(?id, root = ?current, "found root");
        Some(current)
    }
}

#[cfg(feature = "serde")]
mod repr {
    use super::{Forest, NodeId, Slot};
    use crate::error::{Result, TreeError};

    /// The serialized shape of a [`Forest`], checked before it is trusted.
    #[derive(serde::Deserialize)]
    pub(super) struct ForestRepr {
        slots: Vec<Slot>,
        free: Vec<u32>,
        len: usize,
        node_limit: Option<usize>,
    }

    impl TryFrom<ForestRepr> for Forest {
        type Error = TreeError;

        fn try_from(repr: ForestRepr) -> Result<Self> {
            let ForestRepr {
                slots,
                free,
                len,
                node_limit,
            } = repr;

            let mut listed = vec![false; slots.len()];
            for &index in &free {
                let index = index as usize;
                match slots.get(index) {
                    Some(slot) if slot.node.is_none() && !listed[index] => listed[index] = true,
                    _ => {
                        return Err(TreeError::InvalidForest(
                            "free list names an unusable slot",
                        ))
                    }
                }
            }
            if slots.iter().filter(|slot| slot.node.is_some()).count() != len {
                return Err(TreeError::InvalidForest(
                    "node count does not match live slots",
                ));
            }

            let forest = Forest {
                slots,
                free,
                len,
                node_limit,
            };
            check_links(&forest)?;
            Ok(forest)
        }
    }

    /// Every child must point back at its owner, every parent must own the node pointing at
    /// it, and following parents must reach a root.
    fn check_links(forest: &Forest) -> Result<()> {
        for (index, slot) in forest.slots.iter().enumerate() {
            let Some(node) = slot.node else {
                continue;
            };
            let id = NodeId {
                index: u32::try_from(index).map_err(|_| TreeError::CapacityExceeded {
                    limit: u32::MAX as usize,
                })?,
                generation: slot.generation,
            };

            if node.left.is_some() && node.left == node.right {
                return Err(TreeError::InvalidForest("node owns the same child twice"));
            }
            for child in [node.left, node.right].into_iter().flatten() {
                if forest.parent(child) != Some(id) {
                    return Err(TreeError::InvalidForest(
                        "child does not point back at its parent",
                    ));
                }
            }
            if let Some(parent) = node.parent {
                if forest.left(parent) != Some(id) && forest.right(parent) != Some(id) {
                    return Err(TreeError::InvalidForest(
                        "parent does not own the node pointing at it",
                    ));
                }
            }

            let mut current = id;
            let mut steps = 0;
            while let Some(parent) = forest.parent(current) {
                steps += 1;
                if steps > forest.len {
                    return Err(TreeError::InvalidForest("parent links form a cycle"));
                }
                current = parent;
            }
        }
        Ok(())
    }
}
