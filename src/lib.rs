//! This crate implements the classic structural operations on binary trees and Binary Search
//! Trees (BSTs) whose nodes know their parent.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored records. BSTs are typically defined recursively using the notion of a `Node`. A `Node`
//! stores a value and will sometimes have child `Node`s. The most important invariants of a BST
//! are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a value less than its
//!    own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a value greater than
//!    its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Every node here also carries a link back to its parent. That makes some questions cheap
//! ("which tree is this node in?") and makes every structural change a bit more delicate: when
//! a subtree moves, both the owning child link and the child's parent link have to follow.
//!
//! ## Nodes and forests
//!
//! Nodes live in a [`Forest`], an arena that can hold any number of disjoint trees, and are
//! referred to by [`NodeId`] handles. A tree is simply identified by the handle of its root
//! (`Option<NodeId>`, where `None` is the empty tree).
//!
//! The operations are:
//!
//! * [`Forest::lowest_common_ancestor`] finds the deepest node above two others.
//! * [`Forest::rotate_left`] (and [`Forest::rotate_right`]) restructure a subtree without
//!   changing its in-order sequence.
//! * [`Forest::bst_remove`] deletes a value from a BST.
//! * [`Forest::array_to_bst`] builds a BST from an unsorted slice, collapsing duplicates.
//!
//! Absence (an empty tree, a `None` argument, a value that isn't there) is reported with `None`.
//! Requests the forest can't carry out are reported with a [`TreeError`].
//!
//! # Examples
//!
//! ```
//! use bintree::Forest;
//!
//! let mut forest = Forest::new();
//! let root = forest.array_to_bst(Some(&[5, 3, 8, 1, 4, 7, 9])).unwrap();
//!
//! let one = forest.bst_search(root, 1);
//! let four = forest.bst_search(root, 4);
//! let three = forest.bst_search(root, 3);
//! assert_eq!(forest.lowest_common_ancestor(one, four), three);
//!
//! let root = forest.bst_remove(root, 5);
//! assert_eq!(forest.in_order_values(root), [1, 3, 4, 7, 8, 9]);
//! ```

#![deny(missing_docs)]

mod ancestor;
mod build;
mod error;
mod forest;
mod iter;
mod remove;
mod rotate;
mod util;


pub use error::{Result, TreeError};
pub use forest::{Forest, Node, NodeId};
pub use iter::InOrder;
