//! Property tests over random BSTs built from `i8` values, so duplicates
//! and misses show up often.

use bintree::{Forest, NodeId};

mod ancestor;
mod build;
mod remove;
mod rotate;

fn widen(xs: &[i8]) -> Vec<i32> {
    xs.iter().map(|&x| i32::from(x)).collect()
}

/// Builds a BST from `xs`.
fn build(xs: &[i8]) -> (Forest, Option<NodeId>) {
    let mut forest = Forest::new();
    let root = forest
        .array_to_bst(Some(widen(xs).as_slice()))
        .expect("unlimited forest never aborts a build");
    (forest, root)
}

/// Every node in the tree rooted at `root`.
fn nodes(forest: &Forest, root: Option<NodeId>) -> Vec<NodeId> {
    forest.in_order(root).map(|(id, _)| id).collect()
}
