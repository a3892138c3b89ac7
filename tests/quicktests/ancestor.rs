use quickcheck_macros::quickcheck;

use bintree::{Forest, NodeId};

use crate::{build, nodes, widen};

/// `id` and all of its ancestors, from `id` up to the root.
fn path_to_root(forest: &Forest, id: NodeId) -> Vec<NodeId> {
    let mut path = vec![id];
    while let Some(parent) = forest.parent(*path.last().unwrap()) {
        path.push(parent);
    }
    path
}

#[quickcheck]
fn lca_is_deepest_shared_ancestor(xs: Vec<i8>, a: usize, b: usize) -> bool {
    let (forest, root) = build(&xs);
    let all = nodes(&forest, root);
    if all.is_empty() {
        return true;
    }
    let first = all[a % all.len()];
    let second = all[b % all.len()];

    let second_path = path_to_root(&forest, second);
    let expected = path_to_root(&forest, first)
        .into_iter()
        .find(|id| second_path.contains(id));

    forest.lowest_common_ancestor(Some(first), Some(second)) == expected
}

#[quickcheck]
fn lca_of_node_with_itself(xs: Vec<i8>) -> bool {
    let (forest, root) = build(&xs);
    nodes(&forest, root)
        .into_iter()
        .all(|id| forest.lowest_common_ancestor(Some(id), Some(id)) == Some(id))
}

#[quickcheck]
fn lca_across_trees_is_none(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let mut forest = Forest::new();
    let first = forest.array_to_bst(Some(widen(&xs).as_slice())).unwrap();
    let second = forest.array_to_bst(Some(widen(&ys).as_slice())).unwrap();

    nodes(&forest, first).into_iter().all(|a| {
        nodes(&forest, second)
            .into_iter()
            .all(|b| forest.lowest_common_ancestor(Some(a), Some(b)).is_none())
    })
}
