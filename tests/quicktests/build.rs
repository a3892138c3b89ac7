use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use crate::{build, widen};

#[quickcheck]
fn one_node_per_distinct_value(xs: Vec<i8>) -> bool {
    let (forest, root) = build(&xs);
    let distinct: Vec<i32> = widen(&xs)
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    forest.in_order_values(root) == distinct && forest.len() == distinct.len()
}

#[quickcheck]
fn built_tree_is_well_formed(xs: Vec<i8>) -> bool {
    let (forest, root) = build(&xs);
    forest.is_bst(root) && forest.links_consistent(root)
}

#[quickcheck]
fn first_value_is_root(xs: Vec<i8>) -> bool {
    let (forest, root) = build(&xs);
    root.and_then(|id| forest.value(id)) == xs.first().map(|&x| i32::from(x))
}
