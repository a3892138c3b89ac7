use std::collections::HashSet;

use quickcheck_macros::quickcheck;

use crate::{build, widen};

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let (mut forest, mut root) = build(&xs);
    for delete in &deletes {
        root = forest.bst_remove(root, i32::from(*delete));
    }

    let deleted: HashSet<_> = deletes.iter().map(|&x| i32::from(x)).collect();
    let still_present: Vec<i32> = widen(&xs)
        .into_iter()
        .filter(|x| !deleted.contains(x))
        .collect();

    deleted.iter().all(|&x| forest.bst_search(root, x).is_none())
        && still_present
            .iter()
            .all(|&x| forest.bst_search(root, x).is_some())
        && forest.is_bst(root)
        && forest.links_consistent(root)
}

#[quickcheck]
fn removing_missing_value_changes_nothing(xs: Vec<i8>, miss: i8) -> bool {
    let (mut forest, root) = build(&xs);
    let miss = i32::from(miss);
    if forest.bst_search(root, miss).is_some() {
        return true;
    }
    let before = forest.in_order(root).collect::<Vec<_>>();

    let after_root = forest.bst_remove(root, miss);

    after_root == root && forest.in_order(after_root).collect::<Vec<_>>() == before
}

#[test]
fn remove_root_scenario() {
    let (mut forest, root) = build(&[5, 3, 8, 1, 4, 7, 9]);

    let root = forest.bst_remove(root, 5);

    assert_eq!(root.and_then(|id| forest.value(id)), Some(7));
    assert_eq!(forest.in_order_values(root), [1, 3, 4, 7, 8, 9]);
}
