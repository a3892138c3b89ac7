use quickcheck_macros::quickcheck;

use crate::{build, nodes};

#[quickcheck]
fn rotations_preserve_in_order(xs: Vec<i8>) -> bool {
    let (mut forest, mut root) = build(&xs);
    let before = forest.in_order_values(root);

    // Rotate every node that can be rotated, re-rooting when the root moves.
    for id in nodes(&forest, root) {
        if forest.right(id).is_none() {
            continue;
        }
        let was_root = Some(id) == root;
        let pivot = forest.rotate_left(Some(id)).unwrap();
        if was_root {
            root = pivot;
        }
    }

    forest.in_order_values(root) == before && forest.links_consistent(root)
}

#[quickcheck]
fn rotate_right_inverts_rotate_left(xs: Vec<i8>) -> bool {
    let (mut forest, root) = build(&xs);
    if root.and_then(|id| forest.right(id)).is_none() {
        return true;
    }
    let before = forest.in_order(root).collect::<Vec<_>>();

    let pivot = forest.rotate_left(root).unwrap();
    let back = forest.rotate_right(pivot).unwrap();

    back == root && forest.in_order(back).collect::<Vec<_>>() == before
}
