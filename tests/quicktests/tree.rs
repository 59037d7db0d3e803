use bst_set::{Order, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// `ceil(lg(n + 1))`, the fewest levels a tree of `n` nodes can have.
fn min_levels(n: usize) -> usize {
    (n + 1).next_power_of_two().trailing_zeros() as usize
}

fn collect(tree: &Tree, order: Order) -> Vec<i32> {
    let mut keys = Vec::new();
    tree.walk(order, |key, keys: &mut Vec<i32>| keys.push(key), &mut keys);
    keys
}

/// Applies a set of operations to a tree and a `BTreeSet`, checking at every step that both
/// agree on what each operation did.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree, set: &mut BTreeSet<i32>) -> bool {
    for op in ops {
        let agreed = match *op {
            Op::Insert(k) => {
                let k = i32::from(k);
                tree.insert(k) == set.insert(k)
            }
            Op::Remove(k) => {
                let k = i32::from(k);
                tree.remove(k) == set.remove(&k)
            }
            Op::Walk => tree.keys() == set.iter().copied().collect::<Vec<_>>(),
        };
        if !agreed || tree.size() != set.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && (i8::MIN..=i8::MAX)
            .map(i32::from)
            .all(|k| tree.contains(k) == set.contains(&k))
        && tree.validate().is_ok()
}

#[quickcheck]
fn contains(xs: Vec<i32>) -> bool {
    let tree: Tree = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(*x))
}

#[quickcheck]
fn contains_not(xs: Vec<i32>, nots: Vec<i32>) -> bool {
    let tree: Tree = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| !tree.contains(*x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree = xs.iter().copied().map(i32::from).collect();
    for delete in &deletes {
        tree.remove(i32::from(*delete));
    }

    let still_present = xs.iter().filter(|x| !deletes.contains(*x));

    deletes.iter().all(|x| !tree.contains(i32::from(*x)))
        && still_present.clone().all(|x| tree.contains(i32::from(*x)))
        && tree.size() == still_present.collect::<BTreeSet<_>>().len()
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i32>) -> bool {
    let tree: Tree = xs.into_iter().collect();
    let keys = collect(&tree, Order::In);

    keys.len() == tree.size() && keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn every_order_visits_the_same_keys(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree: Tree = xs.into_iter().map(i32::from).collect();
    for delete in deletes {
        tree.remove(i32::from(delete));
    }

    let mut pre = collect(&tree, Order::Pre);
    let mut post = collect(&tree, Order::Post);
    pre.sort_unstable();
    post.sort_unstable();

    let in_order = collect(&tree, Order::In);
    pre == in_order && post == in_order
}

#[quickcheck]
fn height_is_bounded(xs: Vec<i32>) -> bool {
    let tree: Tree = xs.into_iter().collect();
    let size = tree.size();
    let height = tree.height();

    height <= size && min_levels(size) <= height && tree.depth() <= height
}

#[quickcheck]
fn insert_then_remove_round_trips(xs: Vec<i32>, key: i32) -> bool {
    let mut tree: Tree = xs.into_iter().collect();
    let was_present = tree.contains(key);
    let size = tree.size();

    if was_present {
        return !tree.insert(key) && tree.size() == size;
    }

    tree.insert(key)
        && tree.size() == size + 1
        && tree.remove(key)
        && !tree.contains(key)
        && tree.size() == size
}

#[quickcheck]
fn min_and_max_match_in_order_ends(xs: Vec<i32>) -> bool {
    let tree: Tree = xs.into_iter().collect();
    let keys = tree.keys();

    tree.min() == keys.first().copied() && tree.max() == keys.last().copied()
}
