use keyed_collections::algorithms::search::{binary_search_by_key, find_most, linear_search};
use keyed_collections::algorithms::sort::{merge_sort, quicksort};
use keyed_collections::collections::binary_tree::SearchTree;
use quickcheck_macros::quickcheck;

/// Pairs are keyed by their first half only, so equal keys with distinct second halves expose
/// any reordering of ties.
fn tagged(xs: &[i8]) -> Vec<(i8, usize)> {
    xs.iter().copied().zip(0..).collect()
}

fn is_stable(sorted: &[&(i8, usize)]) -> bool {
    sorted
        .windows(2)
        .all(|pair| pair[0].0 < pair[1].0 || (pair[0].0 == pair[1].0 && pair[0].1 < pair[1].1))
}

#[quickcheck]
fn quicksort_matches_std(xs: Vec<i8>) -> bool {
    let mut expected: Vec<&i8> = xs.iter().collect();
    expected.sort();
    quicksort(&xs, |x| *x) == expected
}

#[quickcheck]
fn merge_sort_matches_std(xs: Vec<i8>) -> bool {
    let mut expected: Vec<&i8> = xs.iter().collect();
    expected.sort();
    merge_sort(&xs, |x| *x) == expected
}

#[quickcheck]
fn sorts_are_stable(xs: Vec<i8>) -> bool {
    let pairs = tagged(&xs);
    is_stable(&merge_sort(&pairs, |(key, _)| *key))
        && is_stable(&quicksort(&pairs, |(key, _)| *key))
}

#[quickcheck]
fn sorts_leave_source_alone(xs: Vec<i8>) -> bool {
    let before = xs.clone();
    let _ = quicksort(&xs, |x| std::cmp::Reverse(*x));
    let _ = merge_sort(&xs, |x| std::cmp::Reverse(*x));
    xs == before
}

#[quickcheck]
fn binary_search_finds_present_keys(xs: Vec<i8>, target: i8) -> bool {
    let sorted = merge_sort(&xs, |x| *x);
    match binary_search_by_key(sorted.clone(), &target, |x| *x) {
        Some(index) => *sorted[index] == target,
        None => !xs.contains(&target),
    }
}

#[quickcheck]
fn binary_search_over_search_tree(xs: Vec<i8>) -> bool {
    let tree: SearchTree<i8> = xs.iter().copied().collect();
    xs.iter().all(|x| binary_search_by_key(&tree, x, |y| *y).is_some())
}

#[quickcheck]
fn find_most_is_first_maximum(xs: Vec<i8>) -> bool {
    let pairs = tagged(&xs);
    match find_most(&pairs, |(key, _)| *key) {
        Some((key, position)) => pairs.iter().all(|(other, other_position)| {
            other < key || (other == key && other_position >= position)
        }),
        None => xs.is_empty(),
    }
}

#[quickcheck]
fn linear_search_keeps_order(xs: Vec<i8>, target: i8) -> bool {
    let pairs = tagged(&xs);
    let found = linear_search(&pairs, &target, |(key, _)| *key);
    let expected: Vec<_> = pairs.iter().filter(|(key, _)| *key == target).collect();
    found == expected
}
