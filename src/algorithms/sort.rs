//! Sorting by key. Both sorts return a new sequence of references and leave the input untouched.

use std::cmp::Ordering;

use super::Source;

enum Task<'a, T> {
    Sort(Vec<&'a T>),
    Emit(Vec<&'a T>),
}

/// Sorts the elements of `source` in ascending order of `key`, using quicksort.
///
/// The pivot is always the element in the middle of the segment being sorted, so the output is
/// reproducible. Each segment is split into the elements less than, equal to and greater than the
/// pivot's key, without reordering within each part, so elements with equal keys keep their input
/// order.
///
/// Segments waiting to be sorted are kept on an explicit stack, so adversarial inputs cost `O(n²)`
/// time but never deep recursion.
///
/// # Examples
/// ```
/// # use keyed_collections::algorithms::sort::quicksort;
/// let ages = [45, 22, 30, 25];
/// assert_eq!(quicksort(&ages, |age| *age), [&22, &25, &30, &45]);
/// assert_eq!(quicksort(&ages, |age| std::cmp::Reverse(*age)), [&45, &30, &25, &22]);
/// ```
pub fn quicksort<'a, S, K, F>(source: S, key: F) -> Vec<&'a S::Item>
where
    S: Source<'a>,
    K: Ord,
    F: Fn(&'a S::Item) -> K,
{
    let items = source.into_sequence();
    let mut sorted = Vec::with_capacity(items.len());
    let mut tasks = vec![Task::Sort(items)];

    while let Some(task) = tasks.pop() {
        match task {
            Task::Emit(items) => sorted.extend(items),
            Task::Sort(items) if items.len() <= 1 => sorted.extend(items),
            Task::Sort(items) => {
                let pivot = key(items[items.len() / 2]);

                let mut less = Vec::new();
                let mut equal = Vec::new();
                let mut greater = Vec::new();
                for item in items {
                    match key(item).cmp(&pivot) {
                        Ordering::Less => less.push(item),
                        Ordering::Equal => equal.push(item),
                        Ordering::Greater => greater.push(item),
                    }
                }

                // Popped in reverse, so less is handled first.
                tasks.push(Task::Sort(greater));
                tasks.push(Task::Emit(equal));
                tasks.push(Task::Sort(less));
            },
        }
    }

    sorted
}

/// Sorts the elements of `source` in ascending order of `key`, using a top-down merge sort.
///
/// The sort is stable: elements with equal keys keep their input order. It recurses once per
/// halving, so the depth is `log n`.
///
/// # Examples
/// ```
/// # use keyed_collections::algorithms::sort::merge_sort;
/// let menu = [("Soup", 850), ("Steak", 2400), ("Salad", 850)];
/// let by_price = merge_sort(&menu, |(_, cents)| *cents);
/// assert_eq!(by_price, [&("Soup", 850), &("Salad", 850), &("Steak", 2400)]);
/// ```
pub fn merge_sort<'a, S, K, F>(source: S, key: F) -> Vec<&'a S::Item>
where
    S: Source<'a>,
    K: Ord,
    F: Fn(&'a S::Item) -> K,
{
    sort_run(source.into_sequence(), &key)
}

fn sort_run<'a, T, K, F>(mut items: Vec<&'a T>, key: &F) -> Vec<&'a T>
where
    K: Ord,
    F: Fn(&'a T) -> K,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    merge(sort_run(items, key), sort_run(right, key), key)
}

fn merge<'a, T, K, F>(left: Vec<&'a T>, right: Vec<&'a T>, key: &F) -> Vec<&'a T>
where
    K: Ord,
    F: Fn(&'a T) -> K,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(&l), Some(&r)) = (left.peek(), right.peek()) {
        // Taking from the left on ties keeps the sort stable.
        if key(l) <= key(r) {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
