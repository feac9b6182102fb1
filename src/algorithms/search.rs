//! Searching sequences by key.

use std::cmp::Ordering;

use super::Source;
use crate::record::Value;

/// Equality as used by [`linear_search`]: text matches ignoring case, everything else matches
/// when it is equal.
pub trait Matches {
    fn is_match(&self, target: &Self) -> bool;
}

impl Matches for str {
    fn is_match(&self, target: &Self) -> bool {
        self.to_lowercase() == target.to_lowercase()
    }
}

impl Matches for String {
    fn is_match(&self, target: &Self) -> bool {
        self.as_str().is_match(target.as_str())
    }
}

impl Matches for char {
    fn is_match(&self, target: &Self) -> bool {
        self.to_lowercase().eq(target.to_lowercase())
    }
}

impl Matches for Value {
    fn is_match(&self, target: &Self) -> bool {
        match (self, target) {
            (Value::Text(text), Value::Text(target)) => text.is_match(target),
            _ => self == target,
        }
    }
}

impl<K: Matches + ?Sized> Matches for &K {
    fn is_match(&self, target: &Self) -> bool {
        (**self).is_match(*target)
    }
}

macro_rules! impl_matches_by_eq {
    ($($t:ty),+) => {
        $(
            impl Matches for $t {
                fn is_match(&self, target: &Self) -> bool {
                    self == target
                }
            }
        )+
    };
}

impl_matches_by_eq!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Returns every element of `source` whose key matches `target`, in order. Textual keys match
/// case-insensitively, see [`Matches`].
///
/// # Examples
/// ```
/// # use keyed_collections::algorithms::search::linear_search;
/// let locations = ["North Wing", "north wing", "South"];
/// let found = linear_search(&locations, &"NORTH WING", |location| *location);
/// assert_eq!(found, [&"North Wing", &"north wing"]);
/// ```
pub fn linear_search<'a, S, K, F>(source: S, target: &K, key: F) -> Vec<&'a S::Item>
where
    S: Source<'a>,
    K: Matches,
    F: Fn(&'a S::Item) -> K,
{
    source
        .into_sequence()
        .into_iter()
        .filter(|item| Matches::is_match(&key(*item), target))
        .collect()
}

/// Searches `source`, which must already be sorted in ascending order of `key`, for an element
/// whose key equals `target`, returning its index.
///
/// The order of `source` isn't checked. If it isn't sorted by `key`, the result is unspecified but
/// still either [`None`] or a valid index. If several elements have the target key, any one of
/// their indices may be returned.
///
/// # Examples
/// ```
/// # use keyed_collections::algorithms::search::binary_search_by_key;
/// let odds = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search_by_key(&odds, &5, |n| *n), Some(2));
/// assert_eq!(binary_search_by_key(&odds, &4, |n| *n), None);
/// ```
pub fn binary_search_by_key<'a, S, K, F>(source: S, target: &K, key: F) -> Option<usize>
where
    S: Source<'a>,
    K: Ord,
    F: Fn(&'a S::Item) -> K,
{
    let items = source.into_sequence();
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match key(items[mid]).cmp(target) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Some(mid),
        }
    }

    None
}

/// Returns the element of `source` with the greatest key. If several elements share the greatest
/// key, the first of them is returned.
///
/// # Examples
/// ```
/// # use keyed_collections::algorithms::search::find_most;
/// let rides = [("John", 2), ("Jane", 4), ("Alice", 4)];
/// assert_eq!(find_most(&rides, |(_, count)| *count), Some(&("Jane", 4)));
/// assert_eq!(find_most(&[] as &[(&str, u32)], |(_, count)| *count), None);
/// ```
pub fn find_most<'a, S, K, F>(source: S, key: F) -> Option<&'a S::Item>
where
    S: Source<'a>,
    K: Ord,
    F: Fn(&'a S::Item) -> K,
{
    let mut most: Option<(&'a S::Item, K)> = None;

    for item in source.into_sequence() {
        let item_key = key(item);
        if most.as_ref().is_none_or(|(_, most_key)| item_key > *most_key) {
            most = Some((item, item_key));
        }
    }

    most.map(|(item, _)| item)
}
