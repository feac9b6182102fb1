#![cfg(test)]

use super::*;
use crate::collections::traits::{Container, Export};
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_new() {
    let arr: DynamicArray<u8> = DynamicArray::new();
    assert_eq!(arr.len(), 0);
    assert_eq!(arr.capacity(), MIN_CAP);
    assert!(arr.export_all().is_empty());
}

#[test]
fn test_growth() {
    let mut arr = DynamicArray::new();
    for i in 0..10 {
        arr.append(i);
    }
    assert_eq!(arr.capacity(), 10, "A full array shouldn't grow until another element is added.");

    arr.append(10);
    assert_eq!(arr.capacity(), 20, "Adding to a full array should double its capacity.");
    assert_eq!(arr.size(), 11);

    arr.extend(11..21);
    assert_eq!(arr.capacity(), 40);
    assert_eq!(&*arr, (0..21).collect::<Vec<_>>().as_slice(), "Growing should keep every element in order.");
}

#[test]
fn test_grow_from_zero() {
    let mut arr = DynamicArray::with_capacity(0);
    assert_eq!(arr.capacity(), 0);
    arr.push("first");
    assert_eq!(arr.capacity(), MIN_CAP);
    assert_eq!(arr.get(0), Some(&"first"));
}

#[test]
fn test_small_capacity_doubles() {
    let mut arr = DynamicArray::with_capacity(2);
    arr.extend([1, 2]);
    assert_eq!(arr.capacity(), 2);

    arr.push(3);
    assert_eq!(arr.capacity(), 4, "Growth should double even below the minimum capacity.");

    arr.extend([4, 5]);
    assert_eq!(arr.capacity(), 8);

    let mut odd = DynamicArray::with_capacity(3);
    odd.extend(['a', 'b', 'c', 'd']);
    assert_eq!(odd.capacity(), 6);
    assert_eq!(&*odd, ['a', 'b', 'c', 'd'].as_slice());
}

#[test]
fn test_shrink() {
    let mut arr: DynamicArray<u32> = (0..40).collect();
    assert_eq!(arr.capacity(), 40);

    // Removing down to 10 elements keeps size >= capacity / 4.
    for i in 0..30 {
        assert!(arr.remove(&i));
    }
    assert_eq!(arr.size(), 10);
    assert_eq!(arr.capacity(), 40);

    assert!(arr.remove(&30));
    assert_eq!(arr.capacity(), 20, "Dropping below a quarter full should halve the capacity.");

    for i in 31..36 {
        assert!(arr.remove(&i));
    }
    assert_eq!(arr.size(), 4);
    assert_eq!(arr.capacity(), 10, "Shrinking should halve again once below a quarter.");

    for i in 36..40 {
        assert!(arr.remove(&i));
    }
    assert!(arr.is_empty());
    assert_eq!(arr.capacity(), MIN_CAP, "The capacity should never shrink below the minimum.");
}

#[test]
fn test_small_capacity_doesnt_shrink() {
    let mut arr: DynamicArray<u8> = DynamicArray::with_capacity(8);
    arr.extend([1, 2, 3]);
    arr.remove_at(0);
    arr.remove_at(0);
    assert_eq!(arr.capacity(), 8, "Arrays at or below the minimum capacity are never shrunk.");
}

#[test]
fn test_remove_keeps_order() {
    let mut arr: DynamicArray<_> = ["a", "b", "c", "b", "d"].into_iter().collect();
    assert!(arr.remove(&"b"));
    assert_eq!(arr.export_all(), [&"a", &"c", &"b", &"d"], "Only the first match should be removed.");
    assert!(!arr.remove(&"z"));

    assert_eq!(arr.remove_at(3), "d");
    assert_eq!(arr.export_all(), [&"a", &"c", &"b"]);
    assert_panics!({ arr.remove_at(3) }, "Removing out of bounds should panic.");
}

#[test]
fn test_by_key() {
    let mut arr: DynamicArray<(u8, char)> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
    assert_eq!(arr.get_by_key(|(n, _)| *n, &1), Some(&(1, 'a')));
    assert_eq!(arr.get_by_key(|(_, c)| *c, &'z'), None);
    assert!(arr.remove_by_key(|(_, c)| *c, &'c'));
    assert!(!arr.remove_by_key(|(_, c)| *c, &'c'));
    assert_eq!(arr.size(), 2);
}

#[test]
fn test_get() {
    let arr: DynamicArray<i32> = (-2..=2).collect();
    assert_eq!(arr.get(0), Some(&-2));
    assert_eq!(arr.get(4), Some(&2));
    assert_eq!(arr.get(5), None, "Slots past the size are out of bounds, even within capacity.");
    assert_eq!(
        arr.try_get(7).unwrap_err().to_string(),
        "Index 7 out of bounds for collection with 5 elements!"
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut arr: DynamicArray<_> = (0..30).map(|_| counter.clone()).collect();

    // Shrinks on the way down, which moves the elements without dropping them.
    for _ in 0..25 {
        arr.remove_at(0);
    }
    assert_eq!(counter.dropped(), 25);

    let mut iter = arr.into_iter();
    iter.next();
    iter.next_back();
    assert_eq!(counter.dropped(), 27);
    drop(iter);
    assert_eq!(counter.dropped(), 30, "Every element should be dropped exactly once.");
}

#[test]
fn test_into_iter() {
    let arr: DynamicArray<String> = ["x", "y", "z"].into_iter().map(String::from).collect();
    assert_eq!(arr.to_string(), r#"["x", "y", "z"]"#);
    assert_eq!(arr.clone().into_iter().rev().collect::<Vec<_>>(), ["z", "y", "x"]);
    assert_eq!(arr.into_iter().len(), 3);
}
