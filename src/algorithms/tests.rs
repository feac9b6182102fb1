#![cfg(all(test, feature = "collections-all"))]

use super::search::*;
use super::sort::*;
use super::tree_search::*;
use crate::collections::binary_tree::{BinaryTree, SearchTree};
use crate::collections::contiguous::DynamicArray;
use crate::collections::linked::{DoublyLinkedList, SinglyLinkedList};
use crate::record::Value;

#[derive(Debug, PartialEq)]
struct Customer {
    name: &'static str,
    age: u32,
    gender: &'static str,
}

const CUSTOMERS: [Customer; 4] = [
    Customer { name: "John Doe", age: 25, gender: "Male" },
    Customer { name: "Jane Smith", age: 30, gender: "Female" },
    Customer { name: "Bob Johnson", age: 45, gender: "Male" },
    Customer { name: "Alice Brown", age: 22, gender: "Female" },
];

fn names(customers: Vec<&Customer>) -> Vec<&'static str> {
    customers.into_iter().map(|customer| customer.name).collect()
}

#[test]
fn test_quicksort() {
    assert_eq!(
        names(quicksort(&CUSTOMERS, |customer| customer.age)),
        ["Alice Brown", "John Doe", "Jane Smith", "Bob Johnson"]
    );
    assert_eq!(
        names(quicksort(&CUSTOMERS, |customer| customer.gender)),
        ["Jane Smith", "Alice Brown", "John Doe", "Bob Johnson"],
        "Elements with equal keys should keep their input order."
    );
    assert_eq!(
        names(quicksort(&CUSTOMERS, |customer| customer.name)),
        ["Alice Brown", "Bob Johnson", "Jane Smith", "John Doe"]
    );
}

#[test]
fn test_merge_sort() {
    assert_eq!(
        names(merge_sort(&CUSTOMERS, |customer| customer.age)),
        ["Alice Brown", "John Doe", "Jane Smith", "Bob Johnson"]
    );
    assert_eq!(
        names(merge_sort(&CUSTOMERS, |customer| customer.gender)),
        ["Jane Smith", "Alice Brown", "John Doe", "Bob Johnson"],
        "Merge sort should be stable."
    );
}

#[test]
fn test_sort_edge_cases() {
    let empty: [u8; 0] = [];
    assert!(quicksort(&empty, |n| *n).is_empty());
    assert!(merge_sort(&empty, |n| *n).is_empty());
    assert_eq!(quicksort(&[7], |n| *n), [&7]);
    assert_eq!(merge_sort(&[7], |n| *n), [&7]);

    let repeated = [3; 50];
    assert_eq!(quicksort(&repeated, |n| *n).len(), 50);

    // Sorted and reverse sorted input are the worst case for a middle pivot.
    let descending: Vec<u32> = (0..2_000).rev().collect();
    let sorted = quicksort(&descending, |n| *n);
    assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(merge_sort(&descending, |n| *n), sorted);
}

#[test]
fn test_sort_containers() {
    let list: SinglyLinkedList<i32> = [5, -1, 3, 0].into_iter().collect();
    assert_eq!(quicksort(&list, |n| *n), [&-1, &0, &3, &5]);

    let doubly: DoublyLinkedList<&str> = ["pear", "fig", "apple"].into_iter().collect();
    assert_eq!(merge_sort(&doubly, |fruit| fruit.len()), [&"fig", &"pear", &"apple"]);

    let arr: DynamicArray<char> = "sort".chars().collect();
    assert_eq!(merge_sort(&arr, |c| *c), [&'o', &'r', &'s', &'t']);

    let tree: BinaryTree<u8> = [4, 8, 2, 6].into_iter().collect();
    assert_eq!(quicksort(&tree, |n| std::cmp::Reverse(*n)), [&8, &6, &4, &2]);

    // The output of one algorithm can be fed into another.
    let by_age = merge_sort(&CUSTOMERS, |customer| customer.age);
    assert_eq!(names(quicksort(by_age, |customer| customer.name.len())), [
        "John Doe",
        "Jane Smith",
        "Alice Brown",
        "Bob Johnson"
    ]);
}

#[test]
fn test_binary_search() {
    let odds = [1, 3, 5, 7, 9];
    assert_eq!(binary_search_by_key(&odds, &5, |n| *n), Some(2));
    assert_eq!(binary_search_by_key(&odds, &1, |n| *n), Some(0));
    assert_eq!(binary_search_by_key(&odds, &9, |n| *n), Some(4));
    assert_eq!(binary_search_by_key(&odds, &4, |n| *n), None);
    assert_eq!(binary_search_by_key(&odds, &10, |n| *n), None);
    assert_eq!(binary_search_by_key(&odds, &0, |n| *n), None);

    let empty: Vec<u32> = Vec::new();
    assert_eq!(binary_search_by_key(&empty, &5, |n| *n), None, "Empty input is never a match.");

    let by_age = merge_sort(&CUSTOMERS, |customer| customer.age);
    let index = binary_search_by_key(by_age.clone(), &30, |customer| customer.age);
    assert_eq!(index.map(|i| by_age[i].name), Some("Jane Smith"));
}

#[test]
fn test_linear_search() {
    let locations = ["North Wing", "north wing", "South"];
    assert_eq!(
        linear_search(&locations, &"NORTH WING", |location| *location),
        [&"North Wing", &"north wing"],
        "Text should match regardless of case."
    );
    assert!(linear_search(&locations, &"East", |location| *location).is_empty());

    let owned: Vec<String> = locations.iter().map(|location| location.to_string()).collect();
    assert_eq!(
        linear_search(&owned, &String::from("south"), |location| location.clone()).len(),
        1
    );

    assert_eq!(
        names(linear_search(&CUSTOMERS, &30, |customer| customer.age)),
        ["Jane Smith"]
    );
    assert_eq!(
        names(linear_search(&CUSTOMERS, &Value::from("male"), |customer| customer.gender.into())),
        ["John Doe", "Bob Johnson"]
    );
    assert!(
        linear_search(&CUSTOMERS, &Value::Int(25), |customer| customer.name.into()).is_empty(),
        "Values of different kinds never match."
    );
}

#[test]
fn test_matches() {
    assert!("Ünïcode".is_match("üNÏCODE"));
    assert!('Q'.is_match(&'q'));
    assert!(!1.5_f64.is_match(&1.25));
    assert!(Value::from("ABC").is_match(&Value::from("abc")));
    assert!(!Value::Int(1).is_match(&Value::Float(1.0)));
}

#[test]
fn test_find_most() {
    let rides = [("John", 2), ("Jane", 4), ("Bob", 1), ("Alice", 4)];
    assert_eq!(
        find_most(&rides, |(_, count)| *count),
        Some(&("Jane", 4)),
        "The first element with the greatest key should win ties."
    );
    assert_eq!(find_most(&rides, |(name, _)| name.len()), Some(&("Alice", 4)));
    assert_eq!(find_most(Vec::<&u8>::new(), |n| *n), None);
}

#[test]
fn test_tree_search() {
    //        1
    //      2   3
    //    4  (2)
    let tree: BinaryTree<(u8, &str)> =
        [(1, "root"), (2, "left"), (3, "right"), (4, "deep"), (2, "shallow")].into_iter().collect();

    assert_eq!(depth_first_search(&tree, &3, |(n, _)| *n), Some(&(3, "right")));
    assert_eq!(breadth_first_search(&tree, &4, |(n, _)| *n), Some(&(4, "deep")));
    assert_eq!(depth_first_search(&tree, &"deep", |(_, name)| *name), Some(&(4, "deep")));
    assert_eq!(depth_first_search(&tree, &9, |(n, _)| *n), None);
    assert_eq!(breadth_first_search(&BinaryTree::<u8>::new(), &0, |n| *n), None);

    //      10
    //    21  30
    //  20
    let tree: BinaryTree<u32> = [10, 21, 30, 20].into_iter().collect();
    let even_above_ten = |n: &u32| *n > 10 && n % 2 == 0;
    assert_eq!(depth_first_search(&tree, &true, even_above_ten), Some(&20), "Preorder finishes the left subtree first.");
    assert_eq!(breadth_first_search(&tree, &true, even_above_ten), Some(&30), "Level order finds the shallowest match.");
    assert_eq!(breadth_first_search(&tree, &1, |n| n % 2), Some(&21));
}

#[test]
fn test_search_tree_lookup() {
    let tree: SearchTree<(u32, &str)> =
        CUSTOMERS.iter().map(|customer| (customer.age, customer.name)).collect();

    assert_eq!(search_tree_lookup(&tree, &45, |(age, _)| *age), Some(&(45, "Bob Johnson")));
    assert_eq!(search_tree_lookup(&tree, &26, |(age, _)| *age), None);
    assert_eq!(
        depth_first_search(&tree, &"John Doe", |(_, name)| *name),
        Some(&(25, "John Doe")),
        "Unordered searches should work on search trees too."
    );
}

#[test]
fn test_search_tree_lookup_borrowed_key() {
    struct Member {
        name: String,
        rides: u32,
    }

    // Ordered by name only.
    impl PartialEq for Member {
        fn eq(&self, other: &Self) -> bool {
            self.name == other.name
        }
    }
    impl Eq for Member {}
    impl PartialOrd for Member {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Member {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.name.cmp(&other.name)
        }
    }

    let tree: SearchTree<Member> = CUSTOMERS
        .iter()
        .zip(1..)
        .map(|(customer, rides)| Member { name: String::from(customer.name), rides })
        .collect();

    let found = search_tree_lookup(&tree, &"Bob Johnson", |member| member.name.as_str());
    assert_eq!(found.map(|member| member.rides), Some(3));
    assert!(search_tree_lookup(&tree, &"Zoe", |member| member.name.as_str()).is_none());
}
