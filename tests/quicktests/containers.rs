use std::collections::BTreeSet;

use keyed_collections::collections::binary_tree::{BinaryTree, SearchTree};
use keyed_collections::collections::contiguous::DynamicArray;
use keyed_collections::collections::contiguous::dynamic_array::MIN_CAP;
use keyed_collections::collections::linked::{DoublyLinkedList, SinglyLinkedList};
use keyed_collections::collections::traits::{Container, Export};
use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a container and to a Vec. Removal takes out the first equal
/// element, which is what every sequential container promises.
fn do_ops<C: Container<Item = i8>>(ops: &[Op<i8>], container: &mut C) -> Vec<i8> {
    let mut model = Vec::new();
    for op in ops {
        match op {
            Op::Append(x) => {
                container.append(*x);
                model.push(*x);
                // An appended element is always found again by its own key.
                assert_eq!(container.get_by_key(|item| *item, x), Some(x));
            },
            Op::Remove(x) => {
                let removed = container.remove_by_key(|item| *item, x);
                match model.iter().position(|item| item == x) {
                    Some(pos) => {
                        model.remove(pos);
                        assert!(removed);
                    },
                    None => assert!(!removed),
                }
            },
        }
    }
    model
}

fn exported(container: &impl Export<Item = i8>) -> Vec<i8> {
    container.export_all().into_iter().copied().collect()
}

#[quickcheck]
fn singly_linked_list_matches_vec(ops: Vec<Op<i8>>) -> bool {
    let mut list = SinglyLinkedList::new();
    let model = do_ops(&ops, &mut list);
    exported(&list) == model && list.size() == model.len()
}

#[quickcheck]
fn doubly_linked_list_matches_vec(ops: Vec<Op<i8>>) -> bool {
    let mut list = DoublyLinkedList::new();
    let model = do_ops(&ops, &mut list);
    let mut reversed = model.clone();
    reversed.reverse();

    exported(&list) == model
        && list.export_reverse().into_iter().copied().collect::<Vec<_>>() == reversed
        && list.len() == model.len()
}

#[quickcheck]
fn dynamic_array_matches_vec(ops: Vec<Op<i8>>) -> bool {
    let mut array = DynamicArray::new();
    let model = do_ops(&ops, &mut array);
    exported(&array) == model && array.capacity() >= array.len().max(MIN_CAP)
}

#[quickcheck]
fn dynamic_array_stays_dense(xs: Vec<u8>, removals: usize) -> bool {
    let mut array: DynamicArray<u8> = xs.iter().copied().collect();
    let removals = removals % (xs.len() + 1);
    for _ in 0..removals {
        array.remove_at(0);
    }

    let cap = array.capacity();
    // After any removal, either the array is at least a quarter full or it is at the floor.
    array.len() == xs.len() - removals
        && array.len() <= cap
        && (removals == 0 || cap == MIN_CAP || array.len() * 4 >= cap)
}

#[quickcheck]
fn binary_tree_keeps_every_item(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinaryTree::new();
    let mut model = do_ops(&ops, &mut tree);
    let mut items = exported(&tree);
    items.sort();
    model.sort();
    items == model && tree.preorder().count() == tree.len()
}

#[quickcheck]
fn search_tree_matches_btree_set(ops: Vec<Op<i8>>) -> bool {
    let mut tree = SearchTree::new();
    let mut set = BTreeSet::new();
    for op in &ops {
        match op {
            Op::Append(x) => {
                let inserted = tree.insert(*x);
                if inserted != set.insert(*x) || tree.get_by_key(|item| *item, x) != Some(x) {
                    return false;
                }
            },
            Op::Remove(x) => {
                if tree.remove(x).is_some() != set.remove(x) {
                    return false;
                }
            },
        }
    }

    exported(&tree) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn search_tree_contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: SearchTree<i8> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter().all(|x| {
        tree.contains(x) == added.contains(x)
            && tree.search_by_key(|y| *y, x).is_some() == added.contains(x)
    })
}
