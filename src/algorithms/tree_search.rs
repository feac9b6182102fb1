//! Searching trees by key, by walking their structure rather than an exported sequence.

use crate::collections::binary_tree::{BinaryTree, SearchTree};

/// Returns the first element in preorder (node, then left subtree, then right subtree) whose key
/// equals `target`.
///
/// Accepts a [`BinaryTree`] or a [`SearchTree`], whose ordering is ignored.
pub fn depth_first_search<'a, T, K, F>(
    tree: &'a impl AsRef<BinaryTree<T>>,
    target: &K,
    key: F,
) -> Option<&'a T>
where
    T: 'a,
    K: PartialEq,
    F: Fn(&'a T) -> K,
{
    tree.as_ref().preorder().find(|item| key(*item) == *target)
}

/// Returns the first element in level order whose key equals `target`, so the match closest to the
/// root is found first.
///
/// Accepts a [`BinaryTree`] or a [`SearchTree`], whose ordering is ignored.
pub fn breadth_first_search<'a, T, K, F>(
    tree: &'a impl AsRef<BinaryTree<T>>,
    target: &K,
    key: F,
) -> Option<&'a T>
where
    T: 'a,
    K: PartialEq,
    F: Fn(&'a T) -> K,
{
    tree.as_ref().level_order().find(|item| key(*item) == *target)
}

/// Returns the element of a [`SearchTree`] whose key equals `target`, descending by comparing keys.
/// See [`SearchTree::search_by_key`] for the requirements on `key`.
///
/// # Examples
/// ```
/// # use keyed_collections::algorithms::tree_search::search_tree_lookup;
/// # use keyed_collections::collections::binary_tree::SearchTree;
/// let tree: SearchTree<_> = [(30, "Jane"), (25, "John"), (45, "Bob")].into_iter().collect();
/// assert_eq!(search_tree_lookup(&tree, &45, |(age, _)| *age), Some(&(45, "Bob")));
/// assert_eq!(search_tree_lookup(&tree, &50, |(age, _)| *age), None);
/// ```
pub fn search_tree_lookup<'a, T, K, F>(tree: &'a SearchTree<T>, target: &K, key: F) -> Option<&'a T>
where
    T: Ord,
    K: Ord,
    F: Fn(&'a T) -> K,
{
    tree.search_by_key(key, target)
}
