use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use super::{BinaryTree, IntoIter, Iter, LevelOrder, Node, Postorder, Preorder, Side};
use crate::collections::traits::{Container, Export};

/// An unbalanced binary search tree, ordered by `T`'s [`Ord`] implementation.
///
/// Every element in a node's left subtree is less than the node's element, and every element in
/// its right subtree is greater. Inserting an element equal to one already in the tree does
/// nothing. No rebalancing is done, so inserting sorted input degrades the tree to a list; all
/// operations here walk the tree iteratively, so depth is only a cost in time, not in stack.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SearchTree.
/// - `d`: The depth of the tree, between `log n` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` / `append` | `O(d)` |
/// | `search` / `search_by_key` | `O(d)` |
/// | `remove` | `O(d)` |
/// | `get_by_key` / `remove_by_key` | `O(n)` |
/// | `export_all` | `O(n)` |
///
/// The [`Container`] lookups (`get_by_key`, `remove_by_key`) never use the ordering: they accept
/// any key function, and a key that doesn't agree with `Ord` could send a descent down the wrong
/// branch. Use [`search_by_key`](SearchTree::search_by_key) for an `O(d)` lookup by a key that
/// does agree with it.
///
/// # Examples
/// ```
/// # use keyed_collections::collections::binary_tree::SearchTree;
/// # use keyed_collections::collections::traits::Export;
/// let mut tree: SearchTree<_> = [50, 30, 70, 20, 40].into_iter().collect();
/// assert!(!tree.insert(30));
/// assert_eq!(tree.export_all(), [&20, &30, &40, &50, &70]);
/// assert_eq!(tree.remove(&50), Some(50));
/// assert_eq!(tree.root(), Some(&70));
/// ```
pub struct SearchTree<T: Ord> {
    // The tree's node storage. Only the methods here may add to it, so that the ordering holds.
    pub(crate) tree: BinaryTree<T>,
}

impl<T: Ord> SearchTree<T> {
    /// Creates a new SearchTree with no elements.
    pub const fn new() -> SearchTree<T> {
        SearchTree {
            tree: BinaryTree::new(),
        }
    }

    /// Returns the number of elements in the SearchTree.
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true if the SearchTree contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn root(&self) -> Option<&T> {
        self.tree.root()
    }

    /// Inserts `value` into the tree, returning false (and dropping `value`) if an equal element
    /// is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut link = &mut self.tree.root.0;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left.0,
                Ordering::Greater => &mut node.right.0,
                Ordering::Equal => return false,
            };
        }
        *link = Some(Node::boxed(value));
        self.tree.len += 1;
        true
    }

    /// Returns the element equal to `value`, descending by comparison.
    pub fn search(&self, value: &T) -> Option<&T> {
        self.find(|item| value.cmp(item))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Returns the element whose key is `target`, descending left when `target` is less than the
    /// key of a node and right when it is greater.
    ///
    /// This only finds the element if `key` agrees with the order of the tree, meaning that
    /// `a < b` implies `key(a) <= key(b)`. For other keys, use
    /// [`get_by_key`](Container::get_by_key), which checks every element.
    pub fn search_by_key<'a, K, F>(&'a self, key: F, target: &K) -> Option<&'a T>
    where
        K: Ord,
        F: Fn(&'a T) -> K,
    {
        self.find(|item| target.cmp(&key(item)))
    }

    /// Removes the element equal to `value` and returns it, if it was present.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let path = self.find_path(|item| value.cmp(item))?;
        self.tree.remove_at(&path)
    }

    /// Returns an in-order iterator over the elements, which yields them in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.tree.iter()
    }

    pub fn preorder(&self) -> Preorder<'_, T> {
        self.tree.preorder()
    }

    pub fn postorder(&self) -> Postorder<'_, T> {
        self.tree.postorder()
    }

    pub fn level_order(&self) -> LevelOrder<'_, T> {
        self.tree.level_order()
    }

    /// Descends from the root, going left when `compare` returns [`Ordering::Less`] for a node's
    /// element and right for [`Ordering::Greater`].
    fn find<'a, C: Fn(&'a T) -> Ordering>(&'a self, compare: C) -> Option<&'a T> {
        let mut current = self.tree.root.as_deref();
        while let Some(node) = current {
            let side = match compare(&node.value) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Some(&node.value),
            };
            current = node.child(side).as_deref();
        }
        None
    }

    fn find_path<C: Fn(&T) -> Ordering>(&self, compare: C) -> Option<Vec<Side>> {
        let mut path = Vec::new();
        let mut current = self.tree.root.as_deref();
        while let Some(node) = current {
            let side = match compare(&node.value) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Some(path),
            };
            path.push(side);
            current = node.child(side).as_deref();
        }
        None
    }
}

impl<T: Ord> Export for SearchTree<T> {
    type Item = T;

    fn export_all(&self) -> Vec<&T> {
        self.tree.export_all()
    }

    fn size(&self) -> usize {
        self.tree.len()
    }
}

impl<T: Ord> Container for SearchTree<T> {
    fn append(&mut self, item: T) {
        self.insert(item);
    }

    fn remove_by_key<K, F>(&mut self, key: F, value: &K) -> bool
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        // Removal replaces a node with its in-order successor, which keeps the ordering.
        self.tree.remove_by_key(key, value)
    }

    fn get_by_key<K, F>(&self, key: F, value: &K) -> Option<&T>
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        self.tree.get_by_key(key, value)
    }
}

impl<T: Ord> AsRef<BinaryTree<T>> for SearchTree<T> {
    fn as_ref(&self) -> &BinaryTree<T> {
        &self.tree
    }
}

impl<T: Ord> IntoIterator for SearchTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a SearchTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> FromIterator<T> for SearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = SearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for SearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> Default for SearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> Clone for SearchTree<T> {
    fn clone(&self) -> Self {
        // Inserting in preorder rebuilds the same shape.
        self.preorder().cloned().collect()
    }
}

impl<T: Ord> PartialEq for SearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Ord> Eq for SearchTree<T> {}

impl<T: Ord + Debug> Debug for SearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchTree")
            .field("contents", &self.export_all())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Ord + Debug> Display for SearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.tree, f)
    }
}
