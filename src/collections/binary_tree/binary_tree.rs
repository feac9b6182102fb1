use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, IntoIter, Iter, LevelOrder, Node, Postorder, Preorder, Side};
use crate::collections::traits::{Container, Export};

/// An unordered binary tree, filled structurally rather than by comparing elements.
///
/// A new element goes into the first free child slot found by walking down from the root: the
/// left child if it is empty, otherwise the right child if it is empty, otherwise the walk
/// continues from the left child. This keeps the right spine short and the left spine long, it
/// isn't a balancing strategy.
///
/// Elements are exported in-order, see [`Iter`]. Removing a node with two children replaces it
/// with its in-order successor, so the in-order sequence of the other elements isn't changed.
///
/// # Examples
/// ```
/// # use keyed_collections::collections::binary_tree::BinaryTree;
/// # use keyed_collections::collections::traits::Export;
/// let tree: BinaryTree<_> = [1, 2, 3, 4, 5].into_iter().collect();
/// // 1 has children 2 and 3, 2 has children 4 and 5.
/// assert_eq!(tree.preorder().collect::<Vec<_>>(), [&1, &2, &4, &5, &3]);
/// assert_eq!(tree.export_all(), [&4, &2, &5, &1, &3]);
/// ```
pub struct BinaryTree<T> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T> BinaryTree<T> {
    /// Creates a new BinaryTree with no elements.
    pub const fn new() -> BinaryTree<T> {
        BinaryTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of elements in the BinaryTree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the BinaryTree contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the element at the root of the tree, if there is one.
    pub fn root(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &node.value)
    }

    /// Inserts `value` into the first free child slot, following the fill rule described on
    /// [`BinaryTree`].
    pub fn insert(&mut self, value: T) {
        let mut link = &mut self.root.0;
        while let Some(node) = link {
            link = if node.left.is_some() && node.right.is_none() {
                &mut node.right.0
            } else {
                &mut node.left.0
            };
        }
        *link = Some(Node::boxed(value));
        self.len += 1;
    }

    /// Removes and returns the first element, in-order, for which `predicate` returns true.
    pub fn remove_first_where<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> Option<T> {
        let path = self.root.path_where(predicate)?;
        self.remove_at(&path)
    }

    /// Removes the node at the end of `path`.
    pub(crate) fn remove_at(&mut self, path: &[Side]) -> Option<T> {
        let value = self.root.follow_mut(path)?.unlink()?;
        self.len -= 1;
        Some(value)
    }

    /// Returns an in-order iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root, self.len)
    }

    /// Returns an iterator visiting each node before its left and then right subtree.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(&self.root, self.len)
    }

    /// Returns an iterator visiting each node after its left and right subtrees.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(&self.root, self.len)
    }

    /// Returns an iterator visiting the tree one level at a time, starting from the root.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(&self.root, self.len)
    }
}

impl<T> Export for BinaryTree<T> {
    type Item = T;

    fn export_all(&self) -> Vec<&T> {
        self.iter().collect()
    }

    fn size(&self) -> usize {
        self.len
    }
}

impl<T> Container for BinaryTree<T> {
    fn append(&mut self, item: T) {
        self.insert(item);
    }

    fn remove_by_key<K, F>(&mut self, key: F, value: &K) -> bool
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        self.remove_first_where(|item| key(item) == *value).is_some()
    }

    fn get_by_key<K, F>(&self, key: F, value: &K) -> Option<&T>
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        self.iter().find(|item| key(item) == *value)
    }
}

impl<T> AsRef<BinaryTree<T>> for BinaryTree<T> {
    fn as_ref(&self) -> &BinaryTree<T> {
        self
    }
}

impl<T> IntoIterator for BinaryTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len;
        self.len = 0;
        IntoIter::new(Branch(self.root.0.take()), len)
    }
}

impl<'a, T> IntoIterator for &'a BinaryTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinaryTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinaryTree<T> {
    fn drop(&mut self) {
        // Detach every node before it is dropped, the default drop would recurse once per level.
        let mut stack: Vec<Box<Node<T>>> = self.root.0.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.0.take());
            stack.extend(node.right.0.take());
        }
    }
}

impl<T: Debug> Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("contents", &self.export_all())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for BinaryTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.root.write_tree(f)
    }
}
