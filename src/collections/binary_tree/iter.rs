use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::{Branch, Node};

/// An in-order iterator over the elements of a tree: left subtree, node, then right subtree.
pub struct Iter<'a, T> {
    pub(crate) stack: Vec<&'a Node<T>>,
    pub(crate) len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>, len: usize) -> Iter<'a, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            len,
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(next) = node {
            self.stack.push(next);
            node = next.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A preorder iterator over the elements of a tree: node, left subtree, then right subtree.
pub struct Preorder<'a, T> {
    pub(crate) stack: Vec<&'a Node<T>>,
    pub(crate) len: usize,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>, len: usize) -> Preorder<'a, T> {
        Preorder {
            stack: root.as_deref().into_iter().collect(),
            len,
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push right first, so that the left subtree is visited first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Preorder<'_, T> {}

impl<T> FusedIterator for Preorder<'_, T> {}

/// A postorder iterator over the elements of a tree: left subtree, right subtree, then node.
pub struct Postorder<'a, T> {
    // Nodes are marked once their children have been pushed, and are yielded when next popped.
    pub(crate) stack: Vec<(&'a Node<T>, bool)>,
    pub(crate) len: usize,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>, len: usize) -> Postorder<'a, T> {
        Postorder {
            stack: root.as_deref().map(|node| (node, false)).into_iter().collect(),
            len,
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                self.len -= 1;
                return Some(&node.value);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|right| (right, false)));
            self.stack.extend(node.left.as_deref().map(|left| (left, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Postorder<'_, T> {}

impl<T> FusedIterator for Postorder<'_, T> {}

/// A breadth-first iterator over the elements of a tree, visiting each level from left to right
/// before moving down to the next.
pub struct LevelOrder<'a, T> {
    pub(crate) queue: VecDeque<&'a Node<T>>,
    pub(crate) len: usize,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>, len: usize) -> LevelOrder<'a, T> {
        LevelOrder {
            queue: root.as_deref().into_iter().collect(),
            len,
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for LevelOrder<'_, T> {}

impl<T> FusedIterator for LevelOrder<'_, T> {}

/// An owned, in-order iterator over the elements of a tree.
pub struct IntoIter<T> {
    pub(crate) stack: Vec<Box<Node<T>>>,
    pub(crate) len: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Branch<T>, len: usize) -> IntoIter<T> {
        let mut iter = IntoIter {
            stack: Vec::new(),
            len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut branch: Branch<T>) {
        while let Some(mut node) = branch.0 {
            branch = Branch(node.left.0.take());
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(Branch(node.right.0.take()));
        self.len -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // The stacked nodes still own their right subtrees, which would be dropped recursively.
        for _ in self.by_ref() {}
    }
}
