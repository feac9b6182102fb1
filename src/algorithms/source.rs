#[cfg(feature = "binary-tree")]
use crate::collections::binary_tree::{BinaryTree, SearchTree};
#[cfg(feature = "contiguous")]
use crate::collections::contiguous::DynamicArray;
#[cfg(feature = "linked")]
use crate::collections::linked::{DoublyLinkedList, SinglyLinkedList};
#[cfg(feature = "collections")]
use crate::collections::traits::Export;

/// Input to the algorithms, normalized into an ordered sequence of references.
///
/// Slices and vectors produce their elements in index order. Collections produce their
/// [`export_all`](Export::export_all) sequence: list order, index order or in-order for trees.
pub trait Source<'a> {
    type Item: 'a;

    /// Consumes the source, producing references to its elements in order.
    fn into_sequence(self) -> Vec<&'a Self::Item>;
}

impl<'a, T> Source<'a> for &'a [T] {
    type Item = T;

    fn into_sequence(self) -> Vec<&'a T> {
        self.iter().collect()
    }
}

impl<'a, T, const N: usize> Source<'a> for &'a [T; N] {
    type Item = T;

    fn into_sequence(self) -> Vec<&'a T> {
        self.iter().collect()
    }
}

impl<'a, T> Source<'a> for &'a Vec<T> {
    type Item = T;

    fn into_sequence(self) -> Vec<&'a T> {
        self.iter().collect()
    }
}

/// The output of another algorithm, used as is.
impl<'a, T> Source<'a> for Vec<&'a T> {
    type Item = T;

    fn into_sequence(self) -> Vec<&'a T> {
        self
    }
}

#[cfg(feature = "linked")]
impl<'a, T> Source<'a> for &'a SinglyLinkedList<T> {
    type Item = T;

    fn into_sequence(self) -> Vec<&'a T> {
        self.export_all()
    }
}

#[cfg(feature = "linked")]
impl<'a, T> Source<'a> for &'a DoublyLinkedList<T> {
    type Item = T;

    fn into_sequence(self) -> Vec<&'a T> {
        self.export_all()
    }
}

#[cfg(feature = "contiguous")]
impl<'a, T> Source<'a> for &'a DynamicArray<T> {
    type Item = T;

    fn into_sequence(self) -> Vec<&'a T> {
        self.export_all()
    }
}

#[cfg(feature = "binary-tree")]
impl<'a, T> Source<'a> for &'a BinaryTree<T> {
    type Item = T;

    fn into_sequence(self) -> Vec<&'a T> {
        self.export_all()
    }
}

#[cfg(feature = "binary-tree")]
impl<'a, T: Ord> Source<'a> for &'a SearchTree<T> {
    type Item = T;

    fn into_sequence(self) -> Vec<&'a T> {
        self.export_all()
    }
}
