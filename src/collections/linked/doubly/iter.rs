use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{DoublyLinkedList, Link, ListContents, ListState, NodeRef};

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owning iterator, which pops elements off either end of the list it holds.
pub struct IntoIter<T> {
    pub(crate) list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// The part of a list that a borrowing iterator hasn't visited yet. `remaining` stops the two
/// ends from crossing, the nodes themselves are never touched.
pub(crate) struct Span<T> {
    front: Link<T>,
    back: Link<T>,
    remaining: usize,
}

impl<T> Span<T> {
    fn of(state: &ListState<T>) -> Span<T> {
        match state {
            ListState::Empty => Span {
                front: None,
                back: None,
                remaining: 0,
            },
            ListState::Full(ListContents { len, head, tail }) => Span {
                front: Some(*head),
                back: Some(*tail),
                remaining: len.get(),
            },
        }
    }

    fn take_front(&mut self) -> Option<NodeRef<T>> {
        let node = self.front.filter(|_| self.remaining > 0)?;
        self.front = *node.next();
        self.remaining -= 1;
        Some(node)
    }

    fn take_back(&mut self) -> Option<NodeRef<T>> {
        let node = self.back.filter(|_| self.remaining > 0)?;
        self.back = *node.prev();
        self.remaining -= 1;
        Some(node)
    }
}

impl<T> Clone for Span<T> {
    fn clone(&self) -> Self {
        Span {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            span: Span::of(&self.state),
            _phantom: PhantomData,
        }
    }
}

pub struct Iter<'a, T> {
    pub(crate) span: Span<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.span.take_front().map(|node| node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining, Some(self.span.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.span.take_back().map(|node| node.value())
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            span: self.span.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            span: Span::of(&self.state),
            _phantom: PhantomData,
        }
    }
}

/// A mutable iterator. Every node is yielded at most once, so the mutable references never alias.
pub struct IterMut<'a, T> {
    pub(crate) span: Span<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.span.take_front().map(|mut node| node.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining, Some(self.span.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.span.take_back().map(|mut node| node.value_mut())
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
