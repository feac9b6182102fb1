use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::Index;

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Node, NodeRef, ONE};
use crate::collections::traits::{Container, Export};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A list with links in both directions, keeping track of both ends.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `remove_first_where` | `O(n)` |
/// | `export_all` / `export_reverse` | `O(n)` |
///
/// Removing the element at either end, whether by popping or by key, keeps `front` and `back`
/// pointing at the new first and last elements.
///
/// # Examples
/// ```
/// # use keyed_collections::collections::linked::DoublyLinkedList;
/// # use keyed_collections::collections::traits::Container;
/// let mut list: DoublyLinkedList<u32> = (1..=3).collect();
/// assert!(list.remove_by_key(|i| *i, &3));
/// assert_eq!(list.back(), Some(&2));
/// assert_eq!(list.export_reverse(), [&2, &1]);
/// ```
pub struct DoublyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Add the provided element to the front of the DoublyLinkedList.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Add the provided element to the back of the DoublyLinkedList.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                // SAFETY: The head is owned by this list and is unlinked below.
                let node = unsafe { head.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        let new_head = unsafe { node.next.unwrap_unchecked() };
                        *head = new_head;
                        *new_head.prev_mut() = None;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                // SAFETY: The tail is owned by this list and is unlinked below.
                let node = unsafe { tail.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the last element is
                        // preceded by at least one more.
                        let new_tail = unsafe { node.prev.unwrap_unchecked() };
                        *tail = new_tail;
                        *new_tail.next_mut() = None;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Returns a reference to the element at the provided `index`, or [`None`] if it is out of
    /// bounds. Seeks from whichever end is closer.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.try_get(index).ok()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] if it is out
    /// of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        match &self.state {
            Full(contents) if index < contents.len.get() => Ok(contents.seek(index).value()),
            state => Err(IndexOutOfBounds {
                index,
                len: state.len(),
            }),
        }
    }

    /// Unlinks and returns the first element for which `predicate` returns true, repairing the
    /// links of both neighbours and the ends of the list.
    pub fn remove_first_where<P: FnMut(&T) -> bool>(&mut self, mut predicate: P) -> Option<T> {
        let mut curr = match &self.state {
            Empty => None,
            Full(contents) => Some(contents.head),
        };

        while let Some(node) = curr {
            if predicate(node.value()) {
                // SAFETY: node was reached by walking this list from its head.
                return Some(unsafe { self.unlink(node) });
            }
            curr = *node.next();
        }
        None
    }

    /// Returns references to all elements, from the back of the list to the front.
    pub fn export_reverse(&self) -> Vec<&T> {
        self.iter().rev().collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Removes `node` from the list and returns its value.
    ///
    /// # Safety
    /// `node` must be one of the nodes currently owned by this list.
    unsafe fn unlink(&mut self, node: NodeRef<T>) -> T {
        let (at_head, at_tail) = match &self.state {
            Empty => (true, true),
            Full(contents) => (node == contents.head, node == contents.tail),
        };

        if at_head {
            // SAFETY: node belongs to this list, so it isn't empty.
            return unsafe { self.pop_front().unwrap_unchecked() };
        }
        if at_tail {
            // SAFETY: As above.
            return unsafe { self.pop_back().unwrap_unchecked() };
        }

        // SAFETY: The caller guarantees that node belongs to this list, and it's unlinked below.
        let node = unsafe { node.take_node() };
        // SAFETY: The node is neither head nor tail, so it has neighbours on both sides.
        unsafe {
            *node.prev.unwrap_unchecked().next_mut() = node.next;
            *node.next.unwrap_unchecked().prev_mut() = node.prev;
        }

        if let Full(contents) = &mut self.state {
            // SAFETY: A node between head and tail means the length was at least 3.
            contents.len = unsafe { contents.len.checked_sub(1).unwrap_unchecked() };
        }
        node.value
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> DoublyLinkedList<T> {
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none(), "The head shouldn't have a previous node.");
                let mut count = 1;
                let mut curr = *head;
                while let Some(next) = curr.next() {
                    assert!(*next.prev() == Some(curr), "next.prev should point back to the node.");
                    curr = *next;
                    count += 1;
                }
                assert!(*tail == curr, "The tail should be the last node reached.");
                assert_eq!(count, len.get(), "The length should match the number of nodes.");
            },
        }
    }
}

impl<T> Export for DoublyLinkedList<T> {
    type Item = T;

    fn export_all(&self) -> Vec<&T> {
        self.iter().collect()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Container for DoublyLinkedList<T> {
    fn append(&mut self, item: T) {
        self.push_back(item);
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

impl<T> ListContents<T> {
    pub fn seek(&self, index: usize) -> NodeRef<T> {
        if index < self.len.get() / 2 {
            Self::seek_fwd(index, self.head)
        } else {
            Self::seek_bwd(self.last_index() - index, self.tail)
        }
    }

    fn seek_fwd(count: usize, mut node: NodeRef<T>) -> NodeRef<T> {
        for _ in 0..count {
            // SAFETY: count is less than the number of nodes after node.
            node = unsafe { node.next().unwrap_unchecked() };
        }
        node
    }

    fn seek_bwd(count: usize, mut node: NodeRef<T>) -> NodeRef<T> {
        for _ in 0..count {
            // SAFETY: count is less than the number of nodes before node.
            node = unsafe { node.prev().unwrap_unchecked() };
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodeRef::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        if let Full(ListContents { head, .. }) = self.state {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                curr = *ptr.next();
                // SAFETY: Every node is visited once and the list is never used again.
                drop(unsafe { ptr.take_node() });
            }
        }
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &self.export_all())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") <-> (")
        )
    }
}
