use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

use super::{Iter, Link, Node};
use crate::collections::traits::{Container, Export};
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A list with links in one direction only, from the front to the back.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `push_back` / `append` | `O(n)` |
/// | `get` | `O(i)` |
/// | `remove_first_where` | `O(n)` |
/// | `export_all` | `O(n)` |
///
/// No tail pointer is kept, so adding to the back walks the whole list. See
/// [`DoublyLinkedList`](crate::collections::linked::DoublyLinkedList) for `O(1)` appends.
///
/// # Examples
/// ```
/// # use keyed_collections::collections::linked::SinglyLinkedList;
/// # use keyed_collections::collections::traits::{Container, Export};
/// let mut list = SinglyLinkedList::new();
/// list.append("North Wing");
/// list.append("South Wing");
/// assert_eq!(list.export_all(), [&"North Wing", &"South Wing"]);
/// assert!(list.remove_by_key(|wing| wing.len(), &10));
/// assert_eq!(list.size(), 1);
/// ```
pub struct SinglyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Add the provided element to the front of the SinglyLinkedList.
    pub fn push_front(&mut self, value: T) {
        let mut node = Node::boxed(value);
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    /// Add the provided element to the back of the SinglyLinkedList, walking the list to find the
    /// last link.
    pub fn push_back(&mut self, value: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Node::boxed(value));
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.len -= 1;
            node.value
        })
    }

    /// Returns a reference to the element at the provided `index`, or [`None`] if it is out of
    /// bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] if it is out
    /// of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Unlinks and returns the first element for which `predicate` returns true.
    pub fn remove_first_where<P: FnMut(&T) -> bool>(&mut self, mut predicate: P) -> Option<T> {
        let mut link = &mut self.head;
        loop {
            let found = match link.as_deref() {
                Some(node) => predicate(&node.value),
                None => return None,
            };

            if found {
                let mut node = link.take()?;
                *link = node.next.take();
                self.len -= 1;
                return Some(node.value);
            }

            match link {
                Some(node) => link = &mut node.next,
                None => return None,
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> Export for SinglyLinkedList<T> {
    type Item = T;

    fn export_all(&self) -> Vec<&T> {
        self.iter().collect()
    }

    fn size(&self) -> usize {
        self.len
    }
}

impl<T> Container for SinglyLinkedList<T> {
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

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        // Track the last link, so that collecting doesn't walk the list for every item.
        let mut link = &mut list.head;
        for item in iter {
            let node = link.insert(Node::boxed(item));
            link = &mut node.next;
            list.len += 1;
        }
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink each node before it is dropped, the default drop would recurse once per node.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &self.export_all())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}
