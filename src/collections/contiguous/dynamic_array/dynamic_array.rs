use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::slice;

use crate::collections::traits::{Container, Export};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// The capacity of a new DynamicArray, and the floor that shrinking never goes below.
pub const MIN_CAP: usize = 10;

const GROWTH_FACTOR: usize = 2;
const SHRINK_RATIO: usize = 4;

/// A variable size contiguous collection, backed by a fixed-capacity buffer that is replaced when
/// it runs out of room.
///
/// The capacity doubles whenever an element is added to a full array. After a removal, if the
/// array is less than a quarter full and has a capacity above [`MIN_CAP`], the capacity is halved
/// (but never below [`MIN_CAP`]). Removing an element shifts all following elements left, so the
/// order of the remaining elements is kept.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` / `append` | `O(1)`*, `O(n)` |
/// | `remove_at` | `O(n-i)`**, `O(n)` |
/// | `remove` / `remove_by_key` | `O(n)` |
///
/// \* If the DynamicArray doesn't have enough capacity for the new element, `push` will take
/// `O(n)`.
///
/// \** If the removal causes the DynamicArray to shrink, `remove_at` will take `O(n)`.
///
/// # Examples
/// ```
/// # use keyed_collections::collections::contiguous::DynamicArray;
/// let mut arr: DynamicArray<u32> = (0..11).collect();
/// assert_eq!(arr.capacity(), 20);
/// assert!(arr.remove(&5));
/// assert_eq!(arr.get(5), Some(&6));
/// ```
pub struct DynamicArray<T> {
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) size: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new, empty DynamicArray with a capacity of [`MIN_CAP`].
    pub fn new() -> DynamicArray<T> {
        DynamicArray::with_capacity(MIN_CAP)
    }

    /// Creates a new, empty DynamicArray with exactly the provided capacity.
    ///
    /// # Examples
    /// ```
    /// # use keyed_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::with_capacity(2);
    /// arr.push('a');
    /// arr.push('b');
    /// assert_eq!(arr.capacity(), 2);
    /// arr.push('c');
    /// assert_eq!(arr.capacity(), 4);
    /// ```
    pub fn with_capacity(capacity: usize) -> DynamicArray<T> {
        DynamicArray {
            buf: Box::new_uninit_slice(capacity),
            size: 0,
        }
    }

    /// Returns the number of elements in the DynamicArray.
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of elements the DynamicArray can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns a reference to the element at the provided `index`, or [`None`] if it is out of
    /// bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.deref().get(index)
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] if it is out
    /// of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.size,
        })
    }

    /// Push the provided value onto the end of the DynamicArray, growing it if required.
    ///
    /// # Panics
    /// Panics if the new capacity overflows [`usize`].
    pub fn push(&mut self, value: T) {
        if self.size == self.capacity() {
            self.grow();
        }

        self.buf[self.size] = MaybeUninit::new(value);
        self.size += 1;
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use keyed_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = "Hello world!".chars().collect();
    /// assert_eq!(arr.remove_at(1), 'e');
    /// assert_eq!(arr.remove_at(4), ' ');
    /// assert_eq!(arr, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> T {
        self.check_index(index);

        let mut next = MaybeUninit::uninit();
        // Iterate backwards to index.
        for i in (index..self.size).rev() {
            next = mem::replace(&mut self.buf[i], next);
        }

        self.size -= 1;
        // SAFETY: next contains the value which was previously located at index, which we've
        // already checked to be less than size and therefore initialized.
        let value = unsafe { next.assume_init() };

        self.shrink_if_sparse();
        value
    }

    /// Removes and returns the first element for which `predicate` returns true.
    pub fn remove_first_where<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> Option<T> {
        let index = self.iter().position(predicate)?;
        Some(self.remove_at(index))
    }

    /// Moves the initialized elements into a new buffer with exactly `new_cap` slots.
    fn resize(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.size);

        let mut buf = Box::new_uninit_slice(new_cap);
        for (new, old) in buf.iter_mut().zip(&mut self.buf[..self.size]) {
            *new = mem::replace(old, MaybeUninit::uninit());
        }

        // The old buffer only holds uninitialized slots now, dropping it just deallocates.
        self.buf = buf;
    }

    /// Doubles the capacity, so that the DynamicArray can take at least one more element. An array
    /// without any capacity jumps straight to [`MIN_CAP`].
    fn grow(&mut self) {
        let doubled = self
            .capacity()
            .checked_mul(GROWTH_FACTOR)
            .ok_or(CapacityOverflow)
            .throw();

        self.resize(if doubled == 0 { MIN_CAP } else { doubled });
    }

    fn shrink_if_sparse(&mut self) {
        let cap = self.capacity();
        if self.size < cap / SHRINK_RATIO && cap > MIN_CAP {
            self.resize(cmp::max(cap / GROWTH_FACTOR, MIN_CAP));
        }
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    fn check_index(&self, index: usize) {
        if index >= self.size {
            Err(IndexOutOfBounds {
                index,
                len: self.size,
            })
            .throw()
        }
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Removes the first element equal to `item`, shifting later elements left. Returns true if an
    /// element was removed.
    pub fn remove(&mut self, item: &T) -> bool {
        self.remove_first_where(|element| element == item).is_some()
    }
}

impl<T> Export for DynamicArray<T> {
    type Item = T;

    fn export_all(&self) -> Vec<&T> {
        self.iter().collect()
    }

    fn size(&self) -> usize {
        self.size
    }
}

impl<T> Container for DynamicArray<T> {
    fn append(&mut self, item: T) {
        self.push(item);
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

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = DynamicArray::new();
        arr.extend(iter);
        arr
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        for slot in &mut self.buf[..self.size] {
            // SAFETY: All values less than size are initialized and safe to drop.
            unsafe { slot.assume_init_drop() };
        }

        // Implicitly drop self.buf, which only deallocates.
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first size values are initialized, and MaybeUninit<T> has the same layout as
        // T. The slice borrows self, so the buffer can't be replaced while it is alive.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast(), self.size) }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the slice uniquely borrowing self.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast(), self.size) }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut arr = Self::with_capacity(self.capacity());
        arr.extend(self.iter().cloned());
        arr
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &self.deref())
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T: Debug> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
