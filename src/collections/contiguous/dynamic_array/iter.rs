use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};

use super::DynamicArray;

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // Take the buffer and leave an empty one behind, so dropping self doesn't drop anything.
        let back = mem::replace(&mut self.size, 0);
        IntoIter {
            buf: mem::take(&mut self.buf),
            front: 0,
            back,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owned iterator over the elements of a [`DynamicArray`].
pub struct IntoIter<T> {
    // Slots in front..back are initialized, everything else has been moved out.
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let slot = mem::replace(&mut self.buf[self.front], MaybeUninit::uninit());
        self.front += 1;
        // SAFETY: The slot was in front..back, so it was initialized, and it can't be read again.
        Some(unsafe { slot.assume_init() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        let slot = mem::replace(&mut self.buf[self.back], MaybeUninit::uninit());
        // SAFETY: The slot was in front..back, so it was initialized, and it can't be read again.
        Some(unsafe { slot.assume_init() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.buf[self.front..self.back] {
            // SAFETY: Slots between front and back haven't been yielded and are still initialized.
            unsafe { slot.assume_init_drop() };
        }
    }
}
