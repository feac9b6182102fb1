//! A module containing [`DynamicArray`] and its owned iterator, [`IntoIter`]. Borrowed iteration
//! uses [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from [`std::slice`].
//!
//! [`DynamicArray`] is also re-exported under the parent module.

mod dynamic_array;
mod iter;
mod tests;

pub use dynamic_array::*;
pub use iter::*;
