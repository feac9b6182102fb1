//! Sorting and searching algorithms driven by key functions.
//!
//! None of the algorithms compare elements directly. Each takes a key function mapping an element
//! to the value it is compared by, so the same elements can be sorted by age, then by name, without
//! implementing anything on the element type. Key functions receive references that live as long
//! as the input, so a key may borrow from its element (`|customer| customer.name.as_str()`).
//!
//! Inputs are anything implementing [`Source`]: slices, arrays, vectors of references and
//! references to any of the collections in this crate. Every algorithm returns references into
//! the input instead of moving or cloning elements.
//!
//! # Examples
//! ```
//! # use keyed_collections::algorithms::sort::merge_sort;
//! # use keyed_collections::algorithms::search::binary_search_by_key;
//! # use keyed_collections::collections::linked::DoublyLinkedList;
//! let rides: DoublyLinkedList<(&str, u32)> =
//!     [("Jane", 4), ("John", 2), ("Bob", 1), ("Alice", 2)].into_iter().collect();
//!
//! let by_count = merge_sort(&rides, |(_, count)| *count);
//! assert_eq!(by_count, [&("Bob", 1), &("John", 2), &("Alice", 2), &("Jane", 4)]);
//! assert_eq!(binary_search_by_key(by_count, &4, |(_, count)| *count), Some(3));
//! ```

mod source;
pub mod search;
pub mod sort;
#[cfg(feature = "binary-tree")]
pub mod tree_search;
mod tests;

pub use source::*;
