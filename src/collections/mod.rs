//! Generic collection types sharing the [`Container`](traits::Container) capability set.
//!
//! Every collection here can append an element, find or remove an element by key, export all of
//! its elements as an ordered sequence of references and report its size. The collections never
//! look at their elements themselves (apart from [`SearchTree`](binary_tree::SearchTree), which
//! is ordered by [`Ord`]), lookups are driven by a key function supplied with each call.
//!
//! Each collection family sits behind a Cargo feature of the same name, so that only the
//! collections in use are compiled.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
pub mod traits;

#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
