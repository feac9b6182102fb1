//! Traits shared by every collection in this crate.
//!
//! [`Export`] is the capability the algorithms rely on: a size and an ordered, restartable export of
//! all elements. [`Container`] adds the mutation and lookup operations on top of it. Each collection
//! implements both independently, there is no inheritance between the collections themselves.

mod container;

pub use container::*;

mod tests;
