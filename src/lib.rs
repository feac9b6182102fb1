//! Generic containers and key-driven sorting and searching.
//!
//! # Purpose
//! This crate is a small library of collections (singly and doubly linked lists, a growable array,
//! a plain binary tree and an unbalanced binary search tree) and the algorithms to go with them
//! (quicksort, merge sort, binary and linear search, the most-of search and tree searches). It was
//! written to make the design decisions of each structure explicit: who owns a node, when an
//! array resizes, what order a tree keeps.
//!
//! # Method
//! The collections never inspect their elements. Lookups, removals, sorts and searches take a key
//! function which maps an element to the value it is compared by. For record-like element types,
//! [`record::Record`] gives each attribute a typed field, so attributes can also be selected by
//! field or, checked once up front, by name.
//!
//! Every collection implements [`Export`](collections::traits::Export), which produces all elements
//! as an ordered sequence of references, and [`Container`](collections::traits::Container), the
//! shared append / lookup / remove operations. The algorithms accept any [`Source`](algorithms::Source):
//! a slice, a vector of references or a reference to any collection.
//!
//! # Error Handling
//! Absent elements are never errors, lookups return [`Option`]s and removals return whether
//! anything was removed. Errors are kept for programming mistakes: indexing out of bounds panics
//! with an [`IndexOutOfBounds`](collections::IndexOutOfBounds) message (with non-panicking `get`
//! and `try_get` alternatives), and naming an attribute a record doesn't have produces an
//! [`UnknownField`](record::UnknownField).
//!
//! # Features
//! Each collection family can be compiled on its own: `linked`, `contiguous` and `binary-tree`
//! (or `collections-all` for all three), plus `algorithms`. All of them are enabled by default.
//!
//! # Recursion
//! Nothing here recurses once per element. Traversals, drops and tree inserts use explicit
//! stacks or queues, quicksort keeps its pending segments on a stack and merge sort only recurses
//! once per halving.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "algorithms")]
pub mod algorithms;
pub mod collections;
pub mod record;

pub(crate) mod util;
