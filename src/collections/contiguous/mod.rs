//! Contiguous collection types. Currently this is just [`DynamicArray`], a growable array with
//! a fixed growth and shrink policy.

pub mod dynamic_array;

#[doc(inline)]
pub use dynamic_array::DynamicArray;
