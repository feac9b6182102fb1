use derive_more::{Display, Error};

/// Positional access past the end of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A collection was asked to grow past `usize::MAX` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// A field name that the record type doesn't declare. This is a programming error on the caller's
/// side, so it is reported as soon as the name is parsed rather than being treated as "not found".
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown field `{name}` for record type {record}!")]
pub struct UnknownField {
    pub name: String,
    pub record: &'static str,
}
