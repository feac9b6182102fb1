use crate::record::{Record, UnknownField, Value, field_key};

/// A collection that can produce all of its elements as an ordered sequence.
pub trait Export {
    type Item;

    /// Returns references to all elements in the collection's canonical order: list order for
    /// linked lists, index order for arrays and in-order for trees.
    ///
    /// The sequence is a snapshot, it borrows the collection, so the collection can't be modified
    /// while the sequence is alive.
    fn export_all(&self) -> Vec<&Self::Item>;

    /// Returns the number of elements in the collection, without counting them.
    fn size(&self) -> usize;

    /// Returns true if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// The operations shared by all collections: append, lookup and removal by key.
///
/// Lookup and removal are driven by a key function, rather than by anything the element type
/// decides for itself. For element types implementing [`Record`], the `*_by_field` and
/// `*_by_attribute` variants select the key by field or by field name.
pub trait Container: Export {
    /// Adds an element to the collection. For sequences, the element is added at the end.
    fn append(&mut self, item: Self::Item);

    /// Removes the first element (in export order) for which `key` returns `value`. Returns true
    /// if an element was removed.
    fn remove_by_key<K, F>(&mut self, key: F, value: &K) -> bool
    where
        K: PartialEq,
        F: Fn(&Self::Item) -> K;

    /// Returns the first element (in export order) for which `key` returns `value`.
    fn get_by_key<K, F>(&self, key: F, value: &K) -> Option<&Self::Item>
    where
        K: PartialEq,
        F: Fn(&Self::Item) -> K,
    {
        self.export_all().into_iter().find(|item| key(*item) == *value)
    }

    /// Returns the first element whose `field` equals `value`.
    fn get_by_field(
        &self,
        field: <Self::Item as Record>::Field,
        value: &Value,
    ) -> Option<&Self::Item>
    where
        Self::Item: Record,
    {
        self.get_by_key(field_key::<Self::Item>(field), value)
    }

    /// Removes the first element whose `field` equals `value`. Returns true if an element was
    /// removed.
    fn remove_by_field(&mut self, field: <Self::Item as Record>::Field, value: &Value) -> bool
    where
        Self::Item: Record,
    {
        self.remove_by_key(field_key::<Self::Item>(field), value)
    }

    /// Returns the first element whose attribute called `name` equals `value`.
    ///
    /// # Errors
    /// Returns [`UnknownField`] if the element type has no attribute called `name`, even if the
    /// collection is empty.
    fn get_by_attribute(
        &self,
        name: &str,
        value: &Value,
    ) -> Result<Option<&Self::Item>, UnknownField>
    where
        Self::Item: Record,
    {
        Ok(self.get_by_field(name.parse()?, value))
    }

    /// Removes the first element whose attribute called `name` equals `value`. Returns true if an
    /// element was removed.
    ///
    /// # Errors
    /// Returns [`UnknownField`] if the element type has no attribute called `name`, even if the
    /// collection is empty.
    fn remove_by_attribute(&mut self, name: &str, value: &Value) -> Result<bool, UnknownField>
    where
        Self::Item: Record,
    {
        Ok(self.remove_by_field(name.parse()?, value))
    }
}
