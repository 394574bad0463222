//! # Column Storage
//!
//! One dense array per component kind, indexed by entity id and kept at the
//! world's current capacity. The status table decides validity; a column
//! slot whose bit is clear still holds its last value. Nothing here clears
//! slots on removal - stale data may remain and must not be mistaken for a
//! zero/default guarantee.

use crate::ecs::component::Component;

/// Dense storage for a single component kind.
///
/// Access is O(1) by entity id and iteration is cache-friendly. Ids at or
/// beyond the current capacity are a caller contract violation; indexing
/// panics rather than reporting an error.
#[derive(Clone, Debug, Default)]
pub struct Column<C: Component> {
    data: Vec<C>,
}

impl<C: Component> Column<C> {
    /// Creates a column with `capacity` default-initialized slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![C::default(); capacity],
        }
    }

    /// Extends the column to `new_capacity` slots, default-filling the new
    /// ones. Existing values are preserved.
    pub fn grow(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.data.len(), "columns never shrink");
        self.data.resize(new_capacity, C::default());
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the column holds no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrows the slot for `id`.
    #[must_use]
    pub fn slot(&self, id: usize) -> &C {
        &self.data[id]
    }

    /// Mutably borrows the slot for `id`.
    pub fn slot_mut(&mut self, id: usize) -> &mut C {
        &mut self.data[id]
    }

    /// Overwrites the slot for `id`, dropping the previous value.
    pub fn put(&mut self, id: usize, value: C) {
        self.data[id] = value;
    }

    /// The whole column as a slice, for batch processing.
    #[must_use]
    pub fn as_slice(&self) -> &[C] {
        &self.data
    }

    /// The whole column as a mutable slice, for batch processing.
    pub fn as_mut_slice(&mut self) -> &mut [C] {
        &mut self.data
    }

    /// Drops every slot. Used by world teardown.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Raw pointer to the first slot; the query machinery uses it to split
    /// borrows across disjoint columns.
    pub(crate) fn as_mut_ptr(&mut self) -> *mut C {
        self.data.as_mut_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_capacity_default_initializes() {
        let column: Column<u32> = Column::with_capacity(4);
        assert_eq!(column.len(), 4);
        assert_eq!(column.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn put_overwrites_in_place() {
        let mut column: Column<u32> = Column::with_capacity(3);
        column.put(1, 42);
        assert_eq!(*column.slot(1), 42);
        column.put(1, 7);
        assert_eq!(*column.slot(1), 7);
    }

    #[test]
    fn grow_preserves_existing_values() {
        let mut column: Column<u32> = Column::with_capacity(2);
        column.put(0, 11);
        column.put(1, 22);
        column.grow(5);
        assert_eq!(column.len(), 5);
        assert_eq!(column.as_slice(), &[11, 22, 0, 0, 0]);
    }

    #[test]
    fn clear_drops_every_slot() {
        let mut column: Column<String> = Column::with_capacity(2);
        column.put(0, "kept".to_owned());
        column.clear();
        assert!(column.is_empty());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn out_of_range_id_panics() {
        let column: Column<u32> = Column::with_capacity(2);
        let _ = column.slot(2);
    }
}
