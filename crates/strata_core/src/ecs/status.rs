//! # Component Status
//!
//! One status entry per entity slot: a bitfield recording which kinds
//! currently hold a valid value, plus the reserved liveness bit above every
//! kind bit. The entry is the single source of truth for component presence;
//! column slots themselves are meaningless while their bit is clear.

use core::fmt;

use crate::ecs::bitset::Mask;
use crate::ecs::registry::{Kind, Registry};

/// Per-entity bitfield tracking which component kinds are valid.
///
/// The width and bit layout come from the registry `R` and are fixed once
/// per world type; see the [`registry!`](crate::registry) docs for the
/// layout contract.
pub struct ComponentStatus<R: Registry> {
    bits: R::Mask,
}

impl<R: Registry> ComponentStatus<R> {
    /// Marks kind `T`'s column value as valid.
    pub fn activate<T: Kind<R>>(&mut self) {
        self.bits |= T::mask();
    }

    /// Marks kind `T`'s column value as invalid. The value itself is not
    /// touched.
    pub fn deactivate<T: Kind<R>>(&mut self) {
        self.bits &= !T::mask();
    }

    /// True when kind `T`'s bit is set. No side effects.
    #[must_use]
    pub fn is_active<T: Kind<R>>(&self) -> bool {
        self.bits.intersects(T::mask())
    }

    /// The raw bitmask value assigned to kind `T`.
    #[must_use]
    pub fn position<T: Kind<R>>() -> R::Mask {
        T::mask()
    }

    /// Zero-based bit index of kind `T`, read back out of the stored
    /// bitfield as the lowest set bit of `bitfield AND T::mask()`.
    ///
    /// Meaningful only while `T` is active; when it is not, the masked
    /// bitfield is zero and this returns the storage width instead of a bit
    /// index.
    #[must_use]
    pub fn index<T: Kind<R>>(&self) -> u32 {
        (self.bits & T::mask()).trailing_zeros()
    }

    /// Number of declared component kinds.
    #[must_use]
    pub const fn size() -> usize {
        R::KINDS
    }

    /// Bit width of the underlying storage.
    #[must_use]
    pub const fn capacity() -> usize {
        <R::Mask as Mask>::BITS as usize
    }

    /// Marks the slot as holding a live entity.
    pub fn set_exists(&mut self) {
        self.bits |= R::exists_mask();
    }

    /// Marks the slot as free. Kind bits are left as they were.
    pub fn clear_exists(&mut self) {
        self.bits &= !R::exists_mask();
    }

    /// True when the slot holds a live entity.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.bits.intersects(R::exists_mask())
    }

    /// True when every bit of `mask` is set.
    #[must_use]
    pub fn satisfies(&self, mask: R::Mask) -> bool {
        self.bits.contains(mask)
    }

    /// Clears every bit, liveness included.
    pub fn clear_all(&mut self) {
        self.bits = <R::Mask as Mask>::ZERO;
    }

    /// The raw bitfield value.
    #[must_use]
    pub fn raw(&self) -> R::Mask {
        self.bits
    }
}

impl<R: Registry> Default for ComponentStatus<R> {
    fn default() -> Self {
        Self {
            bits: <R::Mask as Mask>::ZERO,
        }
    }
}

impl<R: Registry> Clone for ComponentStatus<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Registry> Copy for ComponentStatus<R> {}

impl<R: Registry> fmt::Debug for ComponentStatus<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentStatus").field(&self.bits).finish()
    }
}
