//! # Component Registry
//!
//! A world's component kinds are fixed at compile time. The [`registry!`]
//! macro builds the ordered registry for one world type: a marker type
//! implementing [`Registry`], a struct-of-arrays column set, and one
//! [`Kind`] impl per declared component carrying its bit index.
//!
//! ## Bit layout
//!
//! Bit indices are assigned by declaration order: a kind's index equals the
//! number of kinds declared *after* it, so the first declared kind holds the
//! highest kind bit and the last declared kind holds bit 0. The reserved
//! liveness bit sits above every kind at index [`Registry::KINDS`]. This
//! layout is a hard contract: [`ComponentStatus::index`] and
//! [`ComponentStatus::position`] are deterministic functions of it.
//!
//! [`ComponentStatus::index`]: crate::ecs::ComponentStatus::index
//! [`ComponentStatus::position`]: crate::ecs::ComponentStatus::position

use crate::ecs::bitset::Mask;
use crate::ecs::component::Component;
use crate::ecs::storage::Column;

/// Compile-time description of a world's declared component list.
///
/// Implemented by the marker type a [`registry!`] block generates; never
/// implemented by hand.
pub trait Registry: Sized + 'static {
    /// Status bitfield wide enough for every declared kind plus the liveness
    /// bit, selected once at compile time.
    type Mask: Mask;

    /// Struct-of-arrays storage: one dense [`Column`] per declared kind.
    type Columns: Columns;

    /// Number of declared component kinds.
    const KINDS: usize;

    /// Mask with only the liveness bit set (bit index [`Registry::KINDS`]).
    #[must_use]
    fn exists_mask() -> Self::Mask {
        <Self::Mask as Mask>::bit(Self::KINDS as u32)
    }
}

/// The column set owned by a [`World`](crate::World).
///
/// Every column is kept at the same length, the world's current capacity;
/// the world drives growth and teardown through this trait.
pub trait Columns: 'static {
    /// Builds the set with every column holding `capacity` default slots.
    #[must_use]
    fn with_capacity(capacity: usize) -> Self;

    /// Extends every column to `new_capacity` slots.
    fn grow(&mut self, new_capacity: usize);

    /// Drops every slot of every column.
    fn clear(&mut self);
}

/// A component kind declared in registry `R`.
///
/// Generated by [`registry!`]; a type declared twice would produce two
/// conflicting impls, so duplicate kinds are rejected at compile time.
pub trait Kind<R: Registry>: Component {
    /// Zero-based bit index: the number of kinds declared after this one.
    const BIT: u32;

    /// Bitmask with only this kind's bit set.
    #[must_use]
    fn mask() -> R::Mask {
        <R::Mask as Mask>::bit(Self::BIT)
    }

    /// This kind's column within the registry's column set.
    fn column(columns: &R::Columns) -> &Column<Self>;

    /// Mutable access to this kind's column.
    fn column_mut(columns: &mut R::Columns) -> &mut Column<Self>;

    /// Raw pointer to this kind's column, for disjoint multi-column borrows.
    ///
    /// # Safety
    ///
    /// `columns` must point to a live, exclusively borrowed `R::Columns`.
    #[allow(unsafe_code)]
    unsafe fn column_ptr(columns: *mut R::Columns) -> *mut Column<Self>;
}

/// Declares a component registry: the fixed, ordered list of kinds a world
/// tracks.
///
/// Expands to a marker type implementing [`Registry`], a column-set struct
/// implementing [`Columns`], and one [`Kind`] impl per declared component.
/// Bit indices follow declaration order (first declared, highest bit). The
/// status mask width is selected here, at compile time, as the smallest
/// number of 64-bit words holding every kind plus the liveness bit.
///
/// ```
/// #[derive(Clone, Copy, Debug, Default, PartialEq)]
/// struct Pos {
///     x: f32,
///     y: f32,
/// }
///
/// #[derive(Clone, Copy, Debug, Default, PartialEq)]
/// struct Vel {
///     x: f32,
///     y: f32,
/// }
///
/// strata_core::registry! {
///     /// Kinds tracked by the demo world.
///     pub registry Demo with columns DemoColumns {
///         position: Pos,
///         velocity: Vel,
///     }
/// }
///
/// let mut world = strata_core::World::<Demo>::new();
/// let id = world.new_entity();
/// world.add(id, Pos { x: 1.0, y: 2.0 });
/// assert!(world.has::<(Pos,)>(id));
/// assert_eq!(world.get::<(Pos,)>(id), Some((&Pos { x: 1.0, y: 2.0 },)));
/// assert!(world.get::<(Vel,)>(id).is_none());
/// ```
#[macro_export]
macro_rules! registry {
    (
        $(#[$meta:meta])*
        $vis:vis registry $name:ident with columns $columns:ident {
            $($field:ident : $kind:ty),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {}

        #[doc = concat!("Struct-of-arrays column set for [`", stringify!($name), "`].")]
        $vis struct $columns {
            $(
                #[doc = concat!("Dense column for `", stringify!($kind), "`.")]
                $field: $crate::Column<$kind>,
            )+
        }

        impl $crate::Columns for $columns {
            fn with_capacity(capacity: usize) -> Self {
                Self {
                    $($field: $crate::Column::with_capacity(capacity),)+
                }
            }

            fn grow(&mut self, new_capacity: usize) {
                $(self.$field.grow(new_capacity);)+
            }

            fn clear(&mut self) {
                $(self.$field.clear();)+
            }
        }

        impl $crate::Registry for $name {
            type Mask = $crate::BitSet<{
                $crate::words_for($crate::count_kinds!($($kind),+) + 1)
            }>;
            type Columns = $columns;
            const KINDS: usize = $crate::count_kinds!($($kind),+);
        }

        $crate::registry!(@kinds $name, $columns, $($field : $kind),+);
    };

    (@kinds $name:ident, $columns:ident) => {};

    (@kinds $name:ident, $columns:ident,
        $field:ident : $kind:ty $(, $rfield:ident : $rkind:ty)*
    ) => {
        impl $crate::Kind<$name> for $kind {
            const BIT: u32 = $crate::count_kinds!($($rkind),*) as u32;

            fn column(columns: &$columns) -> &$crate::Column<Self> {
                &columns.$field
            }

            fn column_mut(columns: &mut $columns) -> &mut $crate::Column<Self> {
                &mut columns.$field
            }

            #[allow(unsafe_code)]
            unsafe fn column_ptr(columns: *mut $columns) -> *mut $crate::Column<Self> {
                ::core::ptr::addr_of_mut!((*columns).$field)
            }
        }

        $crate::registry!(@kinds $name, $columns $(, $rfield : $rkind)*);
    };
}

/// Counts the type arguments it is given; used by [`registry!`] to size
/// bitfields and assign bit indices.
#[doc(hidden)]
#[macro_export]
macro_rules! count_kinds {
    (@unit $kind:ty) => {
        ()
    };
    () => {
        0usize
    };
    ($($kind:ty),+) => {
        <[()]>::len(&[$($crate::count_kinds!(@unit $kind)),+])
    };
}
