//! # Component Queries
//!
//! A query is a tuple of component kinds fetched together: `(Position,)`,
//! `(Position, Velocity)`, and so on up to eight kinds. The query knows the
//! union of its kinds' bitmasks (for status checks) and how to borrow each
//! kind's column slot for one entity id.
//!
//! Mutable fetches hand out one `&mut` per kind. The borrows are sound
//! because they target disjoint columns, which in turn holds because the
//! kinds are pairwise distinct - checked before every mutable fetch by
//! comparing the mask popcount against the query arity. This is the one
//! place the crate needs `unsafe`.

// SAFETY: This module requires unsafe to split borrows across disjoint
// columns. All unsafe blocks are documented and gated on the distinctness
// check above.
#![allow(unsafe_code)]

use crate::ecs::bitset::Mask;
use crate::ecs::registry::{Kind, Registry};

/// A set of component kinds fetched together from a world's columns.
///
/// Implemented for tuples of one through eight [`Kind`]s. The bundle types
/// mirror the tuple: `(A, B)` fetches as `(&A, &B)` or `(&mut A, &mut B)`.
pub trait Query<R: Registry> {
    /// Shared reference bundle.
    type Ref<'w>;

    /// Mutable reference bundle.
    type Mut<'w>;

    /// Number of kinds the query names, duplicates included.
    const ARITY: u32;

    /// Union of the kinds' bitmasks.
    #[must_use]
    fn mask() -> R::Mask;

    /// Borrows each kind's slot for `id`.
    ///
    /// Callers check the status bits first; `id` must be within capacity.
    fn fetch(columns: &R::Columns, id: usize) -> Self::Ref<'_>;

    /// Mutably borrows each kind's slot for `id`.
    ///
    /// # Safety
    ///
    /// `columns` must be exclusively borrowed for `'w`, `id` must be within
    /// every column's length, and the query's kinds must be pairwise
    /// distinct so the returned borrows target disjoint columns.
    unsafe fn fetch_mut<'w>(columns: *mut R::Columns, id: usize) -> Self::Mut<'w>;
}

/// Checked mutable fetch: panics on duplicate kinds, then splits the borrow.
///
/// # Panics
///
/// Panics if `Q` names the same kind more than once.
pub(crate) fn fetch_mut_distinct<'w, R: Registry, Q: Query<R>>(
    columns: &'w mut R::Columns,
    id: usize,
) -> Q::Mut<'w> {
    assert!(
        Q::mask().count_ones() == Q::ARITY,
        "query names the same component kind more than once"
    );
    // SAFETY: `columns` is exclusively borrowed for 'w, and the popcount
    // check above guarantees the kinds are pairwise distinct, so every
    // borrow below lands in a different column. Callers keep `id` within
    // capacity per the world's id contract.
    unsafe { Q::fetch_mut(columns, id) }
}

macro_rules! impl_query_tuple {
    ($arity:literal; $($kind:ident),+) => {
        impl<R: Registry, $($kind: Kind<R>),+> Query<R> for ($($kind,)+) {
            type Ref<'w> = ($(&'w $kind,)+);
            type Mut<'w> = ($(&'w mut $kind,)+);

            const ARITY: u32 = $arity;

            fn mask() -> R::Mask {
                <R::Mask as Mask>::ZERO $(| <$kind as Kind<R>>::mask())+
            }

            fn fetch(columns: &R::Columns, id: usize) -> Self::Ref<'_> {
                ($(<$kind as Kind<R>>::column(columns).slot(id),)+)
            }

            unsafe fn fetch_mut<'w>(columns: *mut R::Columns, id: usize) -> Self::Mut<'w> {
                // SAFETY: per the trait contract the kinds are pairwise
                // distinct, so each pointer below addresses a different
                // column field and the resulting `&mut`s never alias.
                unsafe {
                    ($(
                        &mut *(&mut *<$kind as Kind<R>>::column_ptr(columns))
                            .as_mut_ptr()
                            .add(id),
                    )+)
                }
            }
        }
    };
}

impl_query_tuple!(1; A);
impl_query_tuple!(2; A, B);
impl_query_tuple!(3; A, B, C);
impl_query_tuple!(4; A, B, C, D);
impl_query_tuple!(5; A, B, C, D, E);
impl_query_tuple!(6; A, B, C, D, E, F);
impl_query_tuple!(7; A, B, C, D, E, F, G);
impl_query_tuple!(8; A, B, C, D, E, F, G, H);
