//! # World
//!
//! The world owns the status table and the per-kind columns and orchestrates
//! everything on top: capacity growth, entity id allocation and reuse,
//! component add/remove/has/get, and filtered iteration.
//!
//! ## Id contract
//!
//! An entity is nothing but a `usize` index, valid in `[0, capacity)`.
//! [`World::new_entity`] always returns the lowest currently-unused id, and
//! passing an out-of-range id to any operation is a contract violation (it
//! panics on the status-table lookup rather than reporting an error).
//!
//! ## Growth and reference invalidation
//!
//! Capacity starts at 8 and doubles whenever every slot is taken, which
//! reallocates every column and the status table. Any bundle obtained from
//! [`World::get`] borrows the world, so the borrow checker already rules out
//! holding it across a growth-triggering call - the aliasing hazard of the
//! design is enforced mechanically rather than by convention.

use core::marker::PhantomData;

use crate::ecs::query::{self, Query};
use crate::ecs::registry::{Columns, Kind, Registry};
use crate::ecs::status::ComponentStatus;

/// Identifier of an entity slot: a plain index into the status table and
/// every column. There is no materialized entity object and no generation
/// counter; liveness is a bit in the slot's status entry.
pub type Entity = usize;

/// Slot capacity of a freshly built world, and the re-seed point after
/// [`World::clear`]. Growth doubles from here: 8, 16, 32, ...
pub const DEFAULT_CAPACITY: usize = 8;

/// Entity/component storage for the fixed kind list declared by `R`.
///
/// Single-threaded and synchronous: every operation runs to completion
/// within its call and concurrent mutation is unsupported.
pub struct World<R: Registry> {
    status: Vec<ComponentStatus<R>>,
    columns: R::Columns,
    capacity: usize,
    live: usize,
}

impl<R: Registry> World<R> {
    /// Creates a world with [`DEFAULT_CAPACITY`] slots, every column and the
    /// status table sized and default-initialized to it.
    #[must_use]
    pub fn new() -> Self {
        let mut world = Self {
            status: Vec::new(),
            columns: <R::Columns as Columns>::with_capacity(0),
            capacity: 0,
            live: 0,
        };
        world.grow(DEFAULT_CAPACITY);
        world
    }

    /// Number of live entities.
    #[must_use]
    pub fn size(&self) -> usize {
        self.live
    }

    /// Number of allocated entity slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True when slot `id` holds a live entity.
    #[must_use]
    pub fn exists(&self, id: Entity) -> bool {
        self.status[id].exists()
    }

    /// True when every kind in `Q` is active for `id`.
    ///
    /// Liveness is not consulted; pair with [`World::exists`] when slot
    /// reuse is in play.
    #[must_use]
    pub fn has<Q: Query<R>>(&self, id: Entity) -> bool {
        self.status[id].satisfies(Q::mask())
    }

    /// Borrows the requested kinds' slots for `id`, or `None` when any of
    /// them is inactive.
    #[must_use]
    pub fn get<Q: Query<R>>(&self, id: Entity) -> Option<Q::Ref<'_>> {
        if self.status[id].satisfies(Q::mask()) {
            Some(Q::fetch(&self.columns, id))
        } else {
            None
        }
    }

    /// Mutable variant of [`World::get`]: one `&mut` per requested kind.
    ///
    /// # Panics
    ///
    /// Panics if `Q` names the same kind more than once - the borrows would
    /// alias.
    pub fn get_mut<Q: Query<R>>(&mut self, id: Entity) -> Option<Q::Mut<'_>> {
        if self.status[id].satisfies(Q::mask()) {
            Some(query::fetch_mut_distinct::<R, Q>(&mut self.columns, id))
        } else {
            None
        }
    }

    /// Overwrites kind `C`'s slot for `id` with `value` and sets its bit.
    ///
    /// Works whether or not the slot is live; creating the entity first is
    /// the caller's contract.
    pub fn add<C: Kind<R>>(&mut self, id: Entity, value: C) {
        C::column_mut(&mut self.columns).put(id, value);
        self.status[id].activate::<C>();
    }

    /// Clears kind `C`'s bit for `id`. The column slot keeps its last value;
    /// no cleanup runs.
    pub fn remove<C: Kind<R>>(&mut self, id: Entity) {
        self.status[id].deactivate::<C>();
    }

    /// Claims the lowest id whose slot is free and returns it, doubling
    /// capacity first when every slot is taken.
    ///
    /// The returned slot has its liveness bit set and every kind bit
    /// cleared, regardless of what a previous occupant left behind.
    pub fn new_entity(&mut self) -> Entity {
        let id = self.next_free_slot();
        if id == self.capacity {
            let target = if self.capacity == 0 {
                DEFAULT_CAPACITY
            } else {
                self.capacity * 2
            };
            self.grow(target);
        }
        let slot = &mut self.status[id];
        slot.clear_all();
        slot.set_exists();
        self.live += 1;
        tracing::trace!(id, live = self.live, "entity created");
        id
    }

    /// Releases `id`: clears its liveness bit and decrements the live count.
    ///
    /// Kind bits and column values are left as they were; the `new_entity`
    /// that later reclaims the slot clears the bits, not this call. `id`
    /// must denote a live entity.
    pub fn delete_entity(&mut self, id: Entity) {
        self.status[id].clear_exists();
        self.live -= 1;
        tracing::trace!(id, live = self.live, "entity deleted");
    }

    /// Drops every entity and all storage. Capacity falls to zero; the next
    /// [`World::new_entity`] re-grows to [`DEFAULT_CAPACITY`].
    pub fn clear(&mut self) {
        self.live = 0;
        self.capacity = 0;
        self.status.clear();
        self.columns.clear();
        tracing::debug!("world cleared");
    }

    /// Ids of live entities in ascending order.
    ///
    /// Candidates are drawn from `[0, live_count)` and filtered to the
    /// liveness bit, so live entities sitting at ids at or beyond the
    /// current live count (possible after deletions) are not visited.
    #[must_use]
    pub fn iter(&self) -> Entities<'_, R> {
        Entities {
            status: &self.status,
            live: self.live,
            next: 0,
        }
    }

    /// Ids of live entities holding every kind in `Q`, ascending. The
    /// scan's end is the live count, as with [`World::iter`].
    ///
    /// A view borrows the world shared, so mutation during iteration does
    /// not compile; collect the ids first when a pass needs to add or
    /// remove components:
    ///
    /// ```text
    /// let ids: Vec<Entity> = world.view::<(Velocity,)>().collect();
    /// ```
    #[must_use]
    pub fn view<Q: Query<R>>(&self) -> View<'_, R, Q> {
        View {
            status: &self.status,
            mask: R::exists_mask() | Q::mask(),
            live: self.live,
            next: 0,
            _query: PhantomData,
        }
    }

    /// Kind `C`'s whole column as a slice, for batch processing.
    ///
    /// Slots whose status bit is clear hold stale values; consult
    /// [`World::has`] when validity matters.
    #[must_use]
    pub fn column<C: Kind<R>>(&self) -> &[C] {
        C::column(&self.columns).as_slice()
    }

    /// Mutable variant of [`World::column`].
    pub fn column_mut<C: Kind<R>>(&mut self) -> &mut [C] {
        C::column_mut(&mut self.columns).as_mut_slice()
    }

    /// First id with the liveness bit clear, or `capacity` when every slot
    /// is taken. With `n` entities live the lowest free id is at most `n`,
    /// so the scan is bounded by the live count.
    fn next_free_slot(&self) -> Entity {
        let bound = self.capacity.min(self.live + 1);
        (0..bound)
            .find(|&id| !self.status[id].exists())
            .unwrap_or(self.capacity)
    }

    fn grow(&mut self, new_capacity: usize) {
        tracing::debug!(
            old = self.capacity,
            new = new_capacity,
            "growing world capacity"
        );
        self.capacity = new_capacity;
        self.status.resize(new_capacity, ComponentStatus::default());
        self.columns.grow(new_capacity);
    }
}

impl<R: Registry> Default for World<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'w, R: Registry> IntoIterator for &'w World<R> {
    type Item = Entity;
    type IntoIter = Entities<'w, R>;

    fn into_iter(self) -> Entities<'w, R> {
        self.iter()
    }
}

/// Iterator over live entity ids in ascending order.
///
/// See [`World::iter`] for the candidate range.
pub struct Entities<'w, R: Registry> {
    status: &'w [ComponentStatus<R>],
    live: usize,
    next: usize,
}

impl<R: Registry> Iterator for Entities<'_, R> {
    type Item = Entity;

    fn next(&mut self) -> Option<Entity> {
        while self.next < self.live {
            let id = self.next;
            self.next += 1;
            if self.status[id].exists() {
                return Some(id);
            }
        }
        None
    }
}

/// Filtered iteration over live entities holding a specified set of kinds.
///
/// Yields ids in ascending order; its end is the live count. See
/// [`World::view`].
pub struct View<'w, R: Registry, Q: Query<R>> {
    status: &'w [ComponentStatus<R>],
    mask: R::Mask,
    live: usize,
    next: usize,
    _query: PhantomData<fn() -> Q>,
}

impl<R: Registry, Q: Query<R>> Iterator for View<'_, R, Q> {
    type Item = Entity;

    fn next(&mut self) -> Option<Entity> {
        while self.next < self.live {
            let id = self.next;
            self.next += 1;
            if self.status[id].satisfies(self.mask) {
                return Some(id);
            }
        }
        None
    }
}
