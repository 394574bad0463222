//! # STRATA Core Engine
//!
//! In-memory entity/component storage: a generic database associating
//! integer entity ids with a statically declared set of component kinds.
//!
//! ## Architecture Rules
//!
//! 1. **Status bits are the source of truth** - a column slot means nothing
//!    while its kind bit is clear, and nothing clears values on removal
//! 2. **Data-oriented design** - one dense column per kind, indexed by id
//! 3. **Allocations only on capacity growth** - which doubles, starting at 8
//! 4. **Contracts over checks** - lowest-free-id reuse and the bit layout
//!    are API; out-of-range ids are the caller's bug, not a handled error
//!
//! ## Example
//!
//! ```rust,ignore
//! use strata_core::{registry, World};
//!
//! registry! {
//!     /// Kinds tracked by the game world.
//!     pub registry Game with columns GameColumns {
//!         position: Position,
//!         velocity: Velocity,
//!     }
//! }
//!
//! let mut world = World::<Game>::new();
//! let id = world.new_entity();
//! world.add(id, Position { x: 0.0, y: 0.0 });
//! for id in world.view::<(Position, Velocity)>() {
//!     // ...
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod ecs;
pub mod memory;

pub use ecs::{
    words_for, BitSet, Column, Columns, Component, ComponentStatus, Entities, Entity, Kind, Mask,
    Query, Registry, View, World, DEFAULT_CAPACITY, WORD_BITS,
};
pub use memory::SlotColumn;
