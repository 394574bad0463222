//! # Component Kinds
//!
//! Components are plain data containers with no behavior. A kind must be
//! cloneable (columns are filled and grown by copying a default value) and
//! carry a default so fresh slots have something to hold. Unlike raw-byte
//! storages there is no plain-old-data requirement: columns are typed arrays,
//! so kinds may own heap data as long as they can produce a default.

/// Bound alias for types usable as component kinds.
///
/// Blanket-implemented; declaring a type in a
/// [`registry!`](crate::registry) block is what actually registers it with a
/// world and assigns its bit index.
pub trait Component: Clone + Default + Send + Sync + 'static {}

impl<T: Clone + Default + Send + Sync + 'static> Component for T {}
