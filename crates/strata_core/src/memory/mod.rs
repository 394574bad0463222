//! # Alternative Storage
//!
//! Storage strategies evaluated alongside the dense column set. Nothing here
//! is wired into [`World`](crate::World); the pieces stand alone.

mod slots;

pub use slots::SlotColumn;
