//! # Simulation World
//!
//! The fixed component list for the simulation. Declaration order fixes the
//! bit layout, so reordering kinds here is a breaking change for anything
//! that inspects raw status masks.

use crate::components::{Collider, Contact, Player, Position, Rect, Speed, Velocity};

strata_core::registry! {
    /// Component kinds tracked by the simulation.
    pub registry Sim with columns SimColumns {
        positions: Position,
        velocities: Velocity,
        rects: Rect,
        speeds: Speed,
        colliders: Collider,
        contacts: Contact,
        players: Player,
    }
}

/// World type driven by every system in this crate.
pub type SimWorld = strata_core::World<Sim>;
