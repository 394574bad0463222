//! # Entity Seeding
//!
//! Helpers that assemble the component bundles the simulation uses. Random
//! placement goes through a caller-provided RNG so runs stay deterministic
//! under a fixed seed.

use rand::Rng;
use strata_core::Entity;

use crate::components::{Collider, Player, Position, Rect, Speed, Velocity};
use crate::world::SimWorld;

/// Spawns the player body: collidable, movable, marked.
pub fn spawn_player(world: &mut SimWorld, x: f32, y: f32) -> Entity {
    let id = world.new_entity();
    world.add(id, Position { x, y });
    world.add(id, Rect { width: 40.0, height: 40.0 });
    world.add(id, Collider::default());
    world.add(id, Speed { horizontal: 100.0 });
    world.add(id, Velocity::default());
    world.add(id, Player);
    id
}

/// Spawns a static slab (floor, wall): collidable extent, no motion kinds,
/// so it blocks movers without ever moving itself.
pub fn spawn_slab(world: &mut SimWorld, x: f32, y: f32, width: f32, height: f32) -> Entity {
    let id = world.new_entity();
    world.add(id, Position { x, y });
    world.add(id, Rect { width, height });
    world.add(id, Collider::default());
    id
}

/// Spawns a small falling body with an initial velocity.
pub fn spawn_body(world: &mut SimWorld, x: f32, y: f32, vx: f32, vy: f32) -> Entity {
    let id = world.new_entity();
    world.add(id, Position { x, y });
    world.add(id, Rect { width: 20.0, height: 20.0 });
    world.add(id, Collider::default());
    world.add(id, Speed { horizontal: 100.0 });
    world.add(id, Velocity { x: vx, y: vy });
    id
}

/// Scatters `count` falling bodies across the upper arena.
pub fn scatter_bodies<G: Rng>(world: &mut SimWorld, rng: &mut G, count: u32) -> Vec<Entity> {
    (0..count)
        .map(|_| {
            let x = rng.gen_range(0.0..760.0);
            let y = rng.gen_range(0.0..200.0);
            let vx = rng.gen_range(-1.0..1.0);
            spawn_body(world, x, y, vx, 1.0)
        })
        .collect()
}
