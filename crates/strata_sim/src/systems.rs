//! # Simulation Systems
//!
//! Each system is one pass over the world: collect the ids a view yields,
//! then read and write bundles per id. Collecting first is deliberate - a
//! view borrows the world shared, so mutation during iteration would not
//! compile.

use strata_core::Entity;

use crate::components::{Collider, Contact, Position, Rect, Speed, Velocity};
use crate::world::SimWorld;

/// Adds downward acceleration to every velocity.
pub fn apply_gravity(world: &mut SimWorld, gravity: f32, dt: f32) {
    let ids: Vec<Entity> = world.view::<(Velocity,)>().collect();
    for id in ids {
        if let Some((velocity,)) = world.get_mut::<(Velocity,)>(id) {
            velocity.y += gravity * dt;
        }
    }
}

/// Advances positions by velocity scaled with per-body speed.
pub fn integrate(world: &mut SimWorld, dt: f32) {
    let ids: Vec<Entity> = world.view::<(Velocity, Position, Speed)>().collect();
    for id in ids {
        if let Some((velocity, position, speed)) = world.get_mut::<(Velocity, Position, Speed)>(id)
        {
            position.x += velocity.x * speed.horizontal * dt;
            position.y += velocity.y * speed.horizontal * dt;
        }
    }
}

/// Axis-aligned overlap test between two extents.
fn overlaps(a: Position, a_rect: Rect, b: Position, b_rect: Rect) -> bool {
    a.x < b.x + b_rect.width
        && a.x + a_rect.width > b.x
        && a.y < b.y + b_rect.height
        && a.y + a_rect.height > b.y
}

/// Refreshes [`Contact`] on every moving collider.
///
/// Last tick's contacts are dropped first; each mover then records the
/// collider-bearing body it overlaps. One contact per body - with several
/// overlaps in the same tick, the last one found wins.
pub fn detect_contacts(world: &mut SimWorld) {
    let movers: Vec<Entity> = world
        .view::<(Position, Rect, Collider, Velocity)>()
        .collect();
    let bodies: Vec<Entity> = world.view::<(Position, Rect, Collider)>().collect();

    for &id in &movers {
        world.remove::<Contact>(id);
    }

    let mut hits: Vec<(Entity, Entity)> = Vec::new();
    for &id in &movers {
        let Some((&position, &rect)) = world.get::<(Position, Rect)>(id) else {
            continue;
        };
        for &other in &bodies {
            if other == id {
                continue;
            }
            let Some((&other_position, &other_rect)) = world.get::<(Position, Rect)>(other) else {
                continue;
            };
            if overlaps(position, rect, other_position, other_rect) {
                hits.push((id, other));
            }
        }
    }
    for (id, other) in hits {
        world.add(id, Contact { other });
    }
}

/// Swept AABB: earliest time of impact in `[0, 1]` along one tick of `a`'s
/// motion, plus the normal of the face hit.
///
/// Returns `(1.0, 0.0, 0.0)` when the boxes do not collide within the tick;
/// that includes the already-overlapping case, where both axis entries are
/// negative.
#[must_use]
pub fn swept_aabb(
    a: Position,
    a_rect: Rect,
    a_vel: Velocity,
    b: Position,
    b_rect: Rect,
) -> (f32, f32, f32) {
    // Distance to the near and far faces on each axis, signed by direction
    // of travel.
    let (x_inv_entry, x_inv_exit) = if a_vel.x > 0.0 {
        (b.x - (a.x + a_rect.width), (b.x + b_rect.width) - a.x)
    } else {
        ((b.x + b_rect.width) - a.x, b.x - (a.x + a_rect.width))
    };
    let (y_inv_entry, y_inv_exit) = if a_vel.y > 0.0 {
        (b.y - (a.y + a_rect.height), (b.y + b_rect.height) - a.y)
    } else {
        ((b.y + b_rect.height) - a.y, b.y - (a.y + a_rect.height))
    };

    // Entry and exit times per axis; a still axis can never collide or
    // separate on its own.
    let (x_entry, x_exit) = if a_vel.x == 0.0 {
        (f32::NEG_INFINITY, f32::INFINITY)
    } else {
        (x_inv_entry / a_vel.x, x_inv_exit / a_vel.x)
    };
    let (y_entry, y_exit) = if a_vel.y == 0.0 {
        (f32::NEG_INFINITY, f32::INFINITY)
    } else {
        (y_inv_entry / a_vel.y, y_inv_exit / a_vel.y)
    };

    let entry_time = x_entry.max(y_entry);
    let exit_time = x_exit.min(y_exit);

    if entry_time > exit_time
        || (x_entry < 0.0 && y_entry < 0.0)
        || x_entry > 1.0
        || y_entry > 1.0
    {
        return (1.0, 0.0, 0.0);
    }

    if x_entry > y_entry {
        if x_inv_entry < 0.0 {
            (entry_time, 1.0, 0.0)
        } else {
            (entry_time, -1.0, 0.0)
        }
    } else if y_inv_entry < 0.0 {
        (entry_time, 0.0, 1.0)
    } else {
        (entry_time, 0.0, -1.0)
    }
}

/// Rolls each contacting body back along this tick's motion to its impact
/// time, then redirects the remaining velocity along the hit surface.
pub fn resolve_contacts(world: &mut SimWorld, dt: f32) {
    let ids: Vec<Entity> = world
        .view::<(Contact, Velocity, Position, Speed, Rect)>()
        .collect();
    for id in ids {
        let Some((&contact, &velocity, &position, &speed, &rect)) =
            world.get::<(Contact, Velocity, Position, Speed, Rect)>(id)
        else {
            continue;
        };
        // The partner may have been deleted since detection.
        let Some((_, &other_position, &other_rect)) =
            world.get::<(Collider, Position, Rect)>(contact.other)
        else {
            continue;
        };

        let (entry_time, normal_x, normal_y) =
            swept_aabb(position, rect, velocity, other_position, other_rect);

        if let Some((position, velocity)) = world.get_mut::<(Position, Velocity)>(id) {
            position.x -= velocity.x * speed.horizontal * entry_time * dt;
            position.y -= velocity.y * speed.horizontal * entry_time * dt;

            let remaining = 1.0 - entry_time;
            let dot = (velocity.x * normal_y + velocity.y * normal_x) * remaining;
            velocity.x = dot * normal_y;
            velocity.y = dot * normal_x;
        }
    }
}
