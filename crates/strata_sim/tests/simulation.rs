//! End-to-end simulation behavior through the engine's public surface.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use strata_sim::components::{Contact, Position, Velocity};
use strata_sim::config::SimConfig;
use strata_sim::world::SimWorld;
use strata_sim::{spawn, systems};

#[test]
fn bodies_fall_under_gravity() {
    let config = SimConfig::default();
    let mut world = SimWorld::new();
    let body = spawn::spawn_body(&mut world, 100.0, 0.0, 0.0, 0.0);

    let mut last_y = 0.0_f32;
    for _ in 0..120 {
        systems::apply_gravity(&mut world, config.gravity, config.timestep);
        systems::integrate(&mut world, config.timestep);
        let (position,) = world.get::<(Position,)>(body).unwrap();
        assert!(position.y >= last_y, "gravity never moves a body up");
        last_y = position.y;
    }
    assert!(last_y > 0.0);
    let (velocity,) = world.get::<(Velocity,)>(body).unwrap();
    assert!(velocity.y > 0.0);
}

#[test]
fn overlap_produces_a_contact_and_separation_clears_it() {
    let mut world = SimWorld::new();
    let slab = spawn::spawn_slab(&mut world, 0.0, 50.0, 200.0, 20.0);
    let body = spawn::spawn_body(&mut world, 10.0, 40.0, 0.0, 1.0);

    systems::detect_contacts(&mut world);
    assert_eq!(
        world.get::<(Contact,)>(body),
        Some((&Contact { other: slab },))
    );

    if let Some((position,)) = world.get_mut::<(Position,)>(body) {
        position.y = 0.0;
    }
    systems::detect_contacts(&mut world);
    assert!(world.get::<(Contact,)>(body).is_none());
}

#[test]
fn static_slabs_never_gain_contacts() {
    let mut world = SimWorld::new();
    let slab = spawn::spawn_slab(&mut world, 0.0, 50.0, 200.0, 20.0);
    spawn::spawn_body(&mut world, 10.0, 40.0, 0.0, 1.0);

    systems::detect_contacts(&mut world);
    // Slabs have no velocity, so they are never movers; the overlap is
    // recorded on the moving body only.
    assert!(world.get::<(Contact,)>(slab).is_none());
}

#[test]
fn resolving_a_contact_cancels_the_motion() {
    let mut world = SimWorld::new();
    spawn::spawn_slab(&mut world, 0.0, 100.0, 200.0, 20.0);
    let body = spawn::spawn_body(&mut world, 10.0, 90.0, 0.0, 1.0);

    systems::detect_contacts(&mut world);
    systems::resolve_contacts(&mut world, 1.0 / 60.0);

    let (velocity,) = world.get::<(Velocity,)>(body).unwrap();
    assert_eq!(*velocity, Velocity { x: 0.0, y: 0.0 });
}

#[test]
fn scattering_is_deterministic_under_a_fixed_seed() {
    let mut world_a = SimWorld::new();
    let mut world_b = SimWorld::new();
    let mut rng_a = ChaCha8Rng::seed_from_u64(7);
    let mut rng_b = ChaCha8Rng::seed_from_u64(7);

    spawn::scatter_bodies(&mut world_a, &mut rng_a, 12);
    spawn::scatter_bodies(&mut world_b, &mut rng_b, 12);

    assert_eq!(world_a.size(), 12);
    let ids: Vec<usize> = world_a.iter().collect();
    assert_eq!(ids, world_b.iter().collect::<Vec<usize>>());
    for id in ids {
        assert_eq!(
            world_a.get::<(Position, Velocity)>(id),
            world_b.get::<(Position, Velocity)>(id)
        );
    }
}

#[test]
fn deleting_through_a_view_frees_the_low_ids() {
    let mut world = SimWorld::new();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    spawn::scatter_bodies(&mut world, &mut rng, 8);
    assert_eq!(world.capacity(), 8);

    let doomed: Vec<usize> = world.view::<(Velocity,)>().collect();
    for id in doomed {
        world.delete_entity(id);
    }
    assert_eq!(world.size(), 0);

    let body = spawn::spawn_body(&mut world, 0.0, 0.0, 0.0, 0.0);
    assert_eq!(body, 0, "lowest freed id is reused first");
}
