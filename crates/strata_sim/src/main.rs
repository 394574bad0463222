//! Headless fixed-timestep runner.
//!
//! Usage: `strata_sim [config.toml]` - without an argument the built-in
//! defaults apply. Seeds a small arena (player, floor, ceiling, one tracked
//! ball, scattered bodies) and runs the system passes for the configured
//! number of ticks, logging progress along the way.

use std::path::PathBuf;
use std::process::ExitCode;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use strata_sim::components::{Contact, Position};
use strata_sim::config::SimConfig;
use strata_sim::world::SimWorld;
use strata_sim::{spawn, systems};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(error) => {
                tracing::error!(%error, "could not load config");
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };

    let mut world = SimWorld::new();
    spawn::spawn_player(&mut world, 400.0, 300.0);
    spawn::spawn_slab(&mut world, 0.0, 500.0, 800.0, 100.0);
    spawn::spawn_slab(&mut world, 0.0, 0.0, 800.0, 100.0);
    let ball = spawn::spawn_body(&mut world, 400.0, 100.0, 0.0, 1.0);

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    spawn::scatter_bodies(&mut world, &mut rng, config.bodies);

    tracing::info!(
        entities = world.size(),
        capacity = world.capacity(),
        ticks = config.ticks,
        "simulation seeded"
    );

    for tick in 0..config.ticks {
        systems::apply_gravity(&mut world, config.gravity, config.timestep);
        systems::integrate(&mut world, config.timestep);
        systems::detect_contacts(&mut world);
        systems::resolve_contacts(&mut world, config.timestep);

        if tick % 60 == 0 {
            if let Some((position,)) = world.get::<(Position,)>(ball) {
                tracing::info!(tick, x = position.x, y = position.y, "ball");
            }
        }
    }

    let touching = world.view::<(Contact,)>().count();
    tracing::info!(
        entities = world.size(),
        touching,
        "simulation finished"
    );
    ExitCode::SUCCESS
}
