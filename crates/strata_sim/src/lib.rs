//! # STRATA Sim
//!
//! Headless falling-bodies simulation over the STRATA storage engine:
//! gravity, integration, and swept-AABB collision, driven at a fixed
//! timestep. Everything goes through the engine's public surface - views,
//! `get`/`get_mut` bundles, and the entity lifecycle - which makes this
//! crate double as the engine's end-to-end exercise.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod components;
pub mod config;
pub mod spawn;
pub mod systems;
pub mod world;
