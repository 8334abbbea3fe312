//! Simulation engine for OUTBREAK.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces SessionSnapshots for the frontend.

pub mod engine;
pub mod hooks;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::SessionEngine;
pub use outbreak_core as core;
