//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — session-level state lives on the
//! engine, per-entity state in components.

pub mod behavior;
pub mod cleanup;
pub mod combat;
pub mod movement;
pub mod powerups;
pub mod snapshot;
pub mod wave_director;
