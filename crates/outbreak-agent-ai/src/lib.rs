//! Hostile-agent behavior for OUTBREAK.
//!
//! Implements the per-tick seek/attack state machine for hostile agents.
//! Pure functions over plain data — no ECS dependency.

pub mod fsm;

pub use outbreak_core as core;

#[cfg(test)]
mod tests;
