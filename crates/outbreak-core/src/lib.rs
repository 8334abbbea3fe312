//! Core types and definitions for the OUTBREAK survival simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, session snapshots, events, and constants.
//! It has no dependency on the engine or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
