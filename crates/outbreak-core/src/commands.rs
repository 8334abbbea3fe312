//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick
//! boundary. Invalid-state commands (e.g. `Start` while already Playing)
//! are silently ignored — state machines are called defensively by
//! multiple input sources and must tolerate duplicate triggers.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::Difficulty;
use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Pick a difficulty. Only honored from the menu.
    SetDifficulty { difficulty: Difficulty },
    /// Start a play-through. Only honored from the menu.
    Start,
    /// Re-initialize a fresh session after game over. Only the persisted
    /// high score survives.
    Restart,

    // --- Player boundary ---
    /// Where the player is, in world space. Pushed by the frontend every
    /// frame; the core never queries the scene itself.
    SetPlayerTransform { position: Position },

    // --- Combat ---
    /// Fire the ranged weapon: instantaneous ray from the muzzle.
    FireHitscan { origin: Position, direction: DVec3 },
    /// Short-range melee strike along the aim direction.
    MeleeStrike { origin: Position, direction: DVec3 },
}
