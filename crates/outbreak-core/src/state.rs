//! Session snapshot — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{AgentLifecycle, BuffKind, Difficulty, SessionPhase};
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete session state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub difficulty: Difficulty,
    pub wave: u32,
    pub score: u32,
    pub high_score: u32,
    pub hp: i32,
    pub max_hp: i32,
    pub alive: bool,
    pub enemies_alive: u32,
    pub enemies_spawned: u32,
    pub agents: Vec<AgentView>,
    pub pickups: Vec<PickupView>,
    pub buffs: Vec<BuffView>,
    pub events: Vec<GameEvent>,
}

/// A visible hostile agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub id: u32,
    pub position: Position,
    /// Facing (radians, 0 = North), derived from current velocity.
    pub heading: f64,
    pub hp: i32,
    pub max_hp: i32,
    pub lifecycle: AgentLifecycle,
}

/// A pickup waiting on the ground.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub kind: BuffKind,
    pub position: Position,
    /// Seconds until the pickup despawns uncollected.
    pub remaining_secs: f64,
}

/// An active session-level buff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuffView {
    pub kind: BuffKind,
    /// Seconds until expiry.
    pub remaining_secs: f64,
}
