//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{AgentLifecycle, BuffKind};

/// Marks an entity as the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an entity as a hostile agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile;

/// Identity assigned at spawn, used to correlate damage/kill events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AgentId {
    pub id: u32,
}

/// Agent hit points. `hp` is monotonically non-increasing until death.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: i32,
    pub max_hp: i32,
}

/// Agent movement capability, fixed for the agent's lifetime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Locomotion {
    /// Seek speed (m/s), drawn from the wave base with random jitter.
    pub speed: f64,
}

/// Agent attack state. The cooldown only counts down while the agent is
/// within attack range of the player.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AttackState {
    pub cooldown_secs: f64,
}

/// Agent lifecycle state and the tick at which the current state began.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifecycle {
    pub state: AgentLifecycle,
    pub since_tick: u64,
}

/// Randomized groan timer for ambient agent audio events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GroanTimer {
    pub remaining_secs: f64,
}

/// A dropped powerup pickup. Distinct from an active buff: collecting the
/// pickup activates the buff; the pickup itself is not the buff.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: BuffKind,
    /// Tick at which an uncollected pickup despawns with no effect.
    pub expires_at_tick: u64,
    /// Collection guard: set exactly once, even if the proximity check
    /// fires on consecutive ticks before removal completes.
    pub collected: bool,
}

// Position and Velocity from types.rs are used as ECS components too.
