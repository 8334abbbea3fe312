//! Events emitted by the simulation for audio, effect, and UI feedback.
//!
//! Events are fire-and-forget notifications drained into each snapshot;
//! the frontend renders or plays them, the core never waits on them.

use serde::{Deserialize, Serialize};

use crate::enums::BuffKind;
use crate::types::Position;

/// Game events for the frontend effect/audio/UI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave began spawning.
    WaveStarted { wave: u32, count: u32 },
    /// A wave was cleared; bonus already added to the score.
    WaveCompleted { wave: u32, bonus: u32 },
    /// An agent entered the world.
    AgentSpawned { id: u32, position: Position },
    /// A hit-scan or melee strike connected (render a hit marker).
    HitMarker { position: Position, headshot: bool },
    /// An agent died. Position is where the death occurred.
    AgentKilled { id: u32, position: Position },
    /// Ambient agent groan (audio only).
    AgentGroan { id: u32 },
    /// The player took damage.
    PlayerHit { damage: i32, hp_remaining: i32 },
    /// A pickup dropped at a kill position.
    PickupSpawned { kind: BuffKind, position: Position },
    /// A pickup was collected by the player.
    PickupCollected { kind: BuffKind },
    /// An uncollected pickup timed out.
    PickupExpired { kind: BuffKind },
    /// A buff was activated or refreshed.
    BuffActivated { kind: BuffKind, duration_secs: f64 },
    /// A buff's timer ran out.
    BuffExpired { kind: BuffKind },
    /// The session ended.
    GameOver { score: u32, wave: u32 },
}
