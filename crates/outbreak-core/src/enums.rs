//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session phase (top-level state). Exactly one holds at any instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Session difficulty, fixed for the lifetime of one play-through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Nightmare,
}

impl Difficulty {
    /// Multiplier applied to incoming player damage.
    pub fn damage_multiplier(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.3,
            Difficulty::Nightmare => 1.6,
        }
    }

    /// Multiplier applied to the per-wave agent count.
    pub fn count_multiplier(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.3,
            Difficulty::Nightmare => 1.6,
        }
    }

    /// Multiplier applied to the per-wave base agent speed.
    pub fn speed_multiplier(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.2,
            Difficulty::Nightmare => 1.4,
        }
    }

    /// Multiplier applied to the per-wave base agent hp.
    pub fn hp_multiplier(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.2,
            Difficulty::Nightmare => 1.5,
        }
    }
}

/// Hostile agent lifecycle. Dying is a short terminal window (death
/// sequence plays out) before the entity is removed from the world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentLifecycle {
    #[default]
    Alive,
    Dying,
    Removed,
}

/// Timed session-level buff kinds, activated by collecting a pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuffKind {
    Instakill,
    MaxAmmo,
    Shield,
    Speed,
}

impl BuffKind {
    pub const ALL: [BuffKind; 4] = [
        BuffKind::Instakill,
        BuffKind::MaxAmmo,
        BuffKind::Shield,
        BuffKind::Speed,
    ];

    /// Stable index into the fixed-size buff table.
    pub fn index(&self) -> usize {
        match self {
            BuffKind::Instakill => 0,
            BuffKind::MaxAmmo => 1,
            BuffKind::Shield => 2,
            BuffKind::Speed => 3,
        }
    }

    /// Buff duration in seconds. MaxAmmo's flag is timed even though its
    /// refill effect is immediate and never reversed.
    pub fn duration_secs(&self) -> f64 {
        match self {
            BuffKind::Instakill => 8.0,
            BuffKind::MaxAmmo => 6.0,
            BuffKind::Shield => 10.0,
            BuffKind::Speed => 12.0,
        }
    }
}
