//! Boundary contracts toward subsystems the core does not own.
//!
//! The powerup economy and the persistence loop act on externally-owned
//! state (weapon ammo, movement speed, saved progress). Those capabilities
//! are injected at session construction instead of looked up ad hoc, so
//! the whole core is instantiable multiple times and testable with fakes.

use thiserror::Error;

/// Progress payload persisted periodically and at game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub wave: u32,
    pub score: u32,
    /// Simulation tick at save time.
    pub timestamp_ticks: u64,
}

/// Persistence failures are recovered locally: logged and swallowed.
/// The session must remain playable with no storage at all.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Key-value save boundary.
pub trait PersistenceSink {
    fn save_progress(&mut self, progress: &ProgressSnapshot) -> Result<(), PersistenceError>;
    fn high_score(&self) -> Result<u32, PersistenceError>;
    fn save_high_score(&mut self, score: u32) -> Result<(), PersistenceError>;
}

/// Ranged-weapon state boundary. `refill_ammo` is an idempotent setter:
/// reserve and magazine go to their maximums, one-shot, never reversed.
pub trait WeaponSink {
    fn refill_ammo(&mut self);
}

/// Player movement boundary. `scale_speed` multiplies the externally-owned
/// movement speed by the given factor.
pub trait MovementSink {
    fn scale_speed(&mut self, factor: f64);
}

/// All injected capabilities, bundled for session construction.
pub struct SessionHooks {
    pub persistence: Box<dyn PersistenceSink>,
    pub weapon: Box<dyn WeaponSink>,
    pub movement: Box<dyn MovementSink>,
}

impl Default for SessionHooks {
    fn default() -> Self {
        Self {
            persistence: Box::new(MemoryPersistence::default()),
            weapon: Box::new(NullWeapon),
            movement: Box::new(NullMovement),
        }
    }
}

/// In-memory persistence, the default when no storage is wired up.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    pub progress: Option<ProgressSnapshot>,
    pub high_score: u32,
}

impl PersistenceSink for MemoryPersistence {
    fn save_progress(&mut self, progress: &ProgressSnapshot) -> Result<(), PersistenceError> {
        self.progress = Some(*progress);
        Ok(())
    }

    fn high_score(&self) -> Result<u32, PersistenceError> {
        Ok(self.high_score)
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), PersistenceError> {
        self.high_score = score;
        Ok(())
    }
}

/// No-op weapon boundary for headless runs.
pub struct NullWeapon;

impl WeaponSink for NullWeapon {
    fn refill_ammo(&mut self) {}
}

/// No-op movement boundary for headless runs.
pub struct NullMovement;

impl MovementSink for NullMovement {
    fn scale_speed(&mut self, _factor: f64) {}
}
