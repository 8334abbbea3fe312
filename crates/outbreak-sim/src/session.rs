//! Session-level state — the single mutable shared resource.
//!
//! Scalar progress lives here rather than in the ECS world; the engine
//! owns one `SessionStats` and one `BuffTable` per play-through.

use outbreak_core::constants::PLAYER_MAX_HP;
use outbreak_core::enums::BuffKind;
use outbreak_core::types::ticks_from_secs;

/// Overall session progress. Reset wholesale on start/restart.
#[derive(Debug, Clone)]
pub struct SessionStats {
    pub wave: u32,
    pub score: u32,
    pub hp: i32,
    pub max_hp: i32,
    pub alive: bool,
    pub enemies_alive: u32,
    pub enemies_spawned: u32,
    /// Best persisted score, loaded at construction and updated at game over.
    pub high_score: u32,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self {
            wave: 1,
            score: 0,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
            alive: true,
            enemies_alive: 0,
            enemies_spawned: 0,
            high_score: 0,
        }
    }
}

impl SessionStats {
    /// Reset everything except the persisted high score.
    pub fn reset(&mut self) {
        let high_score = self.high_score;
        *self = Self {
            high_score,
            ..Self::default()
        };
    }
}

/// One slot per buff kind. The generation counter makes refresh visible
/// to observers and guarantees a superseded expiry can never fire: there
/// is exactly one deadline per kind, overwritten in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuffSlot {
    pub active: bool,
    pub expires_at_tick: u64,
    pub generation: u32,
}

/// Fixed-size table of active buffs keyed by `BuffKind`.
#[derive(Debug, Clone, Default)]
pub struct BuffTable {
    slots: [BuffSlot; 4],
}

impl BuffTable {
    pub fn is_active(&self, kind: BuffKind) -> bool {
        self.slots[kind.index()].active
    }

    pub fn slot(&self, kind: BuffKind) -> &BuffSlot {
        &self.slots[kind.index()]
    }

    /// Seconds until the buff expires, for display. Zero when inactive.
    pub fn remaining_secs(&self, kind: BuffKind, now_tick: u64) -> f64 {
        let slot = &self.slots[kind.index()];
        if !slot.active {
            return 0.0;
        }
        slot.expires_at_tick.saturating_sub(now_tick) as f64
            / outbreak_core::constants::TICK_RATE as f64
    }

    /// Activate or refresh a buff. Returns true if the kind was already
    /// active (refresh: duration resets, side effects must not re-apply).
    pub fn activate(&mut self, kind: BuffKind, now_tick: u64) -> bool {
        let slot = &mut self.slots[kind.index()];
        let was_active = slot.active;
        slot.active = true;
        slot.expires_at_tick = now_tick + ticks_from_secs(kind.duration_secs());
        slot.generation = slot.generation.wrapping_add(1);
        was_active
    }

    /// Deactivate every buff whose deadline has passed, returning the
    /// expired kinds in table order.
    pub fn expire_due(&mut self, now_tick: u64) -> Vec<BuffKind> {
        let mut expired = Vec::new();
        for kind in BuffKind::ALL {
            let slot = &mut self.slots[kind.index()];
            if slot.active && now_tick >= slot.expires_at_tick {
                slot.active = false;
                expired.push(kind);
            }
        }
        expired
    }

    /// Cancel every buff (game over / restart), returning the kinds that
    /// were active so the engine can unwind their side effects.
    pub fn clear(&mut self) -> Vec<BuffKind> {
        let mut cancelled = Vec::new();
        for kind in BuffKind::ALL {
            let slot = &mut self.slots[kind.index()];
            if slot.active {
                slot.active = false;
                cancelled.push(kind);
            }
        }
        cancelled
    }

    /// Kinds currently active, in table order.
    pub fn active_kinds(&self) -> Vec<BuffKind> {
        BuffKind::ALL
            .into_iter()
            .filter(|k| self.slots[k.index()].active)
            .collect()
    }
}

/// A scheduled wave-completion commit. The grace delay lets final death
/// effects play; the commit re-validates the session is still Playing.
#[derive(Debug, Clone, Copy)]
pub struct PendingWaveCompletion {
    pub due_tick: u64,
}
