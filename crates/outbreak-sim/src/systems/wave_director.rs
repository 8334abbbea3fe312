//! Wave director — per-wave scaling and the self-rearming spawn sequence.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use outbreak_core::constants::*;
use outbreak_core::enums::Difficulty;
use outbreak_core::events::GameEvent;
use outbreak_core::types::ticks_from_ms;

/// Derived per-wave configuration. Computed once when a wave begins and
/// carried by value for the rest of that wave, so a wave change mid-flight
/// can never desync the completion check from what was actually spawned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveConfig {
    /// Agents to spawn this wave.
    pub count: u32,
    /// Base seek speed before per-agent jitter (m/s).
    pub base_speed: f64,
    /// Base hp before per-agent jitter.
    pub base_hp: f64,
    /// Delay between consecutive spawns (milliseconds). Never scaled by
    /// difficulty.
    pub spawn_delay_ms: u64,
}

impl WaveConfig {
    /// Compute the configuration for a wave at a difficulty.
    ///
    /// The count cap applies before the difficulty multiplier; fractional
    /// scaled counts round up.
    pub fn compute(wave: u32, difficulty: Difficulty) -> Self {
        let base_count = (WAVE_BASE_COUNT + (wave - 1) * WAVE_COUNT_STEP).min(WAVE_COUNT_CAP);
        let base_speed = WAVE_BASE_SPEED + (wave - 1) as f64 * WAVE_SPEED_STEP;
        let base_hp = (3.0 + wave as f64 * 0.8).ceil();
        let spawn_delay_ms = SPAWN_DELAY_BASE_MS
            .saturating_sub(wave as u64 * SPAWN_DELAY_STEP_MS)
            .max(SPAWN_DELAY_FLOOR_MS);

        Self {
            count: (base_count as f64 * difficulty.count_multiplier()).ceil() as u32,
            base_speed: base_speed * difficulty.speed_multiplier(),
            base_hp: base_hp * difficulty.hp_multiplier(),
            spawn_delay_ms,
        }
    }
}

/// An in-flight spawn sequence for one wave. Replaces the source's
/// self-rescheduling deferred calls with a deadline re-armed each spawn;
/// dropping the sequence halts the chain permanently.
#[derive(Debug, Clone, Copy)]
pub struct SpawnSequence {
    pub config: WaveConfig,
    pub remaining: u32,
    pub next_spawn_at_tick: u64,
}

impl SpawnSequence {
    /// Begin a wave's sequence with an immediate first spawn.
    pub fn begin(config: WaveConfig, now_tick: u64) -> Self {
        Self {
            config,
            remaining: config.count,
            next_spawn_at_tick: now_tick,
        }
    }
}

/// Spawn counters reported back to the engine.
#[derive(Debug, Default)]
pub struct SpawnOutcome {
    pub spawned: u32,
}

/// Advance the spawn sequence: spawn every agent whose deadline has come
/// due, re-arming the deadline after each. The sequence is `None` once
/// exhausted. Only called while the session is Playing — leaving Playing
/// mid-wave drops the sequence at the engine level.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    sequence: &mut Option<SpawnSequence>,
    next_agent_id: &mut u32,
    now_tick: u64,
    events: &mut Vec<GameEvent>,
) -> SpawnOutcome {
    let mut outcome = SpawnOutcome::default();

    let Some(seq) = sequence else {
        return outcome;
    };

    while seq.remaining > 0 && now_tick >= seq.next_spawn_at_tick {
        let (id, position) =
            crate::world_setup::spawn_agent(world, rng, next_agent_id, &seq.config, now_tick);
        events.push(GameEvent::AgentSpawned { id, position });
        outcome.spawned += 1;
        seq.remaining -= 1;
        seq.next_spawn_at_tick = now_tick + ticks_from_ms(seq.config.spawn_delay_ms);
    }

    if seq.remaining == 0 {
        *sequence = None;
    }

    outcome
}
