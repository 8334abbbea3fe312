//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Player ---

/// Player hit points at session start.
pub const PLAYER_MAX_HP: i32 = 100;

/// Raw incoming damage per agent attack, before the difficulty multiplier.
pub const INCOMING_ATTACK_DAMAGE: f64 = 8.0;

/// Health regeneration interval (seconds).
pub const HEALTH_REGEN_INTERVAL_SECS: f64 = 5.0;

/// Health regained per regeneration pulse.
pub const HEALTH_REGEN_AMOUNT: i32 = 1;

/// Progress autosave interval (seconds).
pub const AUTOSAVE_INTERVAL_SECS: f64 = 30.0;

// --- Wave scaling ---

/// Base agent count for wave 1.
pub const WAVE_BASE_COUNT: u32 = 6;

/// Agents added per wave past the first.
pub const WAVE_COUNT_STEP: u32 = 2;

/// Hard cap on the pre-multiplier agent count per wave.
pub const WAVE_COUNT_CAP: u32 = 80;

/// Base agent speed for wave 1 (m/s).
pub const WAVE_BASE_SPEED: f64 = 0.6;

/// Speed added per wave past the first (m/s).
pub const WAVE_SPEED_STEP: f64 = 0.08;

/// Floor of the per-spawn delay (milliseconds).
pub const SPAWN_DELAY_FLOOR_MS: u64 = 400;

/// Starting point of the per-spawn delay schedule (milliseconds).
pub const SPAWN_DELAY_BASE_MS: u64 = 800;

/// Per-wave reduction of the spawn delay (milliseconds).
pub const SPAWN_DELAY_STEP_MS: u64 = 25;

/// Bonus points awarded per wave number on completion.
pub const WAVE_BONUS_PER_WAVE: u32 = 50;

/// Grace delay between the last kill and wave-completion commit (seconds).
pub const WAVE_COMPLETE_GRACE_SECS: f64 = 1.5;

/// Delay between wave completion and the next wave's first spawn (seconds).
pub const NEXT_WAVE_DELAY_SECS: f64 = 2.0;

// --- Agent spawning ---

/// Inner radius of the spawn ring around the origin (meters).
pub const SPAWN_RING_MIN: f64 = 6.0;

/// Outer radius of the spawn ring (meters).
pub const SPAWN_RING_MAX: f64 = 8.0;

/// Uniform jitter applied to the per-wave base speed (± m/s).
pub const AGENT_SPEED_JITTER: f64 = 0.15;

/// Uniform jitter applied to the per-wave base hp (± points).
pub const AGENT_HP_JITTER: f64 = 1.0;

/// Minimum agent hp after jitter.
pub const AGENT_MIN_HP: i32 = 1;

// --- Agent behavior ---

/// Planar distance below which an agent may attack the player (meters).
pub const AGENT_ATTACK_RANGE: f64 = 0.8;

/// Cooldown between agent attacks (seconds).
pub const AGENT_ATTACK_COOLDOWN_SECS: f64 = 1.0;

/// Seek displacement epsilon — closer than this, the agent holds still.
pub const AGENT_SEEK_EPSILON: f64 = 1e-3;

/// How long a Dying agent lingers before removal (seconds).
pub const AGENT_DYING_LINGER_SECS: f64 = 2.0;

/// Minimum interval between agent groans (seconds).
pub const AGENT_GROAN_MIN_SECS: f64 = 3.0;

/// Random extra interval between agent groans (seconds).
pub const AGENT_GROAN_SPREAD_SECS: f64 = 4.0;

// --- Agent collidable geometry ---

/// Height of the head sphere center above the agent's base (meters).
pub const AGENT_HEAD_HEIGHT: f64 = 1.85;

/// Head sphere radius (meters).
pub const AGENT_HEAD_RADIUS: f64 = 0.25;

/// Height of the body sphere center above the agent's base (meters).
pub const AGENT_BODY_HEIGHT: f64 = 1.2;

/// Body sphere radius (meters).
pub const AGENT_BODY_RADIUS: f64 = 0.45;

// --- Combat ---

/// Hit-scan base damage (instakill inactive).
pub const HITSCAN_BASE_DAMAGE: i32 = 1;

/// Hit-scan damage while the instakill buff is active.
pub const HITSCAN_INSTAKILL_DAMAGE: i32 = 10;

/// Maximum hit-scan range (meters).
pub const HITSCAN_MAX_RANGE: f64 = 100.0;

/// Score for a hit-scan headshot.
pub const HEADSHOT_SCORE: u32 = 30;

/// Score for a hit-scan body hit.
pub const BODY_HIT_SCORE: u32 = 15;

/// Melee strike range (meters).
pub const MELEE_RANGE: f64 = 1.5;

/// Melee damage (no headshot multiplier).
pub const MELEE_DAMAGE: i32 = 2;

/// Score for a melee hit.
pub const MELEE_SCORE: u32 = 5;

// --- Powerups ---

/// Probability a kill drops a pickup.
pub const PICKUP_DROP_CHANCE: f64 = 0.18;

/// Uncollected pickup lifetime (seconds).
pub const PICKUP_LIFETIME_SECS: f64 = 15.0;

/// Planar distance within which a pickup is collected (meters).
pub const PICKUP_COLLECT_RANGE: f64 = 1.2;

/// Movement speed factor applied by the speed buff.
pub const SPEED_BUFF_FACTOR: f64 = 1.5;
