//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player and hostile agent entities with their component
//! bundles. Agents are spawned by the wave director, pickups by the
//! powerup system on kill rolls.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use outbreak_core::components::*;
use outbreak_core::constants::*;
use outbreak_core::enums::{AgentLifecycle, BuffKind};
use outbreak_core::types::{ticks_from_secs, Position, Velocity};

use crate::systems::wave_director::WaveConfig;

/// Spawn the player entity at the origin.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        Player,
        Position::new(0.0, 0.0, 0.0),
        Health {
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
        },
    ))
}

/// Spawn a single hostile agent on the spawn ring around the player.
///
/// Speed and hp are drawn from the wave bases with per-agent jitter so a
/// wave doesn't advance in lockstep. Returns the assigned id and spawn
/// position for the spawn event.
pub fn spawn_agent(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_agent_id: &mut u32,
    config: &WaveConfig,
    now_tick: u64,
) -> (u32, Position) {
    let id = *next_agent_id;
    *next_agent_id += 1;

    // Uniform angle on the ring, uniform radius in [min, max).
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let radius: f64 = rng.gen_range(SPAWN_RING_MIN..SPAWN_RING_MAX);
    let position = Position::new(radius * angle.cos(), radius * angle.sin(), 0.0);

    let speed = config.base_speed + rng.gen_range(-AGENT_SPEED_JITTER..AGENT_SPEED_JITTER);
    let hp = (config.base_hp + rng.gen_range(-AGENT_HP_JITTER..AGENT_HP_JITTER)).round() as i32;
    let hp = hp.max(AGENT_MIN_HP);

    world.spawn((
        Hostile,
        AgentId { id },
        position,
        Velocity::new(0.0, 0.0, 0.0),
        Health { hp, max_hp: hp },
        Locomotion { speed },
        AttackState::default(),
        Lifecycle {
            state: AgentLifecycle::Alive,
            since_tick: now_tick,
        },
        GroanTimer {
            remaining_secs: rng.gen_range(0.0..AGENT_GROAN_MIN_SECS + AGENT_GROAN_SPREAD_SECS),
        },
    ));

    (id, position)
}

/// Spawn a pickup at a position, typically where an agent died. The
/// pickup sits on the floor and despawns untouched after its lifetime.
pub fn spawn_pickup(
    world: &mut World,
    kind: BuffKind,
    position: Position,
    now_tick: u64,
) -> hecs::Entity {
    world.spawn((
        Pickup {
            kind,
            expires_at_tick: now_tick + ticks_from_secs(PICKUP_LIFETIME_SECS),
            collected: false,
        },
        Position::new(position.x, position.y, 0.0),
    ))
}
