//! Snapshot builder — read-only assembly of the per-tick session state.

use hecs::World;

use outbreak_core::components::*;
use outbreak_core::constants::TICK_RATE;
use outbreak_core::enums::{Difficulty, SessionPhase};
use outbreak_core::events::GameEvent;
use outbreak_core::state::{AgentView, BuffView, PickupView, SessionSnapshot};
use outbreak_core::types::{Position, SimTime, Velocity};

use crate::session::{BuffTable, SessionStats};

/// Build the complete snapshot for this tick. Pure read: the world and
/// session state are not modified; events are moved into the snapshot.
#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: SimTime,
    phase: SessionPhase,
    difficulty: Difficulty,
    stats: &SessionStats,
    buffs: &BuffTable,
    events: Vec<GameEvent>,
) -> SessionSnapshot {
    let mut agents = Vec::new();
    for (_entity, (_hostile, agent_id, position, velocity, health, lifecycle)) in world
        .query::<(&Hostile, &AgentId, &Position, &Velocity, &Health, &Lifecycle)>()
        .iter()
    {
        agents.push(AgentView {
            id: agent_id.id,
            position: *position,
            heading: velocity.heading(),
            hp: health.hp,
            max_hp: health.max_hp,
            lifecycle: lifecycle.state,
        });
    }
    agents.sort_by_key(|a| a.id);

    let mut pickups = Vec::new();
    for (_entity, (pickup, position)) in world.query::<(&Pickup, &Position)>().iter() {
        if pickup.collected {
            continue;
        }
        pickups.push(PickupView {
            kind: pickup.kind,
            position: *position,
            remaining_secs: pickup.expires_at_tick.saturating_sub(time.tick) as f64
                / TICK_RATE as f64,
        });
    }

    let buff_views = buffs
        .active_kinds()
        .into_iter()
        .map(|kind| BuffView {
            kind,
            remaining_secs: buffs.remaining_secs(kind, time.tick),
        })
        .collect();

    SessionSnapshot {
        time,
        phase,
        difficulty,
        wave: stats.wave,
        score: stats.score,
        high_score: stats.high_score,
        hp: stats.hp,
        max_hp: stats.max_hp,
        alive: stats.alive,
        enemies_alive: stats.enemies_alive,
        enemies_spawned: stats.enemies_spawned,
        agents,
        pickups,
        buffs: buff_views,
        events,
    }
}
