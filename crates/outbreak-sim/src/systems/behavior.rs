//! Hostile agent behavior system.
//!
//! Bridges the ECS world to the pure FSM in `outbreak-agent-ai`: gathers
//! each agent's context, evaluates it, and applies the resulting updates.
//! Updates are buffered and applied after the query loop to avoid holding
//! hecs borrows while mutating.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use outbreak_agent_ai::fsm::{self, AgentContext};
use outbreak_core::components::*;
use outbreak_core::constants::{AGENT_GROAN_MIN_SECS, AGENT_GROAN_SPREAD_SECS, DT};
use outbreak_core::events::GameEvent;
use outbreak_core::types::{Position, Velocity};

/// An attack committed by an agent this tick, to be resolved against the
/// player by the engine.
#[derive(Debug, Clone, Copy)]
pub struct AgentAttack {
    pub entity: Entity,
    pub agent_id: u32,
}

struct BehaviorUpdate {
    entity: Entity,
    velocity: Velocity,
    cooldown_secs: f64,
}

/// Run one behavior tick for every hostile agent. Returns the attacks
/// committed this tick, in query order.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player_position: Position,
    events: &mut Vec<GameEvent>,
) -> Vec<AgentAttack> {
    let mut updates: Vec<BehaviorUpdate> = Vec::new();
    let mut attacks: Vec<AgentAttack> = Vec::new();

    for (entity, (_hostile, agent_id, position, locomotion, attack_state, lifecycle)) in world
        .query_mut::<(
            &Hostile,
            &AgentId,
            &Position,
            &Locomotion,
            &AttackState,
            &Lifecycle,
        )>()
    {
        let context = AgentContext {
            lifecycle: lifecycle.state,
            position: *position,
            target: player_position,
            speed: locomotion.speed,
            cooldown_secs: attack_state.cooldown_secs,
            dt: DT,
        };

        let update = fsm::evaluate(&context);

        if update.attack {
            attacks.push(AgentAttack {
                entity,
                agent_id: agent_id.id,
            });
        }

        updates.push(BehaviorUpdate {
            entity,
            velocity: update.velocity,
            cooldown_secs: update.cooldown_secs,
        });
    }

    for update in updates {
        if let Ok(mut velocity) = world.get::<&mut Velocity>(update.entity) {
            *velocity = update.velocity;
        }
        if let Ok(mut attack_state) = world.get::<&mut AttackState>(update.entity) {
            attack_state.cooldown_secs = update.cooldown_secs;
        }
    }

    run_groans(world, rng, events);

    attacks
}

/// Tick down groan timers on living agents, emitting an ambient groan
/// event and re-arming with a fresh random interval on each expiry.
fn run_groans(world: &mut World, rng: &mut ChaCha8Rng, events: &mut Vec<GameEvent>) {
    for (_entity, (_hostile, agent_id, groan, lifecycle)) in
        world.query_mut::<(&Hostile, &AgentId, &mut GroanTimer, &Lifecycle)>()
    {
        if lifecycle.state != outbreak_core::enums::AgentLifecycle::Alive {
            continue;
        }
        groan.remaining_secs -= DT;
        if groan.remaining_secs <= 0.0 {
            events.push(GameEvent::AgentGroan { id: agent_id.id });
            groan.remaining_secs =
                AGENT_GROAN_MIN_SECS + rng.gen_range(0.0..AGENT_GROAN_SPREAD_SECS);
        }
    }
}
