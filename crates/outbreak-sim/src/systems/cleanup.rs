//! End-of-tick entity removal.
//!
//! Systems never despawn mid-iteration; they push entities onto the
//! despawn buffer and this system flushes it after all other systems
//! have run.

use hecs::{Entity, World};

use outbreak_core::components::{Hostile, Lifecycle};
use outbreak_core::constants::AGENT_DYING_LINGER_SECS;
use outbreak_core::enums::AgentLifecycle;
use outbreak_core::types::ticks_from_secs;

/// Queue dying agents whose linger window has elapsed, then flush the
/// despawn buffer. Duplicate entries are tolerated; a second despawn of
/// the same entity is a no-op.
pub fn run(world: &mut World, now_tick: u64, despawn_buffer: &mut Vec<Entity>) {
    let linger_ticks = ticks_from_secs(AGENT_DYING_LINGER_SECS);

    for (entity, (_hostile, lifecycle)) in world.query_mut::<(&Hostile, &Lifecycle)>() {
        if lifecycle.state == AgentLifecycle::Dying
            && now_tick >= lifecycle.since_tick + linger_ticks
        {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
