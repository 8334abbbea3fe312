//! Pickup collection and expiry.
//!
//! Pickups are collected by proximity, not by aim: the player walking
//! within collect range of an uncollected pickup claims it. The
//! `collected` flag guards against double activation if removal lags
//! the claiming tick.

use hecs::{Entity, World};

use outbreak_core::components::Pickup;
use outbreak_core::constants::PICKUP_COLLECT_RANGE;
use outbreak_core::enums::BuffKind;
use outbreak_core::events::GameEvent;
use outbreak_core::types::Position;

/// Run one pickup tick. Collected kinds are returned for buff activation;
/// collected and expired pickup entities are pushed onto the despawn
/// buffer for removal at end of tick.
pub fn run(
    world: &mut World,
    player_position: Position,
    now_tick: u64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) -> Vec<BuffKind> {
    let mut collected = Vec::new();

    for (entity, (pickup, position)) in world.query_mut::<(&mut Pickup, &Position)>() {
        if pickup.collected {
            continue;
        }
        if now_tick >= pickup.expires_at_tick {
            pickup.collected = true;
            despawn_buffer.push(entity);
            events.push(GameEvent::PickupExpired { kind: pickup.kind });
            continue;
        }
        if position.horizontal_range_to(&player_position) < PICKUP_COLLECT_RANGE {
            pickup.collected = true;
            despawn_buffer.push(entity);
            events.push(GameEvent::PickupCollected { kind: pickup.kind });
            collected.push(pickup.kind);
        }
    }

    collected
}
