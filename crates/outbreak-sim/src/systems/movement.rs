//! Kinematic integration for hostile agents.

use hecs::World;

use outbreak_core::components::Hostile;
use outbreak_core::constants::DT;
use outbreak_core::types::{Position, Velocity};

/// Integrate positions by one tick. Velocity was set by the behavior
/// system earlier in the same tick, so agents move on current intent.
pub fn run(world: &mut World) {
    for (_entity, (_hostile, position, velocity)) in
        world.query_mut::<(&Hostile, &mut Position, &Velocity)>()
    {
        position.x += velocity.x * DT;
        position.y += velocity.y * DT;
        position.z += velocity.z * DT;
    }
}
