//! Per-tick agent behavior evaluation.
//!
//! Pure functions that compute seek velocity and attack decisions for a
//! hostile agent from its current situation. The caller (the simulation's
//! behavior system) applies the resulting update to ECS components.

use outbreak_core::constants::*;
use outbreak_core::enums::AgentLifecycle;
use outbreak_core::types::{Position, Velocity};

/// Input to the agent FSM for a single entity.
pub struct AgentContext {
    pub lifecycle: AgentLifecycle,
    pub position: Position,
    /// Where the player is, in world space.
    pub target: Position,
    /// Seek speed (m/s), fixed at spawn.
    pub speed: f64,
    /// Attack cooldown remaining (seconds).
    pub cooldown_secs: f64,
    /// Seconds advanced this tick.
    pub dt: f64,
}

/// Output from the agent FSM.
pub struct AgentUpdate {
    /// Velocity to apply for this tick's integration.
    pub velocity: Velocity,
    /// Whether the agent lands an attack this tick.
    pub attack: bool,
    /// Cooldown remaining after this tick.
    pub cooldown_secs: f64,
}

/// Evaluate one agent for one tick.
///
/// Non-Alive agents hold still and never attack. Alive agents seek the
/// player on the horizontal plane (pure seek — no avoidance, no flocking)
/// and attack at close range on a cooldown that only counts down while
/// within range, producing a steady range-gated damage tick rather than
/// per-frame damage while adjacent.
pub fn evaluate(ctx: &AgentContext) -> AgentUpdate {
    if ctx.lifecycle != AgentLifecycle::Alive {
        return AgentUpdate {
            velocity: Velocity::new(0.0, 0.0, 0.0),
            attack: false,
            cooldown_secs: ctx.cooldown_secs,
        };
    }

    let dx = ctx.target.x - ctx.position.x;
    let dy = ctx.target.y - ctx.position.y;
    let planar_dist = (dx * dx + dy * dy).sqrt();

    let velocity = if planar_dist > AGENT_SEEK_EPSILON {
        Velocity::new(
            dx / planar_dist * ctx.speed,
            dy / planar_dist * ctx.speed,
            0.0,
        )
    } else {
        Velocity::new(0.0, 0.0, 0.0)
    };

    let (attack, cooldown_secs) = if planar_dist < AGENT_ATTACK_RANGE {
        let remaining = ctx.cooldown_secs - ctx.dt;
        if remaining <= 0.0 {
            (true, AGENT_ATTACK_COOLDOWN_SECS)
        } else {
            (false, remaining)
        }
    } else {
        // Out of range: the cooldown holds where it is.
        (false, ctx.cooldown_secs)
    };

    AgentUpdate {
        velocity,
        attack,
        cooldown_secs,
    }
}
