//! Hit-scan and melee resolution against hostile agents.
//!
//! Each living agent presents two collidable spheres: a head sphere and a
//! larger body sphere. A shot is resolved synchronously on the tick its
//! command is drained: intersect the ray with every sphere of every
//! living agent, and the nearest intersection along the ray wins.

use glam::DVec3;
use hecs::{Entity, World};

use outbreak_core::components::*;
use outbreak_core::constants::*;
use outbreak_core::enums::AgentLifecycle;
use outbreak_core::types::Position;

/// Outcome of a resolved shot or strike.
#[derive(Debug, Clone, Copy)]
pub struct HitResolution {
    pub entity: Entity,
    pub agent_id: u32,
    /// World-space contact point, for hit-marker feedback.
    pub point: Position,
    pub headshot: bool,
    pub distance: f64,
}

/// Resolve a hit-scan shot. Returns the nearest hit within range, or
/// `None` for a clean miss. Dying agents are not collidable.
pub fn resolve_hitscan(
    world: &World,
    origin: Position,
    direction: DVec3,
) -> Option<HitResolution> {
    let direction = direction.normalize_or_zero();
    if direction == DVec3::ZERO {
        return None;
    }
    let origin_v = origin.to_dvec3();

    let mut best: Option<HitResolution> = None;

    for (entity, (_hostile, agent_id, position, lifecycle)) in world
        .query::<(&Hostile, &AgentId, &Position, &Lifecycle)>()
        .iter()
    {
        if lifecycle.state != AgentLifecycle::Alive {
            continue;
        }
        let base = position.to_dvec3();
        let spheres = [
            (base + DVec3::new(0.0, 0.0, AGENT_HEAD_HEIGHT), AGENT_HEAD_RADIUS, true),
            (base + DVec3::new(0.0, 0.0, AGENT_BODY_HEIGHT), AGENT_BODY_RADIUS, false),
        ];

        for (center, radius, headshot) in spheres {
            let Some(t) = ray_sphere(origin_v, direction, center, radius) else {
                continue;
            };
            if t > HITSCAN_MAX_RANGE {
                continue;
            }
            if best.map_or(true, |b| t < b.distance) {
                let point = origin_v + direction * t;
                best = Some(HitResolution {
                    entity,
                    agent_id: agent_id.id,
                    point: Position::from(point),
                    headshot,
                    distance: t,
                });
            }
        }
    }

    best
}

/// Resolve a melee strike: the nearest living agent within melee range
/// that lies in the strike's forward half-space. Never a headshot.
pub fn resolve_melee(
    world: &World,
    origin: Position,
    direction: DVec3,
) -> Option<HitResolution> {
    let forward = DVec3::new(direction.x, direction.y, 0.0).normalize_or_zero();
    let origin_v = origin.to_dvec3();

    let mut best: Option<HitResolution> = None;

    for (entity, (_hostile, agent_id, position, lifecycle)) in world
        .query::<(&Hostile, &AgentId, &Position, &Lifecycle)>()
        .iter()
    {
        if lifecycle.state != AgentLifecycle::Alive {
            continue;
        }
        let to_agent = DVec3::new(
            position.x - origin.x,
            position.y - origin.y,
            0.0,
        );
        let distance = to_agent.length();
        if distance > MELEE_RANGE {
            continue;
        }
        if forward != DVec3::ZERO && to_agent.dot(forward) < 0.0 {
            continue;
        }
        if best.map_or(true, |b| distance < b.distance) {
            let point = origin_v + to_agent;
            best = Some(HitResolution {
                entity,
                agent_id: agent_id.id,
                point: Position::from(point),
                headshot: false,
                distance,
            });
        }
    }

    best
}

/// Ray-sphere intersection. Returns the nearest non-negative distance
/// along the (normalized) ray, or `None` for a miss. A ray starting
/// inside the sphere hits at the exit point.
fn ray_sphere(origin: DVec3, direction: DVec3, center: DVec3, radius: f64) -> Option<f64> {
    let oc = origin - center;
    let b = oc.dot(direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let t_near = -b - sqrt_d;
    let t_far = -b + sqrt_d;
    if t_near >= 0.0 {
        Some(t_near)
    } else if t_far >= 0.0 {
        Some(t_far)
    } else {
        None
    }
}
