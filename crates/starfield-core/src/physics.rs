//! Pointer repulsion and damped-spring return for a single marker.
//!
//! A [`SpringBody`] tracks how far a marker has been pushed away from its rest
//! position, in screen pixels. Rest is always `offset == Vec2::ZERO`, so the
//! rendered element only needs a `translate(offset)` on top of its layout
//! position.

use crate::constants::*;
use glam::Vec2;

/// Interaction and integration constants for the spring simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
    pub interaction_radius: f32,
    pub force_scale: f32,
    pub return_speed: f32,
    pub damping: f32,
    pub rest_distance: f32,
    pub rest_velocity: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            interaction_radius: INTERACTION_RADIUS_PX,
            force_scale: FORCE_SCALE,
            return_speed: RETURN_SPEED,
            damping: DAMPING,
            rest_distance: REST_DISTANCE_EPSILON,
            rest_velocity: REST_VELOCITY_EPSILON,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringBody {
    pub offset: Vec2,
    pub velocity: Vec2,
    pub displaced: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Body was at rest; nothing changed.
    Idle,
    /// Body moved and is still displaced.
    Moved,
    /// Body moved back within the rest thresholds and was snapped to rest.
    Settled,
}

impl SpringBody {
    #[inline]
    pub fn is_at_rest(&self) -> bool {
        !self.displaced
    }
}

/// Push `body` away from `pointer` if it lies within the interaction radius of
/// the marker's rendered `center`. Returns true when an impulse was applied.
///
/// A pointer sitting exactly on the center has no defined direction and is
/// ignored.
pub fn apply_pointer(
    body: &mut SpringBody,
    pointer: Vec2,
    center: Vec2,
    params: &PhysicsParams,
) -> bool {
    let delta = center - pointer;
    let dist = delta.length();
    if dist >= params.interaction_radius {
        return false;
    }
    let Some(dir) = delta.try_normalize() else {
        return false;
    };
    let strength = (params.interaction_radius - dist) / params.interaction_radius;
    body.velocity += dir * strength * params.force_scale;
    body.displaced = true;
    true
}

/// Advance a displaced body by one fixed step.
pub fn step(body: &mut SpringBody, params: &PhysicsParams) -> StepOutcome {
    if !body.displaced {
        return StepOutcome::Idle;
    }
    body.velocity *= params.damping;
    let next = body.offset + body.velocity;
    // Rest is the origin of offset space.
    body.velocity += -next * params.return_speed;
    body.offset = next;

    if body.offset.length() < params.rest_distance
        && body.velocity.x.abs() < params.rest_velocity
        && body.velocity.y.abs() < params.rest_velocity
    {
        *body = SpringBody::default();
        return StepOutcome::Settled;
    }
    StepOutcome::Moved
}
