//! Shared per-agent integration: arrival steering, separation, scale smoothing
//! and look rotations.

use glam::{Mat3, Quat, Vec3};

use crate::config::{MotionParams, SeparationParams};
use crate::constants::FRAMES_PER_SEC;

/// Resolved steering limits for one agent on one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SteeringParams {
    pub max_speed: f32,
    pub sprint_speed: f32,
    /// Speed between the arrival and sprint gaps. Shield cruises at sprint speed.
    pub base_speed: f32,
    pub steer_force: f32,
    pub steer_factor: f32,
    pub sprint_gap: f32,
    pub arrival_gap: f32,
    pub arrival_radius: f32,
}

impl SteeringParams {
    pub fn new(motion: &MotionParams, base_speed: f32, steer_factor: f32) -> Self {
        Self {
            max_speed: motion.max_speed,
            sprint_speed: motion.sprint_speed,
            base_speed,
            steer_force: motion.steer_force,
            steer_factor,
            sprint_gap: motion.sprint_gap,
            arrival_gap: motion.arrival_gap,
            arrival_radius: motion.arrival_radius,
        }
    }

    /// Largest velocity change allowed in one tick of `dt` seconds.
    #[inline]
    pub fn max_steer(&self, dt: f32) -> f32 {
        self.steer_force * dt * self.steer_factor
    }
}

/// Desired speed for an agent `gap` units from its target.
pub fn desired_speed(gap: f32, p: &SteeringParams) -> f32 {
    let speed = if gap > p.sprint_gap {
        p.sprint_speed
    } else if gap < p.arrival_gap {
        gap * p.max_speed
    } else {
        p.base_speed
    };
    // arrival: slow down linearly inside the arrival radius
    if gap < p.arrival_radius {
        speed * (gap / p.arrival_radius)
    } else {
        speed
    }
}

/// One steering step: returns the new velocity.
///
/// The velocity change is clamped to [`SteeringParams::max_steer`], so the
/// result always lies between the old velocity and the desired one.
pub fn steer(position: Vec3, velocity: Vec3, target: Vec3, p: &SteeringParams, dt: f32) -> Vec3 {
    let offset = target - position;
    let gap = offset.length();
    let desired = if gap > 0.0 {
        offset / gap * desired_speed(gap, p)
    } else {
        Vec3::ZERO
    };
    let change = (desired - velocity).clamp_length_max(p.max_steer(dt));
    velocity + change
}

/// Push away from the previous agent when the two are closer than the
/// separation distance. The push grows with the inverse of the gap.
pub fn separation_impulse(
    position: Vec3,
    neighbor: Vec3,
    params: &SeparationParams,
    dt: f32,
) -> Vec3 {
    let diff = position - neighbor;
    let gap = diff.length();
    if gap >= params.distance || gap <= params.min_gap {
        return Vec3::ZERO;
    }
    let gain = params.force * dt / gap.max(params.soft_gap);
    diff / gap * gain
}

/// Frame-rate independent exponential approach of `current` towards `target`.
///
/// `rate_per_frame` is the lerp factor applied once per 1/60 s.
pub fn smooth_scale(current: f32, target: f32, rate_per_frame: f32, dt: f32) -> f32 {
    let keep = (1.0 - rate_per_frame.clamp(0.0, 1.0)).powf(dt * FRAMES_PER_SEC);
    target + (current - target) * keep
}

/// Rotation that points local +Z along `forward` with +Y kept as close to up
/// as possible.
pub fn look_rotation(forward: Vec3) -> Quat {
    let Some(z) = forward.try_normalize() else {
        return Quat::IDENTITY;
    };
    let x = Vec3::Y.cross(z).try_normalize().unwrap_or_else(|| {
        // facing straight up or down: pick any horizontal side axis
        Vec3::Z.cross(z).try_normalize().unwrap_or(Vec3::X)
    });
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}
