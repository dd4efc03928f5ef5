use std::f32::consts::PI;

use glam::Vec3;

use super::{aura_flash, Formation, TickContext};
use crate::constants::{SHIELD_AURA_PHASE, SHIELD_AURA_RATE, SHIELD_AURA_THRESHOLD};
use crate::gesture::GestureMode;

const JITTER_RATE: f32 = 3.0;
const JITTER_PHASE_Y: f32 = 0.7;

/// Unit vector for point `index` of an `count`-point Fibonacci sphere.
///
/// Index 0 sits next to the +Z pole and successive indices spiral towards -Z.
pub fn fibonacci_sphere_point(index: usize, count: usize) -> Vec3 {
    let (phi, theta) = fibonacci_angles(index, count);
    Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
}

fn fibonacci_angles(index: usize, count: usize) -> (f32, f32) {
    let n = count.max(1) as f32;
    let i = index as f32;
    let phi = (1.0 - 2.0 * (i + 0.5) / n).clamp(-1.0, 1.0).acos();
    let theta = PI * (1.0 + 5.0_f32.sqrt()) * i;
    (phi, theta)
}

/// Rotating sphere of evenly spaced agents around the hand.
pub struct Shield;

impl Formation for Shield {
    fn mode(&self) -> GestureMode {
        GestureMode::Shield
    }

    fn target(&self, index: usize, _position: Vec3, ctx: &TickContext) -> Vec3 {
        let p = &ctx.config.shield;
        let t = ctx.time;
        let (phi, theta) = fibonacci_angles(index, ctx.agent_count);

        let spin = theta + t * p.orbit_speed;
        let orbit = Vec3::new(
            p.radius * phi.sin() * spin.cos(),
            p.radius * phi.sin() * spin.sin(),
            p.radius * phi.cos(),
        );

        // secondary tilt around the vertical axis
        let (s, c) = (t * p.tilt_speed).sin_cos();
        let tilted = Vec3::new(orbit.x * c - orbit.z * s, orbit.y, orbit.x * s + orbit.z * c);

        let i = index as f32;
        let jitter = Vec3::new(
            (t * JITTER_RATE + i).sin() * p.jitter,
            (t * JITTER_RATE + i * JITTER_PHASE_Y).cos() * p.jitter,
            0.0,
        );
        ctx.center + tilted + jitter
    }

    fn facing(&self, _index: usize, position: Vec3, velocity: Vec3, ctx: &TickContext) -> Vec3 {
        if velocity.length() > ctx.config.motion.facing_min_speed {
            return velocity.normalize();
        }
        let rel = position - ctx.center;
        Vec3::new(-rel.z, 0.0, rel.x)
            .try_normalize()
            .unwrap_or(Vec3::X)
    }

    fn base_speed(&self, ctx: &TickContext) -> f32 {
        ctx.config.motion.sprint_speed
    }

    fn steer_factor(&self, ctx: &TickContext) -> f32 {
        ctx.config.motion.snappy_steer_factor
    }

    fn separation(&self, _ctx: &TickContext) -> bool {
        false
    }

    fn aura(&self, index: usize, ctx: &TickContext) -> bool {
        aura_flash(
            ctx.time,
            index,
            SHIELD_AURA_RATE,
            SHIELD_AURA_PHASE,
            SHIELD_AURA_THRESHOLD,
        )
    }
}
