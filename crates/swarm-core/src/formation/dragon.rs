use glam::Vec3;

use super::{Formation, TickContext};
use crate::gesture::GestureMode;
use crate::noise;

const NOISE_PULSE_RATE: f32 = 2.0;
const NOISE_PULSE_PHASE: f32 = 0.05;

/// A head of agents hovering on the fingertip and a body strung out along
/// the recent trail.
pub struct Dragon;

impl Formation for Dragon {
    fn mode(&self) -> GestureMode {
        GestureMode::Dragon
    }

    fn target(&self, index: usize, position: Vec3, ctx: &TickContext) -> Vec3 {
        let p = &ctx.config.dragon;
        let t = ctx.time;
        let i = index as f32;

        if index < p.head_count {
            let a = t * p.head_wobble_rate + i;
            return ctx.center + Vec3::new(a.sin(), a.cos(), 0.0) * p.head_wobble;
        }

        let body = ctx.path.sample(i * p.density);
        let a = t * p.body_jitter_rate + i * 0.5;
        let jitter = Vec3::new(a.sin(), a.cos(), 0.0) * p.body_jitter;

        let n = &ctx.config.noise;
        let amount = n.strength * (0.8 + (t * NOISE_PULSE_RATE + i * NOISE_PULSE_PHASE).sin() * 0.4);
        body + jitter + noise::wander(position, n.scale, t) * amount
    }

    fn facing(&self, _index: usize, _position: Vec3, velocity: Vec3, ctx: &TickContext) -> Vec3 {
        if velocity.length() > ctx.config.motion.facing_min_speed {
            velocity.normalize()
        } else {
            Vec3::NEG_Z
        }
    }
}
