use std::f32::consts::PI;

use glam::Vec3;

use super::{Formation, TickContext};
use crate::gesture::GestureMode;

const BREATHE_RATE: f32 = 2.0;
const FLOAT_RATE: f32 = 2.0;
const FLOAT_PHASE: f32 = 0.1;

/// Flat sunflower disc: golden-angle spiral mapped into an annulus.
pub struct Lotus;

impl Lotus {
    pub fn golden_angle() -> f32 {
        PI * (3.0 - 5.0_f32.sqrt())
    }
}

impl Formation for Lotus {
    fn mode(&self) -> GestureMode {
        GestureMode::Lotus
    }

    fn target(&self, index: usize, _position: Vec3, ctx: &TickContext) -> Vec3 {
        let p = &ctx.config.lotus;
        let t = ctx.time;
        let i = index as f32;

        // sqrt keeps the area density uniform across the annulus
        let along = if ctx.agent_count > 1 {
            i / (ctx.agent_count - 1) as f32
        } else {
            0.0
        };
        let r = p.inner_radius + (p.outer_radius - p.inner_radius) * along.sqrt();
        let breathe = 1.0 + (t * BREATHE_RATE).sin() * p.breathe;
        let theta = i * Self::golden_angle() + t * p.rotate_speed;

        let (s, c) = theta.sin_cos();
        let z = (t * FLOAT_RATE + i * FLOAT_PHASE).sin() * p.float_height;
        ctx.center + Vec3::new(r * breathe * c, r * breathe * s, z)
    }

    fn facing(&self, _index: usize, position: Vec3, _velocity: Vec3, ctx: &TickContext) -> Vec3 {
        (position - ctx.center).try_normalize().unwrap_or(Vec3::Y)
    }

    // Also used for the idle lotus, whatever gesture is confirmed.
    fn steer_factor(&self, ctx: &TickContext) -> f32 {
        ctx.config.motion.snappy_steer_factor
    }

    // The idle lotus shown without a hand keeps separation on.
    fn separation(&self, ctx: &TickContext) -> bool {
        !ctx.is_tracking
    }
}
