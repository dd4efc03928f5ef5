use std::f32::consts::TAU;

use glam::Vec3;

use super::{Formation, TickContext};
use crate::gesture::GestureMode;

pub const LEAD_INDEX: usize = 0;

const HEIGHT_HASH: f32 = 13.1;

/// Deterministic height hash in [0, 1] for array member `k`.
#[inline]
pub fn height_hash(k: usize) -> f32 {
    (k as f32 * HEIGHT_HASH).sin() * 0.5 + 0.5
}

/// Grand sword array: one giant lead blade above the hand and a layered,
/// counter-rotating cylinder of blades hanging point-down beneath it.
pub struct Dageng;

impl Dageng {
    /// `(layer, slot, slots_in_layer)` for array member `k` (agent `k + 1`).
    ///
    /// Members that do not divide evenly into the layers all join the last
    /// ring, which is spaced for its actual size.
    pub fn layer_slot(k: usize, agent_count: usize, layers: usize) -> (usize, usize, usize) {
        let members = agent_count.saturating_sub(1);
        let layers = layers.max(1);
        let per_layer = (members / layers).max(1);
        let layer = k / per_layer;
        if layer < layers - 1 {
            return (layer, k % per_layer, per_layer);
        }
        let start = (layers - 1) * per_layer;
        let slot = k - start;
        (layers - 1, slot, members.saturating_sub(start).max(slot + 1))
    }
}

impl Formation for Dageng {
    fn mode(&self) -> GestureMode {
        GestureMode::Dageng
    }

    fn target(&self, index: usize, _position: Vec3, ctx: &TickContext) -> Vec3 {
        let p = &ctx.config.dageng;
        if index == LEAD_INDEX {
            return ctx.center + Vec3::new(0.0, p.lead_lift, 0.0);
        }

        let k = index - 1;
        let (layer, slot, per_layer) = Self::layer_slot(k, ctx.agent_count, p.layers);
        let radius = p.radius + layer as f32 * p.layer_spacing + p.ring_clearance;
        let dir = if layer % 2 == 0 { 1.0 } else { -1.0 };
        let theta = slot as f32 / per_layer as f32 * TAU + ctx.time * p.rotate_speed * dir;

        let column_center = ctx.center.y - p.column_drop;
        let height = column_center + (height_hash(k) - 0.5) * p.height;

        let (s, c) = theta.sin_cos();
        Vec3::new(ctx.center.x + c * radius, height, ctx.center.z + s * radius)
    }

    fn facing(&self, _index: usize, _position: Vec3, _velocity: Vec3, _ctx: &TickContext) -> Vec3 {
        Vec3::NEG_Y
    }

    fn target_scale(&self, index: usize, ctx: &TickContext) -> f32 {
        if index == LEAD_INDEX {
            ctx.config.scale.lead_scale
        } else {
            ctx.config.scale.array_scale
        }
    }

    fn scale_rate(&self, index: usize, ctx: &TickContext) -> f32 {
        if index == LEAD_INDEX {
            ctx.config.scale.lead_rate
        } else {
            ctx.config.scale.rate
        }
    }

    fn aura(&self, index: usize, ctx: &TickContext) -> bool {
        index == LEAD_INDEX
            || super::aura_flash(
                ctx.time,
                index,
                crate::constants::AURA_RATE,
                crate::constants::AURA_PHASE,
                crate::constants::AURA_THRESHOLD,
            )
    }
}
