//! Formation strategies.
//!
//! Each confirmed [`GestureMode`] maps to one stateless [`Formation`]. The
//! swarm asks it, per agent, where to go, which way to face, how large to be
//! and whether the aura is lit. Everything else (steering, integration,
//! smoothing) is shared and lives in [`crate::steering`].

use glam::Vec3;

use crate::config::SwarmConfig;
use crate::gesture::GestureMode;
use crate::path::PathHistory;

mod dageng;
mod dragon;
mod lotus;
mod shield;

pub use dageng::Dageng;
pub use dragon::Dragon;
pub use lotus::Lotus;
pub use shield::{fibonacci_sphere_point, Shield};

/// Shared, read-only inputs for one tick. Every agent in the tick sees the
/// same context.
#[derive(Clone, Copy, Debug)]
pub struct TickContext<'a> {
    pub time: f32,
    pub dt: f32,
    /// Point the formation is built around: the tracked target, or the origin when idle.
    pub center: Vec3,
    pub agent_count: usize,
    pub is_tracking: bool,
    pub path: &'a PathHistory,
    pub config: &'a SwarmConfig,
}

pub trait Formation: Sync {
    fn mode(&self) -> GestureMode;

    /// World-space point agent `index` steers towards. `position` is the
    /// agent's position at the start of the tick.
    fn target(&self, index: usize, position: Vec3, ctx: &TickContext) -> Vec3;

    /// Unit facing direction after integration.
    fn facing(&self, index: usize, position: Vec3, velocity: Vec3, ctx: &TickContext) -> Vec3;

    fn target_scale(&self, _index: usize, ctx: &TickContext) -> f32 {
        ctx.config.scale.default_scale
    }

    /// Per-frame lerp rate towards [`Formation::target_scale`].
    fn scale_rate(&self, _index: usize, ctx: &TickContext) -> f32 {
        ctx.config.scale.rate
    }

    fn base_speed(&self, ctx: &TickContext) -> f32 {
        ctx.config.motion.max_speed
    }

    fn steer_factor(&self, _ctx: &TickContext) -> f32 {
        1.0
    }

    /// Whether index-adjacent agents push each other apart.
    fn separation(&self, _ctx: &TickContext) -> bool {
        true
    }

    fn aura(&self, index: usize, ctx: &TickContext) -> bool {
        aura_flash(
            ctx.time,
            index,
            crate::constants::AURA_RATE,
            crate::constants::AURA_PHASE,
            crate::constants::AURA_THRESHOLD,
        )
    }
}

/// Time and index phased flash: on while `sin(rate * t + phase * i)` is above `threshold`.
#[inline]
pub fn aura_flash(time: f32, index: usize, rate: f32, phase: f32, threshold: f32) -> bool {
    (time * rate + index as f32 * phase).sin() > threshold
}

static DRAGON: Dragon = Dragon;
static SHIELD: Shield = Shield;
static LOTUS: Lotus = Lotus;
static DAGENG: Dageng = Dageng;

pub fn formation_for(mode: GestureMode) -> &'static dyn Formation {
    match mode {
        GestureMode::Dragon => &DRAGON,
        GestureMode::Shield => &SHIELD,
        GestureMode::Lotus => &LOTUS,
        GestureMode::Dageng => &DAGENG,
    }
}

/// Formation that actually drives the swarm: the confirmed one while a hand
/// is tracked, an idle lotus around the origin otherwise.
pub fn effective_mode(confirmed: GestureMode, is_tracking: bool) -> GestureMode {
    if is_tracking {
        confirmed
    } else {
        GestureMode::Lotus
    }
}
