//! Formation and motion tuning, resolved once when a controller is built.
//!
//! Every field defaults to the matching value in [`crate::constants`]. A
//! [`DeviceTier`] only changes the agent count; everything else is shared.

use crate::constants::*;
use crate::error::{Result, SwarmError};

/// Hardware class the session runs on. Constrained devices get fewer agents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeviceTier {
    #[default]
    Standard,
    Constrained,
}

impl DeviceTier {
    pub fn agent_count(self) -> usize {
        match self {
            DeviceTier::Standard => AGENT_COUNT_STANDARD,
            DeviceTier::Constrained => AGENT_COUNT_CONSTRAINED,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeviceTier::Standard => "standard",
            DeviceTier::Constrained => "constrained",
        }
    }
}

/// Speed limits and steering gains shared by every formation.
///
/// - `max_speed`: cruising speed between the arrival and sprint gaps
/// - `sprint_speed`: speed used when an agent is far from its target
/// - `steer_force`: maximum velocity change per second before the formation's steer factor
/// - `sprint_gap` / `arrival_gap`: distance thresholds selecting sprint and arrival speed
/// - `arrival_radius`: radius inside which desired speed ramps down with the gap
/// - `snappy_steer_factor`: steer multiplier for formations that must resolve quickly
#[derive(Clone, Debug, PartialEq)]
pub struct MotionParams {
    pub max_speed: f32,
    pub sprint_speed: f32,
    pub steer_force: f32,
    pub sprint_gap: f32,
    pub arrival_gap: f32,
    pub arrival_radius: f32,
    pub snappy_steer_factor: f32,
    pub facing_min_speed: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            max_speed: MAX_SPEED,
            sprint_speed: SPRINT_SPEED,
            steer_force: STEER_FORCE,
            sprint_gap: SPRINT_GAP,
            arrival_gap: ARRIVAL_GAP,
            arrival_radius: ARRIVAL_RADIUS,
            snappy_steer_factor: SNAPPY_STEER_FACTOR,
            facing_min_speed: FACING_MIN_SPEED,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeparationParams {
    pub distance: f32,
    pub force: f32,
    pub min_gap: f32,
    pub soft_gap: f32,
}

impl Default for SeparationParams {
    fn default() -> Self {
        Self {
            distance: SEPARATION_DISTANCE,
            force: SEPARATION_FORCE,
            min_gap: SEPARATION_MIN_GAP,
            soft_gap: SEPARATION_SOFT_GAP,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NoiseParams {
    pub scale: f32,
    pub strength: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            scale: NOISE_SCALE,
            strength: NOISE_STRENGTH,
        }
    }
}

/// Path history sizing and the motion filter applied when recording into it.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailParams {
    pub length: usize,
    pub min_step: f32,
    pub extend_step: f32,
    pub min_direction: f32,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            length: PATH_HISTORY_LEN,
            min_step: TRAIL_MIN_STEP,
            extend_step: TRAIL_EXTEND_STEP,
            min_direction: TRAIL_MIN_DIRECTION,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragonParams {
    pub density: f32,
    pub head_count: usize,
    pub head_wobble: f32,
    pub head_wobble_rate: f32,
    pub body_jitter: f32,
    pub body_jitter_rate: f32,
}

impl Default for DragonParams {
    fn default() -> Self {
        Self {
            density: DRAGON_DENSITY,
            head_count: DRAGON_HEAD_COUNT,
            head_wobble: DRAGON_HEAD_WOBBLE,
            head_wobble_rate: DRAGON_HEAD_WOBBLE_RATE,
            body_jitter: DRAGON_BODY_JITTER,
            body_jitter_rate: DRAGON_BODY_JITTER_RATE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShieldParams {
    pub radius: f32,
    pub orbit_speed: f32,
    pub tilt_speed: f32,
    pub jitter: f32,
}

impl Default for ShieldParams {
    fn default() -> Self {
        Self {
            radius: SHIELD_RADIUS,
            orbit_speed: SHIELD_ORBIT_SPEED,
            tilt_speed: SHIELD_TILT_SPEED,
            jitter: SHIELD_JITTER,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LotusParams {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub rotate_speed: f32,
    pub breathe: f32,
    pub float_height: f32,
}

impl Default for LotusParams {
    fn default() -> Self {
        Self {
            inner_radius: LOTUS_INNER_RADIUS,
            outer_radius: LOTUS_OUTER_RADIUS,
            rotate_speed: LOTUS_ROTATE_SPEED,
            breathe: LOTUS_BREATHE,
            float_height: LOTUS_FLOAT,
        }
    }
}

/// Layout of the lead agent and the layered cylinder beneath it.
#[derive(Clone, Debug, PartialEq)]
pub struct DagengParams {
    pub radius: f32,
    pub height: f32,
    pub rotate_speed: f32,
    pub layers: usize,
    pub layer_spacing: f32,
    pub ring_clearance: f32,
    pub lead_lift: f32,
    pub column_drop: f32,
}

impl Default for DagengParams {
    fn default() -> Self {
        Self {
            radius: DAGENG_RADIUS,
            height: DAGENG_HEIGHT,
            rotate_speed: DAGENG_ROTATE_SPEED,
            layers: DAGENG_LAYERS,
            layer_spacing: DAGENG_LAYER_SPACING,
            ring_clearance: DAGENG_RING_CLEARANCE,
            lead_lift: DAGENG_LEAD_LIFT,
            column_drop: DAGENG_COLUMN_DROP,
        }
    }
}

/// Target scales and the per-frame interpolation rates used to reach them.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleParams {
    pub default_scale: f32,
    pub lead_scale: f32,
    pub array_scale: f32,
    pub rate: f32,
    pub lead_rate: f32,
    pub aura_boost: f32,
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self {
            default_scale: DEFAULT_SCALE,
            lead_scale: LEAD_SCALE,
            array_scale: ARRAY_SCALE,
            rate: SCALE_LERP,
            lead_rate: LEAD_SCALE_LERP,
            aura_boost: AURA_SCALE_BOOST,
        }
    }
}

/// Complete configuration for one swarm session.
#[derive(Clone, Debug, PartialEq)]
pub struct SwarmConfig {
    pub tier: DeviceTier,
    pub agent_count: usize,
    pub debounce_sec: f64,
    pub finger_extended_deg: f32,
    pub trail: TrailParams,
    pub motion: MotionParams,
    pub separation: SeparationParams,
    pub noise: NoiseParams,
    pub dragon: DragonParams,
    pub shield: ShieldParams,
    pub lotus: LotusParams,
    pub dageng: DagengParams,
    pub scale: ScaleParams,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self::for_tier(DeviceTier::Standard)
    }
}

impl SwarmConfig {
    pub fn for_tier(tier: DeviceTier) -> Self {
        Self {
            tier,
            agent_count: tier.agent_count(),
            debounce_sec: GESTURE_DEBOUNCE_SEC,
            finger_extended_deg: FINGER_EXTENDED_DEG,
            trail: TrailParams::default(),
            motion: MotionParams::default(),
            separation: SeparationParams::default(),
            noise: NoiseParams::default(),
            dragon: DragonParams::default(),
            shield: ShieldParams::default(),
            lotus: LotusParams::default(),
            dageng: DagengParams::default(),
            scale: ScaleParams::default(),
        }
    }

    /// Same tuning with a different agent count; handy for small scenes and tests.
    pub fn with_agent_count(mut self, agent_count: usize) -> Self {
        self.agent_count = agent_count;
        self
    }

    /// Reject values the steering math cannot run with.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(SwarmError::InvalidConfig(msg.to_string()));
        if self.agent_count == 0 {
            return invalid("agent_count must be at least 1");
        }
        if self.trail.length == 0 {
            return invalid("trail.length must be at least 1");
        }
        if !(self.debounce_sec >= 0.0) {
            return invalid("debounce_sec must be non-negative");
        }
        let m = &self.motion;
        if !(m.max_speed > 0.0 && m.sprint_speed > 0.0 && m.steer_force > 0.0) {
            return invalid("speeds and steer_force must be positive");
        }
        if m.sprint_speed < m.max_speed {
            return invalid("sprint_speed must not be below max_speed");
        }
        if !(m.arrival_radius > 0.0) {
            return invalid("arrival_radius must be positive");
        }
        if !(self.shield.radius > 0.0 && self.lotus.outer_radius > 0.0 && self.dageng.radius > 0.0)
        {
            return invalid("formation radii must be positive");
        }
        if !(self.lotus.inner_radius >= 0.0 && self.lotus.inner_radius < self.lotus.outer_radius) {
            return invalid("lotus.inner_radius must lie in [0, outer_radius)");
        }
        if self.dageng.layers == 0 {
            return invalid("dageng.layers must be at least 1");
        }
        let s = &self.scale;
        let rates_ok = [s.rate, s.lead_rate].iter().all(|r| *r > 0.0 && *r <= 1.0);
        if !rates_ok {
            return invalid("scale lerp rates must lie in (0, 1]");
        }
        Ok(())
    }
}
