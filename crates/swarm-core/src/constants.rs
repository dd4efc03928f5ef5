use glam::Vec3;

// Shared tuning constants for the swarm engine. Distances are world units,
// speeds are units per second, times are seconds unless noted.

// Swarm sizing
pub const AGENT_COUNT_STANDARD: usize = 500;
pub const AGENT_COUNT_CONSTRAINED: usize = 300; // phones and narrow viewports
pub const PATH_HISTORY_LEN: usize = 300;

// Frame timing
pub const FRAME_DT: f32 = 1.0 / 60.0; // nominal tick length
pub const FRAMES_PER_SEC: f32 = 60.0; // lerp rates below are expressed per frame at this rate

// Gesture recognition
pub const LANDMARK_COUNT: usize = 21;
pub const FINGER_EXTENDED_DEG: f32 = 150.0; // middle-joint angle above which a digit is straight
pub const GESTURE_DEBOUNCE_SEC: f64 = 0.25;

// Motion limits
pub const MAX_SPEED: f32 = 25.0;
pub const SPRINT_SPEED: f32 = 50.0;
pub const STEER_FORCE: f32 = 28.0;
pub const SPRINT_GAP: f32 = 4.0; // agents farther than this from their target sprint
pub const ARRIVAL_GAP: f32 = 1.0; // inside this gap desired speed is gap * max speed
pub const ARRIVAL_RADIUS: f32 = 10.0; // desired speed ramps linearly to zero inside this radius
pub const SNAPPY_STEER_FACTOR: f32 = 3.0; // Shield and Lotus
pub const FACING_MIN_SPEED: f32 = 0.1; // below this, facing falls back to the formation default

// Separation between index-adjacent agents
pub const SEPARATION_DISTANCE: f32 = 3.0;
pub const SEPARATION_FORCE: f32 = 10.0;
pub const SEPARATION_MIN_GAP: f32 = 0.01; // coincident agents get no impulse
pub const SEPARATION_SOFT_GAP: f32 = 0.5; // floor for the inverse-gap gain

// Wander noise
pub const NOISE_SCALE: f32 = 0.3;
pub const NOISE_STRENGTH: f32 = 1.0;

// Trail
pub const TRAIL_MIN_STEP: f32 = 0.1;
pub const TRAIL_EXTEND_STEP: f32 = 0.3;
pub const TRAIL_MIN_DIRECTION: f32 = 0.01;

// Dragon
pub const DRAGON_DENSITY: f32 = 0.8; // trail samples advanced per agent index
pub const DRAGON_HEAD_COUNT: usize = 5;
pub const DRAGON_HEAD_WOBBLE: f32 = 0.3;
pub const DRAGON_HEAD_WOBBLE_RATE: f32 = 8.0;
pub const DRAGON_BODY_JITTER: f32 = 0.2;
pub const DRAGON_BODY_JITTER_RATE: f32 = 10.0;

// Shield
pub const SHIELD_RADIUS: f32 = 18.0;
pub const SHIELD_ORBIT_SPEED: f32 = 2.5;
pub const SHIELD_TILT_SPEED: f32 = 0.3;
pub const SHIELD_JITTER: f32 = 0.2;

// Lotus
pub const LOTUS_INNER_RADIUS: f32 = 6.0;
pub const LOTUS_OUTER_RADIUS: f32 = 24.0;
pub const LOTUS_ROTATE_SPEED: f32 = 2.5;
pub const LOTUS_BREATHE: f32 = 0.05; // fractional radius swing
pub const LOTUS_FLOAT: f32 = 0.2; // z wobble of the flattened disc

// Dageng
pub const DAGENG_RADIUS: f32 = 30.0;
pub const DAGENG_HEIGHT: f32 = 20.0;
pub const DAGENG_ROTATE_SPEED: f32 = 0.2;
pub const DAGENG_LAYERS: usize = 10;
pub const DAGENG_LAYER_SPACING: f32 = 1.5;
pub const DAGENG_RING_CLEARANCE: f32 = 2.0; // keeps the rings clear of the lead
pub const DAGENG_LEAD_LIFT: f32 = 5.0;
pub const DAGENG_COLUMN_DROP: f32 = 10.0;

// Scale
pub const DEFAULT_SCALE: f32 = 1.0;
pub const LEAD_SCALE: f32 = 6.0;
pub const ARRAY_SCALE: f32 = 1.5;
pub const SCALE_LERP: f32 = 0.02; // per frame, roughly a two second transition
pub const LEAD_SCALE_LERP: f32 = 0.01;
pub const AURA_SCALE_BOOST: f32 = 1.3;

// Aura flashing
pub const AURA_RATE: f32 = 20.0;
pub const AURA_PHASE: f32 = 0.7;
pub const AURA_THRESHOLD: f32 = 0.3;
pub const SHIELD_AURA_RATE: f32 = 30.0;
pub const SHIELD_AURA_PHASE: f32 = 0.5;
pub const SHIELD_AURA_THRESHOLD: f32 = 0.0;

// Camera used for unprojecting the tracked anchor
pub const CAMERA_EYE: [f32; 3] = [0.0, 3.0, 35.0];
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const TRACKING_PLANE_Z: f32 = 0.0; // world plane the anchor ray is intersected with
pub const TRACKING_NDC_DEPTH: f32 = 0.5;

// Spawn volume
pub const SPAWN_EXTENT: [f32; 3] = [20.0, 15.0, 10.0];
pub const SPAWN_CENTER: [f32; 3] = [0.0, 0.0, -5.0];

// Camera framing fallback when the swarm is empty
pub const DEFAULT_FORMATION_SPAN: f32 = 10.0;

#[inline]
pub fn spawn_center_vec3() -> Vec3 {
    Vec3::from(SPAWN_CENTER)
}

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}
