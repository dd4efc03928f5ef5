//! Cheap coherent noise for the dragon body.
//!
//! Three coupled sinusoids stand in for gradient noise. The result is smooth,
//! deterministic and bounded to [-1, 1], which is all the formation needs.

use glam::Vec3;

/// Scalar noise sample in [-1, 1].
#[inline]
pub fn noise3(x: f32, y: f32, z: f32) -> f32 {
    (x * 1.2 + y * 0.8).sin() * (y * 1.1 + z * 0.9).cos() * (z * 0.7 + x * 1.3).sin()
}

/// Per-axis wander offset for an agent at `pos`, each axis in [-1, 1].
///
/// The axes read rotated position pairs and time-shifted fields so they stay
/// decorrelated.
pub fn wander(pos: Vec3, scale: f32, time: f32) -> Vec3 {
    let p = pos * scale;
    Vec3::new(
        noise3(p.x, p.y, time),
        noise3(p.y, p.z, time + 100.0),
        noise3(p.z, p.x, time + 200.0),
    )
}
