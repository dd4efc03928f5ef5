//! Camera description used to lift the tracked 2D anchor into the world.
//!
//! The camera itself is owned and moved by the rendering side; the core only
//! reads it once per tick to unproject.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::constants::*;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Map a normalized-device point (x, y in -1..1, z in 0..1) back to world space.
    pub fn unproject(&self, ndc: Vec3) -> Vec3 {
        let p = self.view_projection().inverse() * Vec4::new(ndc.x, ndc.y, ndc.z, 1.0);
        p.truncate() / p.w
    }

    /// Compute a world-space ray through a normalized-device point.
    ///
    /// Returns `(ray_origin, ray_direction)`; the origin is the camera eye.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let p = self.unproject(ndc.extend(TRACKING_NDC_DEPTH));
        let rd = (p - self.eye).try_normalize().unwrap_or(Vec3::NEG_Z);
        (self.eye, rd)
    }
}

/// Distance along a ray to the plane `z = plane_z`, if the plane lies ahead.
#[inline]
pub fn ray_plane_z(ray_origin: Vec3, ray_dir: Vec3, plane_z: f32) -> Option<f32> {
    if ray_dir.z.abs() < 1e-4 {
        return None;
    }
    let t = (plane_z - ray_origin.z) / ray_dir.z;
    (t >= 0.0).then_some(t)
}
