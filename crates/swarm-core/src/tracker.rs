use glam::{Vec2, Vec3};

use crate::camera::{ray_plane_z, Camera};
use crate::constants::TRACKING_PLANE_Z;
use crate::gesture::{GestureMode, HandLandmarks};

/// Whether a hand is currently seen, and where it last pointed.
///
/// `target_position` survives tracking loss so the swarm does not jump when
/// the hand comes back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackingState {
    pub is_tracking: bool,
    pub target_position: Vec3,
}

impl Default for TrackingState {
    fn default() -> Self {
        Self {
            is_tracking: false,
            target_position: Vec3::ZERO,
        }
    }
}

/// Image-space anchor for the confirmed mode: palm centre for the symmetric
/// formations, index fingertip otherwise.
pub fn anchor_for(mode: GestureMode, hand: &HandLandmarks) -> Vec2 {
    if mode.tracks_palm() {
        hand.palm_center()
    } else {
        hand.index_tip()
    }
}

/// Normalised image coordinates to NDC. The webcam image is mirrored, so x flips.
#[inline]
pub fn image_to_ndc(p: Vec2) -> Vec2 {
    Vec2::new((1.0 - p.x) * 2.0 - 1.0, -(p.y * 2.0 - 1.0))
}

/// Converts hand landmarks into a world-space target point each tick.
#[derive(Clone, Debug)]
pub struct TargetTracker {
    camera: Camera,
    plane_z: f32,
    state: TrackingState,
}

impl TargetTracker {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            plane_z: TRACKING_PLANE_Z,
            state: TrackingState::default(),
        }
    }

    pub fn with_plane_z(mut self, plane_z: f32) -> Self {
        self.plane_z = plane_z;
        self
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn state(&self) -> TrackingState {
        self.state
    }

    /// Unproject an image-space anchor onto the tracking plane.
    pub fn project_anchor(&self, anchor: Vec2) -> Option<Vec3> {
        let (ro, rd) = self.camera.ray_through_ndc(image_to_ndc(anchor));
        ray_plane_z(ro, rd, self.plane_z).map(|t| ro + rd * t)
    }

    /// Record a detected hand. Returns the new world point when the anchor
    /// could be placed on the tracking plane.
    pub fn observe(&mut self, mode: GestureMode, hand: &HandLandmarks) -> Option<Vec3> {
        self.state.is_tracking = true;
        let point = self.project_anchor(anchor_for(mode, hand))?;
        self.state.target_position = point;
        Some(point)
    }

    /// The hand left the frame; keep the last target.
    pub fn lose(&mut self) {
        self.state.is_tracking = false;
    }
}
