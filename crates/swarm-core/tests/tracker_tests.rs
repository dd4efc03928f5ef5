// Host-side tests for anchor selection and unprojection onto the tracking plane.

use glam::{Vec2, Vec3};
use swarm_core::camera::ray_plane_z;
use swarm_core::tracker::{anchor_for, image_to_ndc};
use swarm_core::{Camera, FingerState, GestureMode, HandLandmarks, TargetTracker};

fn open_hand(wrist: Vec2) -> HandLandmarks {
    HandLandmarks::synthetic(FingerState::new(true, true, true, true, true), wrist)
}

#[test]
fn image_to_ndc_mirrors_x_and_flips_y() {
    assert_eq!(image_to_ndc(Vec2::new(0.5, 0.5)), Vec2::ZERO);
    assert_eq!(image_to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(1.0, 1.0));
    assert_eq!(image_to_ndc(Vec2::new(1.0, 1.0)), Vec2::new(-1.0, -1.0));
}

#[test]
fn image_center_lands_on_the_look_target() {
    let tracker = TargetTracker::new(Camera::default());
    let p = tracker.project_anchor(Vec2::new(0.5, 0.5)).unwrap();
    assert!(p.length() < 1e-3, "got {p:?}");
}

#[test]
fn projected_points_lie_on_the_plane_and_respect_mirroring() {
    let tracker = TargetTracker::new(Camera::default());
    let left_top = tracker.project_anchor(Vec2::new(0.2, 0.2)).unwrap();
    assert!(left_top.z.abs() < 1e-3);
    assert!(left_top.x > 0.0, "image left maps to world right: {left_top:?}");
    assert!(left_top.y > 0.0);

    let right_bottom = tracker.project_anchor(Vec2::new(0.8, 0.8)).unwrap();
    assert!(right_bottom.x < 0.0);
    assert!(right_bottom.y < 0.0);
}

#[test]
fn custom_plane_depth_is_honoured() {
    let tracker = TargetTracker::new(Camera::default()).with_plane_z(-10.0);
    let p = tracker.project_anchor(Vec2::new(0.3, 0.6)).unwrap();
    assert!((p.z + 10.0).abs() < 1e-3);
}

#[test]
fn rays_parallel_to_or_away_from_the_plane_miss() {
    assert_eq!(ray_plane_z(Vec3::ZERO, Vec3::X, 0.0), None);
    assert_eq!(ray_plane_z(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, 0.0), None);
    assert_eq!(ray_plane_z(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, 0.0), Some(5.0));

    let sideways = Camera {
        eye: Vec3::ZERO,
        target: Vec3::X,
        ..Camera::default()
    };
    let tracker = TargetTracker::new(sideways);
    assert_eq!(tracker.project_anchor(Vec2::new(0.5, 0.5)), None);
}

#[test]
fn anchor_follows_confirmed_mode() {
    let h = open_hand(Vec2::new(0.4, 0.7));
    assert_eq!(anchor_for(GestureMode::Shield, &h), h.palm_center());
    assert_eq!(anchor_for(GestureMode::Lotus, &h), h.palm_center());
    assert_eq!(anchor_for(GestureMode::Dragon, &h), h.index_tip());
    assert_eq!(anchor_for(GestureMode::Dageng, &h), h.index_tip());
}

#[test]
fn losing_the_hand_keeps_the_last_target() {
    let mut tracker = TargetTracker::new(Camera::default());
    assert!(!tracker.state().is_tracking);

    let h = open_hand(Vec2::new(0.3, 0.6));
    let p = tracker.observe(GestureMode::Dragon, &h).unwrap();
    assert!(tracker.state().is_tracking);
    assert_eq!(tracker.state().target_position, p);

    tracker.lose();
    assert!(!tracker.state().is_tracking);
    assert_eq!(tracker.state().target_position, p);
}
