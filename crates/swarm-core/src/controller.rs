use glam::Vec3;

use crate::camera::Camera;
use crate::config::SwarmConfig;
use crate::debounce::GestureDebouncer;
use crate::error::Result;
use crate::gesture::{classify_with, GestureMode, HandLandmarks};
use crate::snapshot::SwarmSnapshot;
use crate::swarm::{SwarmEngine, SwarmFrame};
use crate::tracker::{TargetTracker, TrackingState};

/// What the hand-tracking collaborator delivered for this tick.
#[derive(Clone, Debug, PartialEq)]
pub enum HandInput {
    /// A new video frame with a detected hand.
    Detected(HandLandmarks),
    /// The video frame has not advanced since the last tick; nothing new to read.
    Unchanged,
    /// No hand in the latest frame, or no camera at all.
    Absent,
}

/// Status shown by the UI collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwarmStatus {
    pub is_tracking: bool,
    pub confirmed: GestureMode,
}

impl SwarmStatus {
    pub fn label(&self) -> &'static str {
        if self.is_tracking {
            self.confirmed.label()
        } else {
            "Waiting for Gesture..."
        }
    }
}

/// Runs one tick of the whole pipeline: classify, debounce, track, update the
/// trail, then steer every agent.
#[derive(Clone, Debug)]
pub struct SwarmController {
    config: SwarmConfig,
    debouncer: GestureDebouncer,
    tracker: TargetTracker,
    engine: SwarmEngine,
}

impl SwarmController {
    pub fn new(config: SwarmConfig, camera: Camera, seed: u64) -> Result<Self> {
        if let Err(e) = config.validate() {
            log::warn!("[controller] rejected config: {e}");
            return Err(e);
        }
        log::info!(
            "[controller] agents={} tier={} trail={} debounce={:.2}s",
            config.agent_count,
            config.tier.as_str(),
            config.trail.length,
            config.debounce_sec
        );
        Ok(Self {
            debouncer: GestureDebouncer::new(config.debounce_sec),
            tracker: TargetTracker::new(camera),
            engine: SwarmEngine::new(&config, seed),
            config,
        })
    }

    /// Advance one frame. `now_sec` is a monotonic clock, `dt` the frame delta.
    pub fn tick(&mut self, now_sec: f64, dt: f32, input: &HandInput) {
        let was_tracking = self.tracker.state().is_tracking;

        match input {
            HandInput::Detected(hand) => {
                let observed = classify_with(hand, self.config.finger_extended_deg);
                if let Some(mode) = self.debouncer.observe(observed, now_sec) {
                    log::info!("[gesture] confirmed {}", mode.as_str());
                }
                let mode = self.debouncer.confirmed();
                let point = self.tracker.observe(mode, hand);
                if mode.uses_trail() {
                    match point {
                        Some(p) => {
                            self.engine.record_trail(p);
                        }
                        None => {
                            self.engine.extend_trail();
                        }
                    }
                }
            }
            HandInput::Unchanged => {
                if was_tracking && self.debouncer.confirmed().uses_trail() {
                    self.engine.extend_trail();
                }
            }
            HandInput::Absent => self.tracker.lose(),
        }

        let tracking = self.tracker.state();
        if tracking.is_tracking != was_tracking {
            if tracking.is_tracking {
                log::info!("[tracker] hand acquired");
            } else {
                log::info!("[tracker] hand lost; holding {:?}", tracking.target_position);
            }
        }

        self.engine.step(&SwarmFrame {
            time: now_sec as f32,
            dt,
            confirmed: self.debouncer.confirmed(),
            is_tracking: tracking.is_tracking,
            target: tracking.target_position,
        });
    }

    /// The rendering side moved the camera.
    pub fn set_camera(&mut self, camera: Camera) {
        self.tracker.set_camera(camera);
    }

    pub fn status(&self) -> SwarmStatus {
        SwarmStatus {
            is_tracking: self.tracker.state().is_tracking,
            confirmed: self.debouncer.confirmed(),
        }
    }

    pub fn tracking(&self) -> TrackingState {
        self.tracker.state()
    }

    pub fn target_position(&self) -> Vec3 {
        self.tracker.state().target_position
    }

    pub fn engine(&self) -> &SwarmEngine {
        &self.engine
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    pub fn snapshot(&self) -> SwarmSnapshot {
        self.engine.snapshot()
    }
}
