//! Gesture-driven swarm choreography.
//!
//! A hand pose selects one of four formations; a debouncer keeps the choice
//! stable, a tracker turns the hand into a world-space target, and the swarm
//! engine steers every agent towards its formation slot once per frame. The
//! crate has no platform dependencies; capture, rendering and UI live with
//! the front-ends.

pub mod camera;
pub mod config;
pub mod constants;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod formation;
pub mod gesture;
pub mod noise;
pub mod path;
pub mod snapshot;
pub mod steering;
pub mod swarm;
pub mod tracker;

pub use camera::Camera;
pub use config::{DeviceTier, SwarmConfig};
pub use constants::*;
pub use controller::{HandInput, SwarmController, SwarmStatus};
pub use debounce::GestureDebouncer;
pub use error::{Result, SwarmError};
pub use formation::{formation_for, Formation, TickContext};
pub use gesture::{classify, FingerState, GestureMode, HandLandmarks};
pub use path::PathHistory;
pub use snapshot::{AgentInstance, AgentView, FormationBounds, SwarmSnapshot};
pub use swarm::{Agent, SwarmEngine, SwarmFrame};
pub use tracker::{TargetTracker, TrackingState};
