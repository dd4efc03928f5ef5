use glam::Vec3;
use rand::prelude::*;

use crate::config::SwarmConfig;
use crate::constants::{spawn_center_vec3, SPAWN_EXTENT};
use crate::formation::{effective_mode, formation_for, TickContext};
use crate::gesture::GestureMode;
use crate::path::PathHistory;
use crate::snapshot::{AgentView, FormationBounds, SwarmSnapshot};
use crate::steering::{self, SteeringParams};

/// One simulated blade.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    pub id: usize,
    pub position: Vec3,
    pub velocity: Vec3,
    pub current_scale: f32,
    /// Unit facing direction from the last tick.
    pub facing: Vec3,
    pub aura: bool,
}

impl Agent {
    pub fn new(id: usize, position: Vec3, scale: f32) -> Self {
        Self {
            id,
            position,
            velocity: Vec3::ZERO,
            current_scale: scale,
            facing: Vec3::NEG_Z,
            aura: false,
        }
    }
}

/// Per-tick inputs taken from the debouncer and tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwarmFrame {
    pub time: f32,
    pub dt: f32,
    pub confirmed: GestureMode,
    pub is_tracking: bool,
    /// Last tracked world point. Ignored while not tracking.
    pub target: Vec3,
}

/// Owns the agent pool and the path history and advances them once per tick.
#[derive(Clone, Debug)]
pub struct SwarmEngine {
    config: SwarmConfig,
    agents: Vec<Agent>,
    path: PathHistory,
    // agent positions as of the start of the current tick
    prev_positions: Vec<Vec3>,
    mode: GestureMode,
    confirmed: GestureMode,
    is_tracking: bool,
    time: f32,
}

impl SwarmEngine {
    /// Spawn `config.agent_count` agents at seeded random positions.
    pub fn new(config: &SwarmConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let center = spawn_center_vec3();
        let extent = Vec3::from(SPAWN_EXTENT);
        let positions = (0..config.agent_count)
            .map(|_| {
                let r = Vec3::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>());
                center + (r - Vec3::splat(0.5)) * extent
            })
            .collect();
        Self::from_positions(config, positions)
    }

    /// Build an engine with explicit starting positions; the agent count is
    /// the number of positions given.
    pub fn from_positions(config: &SwarmConfig, positions: Vec<Vec3>) -> Self {
        let scale = config.scale.default_scale;
        let agents: Vec<Agent> = positions
            .into_iter()
            .enumerate()
            .map(|(id, p)| Agent::new(id, p, scale))
            .collect();
        let mut config = config.clone();
        config.agent_count = agents.len();
        Self {
            prev_positions: Vec::with_capacity(agents.len()),
            path: PathHistory::new(&config.trail),
            agents,
            config,
            mode: GestureMode::Lotus,
            confirmed: GestureMode::Lotus,
            is_tracking: false,
            time: 0.0,
        }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn path(&self) -> &PathHistory {
        &self.path
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    /// Formation used on the last tick.
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Store a freshly tracked point in the trail.
    pub fn record_trail(&mut self, point: Vec3) -> bool {
        self.path.record_motion(point)
    }

    /// Advance the trail without new input.
    pub fn extend_trail(&mut self) -> bool {
        self.path.extend()
    }

    /// Advance every agent by one tick.
    ///
    /// All agents read the same context; separation reads the neighbour's
    /// position from before this tick, so update order does not matter.
    pub fn step(&mut self, frame: &SwarmFrame) {
        let config = &self.config;
        let path = &self.path;
        let agents = &mut self.agents;
        let prev_positions = &mut self.prev_positions;

        let mode = effective_mode(frame.confirmed, frame.is_tracking);
        let formation = formation_for(mode);
        let ctx = TickContext {
            time: frame.time,
            dt: frame.dt,
            center: if frame.is_tracking {
                frame.target
            } else {
                Vec3::ZERO
            },
            agent_count: agents.len(),
            is_tracking: frame.is_tracking,
            path,
            config,
        };

        prev_positions.clear();
        prev_positions.extend(agents.iter().map(|a| a.position));

        let params = SteeringParams::new(
            &config.motion,
            formation.base_speed(&ctx),
            formation.steer_factor(&ctx),
        );
        let separate = formation.separation(&ctx);
        let dt = frame.dt;

        for (i, agent) in agents.iter_mut().enumerate() {
            let target = formation.target(i, prev_positions[i], &ctx);
            let mut velocity = steering::steer(agent.position, agent.velocity, target, &params, dt);
            if separate && i > 0 {
                velocity += steering::separation_impulse(
                    prev_positions[i],
                    prev_positions[i - 1],
                    &config.separation,
                    dt,
                );
                velocity = velocity.clamp_length_max(config.motion.sprint_speed);
            }
            agent.velocity = velocity;
            agent.position += velocity * dt;
            agent.facing = formation.facing(i, agent.position, velocity, &ctx);
            agent.current_scale = steering::smooth_scale(
                agent.current_scale,
                formation.target_scale(i, &ctx),
                formation.scale_rate(i, &ctx),
                dt,
            );
            agent.aura = formation.aura(i, &ctx);
        }

        if mode != self.mode {
            log::debug!("[swarm] formation {} -> {}", self.mode.as_str(), mode.as_str());
        }
        self.mode = mode;
        self.confirmed = frame.confirmed;
        self.is_tracking = frame.is_tracking;
        self.time = frame.time;
    }

    pub fn bounds(&self) -> FormationBounds {
        FormationBounds::from_positions(self.agents.iter().map(|a| a.position))
    }

    /// Owned, read-only copy of the render state for other consumers.
    pub fn snapshot(&self) -> SwarmSnapshot {
        let aura_boost = self.config.scale.aura_boost;
        let agents = self
            .agents
            .iter()
            .map(|a| AgentView::from_agent(a, aura_boost))
            .collect();
        SwarmSnapshot {
            time: self.time,
            mode: self.mode,
            confirmed: self.confirmed,
            is_tracking: self.is_tracking,
            agents,
            bounds: self.bounds(),
        }
    }
}
