//! Read-only views of the swarm handed to renderers and effects.
//!
//! Consumers never see the live agent pool; they get an owned copy taken
//! after the tick.

use glam::{Mat4, Quat, Vec3};

use crate::constants::DEFAULT_FORMATION_SPAN;
use crate::gesture::GestureMode;
use crate::steering::look_rotation;
use crate::swarm::Agent;

/// Render state of one agent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentView {
    pub position: Vec3,
    pub facing: Vec3,
    pub look_target: Vec3,
    pub rotation: Quat,
    pub scale: f32,
    pub aura: bool,
    /// Aura mesh scale; zero while the aura is off.
    pub aura_scale: f32,
}

impl AgentView {
    pub fn from_agent(agent: &Agent, aura_boost: f32) -> Self {
        Self {
            position: agent.position,
            facing: agent.facing,
            look_target: agent.position + agent.facing,
            rotation: look_rotation(agent.facing),
            scale: agent.current_scale,
            aura: agent.aura,
            aura_scale: if agent.aura {
                agent.current_scale * aura_boost
            } else {
                0.0
            },
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation, self.position)
    }
}

/// Centre and extent of the swarm, used for camera framing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormationBounds {
    pub center: Vec3,
    /// Largest of the x and y extents.
    pub span: f32,
}

impl Default for FormationBounds {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            span: DEFAULT_FORMATION_SPAN,
        }
    }
}

impl FormationBounds {
    pub fn from_positions(positions: impl IntoIterator<Item = Vec3>) -> Self {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut sum = Vec3::ZERO;
        let mut count = 0usize;
        for p in positions {
            min = min.min(p);
            max = max.max(p);
            sum += p;
            count += 1;
        }
        if count == 0 {
            return Self::default();
        }
        let extent = max - min;
        Self {
            center: sum / count as f32,
            span: extent.x.max(extent.y),
        }
    }
}

/// GPU instance record for one blade (and its aura, via `aura_scale`).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct AgentInstance {
    pub model: [[f32; 4]; 4],
    pub aura_scale: f32,
    pub aura: f32,
    pub _pad: [f32; 2],
}

/// Everything a renderer or side effect needs from one tick.
#[derive(Clone, Debug)]
pub struct SwarmSnapshot {
    pub time: f32,
    /// Formation that drove the tick.
    pub mode: GestureMode,
    pub confirmed: GestureMode,
    pub is_tracking: bool,
    pub agents: Vec<AgentView>,
    pub bounds: FormationBounds,
}

impl SwarmSnapshot {
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.agents.iter().map(|a| a.position)
    }

    /// Instance data ready for `bytemuck::cast_slice`.
    pub fn instances(&self) -> Vec<AgentInstance> {
        self.agents
            .iter()
            .map(|a| AgentInstance {
                model: a.model_matrix().to_cols_array_2d(),
                aura_scale: a.aura_scale,
                aura: if a.aura { 1.0 } else { 0.0 },
                _pad: [0.0; 2],
            })
            .collect()
    }
}
