use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable dense index of a particle inside its [`Mesh`](super::mesh::Mesh).
///
/// Ids are plain indices into the mesh's particle array; they stay valid for
/// the life of the mesh and are invalidated wholesale by a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ParticleId(pub(crate) usize);

impl ParticleId {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Point mass carrying kinematic state and an accumulated force buffer.
///
/// The force buffer is zeroed at the start of every sub-step's accumulation
/// phase and consumed by the integrator at the end of the sub-step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub force: Vec2,
    pub mass: f32,
    pub radius: f32,
}

impl Particle {
    pub fn new(position: Vec2, mass: f32, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            mass,
            radius,
        }
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    pub fn clear_forces(&mut self) {
        self.force = Vec2::ZERO;
    }
}
