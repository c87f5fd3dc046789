use serde::{Deserialize, Serialize};

use super::particle::{Particle, ParticleId};

/// Elastic, damped constraint between two particles of the same mesh.
///
/// Endpoints are referenced by index, never owned; the rest length is fixed
/// once by the builder to the endpoint distance at construction time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spring {
    pub a: ParticleId,
    pub b: ParticleId,
    pub rest_length: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl Spring {
    /// Creates a spring with a zero rest length; the mesh builder measures
    /// and assigns the real rest length once all springs exist.
    pub fn new(a: ParticleId, b: ParticleId, stiffness: f32, damping: f32) -> Self {
        Self {
            a,
            b,
            rest_length: 0.0,
            stiffness,
            damping,
        }
    }

    /// Current Euclidean distance between the two endpoints.
    pub fn current_length(&self, particles: &[Particle]) -> f32 {
        particles[self.a.index()]
            .position
            .distance(particles[self.b.index()].position)
    }
}
