use crate::config::{SimConfig, REST_VELOCITY_THRESHOLD};
use crate::core::mesh::Mesh;
use crate::core::particle::Particle;

/// Semi-implicit Euler integrator with a rest-velocity cutoff.
#[derive(Debug, Clone)]
pub struct Integrator {
    /// Velocity components below this magnitude are zeroed to suppress
    /// numerical creep in particles that should be at rest.
    pub rest_threshold: f32,
}

impl Default for Integrator {
    fn default() -> Self {
        Self {
            rest_threshold: REST_VELOCITY_THRESHOLD,
        }
    }
}

impl Integrator {
    pub fn new(rest_threshold: f32) -> Self {
        Self { rest_threshold }
    }

    /// Advances one particle by a single sub-step: velocity from accumulated
    /// force first, position from the updated velocity second.
    pub fn integrate_particle(&self, particle: &mut Particle, dt: f32, config: &SimConfig) {
        let acceleration = particle.force / particle.mass;
        particle.velocity += acceleration * dt * config.velocity_scale;

        if particle.velocity.x.abs() < self.rest_threshold {
            particle.velocity.x = 0.0;
        }
        if particle.velocity.y.abs() < self.rest_threshold {
            particle.velocity.y = 0.0;
        }

        particle.position += particle.velocity * dt;
    }

    /// Advances every particle in the mesh by one sub-step.
    ///
    /// Must be called once per sub-step, never once per frame tick: explicit
    /// integration of stiff springs is only stable for sufficiently small
    /// per-step deltas.
    pub fn step(&self, mesh: &mut Mesh, dt: f32, config: &SimConfig) {
        for particle in mesh.particles_mut() {
            self.integrate_particle(particle, dt, config);
        }
    }
}
