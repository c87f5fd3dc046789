use glam::Vec2;

use crate::config::SimConfig;
use crate::core::mesh::Mesh;
use crate::core::spring::Spring;

/// Accumulates all internal and ambient forces for one sub-step.
///
/// Zeroes the force buffer of every spring endpoint, adds elastic and damping
/// contributions per spring, then gravity per particle. Positions and
/// velocities are read-only here; only force buffers are written. Obstacle
/// normal forces are injected afterwards by the collision pass.
pub fn accumulate_forces(mesh: &mut Mesh, config: &SimConfig) {
    clear_endpoint_forces(mesh);
    accumulate_spring_forces(mesh, config);
    accumulate_gravity(mesh, config);
}

/// Computes the force a spring applies to its `a` endpoint; `b` receives the
/// negation.
///
/// The elastic magnitude is `stiffness * sign(delta) * |delta|^exponent`
/// along the spring axis (full four-quadrant `atan2`); damping follows the
/// relative endpoint velocity per component. A zero-length spring has no
/// defined axis and contributes only its damping term.
pub fn spring_force(spring: &Spring, offset: Vec2, relative_velocity: Vec2, exponent: f32) -> Vec2 {
    let mut force = relative_velocity * spring.damping;

    let length = offset.length();
    if length > 0.0 {
        let theta = offset.y.atan2(offset.x);
        let delta = length - spring.rest_length;
        let magnitude = spring.stiffness * delta.signum() * delta.abs().powf(exponent);
        force += magnitude * Vec2::from_angle(theta);
    }

    force
}

fn clear_endpoint_forces(mesh: &mut Mesh) {
    let (particles, springs) = mesh.split_mut();
    for spring in springs {
        particles[spring.a.index()].clear_forces();
        particles[spring.b.index()].clear_forces();
    }
}

fn accumulate_spring_forces(mesh: &mut Mesh, config: &SimConfig) {
    for k in 0..mesh.springs().len() {
        let spring = mesh.springs()[k];
        let Some((a, b)) = mesh.particle_pair_mut(spring.a, spring.b) else {
            continue;
        };

        let offset = b.position - a.position;
        let relative_velocity = b.velocity - a.velocity;
        let force = spring_force(&spring, offset, relative_velocity, config.spring_exponent);

        // Newton's third law: equal and opposite.
        a.apply_force(force);
        b.apply_force(-force);
    }
}

fn accumulate_gravity(mesh: &mut Mesh, config: &SimConfig) {
    for particle in mesh.particles_mut() {
        particle.force.y -= config.gravity * particle.mass;
    }
}
