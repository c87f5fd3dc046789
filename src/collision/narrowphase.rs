use crate::{
    config::SimConfig,
    core::{mesh::Mesh, obstacle::ObstacleSet, particle::ParticleId},
};

use super::queries::project_on_segment;

/// Resolves every particle/obstacle overlap by direct positional correction.
///
/// Each overlapping particle is pushed away from the closest point on the
/// segment by exactly the overlap amount, ending tangent to the obstacle
/// surface. When `config.normal_force` is set, an approximate reaction force
/// is also injected into the particle's force buffer so a resting particle
/// does not sink through the obstacle under gravity; this pass therefore runs
/// after force accumulation and before integration.
pub fn resolve_obstacle_collisions(mesh: &mut Mesh, obstacles: &ObstacleSet, config: &SimConfig) {
    for particle in mesh.particles_mut() {
        for segment in obstacles.iter() {
            let projection = project_on_segment(segment.start, segment.end, particle.position);
            let contact_distance = particle.radius + segment.thickness;
            if projection.distance > contact_distance {
                continue;
            }

            // A particle sitting exactly on the closest point has no usable
            // push direction; skip the correction rather than divide by zero.
            if projection.distance > 0.0 {
                let overlap = contact_distance - projection.distance;
                let direction = (particle.position - projection.point) / projection.distance;
                particle.position += direction * overlap;
            }

            if config.normal_force {
                let tangent = segment.end - segment.start;
                let theta = tangent.y.atan2(tangent.x);
                let (sin, cos) = theta.sin_cos();

                let supported = (cos * particle.force.y).max(0.0);
                let normal =
                    cos * particle.mass * config.gravity - supported + sin * particle.force.x;

                particle.force.x -= normal * sin;
                particle.force.y += normal * cos;
            }
        }
    }
}

/// Resolves particle/particle overlaps with a symmetric positional split.
///
/// Every unordered pair is tested (O(n^2)); both particles of an overlapping
/// pair move half the overlap along the line of centers, regardless of mass,
/// so the post-correction separation equals the sum of radii exactly.
pub fn resolve_self_collisions(mesh: &mut Mesh) {
    let count = mesh.len();
    for i in 0..count {
        for j in i + 1..count {
            let Some((first, second)) =
                mesh.particle_pair_mut(ParticleId::from_index(i), ParticleId::from_index(j))
            else {
                continue;
            };

            let offset = first.position - second.position;
            let contact_distance = first.radius + second.radius;
            if offset.length_squared() > contact_distance * contact_distance {
                continue;
            }

            let distance = offset.length();
            // Coincident centers leave the push direction undefined.
            if distance <= 0.0 {
                continue;
            }

            let push = offset / distance * (contact_distance - distance) * 0.5;
            first.position += push;
            second.position -= push;
        }
    }
}
