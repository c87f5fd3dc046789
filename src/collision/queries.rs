use glam::Vec2;

use crate::core::{
    mesh::Mesh,
    obstacle::{ObstacleId, ObstacleSet, SegmentEnd},
    particle::ParticleId,
};

/// Closest point on a segment to a query point.
#[derive(Debug, Clone, Copy)]
pub struct SegmentProjection {
    pub point: Vec2,
    /// Normalized position along the segment, clamped to `[0, 1]`.
    pub t: f32,
    pub distance: f32,
}

/// Projects `point` onto the segment `start..end`, clamping to the segment.
///
/// A zero-length segment projects onto its start point, so degenerate
/// obstacles behave as point colliders instead of dividing by zero.
pub fn project_on_segment(start: Vec2, end: Vec2, point: Vec2) -> SegmentProjection {
    let edge = end - start;
    let length_sq = edge.length_squared();
    if length_sq <= f32::EPSILON {
        return SegmentProjection {
            point: start,
            t: 0.0,
            distance: point.distance(start),
        };
    }

    let t = ((point - start).dot(edge) / length_sq).clamp(0.0, 1.0);
    let closest = start + edge * t;
    SegmentProjection {
        point: closest,
        t,
        distance: point.distance(closest),
    }
}

/// Picking queries backing the host's drag interaction.
pub struct Picking;

impl Picking {
    /// Nearest particle whose circle, with its squared radius scaled by
    /// `select_factor`, contains `point`.
    pub fn particle_near(mesh: &Mesh, point: Vec2, select_factor: f32) -> Option<ParticleId> {
        let mut best: Option<(ParticleId, f32)> = None;

        for (index, particle) in mesh.particles().iter().enumerate() {
            let dist_sq = particle.position.distance_squared(point);
            if dist_sq >= particle.radius * particle.radius * select_factor {
                continue;
            }
            if best.map_or(true, |(_, closest)| dist_sq < closest) {
                best = Some((ParticleId::from_index(index), dist_sq));
            }
        }

        best.map(|(id, _)| id)
    }

    /// Nearest obstacle endpoint whose circle, with the obstacle's squared
    /// thickness scaled by `select_factor`, contains `point`.
    pub fn obstacle_endpoint_near(
        obstacles: &ObstacleSet,
        point: Vec2,
        select_factor: f32,
    ) -> Option<(ObstacleId, SegmentEnd)> {
        let mut best: Option<(ObstacleId, SegmentEnd, f32)> = None;

        for (index, segment) in obstacles.segments().iter().enumerate() {
            for end in [SegmentEnd::Start, SegmentEnd::End] {
                let dist_sq = segment.endpoint(end).distance_squared(point);
                if dist_sq >= segment.thickness * segment.thickness * select_factor {
                    continue;
                }
                if best.map_or(true, |(_, _, closest)| dist_sq < closest) {
                    best = Some((ObstacleId::from_index(index), end, dist_sq));
                }
            }
        }

        best.map(|(id, end, _)| (id, end))
    }
}
