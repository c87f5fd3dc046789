use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::error::{Result, SimError};

use super::particle::{Particle, ParticleId};
use super::spring::Spring;

/// Dimensions and placement of a rectangular lattice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatticeParams {
    pub width: f32,
    pub height: f32,
    pub origin: Vec2,
    pub count_x: usize,
    pub count_y: usize,
}

/// Deformable body: a dense set of particles and the springs joining them.
///
/// Particles live in a dense array and springs reference them by index, so a
/// rebuild can never leave a spring pointing at freed storage. Invariant:
/// every spring's two indices are in-bounds for this mesh's particle array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    particles: Vec<Particle>,
    springs: Vec<Spring>,
}

impl Mesh {
    /// Builds a `count_x` by `count_y` lattice with structural and cross-brace
    /// springs.
    ///
    /// Particle `(ix, iy)` sits at
    /// `origin + (width * (ix + 1) / count_x, height * (iy + 1) / count_y)`,
    /// one grid cell in from the geometric origin, stored row-major as
    /// `i = iy * count_x + ix`. Springs are added in a fixed, reproducible
    /// order: bottom-row horizontals, left-column verticals, a
    /// horizontal/diagonal/vertical triple for every particle off the first
    /// row and left column (walked from the last index down), and finally the
    /// opposite diagonal for every particle off the right column. Rest
    /// lengths are measured after all springs exist.
    pub fn build(params: &LatticeParams, config: &SimConfig) -> Result<Self> {
        if params.count_x < 2 || params.count_y < 2 {
            return Err(SimError::InvalidTopology(format!(
                "lattice needs at least 2x2 particles, got {}x{}",
                params.count_x, params.count_y
            )));
        }

        let count_x = params.count_x;
        let count_y = params.count_y;

        let mut particles = Vec::with_capacity(count_x * count_y);
        for iy in 0..count_y {
            for ix in 0..count_x {
                let position = params.origin
                    + Vec2::new(
                        (ix + 1) as f32 / count_x as f32 * params.width,
                        (iy + 1) as f32 / count_y as f32 * params.height,
                    );
                particles.push(Particle::new(
                    position,
                    config.particle_mass,
                    config.particle_radius,
                ));
            }
        }

        let spring = |i: usize, j: usize| {
            Spring::new(
                ParticleId(i),
                ParticleId(j),
                config.spring_stiffness,
                config.damping_factor,
            )
        };

        // Structural grid plus both diagonal braces per cell:
        // 2 * (count_x - 1) * (count_y - 1) diagonals on top of the
        // count_y * (count_x - 1) + count_x * (count_y - 1) axis-aligned edges.
        let capacity = 4 * (count_x - 1) * (count_y - 1) + (count_x - 1) + (count_y - 1);
        let mut springs = Vec::with_capacity(capacity);

        // Bottom row horizontals.
        for i in 0..count_x - 1 {
            springs.push(spring(i, i + 1));
        }
        // Left column verticals.
        for iy in 0..count_y - 1 {
            springs.push(spring(iy * count_x, (iy + 1) * count_x));
        }
        // Every particle off the first row and the left edge connects back to
        // its horizontal, diagonal, and vertical predecessors.
        let last = count_x * count_y - 1;
        for i in (count_x..=last).rev() {
            if i % count_x != 0 {
                springs.push(spring(i, i - 1));
                springs.push(spring(i, i - 1 - count_x));
                springs.push(spring(i, i - count_x));
            }
        }
        // Opposite diagonal for every particle off the right edge.
        for i in count_x - 1..last {
            if (i + 1) % count_x != 0 {
                springs.push(spring(i, i + 1 - count_x));
            }
        }

        for spring in &mut springs {
            spring.rest_length = spring.current_length(&particles);
        }

        debug!(
            "built {}x{} lattice: {} particles, {} springs",
            count_x,
            count_y,
            particles.len(),
            springs.len()
        );

        Ok(Self { particles, springs })
    }

    /// Assembles a mesh from explicit parts, checking the index invariant.
    pub fn from_parts(particles: Vec<Particle>, springs: Vec<Spring>) -> Result<Self> {
        for spring in &springs {
            if spring.a.index() >= particles.len() || spring.b.index() >= particles.len() {
                return Err(SimError::InvalidTopology(format!(
                    "spring references particle {} outside mesh of {}",
                    spring.a.index().max(spring.b.index()),
                    particles.len()
                )));
            }
            if spring.a == spring.b {
                return Err(SimError::InvalidTopology(format!(
                    "spring connects particle {} to itself",
                    spring.a.index()
                )));
            }
        }
        Ok(Self { particles, springs })
    }

    /// Drops all particles and springs together.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.springs.clear();
    }

    /// Reapplies configuration-level tuning to existing particles and springs.
    pub fn retune(&mut self, config: &SimConfig) {
        for particle in &mut self.particles {
            particle.mass = config.particle_mass;
            particle.radius = config.particle_radius;
        }
        for spring in &mut self.springs {
            spring.stiffness = config.spring_stiffness;
            spring.damping = config.damping_factor;
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    /// Mutable spring access for hosts that tune individual constraints.
    /// Callers must keep endpoint indices inside this mesh.
    pub fn springs_mut(&mut self) -> &mut [Spring] {
        &mut self.springs
    }

    /// Mutable particles alongside read-only springs, for passes that write
    /// particle state while walking the topology.
    pub fn split_mut(&mut self) -> (&mut [Particle], &[Spring]) {
        (&mut self.particles, &self.springs)
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.index())
    }

    pub fn particle_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.particles.get_mut(id.index())
    }

    /// Mutable access to two distinct particles at once.
    pub fn particle_pair_mut(
        &mut self,
        a: ParticleId,
        b: ParticleId,
    ) -> Option<(&mut Particle, &mut Particle)> {
        let (i, j) = (a.index(), b.index());
        if i == j || i >= self.particles.len() || j >= self.particles.len() {
            return None;
        }

        let (first, second, flipped) = if i < j { (i, j, false) } else { (j, i, true) };
        let (left, right) = self.particles.split_at_mut(second);
        let first_slot = &mut left[first];
        let second_slot = &mut right[0];

        if flipped {
            Some((second_slot, first_slot))
        } else {
            Some((first_slot, second_slot))
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Average particle position, or the origin for an empty mesh.
    pub fn centroid(&self) -> Vec2 {
        if self.particles.is_empty() {
            return Vec2::ZERO;
        }
        self.particles
            .iter()
            .map(|particle| particle.position)
            .sum::<Vec2>()
            / self.particles.len() as f32
    }
}
