use std::time::Instant;

use glam::Vec2;
use log::debug;

use crate::{
    collision::{
        narrowphase::{resolve_obstacle_collisions, resolve_self_collisions},
        queries::Picking,
    },
    config::SimConfig,
    core::{
        mesh::{LatticeParams, Mesh},
        obstacle::{ObstacleId, ObstacleSet, SegmentEnd},
        particle::ParticleId,
    },
    dynamics::{forces::accumulate_forces, integrator::Integrator},
    error::Result,
    utils::logging::{warn_if_step_budget_exceeded, ScopedTimer},
};

/// Frame budget used for overrun warnings, in milliseconds (one 60 Hz tick).
const STEP_BUDGET_MS: f32 = 16.7;

/// Central simulation container orchestrating all subsystems.
///
/// The world owns the deformable mesh, the session's obstacles, and the
/// shared configuration. [`step`](Self::step) takes `&mut self`, so external
/// mutation (drag hooks, tuning) is statically confined to the gaps between
/// steps; no locking is needed.
pub struct SoftbodyWorld {
    mesh: Mesh,
    obstacles: ObstacleSet,
    config: SimConfig,
    integrator: Integrator,
}

impl SoftbodyWorld {
    /// Creates an empty world after validating the configuration.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            mesh: Mesh::default(),
            obstacles: ObstacleSet::new(),
            config,
            integrator: Integrator::default(),
        })
    }

    /// Builds (or rebuilds) the lattice, swapping the new mesh in atomically.
    ///
    /// The previous mesh's particles and springs are dropped together once
    /// the replacement exists; no partially destroyed state is observable,
    /// and a failed build leaves the current mesh untouched.
    pub fn rebuild(&mut self, params: &LatticeParams) -> Result<()> {
        self.mesh = Mesh::build(params, &self.config)?;
        Ok(())
    }

    /// Releases all particles and springs together.
    pub fn clear_mesh(&mut self) {
        self.mesh.clear();
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Mutable mesh access for hosts; only valid between steps.
    pub fn mesh_mut(&mut self) -> &mut Mesh {
        &mut self.mesh
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Replaces the configuration and retunes existing particles and springs
    /// to the new coefficients. Rejected configurations leave the previous
    /// one in place.
    pub fn set_config(&mut self, config: SimConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.mesh.retune(&self.config);
        Ok(())
    }

    /// Adds an obstacle segment; `thickness` of `None` takes the configured
    /// default.
    pub fn add_obstacle(
        &mut self,
        start: Vec2,
        end: Vec2,
        thickness: Option<f32>,
    ) -> Result<ObstacleId> {
        self.obstacles
            .add(start, end, thickness.unwrap_or(self.config.obstacle_thickness))
    }

    /// Nearest particle whose scaled pick circle contains `point`.
    pub fn select_particle_near(&self, point: Vec2) -> Option<ParticleId> {
        Picking::particle_near(&self.mesh, point, self.config.select_radius_factor)
    }

    /// Nearest obstacle endpoint whose scaled pick circle contains `point`.
    pub fn select_obstacle_endpoint_near(&self, point: Vec2) -> Option<(ObstacleId, SegmentEnd)> {
        Picking::obstacle_endpoint_near(&self.obstacles, point, self.config.select_radius_factor)
    }

    /// Drag hook: moves one particle. Only valid between steps; unknown ids
    /// are ignored.
    pub fn set_particle_position(&mut self, id: ParticleId, position: Vec2) {
        match self.mesh.particle_mut(id) {
            Some(particle) => particle.position = position,
            None => debug!("ignored drag of unknown particle {}", id.index()),
        }
    }

    /// Drag hook: moves one obstacle endpoint. Only valid between steps;
    /// unknown ids are ignored.
    pub fn set_obstacle_endpoint(&mut self, id: ObstacleId, end: SegmentEnd, position: Vec2) {
        match self.obstacles.get_mut(id) {
            Some(segment) => segment.set_endpoint(end, position),
            None => debug!("ignored drag of unknown obstacle {}", id.index()),
        }
    }

    /// Advances the simulation by `frame_dt` seconds.
    ///
    /// The frame delta is divided evenly across the configured sub-steps.
    /// Each sub-step runs force accumulation, obstacle resolution (with
    /// optional normal-force injection), self-collision resolution, and
    /// integration, in that fixed order. Explicit integration of stiff
    /// springs is only stable for small per-step deltas; raising `substeps`
    /// trades CPU for stability at high stiffness. Non-finite or
    /// non-positive deltas are ignored.
    pub fn step(&mut self, frame_dt: f32) {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return;
        }

        let started = Instant::now();
        let sub_dt = frame_dt / self.config.substeps as f32;

        for _ in 0..self.config.substeps {
            {
                let _timer = ScopedTimer::new("forces::accumulate");
                accumulate_forces(&mut self.mesh, &self.config);
            }
            {
                let _timer = ScopedTimer::new("collision::obstacles");
                resolve_obstacle_collisions(&mut self.mesh, &self.obstacles, &self.config);
            }
            {
                let _timer = ScopedTimer::new("collision::self");
                resolve_self_collisions(&mut self.mesh);
            }
            {
                let _timer = ScopedTimer::new("integrator");
                self.integrator.step(&mut self.mesh, sub_dt, &self.config);
            }
        }

        warn_if_step_budget_exceeded(started.elapsed(), STEP_BUDGET_MS);
    }
}
