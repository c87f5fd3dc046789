//! Soft Lattice – a real-time 2D deformable-body engine for Rust.
//!
//! This crate simulates a lattice of point masses joined by springs that
//! deforms under gravity, internal elastic and damping forces, and collisions
//! against static line obstacles and against itself. Rendering, camera
//! transforms, and input dispatch stay with the host; the engine exposes read
//! accessors and mutation commands at its boundary.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use collision::{
    narrowphase::{resolve_obstacle_collisions, resolve_self_collisions},
    queries::{project_on_segment, Picking, SegmentProjection},
};
pub use config::SimConfig;
pub use crate::core::{
    mesh::{LatticeParams, Mesh},
    obstacle::{ObstacleId, ObstacleSegment, ObstacleSet, SegmentEnd},
    particle::{Particle, ParticleId},
    spring::Spring,
};
pub use dynamics::{forces::accumulate_forces, integrator::Integrator};
pub use error::{Result, SimError};
pub use world::SoftbodyWorld;

/// High-level convenience wrapper that owns a [`SoftbodyWorld`].
pub struct SoftbodyEngine {
    world: SoftbodyWorld,
}

impl SoftbodyEngine {
    /// Creates a new engine with the provided configuration.
    pub fn new(config: SimConfig) -> Result<Self> {
        Ok(Self {
            world: SoftbodyWorld::new(config)?,
        })
    }

    /// Builds (or rebuilds) the deformable lattice.
    pub fn build_mesh(&mut self, params: &LatticeParams) -> Result<()> {
        self.world.rebuild(params)
    }

    /// Adds a static obstacle segment with the configured default thickness.
    pub fn add_obstacle(&mut self, start: Vec2, end: Vec2) -> Result<ObstacleId> {
        self.world.add_obstacle(start, end, None)
    }

    /// Advances the simulation by the provided frame delta time.
    pub fn step(&mut self, frame_dt: f32) {
        self.world.step(frame_dt);
    }

    /// Replaces the tuning configuration between ticks.
    pub fn set_config(&mut self, config: SimConfig) -> Result<()> {
        self.world.set_config(config)
    }

    /// Immutable access to the underlying world.
    pub fn world(&self) -> &SoftbodyWorld {
        &self.world
    }

    /// Mutable access to the underlying world, for drag hooks and tuning.
    pub fn world_mut(&mut self) -> &mut SoftbodyWorld {
        &mut self.world
    }
}
