//! Tuning constants and the shared simulation configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Default spring damping factor.
pub const DEFAULT_DAMPING_FACTOR: f32 = 0.2;

/// Default spring stiffness coefficient.
pub const DEFAULT_SPRING_STIFFNESS: f32 = 250.0;

/// Default particle collision radius.
pub const DEFAULT_PARTICLE_RADIUS: f32 = 7.0;

/// Default particle mass.
pub const DEFAULT_PARTICLE_MASS: f32 = 0.5;

/// Default gravity magnitude. Gravity pulls toward negative Y everywhere in
/// this crate.
pub const DEFAULT_GRAVITY: f32 = 300.0;

/// Default thickness of newly added obstacle segments.
pub const DEFAULT_OBSTACLE_THICKNESS: f32 = 10.0;

/// Default scale applied to velocity deltas during integration.
pub const DEFAULT_VELOCITY_SCALE: f32 = 2.0;

/// Default spring nonlinearity exponent (1.0 recovers linear Hooke's law).
pub const DEFAULT_SPRING_EXPONENT: f32 = 1.0;

/// Default scale applied to a particle's squared radius by picking queries.
pub const DEFAULT_SELECT_RADIUS_FACTOR: f32 = 2.0;

/// Default number of integration sub-steps per frame tick.
pub const DEFAULT_SUBSTEPS: u32 = 4;

/// Velocity components below this magnitude are zeroed to suppress creep.
pub const REST_VELOCITY_THRESHOLD: f32 = 0.01;

/// Tunable simulation parameters shared by every sub-step.
///
/// One value of this type is passed explicitly into each simulation call; no
/// component reads ambient global state. The UI boundary mutates it between
/// ticks via [`SoftbodyWorld::set_config`](crate::world::SoftbodyWorld::set_config).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Spring damping coefficient applied to relative endpoint velocity.
    pub damping_factor: f32,
    /// Spring stiffness coefficient seeded into newly built springs.
    pub spring_stiffness: f32,
    /// Collision radius seeded into newly built particles.
    pub particle_radius: f32,
    /// Mass seeded into newly built particles.
    pub particle_mass: f32,
    /// Gravity magnitude, pulling toward negative Y.
    pub gravity: f32,
    /// Thickness given to obstacles added without an explicit one.
    pub obstacle_thickness: f32,
    /// Scale applied to acceleration-induced velocity deltas.
    pub velocity_scale: f32,
    /// Exponent applied to spring elongation; 1.0 is linear Hooke's law.
    pub spring_exponent: f32,
    /// Scale applied to squared radii when picking particles or endpoints.
    pub select_radius_factor: f32,
    /// Number of sub-steps each frame tick is divided into.
    pub substeps: u32,
    /// Whether obstacle contacts inject an approximate normal reaction force.
    pub normal_force: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            damping_factor: DEFAULT_DAMPING_FACTOR,
            spring_stiffness: DEFAULT_SPRING_STIFFNESS,
            particle_radius: DEFAULT_PARTICLE_RADIUS,
            particle_mass: DEFAULT_PARTICLE_MASS,
            gravity: DEFAULT_GRAVITY,
            obstacle_thickness: DEFAULT_OBSTACLE_THICKNESS,
            velocity_scale: DEFAULT_VELOCITY_SCALE,
            spring_exponent: DEFAULT_SPRING_EXPONENT,
            select_radius_factor: DEFAULT_SELECT_RADIUS_FACTOR,
            substeps: DEFAULT_SUBSTEPS,
            normal_force: true,
        }
    }
}

impl SimConfig {
    /// Checks every field against its documented valid range.
    ///
    /// Rejection is up-front and total: a configuration that fails here is
    /// never partially applied.
    pub fn validate(&self) -> Result<()> {
        if !(self.particle_mass > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "particle_mass must be positive, got {}",
                self.particle_mass
            )));
        }
        if !(self.spring_stiffness > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "spring_stiffness must be positive, got {}",
                self.spring_stiffness
            )));
        }
        if !(self.particle_radius > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "particle_radius must be positive, got {}",
                self.particle_radius
            )));
        }
        if !(self.obstacle_thickness > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "obstacle_thickness must be positive, got {}",
                self.obstacle_thickness
            )));
        }
        if !(self.velocity_scale > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "velocity_scale must be positive, got {}",
                self.velocity_scale
            )));
        }
        if !(self.spring_exponent > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "spring_exponent must be positive, got {}",
                self.spring_exponent
            )));
        }
        if !(self.select_radius_factor > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "select_radius_factor must be positive, got {}",
                self.select_radius_factor
            )));
        }
        if !(self.damping_factor >= 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "damping_factor must not be negative, got {}",
                self.damping_factor
            )));
        }
        if !(self.gravity >= 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "gravity must not be negative, got {}",
                self.gravity
            )));
        }
        if self.substeps == 0 {
            return Err(SimError::InvalidConfiguration(
                "substeps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
