use approx::assert_relative_eq;
use glam::Vec2;
use soft_lattice::{
    accumulate_forces, Integrator, LatticeParams, Mesh, Particle, ParticleId, SimConfig, Spring,
};

fn lattice(count: usize, config: &SimConfig) -> Mesh {
    let params = LatticeParams {
        width: 200.0,
        height: 200.0,
        origin: Vec2::new(0.0, 0.0),
        count_x: count,
        count_y: count,
    };
    Mesh::build(&params, config).expect("lattice should build")
}

/// Two small particles joined by one spring along X, stretched past its rest
/// length of 50.
fn stretched_pair(stretch: f32, stiffness: f32, damping: f32) -> Mesh {
    let particles = vec![
        Particle::new(Vec2::new(0.0, 0.0), 0.5, 1.0),
        Particle::new(Vec2::new(50.0 + stretch, 0.0), 0.5, 1.0),
    ];
    let mut spring = Spring::new(
        ParticleId::from_index(0),
        ParticleId::from_index(1),
        stiffness,
        damping,
    );
    spring.rest_length = 50.0;
    Mesh::from_parts(particles, vec![spring]).unwrap()
}

fn spring_energy(mesh: &Mesh) -> f32 {
    let kinetic: f32 = mesh
        .particles()
        .iter()
        .map(|p| 0.5 * p.mass * p.velocity.length_squared())
        .sum();
    let elastic: f32 = mesh
        .springs()
        .iter()
        .map(|s| {
            let delta = s.current_length(mesh.particles()) - s.rest_length;
            0.5 * s.stiffness * delta * delta
        })
        .sum();
    kinetic + elastic
}

fn substep(mesh: &mut Mesh, config: &SimConfig, dt: f32) {
    let integrator = Integrator::default();
    accumulate_forces(mesh, config);
    integrator.step(mesh, dt, config);
}

#[test]
fn at_rest_lattice_feels_no_spurious_forces() {
    let mut config = SimConfig::default();
    config.gravity = 0.0;

    let mut mesh = lattice(4, &config);
    let initial: Vec<Vec2> = mesh.particles().iter().map(|p| p.position).collect();

    for _ in 0..100 {
        substep(&mut mesh, &config, 1.0 / 240.0);
    }

    for (particle, start) in mesh.particles().iter().zip(&initial) {
        assert_eq!(particle.position, *start);
        assert_eq!(particle.velocity, Vec2::ZERO);
    }
}

#[test]
fn slack_springs_apply_no_force() {
    let mut config = SimConfig::default();
    config.gravity = 0.0;

    let mut mesh = stretched_pair(0.0, 250.0, 0.0);
    accumulate_forces(&mut mesh, &config);

    for particle in mesh.particles() {
        assert_eq!(particle.force, Vec2::ZERO);
    }
}

#[test]
fn gravity_force_is_mass_times_g_downward() {
    let mut config = SimConfig::default();
    config.gravity = 300.0;

    let mut mesh = stretched_pair(0.0, 250.0, 0.0);
    accumulate_forces(&mut mesh, &config);

    for particle in mesh.particles() {
        assert_relative_eq!(particle.force.y, -300.0 * particle.mass, epsilon = 1e-3);
        assert_relative_eq!(particle.force.x, 0.0, epsilon = 1e-3);
    }
}

#[test]
fn force_buffers_reset_every_accumulation() {
    let mut config = SimConfig::default();
    config.gravity = 300.0;

    let mut mesh = stretched_pair(0.0, 250.0, 0.0);
    accumulate_forces(&mut mesh, &config);
    accumulate_forces(&mut mesh, &config);

    // Without the reset the second pass would double the gravity force.
    for particle in mesh.particles() {
        assert_relative_eq!(particle.force.y, -300.0 * particle.mass, epsilon = 1e-3);
    }
}

#[test]
fn nonlinear_exponent_amplifies_large_elongations() {
    let mut config = SimConfig::default();
    config.gravity = 0.0;

    let mut linear = stretched_pair(4.0, 100.0, 0.0);
    accumulate_forces(&mut linear, &config);
    let linear_force = linear.particles()[0].force.x;

    config.spring_exponent = 2.0;
    let mut quadratic = stretched_pair(4.0, 100.0, 0.0);
    accumulate_forces(&mut quadratic, &config);
    let quadratic_force = quadratic.particles()[0].force.x;

    // |delta| = 4: the quadratic law multiplies the magnitude by 4.
    assert_relative_eq!(quadratic_force, linear_force * 4.0, epsilon = 1e-2);
}

#[test]
fn damping_opposes_relative_velocity() {
    let mut config = SimConfig::default();
    config.gravity = 0.0;

    let mut mesh = stretched_pair(0.0, 250.0, 0.5);
    // Endpoint b recedes along +X.
    mesh.particles_mut()[1].velocity = Vec2::new(10.0, 0.0);

    accumulate_forces(&mut mesh, &config);

    // a is dragged after b, b is held back, equal and opposite.
    assert_relative_eq!(mesh.particles()[0].force.x, 5.0, epsilon = 1e-4);
    assert_relative_eq!(mesh.particles()[1].force.x, -5.0, epsilon = 1e-4);
}

#[test]
fn rest_threshold_suppresses_creep() {
    let config = SimConfig::default();
    let integrator = Integrator::default();

    let mut particle = Particle::new(Vec2::new(5.0, 5.0), 1.0, 1.0);
    // Small enough that the velocity delta stays under the threshold.
    particle.force = Vec2::new(0.2, 0.0);

    integrator.integrate_particle(&mut particle, 1.0 / 60.0, &config);

    assert_eq!(particle.velocity, Vec2::ZERO);
    assert_eq!(particle.position, Vec2::new(5.0, 5.0));
}

#[test]
fn integration_uses_updated_velocity_for_position() {
    let mut config = SimConfig::default();
    config.velocity_scale = 1.0;
    let integrator = Integrator::default();

    let mut particle = Particle::new(Vec2::ZERO, 1.0, 1.0);
    particle.force = Vec2::new(60.0, 0.0);

    let dt = 1.0 / 60.0;
    integrator.integrate_particle(&mut particle, dt, &config);

    // Semi-implicit Euler: the fresh velocity moves the position this step.
    assert_relative_eq!(particle.velocity.x, 1.0, epsilon = 1e-5);
    assert_relative_eq!(particle.position.x, dt, epsilon = 1e-6);
}

#[test]
fn velocity_scale_multiplies_acceleration() {
    let mut config = SimConfig::default();
    config.velocity_scale = 1.0;
    let integrator = Integrator::default();

    let mut unscaled = Particle::new(Vec2::ZERO, 1.0, 1.0);
    unscaled.force = Vec2::new(0.0, -120.0);
    integrator.integrate_particle(&mut unscaled, 1.0 / 60.0, &config);

    config.velocity_scale = 2.0;
    let mut scaled = Particle::new(Vec2::ZERO, 1.0, 1.0);
    scaled.force = Vec2::new(0.0, -120.0);
    integrator.integrate_particle(&mut scaled, 1.0 / 60.0, &config);

    assert_relative_eq!(scaled.velocity.y, unscaled.velocity.y * 2.0, epsilon = 1e-4);
}

#[test]
fn stretched_spring_energy_stays_bounded_with_enough_substeps() {
    let mut config = SimConfig::default();
    config.gravity = 0.0;
    config.velocity_scale = 1.0;

    let mut mesh = stretched_pair(10.0, 250.0, 0.0);
    let initial_energy = spring_energy(&mesh);
    assert!(initial_energy > 0.0);

    // 8 sub-steps of a 60 Hz tick keep the oscillation well inside the
    // stability region for this stiffness.
    let sub_dt = (1.0 / 60.0) / 8.0;
    let mut max_energy = initial_energy;
    for _ in 0..600 * 8 {
        substep(&mut mesh, &config, sub_dt);
        max_energy = max_energy.max(spring_energy(&mesh));
    }

    assert!(
        max_energy <= initial_energy * 1.10,
        "energy grew from {initial_energy} to {max_energy}"
    );
}

#[test]
fn insufficient_substeps_diverge_at_high_stiffness() {
    let mut config = SimConfig::default();
    config.gravity = 0.0;
    config.velocity_scale = 1.0;

    let mut mesh = stretched_pair(10.0, 2.0e5, 0.0);
    let initial_energy = spring_energy(&mesh);

    // One full 60 Hz tick per integration step is far outside the stability
    // region for this stiffness.
    for _ in 0..5 {
        substep(&mut mesh, &config, 1.0 / 60.0);
    }

    let final_energy = spring_energy(&mesh);
    assert!(
        final_energy > initial_energy * 1.0e3,
        "expected divergence, energy went {initial_energy} -> {final_energy}"
    );
}
