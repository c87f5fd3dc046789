use soft_lattice::*;

fn main() {
    let mut config = SimConfig::default();
    config.substeps = 8;
    let mut world = SoftbodyWorld::new(config).expect("config should validate");

    world
        .rebuild(&LatticeParams {
            width: 300.0,
            height: 150.0,
            origin: Vec2::new(0.0, 400.0),
            count_x: 8,
            count_y: 4,
        })
        .expect("lattice should build");

    // Pin the top-left corner by dragging it back every tick, the way a host
    // UI holds a grabbed particle in place.
    let pinned = world
        .select_particle_near(world.mesh().particles()[8 * 3].position)
        .expect("corner particle is pickable");
    let anchor = world.mesh().particle(pinned).unwrap().position;

    for frame in 0..240 {
        world.step(1.0 / 60.0);
        world.set_particle_position(pinned, anchor);
        if frame % 60 == 0 {
            let lowest = world
                .mesh()
                .particles()
                .iter()
                .map(|p| p.position.y)
                .fold(f32::INFINITY, f32::min);
            println!("frame {frame:3}: lowest particle y = {lowest:.1}");
        }
    }
}
