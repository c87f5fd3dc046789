use soft_lattice::*;

fn main() {
    let mut engine = SoftbodyEngine::new(SimConfig::default()).expect("default config");

    engine
        .build_mesh(&LatticeParams {
            width: 200.0,
            height: 200.0,
            origin: Vec2::new(800.0, 600.0),
            count_x: 5,
            count_y: 5,
        })
        .expect("lattice should build");

    engine
        .add_obstacle(Vec2::new(700.0, 550.0), Vec2::new(1100.0, 500.0))
        .expect("obstacle should be accepted");

    for frame in 0..120 {
        engine.step(1.0 / 60.0);
        if frame % 30 == 0 {
            println!(
                "frame {frame:3}: centroid = {:?}",
                engine.world().mesh().centroid()
            );
        }
    }
}
