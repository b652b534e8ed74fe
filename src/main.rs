//! Caco Engine headless demo
//!
//! Spawns a seeded field of falling circles, runs the frame loop against a
//! counting canvas and recolours circles red while they overlap.
//!
//! Usage: `caco-engine [settings.json] [seed] [count] [frames]`

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use caco_engine::renderer::Recorder;
use caco_engine::{Collider, Color, RigidObject, Settings, World};

const DEFAULT_SEED: u64 = 12345;
const DEFAULT_COUNT: usize = 24;
const DEFAULT_FRAMES: u64 = 600;
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = match args.first() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let seed = parse_arg(&args, 1, DEFAULT_SEED);
    let count = parse_arg(&args, 2, DEFAULT_COUNT);
    let frames = parse_arg(&args, 3, DEFAULT_FRAMES);

    log::info!(
        "{} ({}x{}) starting: floor={}, seed={}, circles={}, frames={}",
        settings.title,
        settings.resolution[0],
        settings.resolution[1],
        settings.physics.floor.as_str(),
        seed,
        count,
        frames
    );

    let mut world = World::new(settings.physics);
    spawn_circles(&mut world, &settings, seed, count);

    let mut recorder = Recorder::new();
    let mut total_hits = 0;
    world.run(&mut recorder, || FRAME_DT, |w, _dt| {
        total_hits += resolve_overlaps(w);
        if w.frame_count() >= frames {
            w.stop();
        }
    });

    let resting = world
        .rigid_objects()
        .iter()
        .filter(|o| o.position().y >= world.physics.floor_y)
        .count();
    log::info!(
        "done: {} frames, {} draw commands, {} vertices, {} collision reactions, {}/{} circles on the floor",
        recorder.frames,
        recorder.commands,
        recorder.vertices,
        total_hits,
        resting,
        world.rigid_objects().len()
    );
}

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> T {
    args.get(index)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Scatter circles over the upper half of the window, each with a downward push
fn spawn_circles(world: &mut World, settings: &Settings, seed: u64, count: usize) {
    let mut rng = Pcg32::seed_from_u64(seed);
    let width = settings.resolution[0] as f32;
    let height = settings.resolution[1] as f32;

    for i in 0..count {
        let center = Vec2::new(
            rng.random_range(0.0..width),
            rng.random_range(0.0..height / 2.0),
        );
        let radius = rng.random_range(5.0..30.0);
        let color = Color::cycle(i as i32 % 4).rgba();

        match RigidObject::circle(center, radius, color) {
            Ok(mut circle) => {
                circle.body.velocity = Vec2::new(rng.random_range(-40.0..40.0), 0.0);
                circle.body.add_force(Vec2::new(
                    rng.random_range(50.0..150.0),
                    rng.random_range(200.0..400.0),
                ));
                world.add_rigid_object(circle);
            }
            Err(e) => log::warn!("skipping circle {}: {}", i, e),
        }
    }
}

/// Turn every overlapping circle red
fn resolve_overlaps(world: &mut World) -> usize {
    let red = Color::Red.rgba();
    Collider::from_objects(world.rigid_objects_mut().iter_mut())
        .with_callback(|object| {
            if object.object.fill_color == red {
                return false;
            }
            object.set_fill_color(red);
            true
        })
        .handle()
}
