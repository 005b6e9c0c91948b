//! Falling Sphere Demo
//!
//! Headless host for the demo scene: a ball dropped from 100 m onto a large
//! static ground sphere. Steps the simulation at a fixed 60 Hz and logs the
//! state of every body once per simulated second, the way a renderer would
//! read positions and velocities back to draw them.
//!
//! Run with `cargo run --example falling_sphere`.

use impulse3d::error::PhysicsError;
use impulse3d::scene::Scene;
use impulse3d::shape::ShapeKind;
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};

const FRAMES_PER_SECOND: usize = 60;
const SIMULATED_SECONDS: usize = 10;

fn main() -> Result<(), PhysicsError> {
    let _ = SimpleLogger::init(LevelFilter::Info, Config::default());

    let mut scene = Scene::<8>::default();
    scene.initialize()?;

    let dt = 1.0 / FRAMES_PER_SECOND as f32;
    let mut contacts = 0;

    for frame in 0..FRAMES_PER_SECOND * SIMULATED_SECONDS {
        contacts += scene.update(dt).contacts;

        if frame % FRAMES_PER_SECOND != FRAMES_PER_SECOND - 1 {
            continue;
        }

        log::info!("t = {:.1}s, contacts so far: {}", (frame + 1) as f32 * dt, contacts);
        for (id, body) in scene.bodies() {
            let shape = match body.shape().kind() {
                ShapeKind::Sphere => "sphere",
            };
            let p = body.position;
            let v = body.linear_velocity;
            log::info!(
                "  body {} ({shape}): position <X:{:.1}, Y:{:.1}, Z:{:.1}> velocity <X:{:.1}, Y:{:.1}, Z:{:.1}>",
                id.index(),
                p.x,
                p.y,
                p.z,
                v.x,
                v.y,
                v.z
            );
        }
    }

    Ok(())
}
