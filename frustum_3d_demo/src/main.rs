//! Headless fly-through of a random model field.
//!
//! Scripted input stands in for a mouse and keyboard: the viewer turns
//! slowly while walking forward, and the number of models that survive
//! frustum culling is logged once per simulated second.
//!
//! Usage: frustum_3d_demo [--models N] [--seed S] [--frames F] [--brute-force]

use std::env;
use std::time::{Duration, Instant};
use frustum_3d_engine::frustum3d::{Engine, GraphicsConfig};
use frustum_3d_engine::frustum3d::camera::{MoveKeys, Position};
use frustum_3d_engine::frustum3d::log::LogSeverity;
use frustum_3d_engine::frustum3d::scene::{BruteForceCuller, ModelList, Scene};
use frustum_3d_engine::frustum3d::timer::{FpsCounter, Timer};

const DEFAULT_MODELS: usize = 25;
const DEFAULT_SEED: u64 = 0;
const DEFAULT_FRAMES: u32 = 600;
/// Simulated frame length (60 Hz)
const FRAME_STEP: Duration = Duration::from_micros(16_667);
/// Log once per simulated second
const FRAMES_PER_REPORT: u32 = 60;
/// Horizontal turn per frame, in degrees
const TURN_RATE: f32 = 0.25;

fn parse_flag_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let idx = args.iter().position(|a| a == flag)?;
    args.get(idx + 1)?.parse().ok()
}

fn log(message: String) {
    Engine::log(LogSeverity::Info, "frustum3d::Demo", message);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let model_count = parse_flag_value(&args, "--models").unwrap_or(DEFAULT_MODELS);
    let seed = parse_flag_value(&args, "--seed").unwrap_or(DEFAULT_SEED);
    let frames = parse_flag_value(&args, "--frames").unwrap_or(DEFAULT_FRAMES);

    let mut scene = match Scene::new(GraphicsConfig::default()) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    scene.set_models(ModelList::random(model_count, seed));
    if args.iter().any(|a| a == "--brute-force") {
        scene.set_culler(Box::new(BruteForceCuller::new()));
    }

    log(format!("{} models (seed {}), {} frames", model_count, seed, frames));

    let mut position = Position::new();
    position.set_keys(MoveKeys::FORWARD);

    let start = Instant::now();
    let mut timer = Timer::new_at(start);
    let mut fps = FpsCounter::new_at(start);

    for i in 1..=frames {
        let now = start + FRAME_STEP * i;
        timer.frame_at(now);
        fps.frame_at(now);

        position.set_frame_time(timer.frame_time());
        position.set_mouse_delta(TURN_RATE, 0.0);
        position.frame();
        position.apply_to(scene.camera_mut());

        let view = scene.frame();

        if i % FRAMES_PER_REPORT == 0 || i == frames {
            let eye = position.position();
            log(format!(
                "frame {:>5}  fps {:>3}  eye ({:>7.2}, {:>7.2}, {:>7.2})  render count {:>4} / {}",
                i, fps.fps(), eye.x, eye.y, eye.z, view.visible_count(), view.tested_count()
            ));
        }
    }
}
