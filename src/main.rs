//! Brick Pong entry point
//!
//! Headless demo loop: a fixed-step frame pump drives the simulation with
//! the idle-mode AI on the paddle. Rendering is an external backend; each
//! frame's draw list is built here and handed off (dropped, in this build).

use std::env;
use std::error::Error;
use std::fs;

use brick_pong::consts::SIM_DT;
use brick_pong::renderer::build_frame;
use brick_pong::sim::{TickInput, World, tick};
use brick_pong::tuning::Tuning;

/// Demo loop frame cap (five minutes at 120 Hz)
const MAX_FRAMES: u64 = 5 * 60 * 120;

/// Environment variable naming a JSON tuning override file
const TUNING_ENV: &str = "BRICK_PONG_TUNING";

fn load_tuning() -> Result<Tuning, Box<dyn Error>> {
    match env::var(TUNING_ENV) {
        Ok(path) => {
            let json = fs::read_to_string(&path)?;
            let tuning = Tuning::from_json(&json)?;
            log::info!("loaded tuning from {path}");
            Ok(tuning)
        }
        Err(_) => Ok(Tuning::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let tuning = load_tuning()?;
    let mut world = World::with_tuning(tuning);
    log::info!("brick-pong starting with {} bricks", world.bricks.len());

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    for _ in 0..MAX_FRAMES {
        tick(&mut world, &input, SIM_DT);

        // Hand the draw list to the render backend
        let _frame = build_frame(&world);

        if world.cleared() {
            break;
        }
    }

    let remaining = world.bricks.iter().filter(|b| !b.destroyed).count();
    log::info!(
        "stopped after {} ticks, {} bricks remaining",
        world.time_ticks,
        remaining
    );
    Ok(())
}
