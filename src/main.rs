//! Skyledge entry point
//!
//! The real game runs inside a host that wires input and rendering to the
//! sim. This binary just initializes logging and runs a short headless
//! smoke simulation of the built-in campaign at 60 Hz.

use skyledge::level::built_in_levels;
use skyledge::sim::{GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();
    log::info!("Skyledge (headless) starting...");

    let mut state = GameState::new(built_in_levels()).expect("built-in levels are valid");
    state.start();

    // Hold right and hop periodically; enough to cross the first gaps
    let dt = 1.0 / 60.0;
    for frame in 0u32..1800 {
        let input = TickInput {
            right: true,
            jump: frame % 45 < 10,
            ..Default::default()
        };
        tick(&mut state, &input, dt);
        for event in &state.events {
            log::info!("frame {frame}: {event:?}");
        }
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    log::info!(
        "Smoke run finished: phase {:?}, level {}, score {}, lives {}",
        state.phase,
        state.level_number,
        state.score,
        state.lives
    );
}
