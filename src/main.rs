//! Pixel Breakout headless demo driver
//!
//! Runs the simulation with a simple autopilot (the paddle chases the ball)
//! for a bounded number of frames, logging every emitted event, then prints a
//! JSON run summary to stdout. Useful for smoke-testing determinism:
//!
//! ```text
//! pixel-breakout [seed] [max-frames]
//! ```

use serde::Serialize;

use pixel_breakout::sim::{GameEvent, GamePhase, GameState, Playfield, TickInput, tick};

const DEFAULT_SEED: u64 = 0xa11ce;
const DEFAULT_MAX_FRAMES: u64 = 60 * 60 * 5; // five minutes at 60 Hz

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    frames: u64,
    score: u64,
    level: u32,
    lives: u8,
    game_over: bool,
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let max_frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_FRAMES);

    let field = match Playfield::new(400, 272) {
        Ok(field) => field,
        Err(err) => {
            log::error!("bad playfield: {err}");
            std::process::exit(1);
        }
    };

    log::info!("starting run: seed {seed}, up to {max_frames} frames");
    let mut state = GameState::new(field, seed);
    let mut frames = 0u64;

    while frames < max_frames {
        let input = TickInput {
            set_center_x: Some(state.ball.pos.x),
            ..Default::default()
        };
        let result = tick(&mut state, &input);
        frames += 1;

        for event in &result.events {
            match event {
                GameEvent::ScoreDelta(delta) => log::info!("frame {frames}: +{delta} points"),
                GameEvent::LevelUp { level } => log::info!("frame {frames}: level {level}"),
                GameEvent::LifeLost { lives_left } => {
                    log::info!("frame {frames}: ball lost, {lives_left} lives left")
                }
                GameEvent::GameOver { final_score } => {
                    log::info!("frame {frames}: game over, final score {final_score}")
                }
            }
        }

        if result.phase == GamePhase::GameOver {
            break;
        }
    }

    let summary = RunSummary {
        seed,
        frames,
        score: state.score,
        level: state.level,
        lives: state.lives,
        game_over: state.phase == GamePhase::GameOver,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("summary serialization failed: {err}"),
    }
}
