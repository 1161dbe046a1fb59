//! Property coverage for the simulation invariants
//!
//! Random playfields, seeds, and input scripts; every frame must uphold the
//! clamping, monotonicity, and terminal-state guarantees.

use proptest::prelude::*;

use pixel_breakout::consts::{BRICK_COLS, BRICK_ROWS};
use pixel_breakout::sim::{GameEvent, GamePhase, GameState, Playfield, TickInput, tick};

const FULL_GRID: usize = BRICK_ROWS * BRICK_COLS;

fn input_for(code: u8, state: &GameState) -> TickInput {
    match code % 4 {
        0 => TickInput::default(),
        1 => TickInput {
            move_left: true,
            ..Default::default()
        },
        2 => TickInput {
            move_right: true,
            ..Default::default()
        },
        _ => TickInput {
            set_center_x: Some(state.ball.pos.x),
            ..Default::default()
        },
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_over_random_runs(
        seed in any::<u64>(),
        width in 280u32..=520,
        height in 190u32..=400,
        script in proptest::collection::vec(0u8..4, 1..400),
    ) {
        let field = Playfield::new(width, height).unwrap();
        let mut state = GameState::new(field, seed);

        let mut prev_score = 0u64;
        let mut prev_lives = state.lives;
        let mut prev_alive = state.alive_bricks();

        for &code in &script {
            let was_over = state.phase == GamePhase::GameOver;
            let input = input_for(code, &state);
            let result = tick(&mut state, &input);

            // Terminal state is frozen
            if was_over {
                prop_assert!(result.events.is_empty());
                prop_assert_eq!(result.score, prev_score);
                continue;
            }

            // Paddle always clamped to the field
            prop_assert!(state.paddle.x >= 0.0);
            prop_assert!(state.paddle.x <= field.width - state.layout.paddle_width);

            // Ball never escapes sideways or through the top
            prop_assert!(state.ball.pos.x >= state.ball.radius);
            prop_assert!(state.ball.pos.x <= field.width - state.ball.radius);
            prop_assert!(state.ball.pos.y >= state.ball.radius);

            // Score never decreases, lives never increase
            prop_assert!(result.score >= prev_score);
            prop_assert!(state.lives <= prev_lives);

            // Brick count only drops, except a level clear restores the full
            // grid and pairs exactly one LevelUp with one +100 delta
            let alive = state.alive_bricks();
            let level_ups = result
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::LevelUp { .. }))
                .count();
            if level_ups > 0 {
                prop_assert_eq!(level_ups, 1);
                prop_assert_eq!(alive, FULL_GRID);
                prop_assert!(result.events.contains(&GameEvent::ScoreDelta(100)));
            } else {
                prop_assert!(alive <= prev_alive);
            }

            // Every score delta is positive
            for event in &result.events {
                if let GameEvent::ScoreDelta(delta) = event {
                    prop_assert!(*delta > 0);
                }
            }

            // Game over exactly when lives hit zero
            prop_assert_eq!(state.phase == GamePhase::GameOver, state.lives == 0);

            prev_score = result.score;
            prev_lives = state.lives;
            prev_alive = alive;
        }
    }

    #[test]
    fn runs_are_reproducible(
        seed in any::<u64>(),
        script in proptest::collection::vec(0u8..4, 1..200),
    ) {
        let field = Playfield::new(400, 272).unwrap();
        let mut a = GameState::new(field, seed);
        let mut b = GameState::new(field, seed);

        for &code in &script {
            let input = input_for(code, &a);
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        prop_assert_eq!(a.ball.pos, b.ball.pos);
        prop_assert_eq!(a.paddle.x, b.paddle.x);
        prop_assert_eq!(a.score, b.score);
        prop_assert_eq!(a.lives, b.lives);
        prop_assert_eq!(a.level, b.level);
        prop_assert_eq!(a.time_ticks, b.time_ticks);
    }
}
