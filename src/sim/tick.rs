//! Per-frame simulation step
//!
//! The host calls [`tick`] once per rendered frame from its own scheduler and
//! renders from the returned [`FrameResult`]. The tick is the sole mutation
//! point: input handlers only stage intent in a [`TickInput`].

use glam::Vec2;
use serde::Serialize;

use super::collision::{Rect, ball_rect_overlap, paddle_bounce, reflect_walls};
use super::state::{GamePhase, GameState, LaunchKind, generate_level};
use crate::consts::{BRICK_SCORE, LEVEL_CLEAR_SCORE};

/// Input staged for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// "Move left" held (keyboard/on-screen button)
    pub move_left: bool,
    /// "Move right" held
    pub move_right: bool,
    /// Absolute paddle center x (pointer/touch); wins over held directions
    pub set_center_x: Option<f32>,
}

/// Events emitted during a frame, in occurrence order
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// Points earned this frame; the host forwards each delta to its score
    /// sink exactly once
    ScoreDelta(u32),
    LevelUp { level: u32 },
    LifeLost { lives_left: u8 },
    GameOver { final_score: u64 },
}

/// Ball snapshot for rendering
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Alive brick snapshot for rendering
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BrickView {
    pub rect: Rect,
    pub color: &'static str,
}

/// Per-frame output snapshot consumed by the rendering host.
///
/// The host must render from this, never from the live state.
#[derive(Debug, Clone, Serialize)]
pub struct FrameResult {
    pub paddle: Rect,
    pub ball: BallView,
    pub bricks: Vec<BrickView>,
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub phase: GamePhase,
    pub events: Vec<GameEvent>,
}

fn snapshot(state: &GameState, events: Vec<GameEvent>) -> FrameResult {
    FrameResult {
        paddle: state.paddle.rect(&state.layout),
        ball: BallView {
            pos: state.ball.pos,
            radius: state.ball.radius,
        },
        bricks: state
            .bricks
            .iter()
            .filter(|b| b.alive)
            .map(|b| BrickView {
                rect: b.rect,
                color: b.color(),
            })
            .collect(),
        score: state.score,
        lives: state.lives,
        level: state.level,
        phase: state.phase,
        events,
    }
}

/// Advance the simulation by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> FrameResult {
    // Terminal state: nothing moves, no events
    if state.phase == GamePhase::GameOver {
        return snapshot(state, Vec::new());
    }

    state.time_ticks += 1;
    let mut events = Vec::new();
    let field = state.field;
    let layout = state.layout;

    // Paddle: absolute pointer position wins over held directions
    if let Some(cx) = input.set_center_x {
        state.paddle.set_center(cx, &field, &layout);
    } else {
        if input.move_left {
            state.paddle.shift(-layout.paddle_speed, &field, &layout);
        }
        if input.move_right {
            state.paddle.shift(layout.paddle_speed, &field, &layout);
        }
    }

    // Ball translation
    state.ball.pos += state.ball.vel;

    // Side and top walls (the bottom is open)
    let radius = state.ball.radius;
    reflect_walls(&mut state.ball.pos, &mut state.ball.vel, radius, &field);

    // Paddle strike
    paddle_bounce(
        state.ball.pos,
        &mut state.ball.vel,
        radius,
        state.paddle.x,
        &layout,
    );

    // Brick sweep: every overlapping brick dies and scores, but the vertical
    // bounce is applied once per frame at most so a double hit cannot cancel
    // itself out
    let mut broken = 0u32;
    for brick in state.bricks.iter_mut().filter(|b| b.alive) {
        if ball_rect_overlap(state.ball.pos, radius, &brick.rect) {
            brick.alive = false;
            broken += 1;
            state.score += u64::from(BRICK_SCORE);
        }
    }
    if broken > 0 {
        state.ball.vel.y = -state.ball.vel.y;
        events.push(GameEvent::ScoreDelta(BRICK_SCORE * broken));
        log::debug!("broke {broken} brick(s), score {}", state.score);
    }

    // Level clear: fresh grid, faster ball, paddle stays where it is
    if state.alive_bricks() == 0 {
        state.level += 1;
        state.score += u64::from(LEVEL_CLEAR_SCORE);
        events.push(GameEvent::LevelUp { level: state.level });
        events.push(GameEvent::ScoreDelta(LEVEL_CLEAR_SCORE));
        state.bricks = generate_level(&layout);
        state.relaunch_ball(LaunchKind::LevelStart);
        log::info!("level {} start, score {}", state.level, state.score);
    }

    // Ball lost past the open bottom edge (strictly beyond the field)
    if state.ball.pos.y - radius > field.height {
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost {
            lives_left: state.lives,
        });
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            state.ball.vel = Vec2::ZERO;
            events.push(GameEvent::GameOver {
                final_score: state.score,
            });
            log::info!("game over, final score {}", state.score);
        } else {
            state.relaunch_ball(LaunchKind::Respawn);
        }
    }

    snapshot(state, events)
}
