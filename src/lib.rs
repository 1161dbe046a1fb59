//! Pixel Breakout - a deterministic brick-breaker simulation engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//!
//! The engine is headless: the host owns rendering, input capture, and the
//! frame scheduler. It drives the engine by calling [`sim::tick`] once per
//! frame and renders from the returned [`sim::FrameResult`] snapshot. All
//! gameplay state stays private to the simulation.

pub mod sim;

pub use sim::{
    FrameResult, GameEvent, GamePhase, GameState, Layout, Playfield, PlayfieldError, TickInput,
    tick,
};

/// Game configuration constants
pub mod consts {
    /// Nominal host frame rate the per-frame velocities are tuned against
    pub const FRAME_RATE: f32 = 60.0;

    /// Brick grid dimensions (fixed for every level)
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 8;

    /// Brick grid origin and inter-brick gaps (pixels)
    pub const BRICK_ORIGIN_X: f32 = 10.0;
    pub const BRICK_ORIGIN_Y: f32 = 28.0;
    pub const BRICK_GAP_X: f32 = 2.0;
    pub const BRICK_GAP_Y: f32 = 4.0;

    /// Derived-size ratios (see `sim::layout` for the rounding policy)
    pub const PADDLE_WIDTH_RATIO: f32 = 0.18;
    pub const PADDLE_HEIGHT: f32 = 9.0;
    /// Gap between the paddle's bottom edge and the playfield bottom
    pub const PADDLE_BOTTOM_MARGIN: f32 = 12.0;
    pub const BALL_RADIUS_RATIO: f32 = 0.013;
    pub const BALL_RADIUS_MIN: f32 = 5.0;
    pub const BALL_RADIUS_MAX: f32 = 9.0;
    pub const BRICK_HEIGHT_RATIO: f32 = 0.055;

    /// Paddle keyboard speed: `clamp(width * ratio, min, max)` pixels/frame
    pub const PADDLE_SPEED_RATIO: f32 = 0.012;
    pub const PADDLE_SPEED_MIN: f32 = 4.0;
    pub const PADDLE_SPEED_MAX: f32 = 14.0;

    /// Scoring
    pub const BRICK_SCORE: u32 = 10;
    pub const LEVEL_CLEAR_SCORE: u32 = 100;
    pub const START_LIVES: u8 = 3;

    /// Launch vector tuning. Speed magnitude is
    /// `(min(W,H) * base + level * LAUNCH_LEVEL_FACTOR) * FRAME_RATE`,
    /// with the level-start vertical component damped by `LAUNCH_VY_DAMP`.
    pub const LAUNCH_BASE_LEVEL: f32 = 0.0038;
    pub const LAUNCH_BASE_RESPAWN: f32 = 0.004;
    pub const LAUNCH_LEVEL_FACTOR: f32 = 0.0005;
    pub const LAUNCH_VY_DAMP: f32 = 0.85;
    pub const LAUNCH_ANGLE_MIN_DEG: f32 = 60.0;
    pub const LAUNCH_ANGLE_MAX_DEG: f32 = 120.0;

    /// Horizontal "english" on a paddle strike: `vx = offset * |vy| * this`
    pub const PADDLE_ENGLISH: f32 = 1.5;

    /// Brick row colors, top row first (the arcade page's neon palette)
    pub const ROW_COLORS: [&str; BRICK_ROWS] =
        ["#ff0066", "#ff6600", "#ffaa00", "#00ff88", "#00aaff"];
}
