//! Game state and core simulation types
//!
//! All state needed to reproduce a run deterministically lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::layout::{Layout, Playfield};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; the state is frozen until a fresh match is started
    GameOver,
}

/// The player's paddle. Only the left edge moves; size and rest height are
/// fixed by the layout. Input never writes the position directly, it goes
/// through the clamping mutators below.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge x
    pub x: f32,
}

impl Paddle {
    /// Paddle centered horizontally at its rest height
    pub fn centered(field: &Playfield, layout: &Layout) -> Self {
        Self {
            x: (field.width - layout.paddle_width) / 2.0,
        }
    }

    pub fn rect(&self, layout: &Layout) -> Rect {
        Rect::new(self.x, layout.paddle_y, layout.paddle_width, layout.paddle_height)
    }

    fn max_x(field: &Playfield, layout: &Layout) -> f32 {
        field.width - layout.paddle_width
    }

    /// Shift the left edge by `dx`, clamped to the field
    pub fn shift(&mut self, dx: f32, field: &Playfield, layout: &Layout) {
        self.x = (self.x + dx).clamp(0.0, Self::max_x(field, layout));
    }

    /// Place the paddle so its center sits at `cx` (pointer/touch input),
    /// clamped to the field
    pub fn set_center(&mut self, cx: f32, field: &Playfield, layout: &Layout) {
        self.x = (cx - layout.paddle_width / 2.0).clamp(0.0, Self::max_x(field, layout));
    }
}

/// The ball. Exactly one is live at a time; velocity is pixels/frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Which launch rule to apply when the ball (re)enters play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchKind {
    /// Start of a level: slightly slower, vertical component damped
    LevelStart,
    /// Mid-life respawn after a lost ball
    Respawn,
}

impl LaunchKind {
    fn base_factor(self) -> f32 {
        match self {
            LaunchKind::LevelStart => LAUNCH_BASE_LEVEL,
            LaunchKind::Respawn => LAUNCH_BASE_RESPAWN,
        }
    }

    fn vy_damp(self) -> f32 {
        match self {
            LaunchKind::LevelStart => LAUNCH_VY_DAMP,
            LaunchKind::Respawn => 1.0,
        }
    }
}

/// Pick a launch velocity: angle uniform in [60°, 120°) from horizontal,
/// horizontal direction a coin flip, speed scaling with level. The vertical
/// component always starts upward.
pub fn launch_velocity(
    rng: &mut Pcg32,
    field: &Playfield,
    level: u32,
    kind: LaunchKind,
) -> Vec2 {
    let speed = (field.width.min(field.height) * kind.base_factor()
        + level as f32 * LAUNCH_LEVEL_FACTOR)
        * FRAME_RATE;
    let angle = rng
        .random_range(LAUNCH_ANGLE_MIN_DEG..LAUNCH_ANGLE_MAX_DEG)
        .to_radians();
    let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

    Vec2::new(
        speed * angle.cos() * dir,
        -speed * angle.sin() * kind.vy_damp(),
    )
}

/// One grid cell of the current level
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// Grid row, 0 at the top; determines color
    pub row: usize,
    pub alive: bool,
}

impl Brick {
    pub fn color(&self) -> &'static str {
        ROW_COLORS[self.row]
    }
}

/// Build a fresh ROWS x COLS grid, all bricks alive
pub fn generate_level(layout: &Layout) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            let (x, y) = layout.brick_origin(row, col);
            bricks.push(Brick {
                rect: Rect::new(x, y, layout.brick_width, layout.brick_height),
                row,
                alive: true,
            });
        }
    }
    bricks
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG, advanced only by launch rolls
    pub(crate) rng: Pcg32,
    pub field: Playfield,
    pub layout: Layout,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    /// Simulation frame counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: Vec<Brick>,
}

impl GameState {
    /// Start a fresh match on the given playfield.
    ///
    /// Resets score/lives/level, generates the level-1 brick grid, centers
    /// the paddle, and launches the ball from the playfield center.
    pub fn new(field: Playfield, seed: u64) -> Self {
        let layout = Layout::derive(&field);
        let mut rng = Pcg32::seed_from_u64(seed);
        let level = 1;
        let ball = Ball {
            pos: field.center(),
            vel: launch_velocity(&mut rng, &field, level, LaunchKind::LevelStart),
            radius: layout.ball_radius,
        };
        log::info!(
            "new match: field {}x{}, seed {seed}",
            field.width,
            field.height
        );

        Self {
            seed,
            rng,
            field,
            layout,
            phase: GamePhase::Playing,
            score: 0,
            lives: START_LIVES,
            level,
            time_ticks: 0,
            paddle: Paddle::centered(&field, &layout),
            ball,
            bricks: generate_level(&layout),
        }
    }

    /// Put a freshly launched ball at the playfield center
    pub(crate) fn relaunch_ball(&mut self, kind: LaunchKind) {
        self.ball = Ball {
            pos: self.field.center(),
            vel: launch_velocity(&mut self.rng, &self.field, self.level, kind),
            radius: self.layout.ball_radius,
        };
    }

    pub fn alive_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_scenario_400x272() {
        let field = Playfield::new(400, 272).unwrap();
        let state = GameState::new(field, 1);

        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.bricks.len(), 40);
        assert_eq!(state.alive_bricks(), 40);
        assert_eq!(state.ball.pos, Vec2::new(200.0, 136.0));
        assert_eq!(state.ball.radius, 5.0);
        // Paddle centered
        assert_eq!(state.paddle.x, (400.0 - 72.0) / 2.0);
    }

    #[test]
    fn test_brick_rows_color_by_row() {
        let field = Playfield::new(400, 272).unwrap();
        let layout = Layout::derive(&field);
        let bricks = generate_level(&layout);

        assert_eq!(bricks[0].color(), ROW_COLORS[0]);
        assert_eq!(bricks[BRICK_COLS].row, 1);
        assert_eq!(bricks.last().unwrap().row, BRICK_ROWS - 1);
    }

    #[test]
    fn test_launch_vector_bounds() {
        let field = Playfield::new(400, 272).unwrap();
        let mut rng = Pcg32::seed_from_u64(7);

        for level in 1..6 {
            for kind in [LaunchKind::LevelStart, LaunchKind::Respawn] {
                let v = launch_velocity(&mut rng, &field, level, kind);
                let speed = (272.0 * kind.base_factor() + level as f32 * LAUNCH_LEVEL_FACTOR)
                    * FRAME_RATE;
                // Upward, and within the 60-120 degree cone
                assert!(v.y < 0.0);
                assert!(v.x.abs() <= speed * 60f32.to_radians().cos() + 1e-4);
                assert!(v.y.abs() >= speed * 60f32.to_radians().sin() * kind.vy_damp() - 1e-4);
                assert!(v.y.abs() <= speed * kind.vy_damp() + 1e-4);
            }
        }
    }

    #[test]
    fn test_paddle_clamping() {
        let field = Playfield::new(400, 272).unwrap();
        let layout = Layout::derive(&field);
        let mut paddle = Paddle::centered(&field, &layout);

        paddle.shift(-10_000.0, &field, &layout);
        assert_eq!(paddle.x, 0.0);
        paddle.shift(10_000.0, &field, &layout);
        assert_eq!(paddle.x, 400.0 - 72.0);

        paddle.set_center(10.0, &field, &layout);
        assert_eq!(paddle.x, 0.0);
        paddle.set_center(200.0, &field, &layout);
        assert_eq!(paddle.x, 164.0);
    }
}
