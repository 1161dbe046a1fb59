//! Playfield validation and derived geometry
//!
//! Paddle, ball, and brick sizes all derive from the playfield dimensions so
//! the game scales to whatever canvas the host carved out of the screen.
//!
//! Rounding policy: every derived pixel *size* is floored before clamping,
//! so sprites land on whole pixels; velocities and positions stay float.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected playfield dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("playfield dimensions must be positive, got {width}x{height}")]
pub struct PlayfieldError {
    pub width: u32,
    pub height: u32,
}

/// The rectangular simulation area bounding paddle, ball, and bricks.
///
/// Immutable for the lifetime of a match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    /// Validate and build a playfield. Zero-sized dimensions are a
    /// precondition violation and fail fast here.
    pub fn new(width: u32, height: u32) -> Result<Self, PlayfieldError> {
        if width == 0 || height == 0 {
            return Err(PlayfieldError { width, height });
        }
        Ok(Self {
            width: width as f32,
            height: height as f32,
        })
    }

    /// Center of the playfield (ball spawn point)
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Sizes derived from the playfield, fixed per match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle top edge y (rest position near the bottom)
    pub paddle_y: f32,
    pub ball_radius: f32,
    pub brick_width: f32,
    pub brick_height: f32,
    /// Keyboard paddle speed, pixels/frame
    pub paddle_speed: f32,
}

impl Layout {
    pub fn derive(field: &Playfield) -> Self {
        let w = field.width;
        let h = field.height;
        Self {
            paddle_width: (w * PADDLE_WIDTH_RATIO).floor(),
            paddle_height: PADDLE_HEIGHT,
            paddle_y: h - PADDLE_HEIGHT - PADDLE_BOTTOM_MARGIN,
            ball_radius: (w * BALL_RADIUS_RATIO)
                .floor()
                .clamp(BALL_RADIUS_MIN, BALL_RADIUS_MAX),
            brick_width: ((w - 2.0 * BRICK_ORIGIN_X) / BRICK_COLS as f32).floor() - BRICK_GAP_X,
            brick_height: (h * BRICK_HEIGHT_RATIO).floor(),
            paddle_speed: (w * PADDLE_SPEED_RATIO).clamp(PADDLE_SPEED_MIN, PADDLE_SPEED_MAX),
        }
    }

    /// Top-left corner of the brick at grid cell (row, col)
    pub fn brick_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            BRICK_ORIGIN_X + col as f32 * (self.brick_width + BRICK_GAP_X),
            BRICK_ORIGIN_Y + row as f32 * (self.brick_height + BRICK_GAP_Y),
        )
    }
}
