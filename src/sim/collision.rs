//! Collision detection and response
//!
//! All shapes are axis-aligned. The ball is treated as its bounding square
//! for brick overlap tests, which matches how the playfield geometry was
//! tuned; the resulting bounce always flips the vertical component, even on
//! a side hit. That simplification is intentional, not a bug to fix.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::{Layout, Playfield};
use crate::consts::PADDLE_ENGLISH;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }
}

/// Strict AABB overlap between the ball's bounding square and a rect.
///
/// Edge-touching counts as a miss (all comparisons strict).
pub fn ball_rect_overlap(pos: Vec2, radius: f32, rect: &Rect) -> bool {
    pos.x + radius > rect.x
        && pos.x - radius < rect.right()
        && pos.y + radius > rect.y
        && pos.y - radius < rect.bottom()
}

/// Reflect the ball off the left, right, and top walls, clamping position
/// back inside the field. The bottom edge is open; crossing it is the
/// ball-lost condition and handled by the tick.
pub fn reflect_walls(pos: &mut Vec2, vel: &mut Vec2, radius: f32, field: &Playfield) {
    if pos.x - radius < 0.0 {
        pos.x = radius;
        vel.x = vel.x.abs();
    }
    if pos.x + radius > field.width {
        pos.x = field.width - radius;
        vel.x = -vel.x.abs();
    }
    if pos.y - radius < 0.0 {
        pos.y = radius;
        vel.y = vel.y.abs();
    }
}

/// Paddle strike test and response.
///
/// On a hit the vertical velocity is forced upward and the horizontal
/// velocity is recomputed from the strike offset: dead center returns the
/// ball straight up, edges send it out at an angle. This is the
/// player-aimable bounce, not a physical reflection.
///
/// Returns true if the paddle was struck this frame.
pub fn paddle_bounce(
    pos: Vec2,
    vel: &mut Vec2,
    radius: f32,
    paddle_x: f32,
    layout: &Layout,
) -> bool {
    let paddle = Rect::new(paddle_x, layout.paddle_y, layout.paddle_width, layout.paddle_height);
    let in_band = pos.y + radius >= paddle.y && pos.y - radius <= paddle.bottom();
    let in_span = pos.x >= paddle.x && pos.x <= paddle.right();
    if !(in_band && in_span) {
        return false;
    }

    vel.y = -vel.y.abs();
    let offset = (pos.x - paddle.center_x()) / (paddle.w / 2.0);
    vel.x = offset * vel.y.abs() * PADDLE_ENGLISH;
    true
}
