//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame timestep only (velocities are pixels/frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod state;
pub mod tick;

pub use collision::{Rect, ball_rect_overlap, paddle_bounce, reflect_walls};
pub use layout::{Layout, Playfield, PlayfieldError};
pub use state::{Ball, Brick, GamePhase, GameState, Paddle};
pub use tick::{FrameResult, GameEvent, TickInput, tick};
