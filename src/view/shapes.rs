//! Rectangle primitives for paddles and ball

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_WIDTH, BALL_SIZE};
use crate::sim::{Ball, Paddle};

/// Colors for game elements
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const GRAY: [f32; 4] = [0.53, 0.53, 0.53, 1.0];

    pub const PADDLE: [f32; 4] = WHITE;
    pub const BALL: [f32; 4] = WHITE;
    pub const TEXT: [f32; 4] = WHITE;
    pub const TITLE_BACKGROUND: [f32; 4] = BLACK;
    pub const GAME_BACKGROUND: [f32; 4] = GRAY;
}

/// Filled axis-aligned rectangle, `origin` at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2, color: [f32; 4]) -> Self {
        Self { origin, size, color }
    }
}

/// Left paddle hugs the left edge
pub fn left_paddle(paddle: &Paddle) -> Rect {
    Rect::new(
        Vec2::new(0.0, paddle.position),
        Vec2::new(paddle.width, paddle.height),
        colors::PADDLE,
    )
}

/// Right paddle hugs the right edge
pub fn right_paddle(paddle: &Paddle) -> Rect {
    Rect::new(
        Vec2::new(ARENA_WIDTH - paddle.width, paddle.position),
        Vec2::new(paddle.width, paddle.height),
        colors::PADDLE,
    )
}

pub fn ball(ball: &Ball) -> Rect {
    Rect::new(ball.pos, Vec2::splat(BALL_SIZE), colors::BALL)
}
