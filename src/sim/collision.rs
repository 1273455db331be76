//! Axis-aligned contact checks against walls and paddles
//!
//! Checks are point tests on the ball's position after it has been advanced.
//! The ball's size is a presentation concern and takes no part here.

use glam::Vec2;

use super::state::Paddle;
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Contacts detected for a single advanced ball position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    /// Top or bottom wall reached
    pub wall: bool,
    /// Left paddle reached
    pub left_paddle: bool,
    /// Right paddle reached
    pub right_paddle: bool,
}

/// Ball at or beyond the top/bottom wall
pub fn wall_contact(pos: Vec2) -> bool {
    pos.y <= 0.0 || pos.y >= ARENA_HEIGHT
}

/// Ball at or left of the left paddle's inner edge, within its vertical span
pub fn left_paddle_contact(pos: Vec2, paddle: &Paddle) -> bool {
    pos.x <= paddle.position + paddle.width && paddle.spans(pos.y)
}

/// Ball at or right of `position - width`, within the paddle's vertical span.
///
/// The paddle's `position` doubles as the horizontal reference here, so a
/// right paddle at position 0 reaches across nearly the whole playfield.
pub fn right_paddle_contact(pos: Vec2, paddle: &Paddle) -> bool {
    pos.x >= paddle.position - paddle.width && paddle.spans(pos.y)
}

/// Ball left the playfield horizontally
pub fn is_out_of_bounds(pos: Vec2) -> bool {
    pos.x <= 0.0 || pos.x >= ARENA_WIDTH
}

/// Run every contact check for an advanced position
pub fn detect_contacts(pos: Vec2, left: &Paddle, right: &Paddle) -> Contact {
    Contact {
        wall: wall_contact(pos),
        left_paddle: left_paddle_contact(pos, left),
        right_paddle: right_paddle_contact(pos, right),
    }
}
