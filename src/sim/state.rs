//! Simulation entities and the read-only frame snapshot

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The ball: a single shared entity for the lifetime of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self::spawn()
    }
}

impl Ball {
    pub const fn new(x: f32, y: f32, dx: f32, dy: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(dx, dy),
        }
    }

    /// Fixed spawn state, also used after the ball leaves the playfield
    pub const fn spawn() -> Self {
        Self::new(BALL_SPAWN_X, BALL_SPAWN_Y, BALL_SPEED, BALL_SPEED)
    }

    /// Reassign spawn position and velocity in place
    pub fn reset(&mut self) {
        *self = Self::spawn();
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn dx(&self) -> f32 {
        self.vel.x
    }

    #[inline]
    pub fn dy(&self) -> f32 {
        self.vel.y
    }
}

/// A paddle. Width and height are fixed; `position` is the vertical offset along its side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub width: f32,
    pub height: f32,
    pub position: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            position: 0.0,
        }
    }
}

impl Paddle {
    /// Top of the paddle's vertical span
    #[inline]
    pub fn top(&self) -> f32 {
        self.position
    }

    /// Bottom of the paddle's vertical span
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position + self.height
    }

    /// Whether `y` lies within `[top, bottom]` (inclusive on both ends)
    #[inline]
    pub fn spans(&self, y: f32) -> bool {
        y >= self.top() && y <= self.bottom()
    }
}

/// Complete simulation state: one ball, two paddles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    /// Frame ticks stepped so far. Not a score.
    pub ticks: u64,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything a presentation layer needs to draw one frame
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            ball: self.ball,
            left: self.left,
            right: self.right,
            tick: self.ticks,
        }
    }
}

/// Read-only frame data handed to the presentation layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub tick: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_spawn_state() {
        let ball = Ball::spawn();
        assert_eq!((ball.x(), ball.y(), ball.dx(), ball.dy()), (300.0, 400.0, 5.0, 5.0));
        assert_eq!(Ball::default(), ball);
    }

    #[test]
    fn test_ball_reset() {
        let mut ball = Ball::new(-3.0, 12.0, -5.0, -5.0);
        ball.reset();
        assert_eq!(ball, Ball::spawn());
    }

    #[test]
    fn test_paddle_defaults_and_span() {
        let paddle = Paddle::default();
        assert_eq!(paddle.width, 20.0);
        assert_eq!(paddle.height, 100.0);
        assert_eq!(paddle.position, 0.0);

        assert!(paddle.spans(0.0));
        assert!(paddle.spans(100.0));
        assert!(!paddle.spans(100.5));
        assert!(!paddle.spans(-0.5));
    }

    #[test]
    fn test_snapshot_copies_state() {
        let mut sim = Simulation::new();
        sim.ball = Ball::new(10.0, 20.0, -5.0, 5.0);
        sim.ticks = 7;

        let snap = sim.snapshot();
        sim.ball.reset();

        assert_eq!(snap.ball, Ball::new(10.0, 20.0, -5.0, 5.0));
        assert_eq!(snap.tick, 7);
        assert_eq!(snap.left, Paddle::default());
    }
}
