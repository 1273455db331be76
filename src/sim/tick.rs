//! Fixed-step simulation tick
//!
//! One call advances the ball by exactly one frame tick. Order matters:
//! advance, wall bounce, left paddle, right paddle, then the out-of-bounds
//! reset, which overrides any bounce decided earlier in the same tick.

use super::collision::{detect_contacts, is_out_of_bounds};
use super::state::{Ball, Paddle, Simulation};

/// Produce the next ball state from the current ball and both paddles
pub fn step(ball: Ball, left: &Paddle, right: &Paddle) -> Ball {
    let mut next = ball;

    // Advance
    next.pos += next.vel;

    // Reflect without clamping: the ball may overshoot a wall for one tick
    let contact = detect_contacts(next.pos, left, right);
    if contact.wall {
        next.vel.y = -next.vel.y;
    }
    if contact.left_paddle {
        next.vel.x = -next.vel.x;
    }
    if contact.right_paddle {
        next.vel.x = -next.vel.x;
    }

    if is_out_of_bounds(next.pos) {
        log::debug!(
            "Ball left playfield at ({:.1}, {:.1}), respawning",
            next.pos.x,
            next.pos.y
        );
        next.reset();
    }

    next
}

/// Advance the simulation by one frame tick
pub fn tick(sim: &mut Simulation) {
    sim.ball = step(sim.ball, &sim.left, &sim.right);
    sim.ticks += 1;
    log::trace!(
        "tick {}: ball ({:.1}, {:.1}) vel ({}, {})",
        sim.ticks,
        sim.ball.x(),
        sim.ball.y(),
        sim.ball.dx(),
        sim.ball.dy()
    );
}
