//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per frame tick, never scaled by wall-clock time
//! - No scheduling, rendering or audio dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Contact, detect_contacts, is_out_of_bounds};
pub use state::{Ball, FrameSnapshot, Paddle, Simulation};
pub use tick::{step, tick};
