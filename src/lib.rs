//! Pong Core - a two-paddle Pong simulation
//!
//! Core modules:
//! - `sim`: Fixed-step ball physics (pure, no scheduling or drawing)
//! - `machine`: Title/Playing/Paused state machine with audio cues
//! - `session`: Cooperative frame loop publishing read-only snapshots
//! - `view`: Display-agnostic view model derived from state + snapshot
//! - `audio`: Injectable sound/music callbacks
//! - `settings`: Frame interval and volume preferences

pub mod audio;
pub mod machine;
pub mod session;
pub mod settings;
pub mod sim;
pub mod view;

pub use audio::{AudioCallbacks, AudioCues, LogAudio};
pub use machine::{GameEvent, GameState, StateMachine};
pub use session::Session;
pub use settings::{Settings, SettingsError};
pub use sim::{Ball, FrameSnapshot, Paddle, Simulation};

/// Game configuration constants (logical units)
pub mod consts {
    use std::time::Duration;

    /// Playfield height bound (top wall at 0, bottom wall at this value)
    pub const ARENA_HEIGHT: f32 = 800.0;
    /// Playfield width bound (ball resets at 0 and at this value)
    pub const ARENA_WIDTH: f32 = 600.0;

    /// Ball edge length (square ball)
    pub const BALL_SIZE: f32 = 16.0;
    /// Ball spawn position
    pub const BALL_SPAWN_X: f32 = 300.0;
    pub const BALL_SPAWN_Y: f32 = 400.0;
    /// Per-axis ball speed; only the sign ever changes
    pub const BALL_SPEED: f32 = 5.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Frame interval of the driving loop (~60 Hz)
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
}
