//! Display-agnostic view model
//!
//! `render` maps the game state and the latest frame to the text, buttons
//! and rectangles a presentation layer should draw. Nothing here draws.

pub mod shapes;

use serde::Serialize;

use crate::machine::{GameEvent, GameState};
use crate::sim::FrameSnapshot;
use shapes::{Rect, colors};

/// A line of text with its point size
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: &'static str,
    pub font_size: f32,
    pub color: [f32; 4],
}

/// A button and the event it dispatches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub label: &'static str,
    pub event: GameEvent,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub state: GameState,
    pub background: [f32; 4],
    pub heading: Label,
    pub buttons: Vec<Button>,
    /// Paddles then ball; empty outside Playing
    pub shapes: Vec<Rect>,
}

fn heading(text: &'static str, font_size: f32) -> Label {
    Label {
        text,
        font_size,
        color: colors::TEXT,
    }
}

/// Map state + frame to a view model
pub fn render(state: GameState, frame: &FrameSnapshot) -> ViewModel {
    match state {
        GameState::TitleScreen => ViewModel {
            state,
            background: colors::TITLE_BACKGROUND,
            heading: heading("Pong Game", 32.0),
            buttons: vec![Button {
                label: "Start Game",
                event: GameEvent::Start,
            }],
            shapes: Vec::new(),
        },
        GameState::Playing => ViewModel {
            state,
            background: colors::GAME_BACKGROUND,
            heading: heading("Pong Game is Playing", 24.0),
            buttons: vec![
                Button {
                    label: "Pause",
                    event: GameEvent::Pause,
                },
                Button {
                    label: "Quit",
                    event: GameEvent::Quit,
                },
            ],
            shapes: vec![
                shapes::left_paddle(&frame.left),
                shapes::right_paddle(&frame.right),
                shapes::ball(&frame.ball),
            ],
        },
        GameState::Paused => ViewModel {
            state,
            background: colors::GAME_BACKGROUND,
            heading: heading("Game Paused", 24.0),
            buttons: vec![
                Button {
                    label: "Resume",
                    event: GameEvent::Resume,
                },
                Button {
                    label: "Quit",
                    event: GameEvent::Quit,
                },
            ],
            shapes: Vec::new(),
        },
    }
}
