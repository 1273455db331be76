//! Game state machine
//!
//! Three states driven by four button events. Anything outside the
//! transition table is ignored: state stays put and no cue fires.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::audio::{AudioCues, Cue};

/// Current screen of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    TitleScreen,
    Playing,
    Paused,
}

/// Inbound button events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Start,
    Pause,
    Resume,
    Quit,
}

/// Target state for `event` from `state`, or `None` if the pair is not in the table
pub fn next_state(state: GameState, event: GameEvent) -> Option<GameState> {
    match (state, event) {
        (GameState::TitleScreen, GameEvent::Start) => Some(GameState::Playing),
        (GameState::Playing, GameEvent::Pause) => Some(GameState::Paused),
        (GameState::Paused, GameEvent::Resume) => Some(GameState::Playing),
        (GameState::Playing | GameState::Paused, GameEvent::Quit) => Some(GameState::TitleScreen),
        _ => None,
    }
}

impl GameEvent {
    /// Cue fired before the state changes
    fn cue_before(&self) -> Option<Cue> {
        match self {
            GameEvent::Start | GameEvent::Resume | GameEvent::Quit => Some(Cue::ButtonPress),
            GameEvent::Pause => None,
        }
    }

    /// Cue fired after the state changes
    fn cue_after(&self) -> Cue {
        match self {
            GameEvent::Start | GameEvent::Resume => Cue::MusicStart,
            GameEvent::Pause | GameEvent::Quit => Cue::MusicStop,
        }
    }
}

/// Holds the current state and notifies audio on every accepted transition.
///
/// The state is published on a watch channel so a frame loop can observe it
/// without borrowing the machine.
pub struct StateMachine {
    state_tx: watch::Sender<GameState>,
    audio: Arc<dyn AudioCues>,
}

impl StateMachine {
    pub fn new(audio: Arc<dyn AudioCues>) -> Self {
        let (state_tx, _) = watch::channel(GameState::TitleScreen);
        Self { state_tx, audio }
    }

    pub fn state(&self) -> GameState {
        *self.state_tx.borrow()
    }

    /// Receiver that sees every published state
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.state_tx.subscribe()
    }

    /// Apply an event and return the resulting state
    pub fn transition(&mut self, event: GameEvent) -> GameState {
        let from = self.state();
        let Some(to) = next_state(from, event) else {
            log::debug!("Ignoring {:?} while {:?}", event, from);
            return from;
        };

        if let Some(cue) = event.cue_before() {
            self.audio.play(cue);
        }
        self.state_tx.send_replace(to);
        log::info!("Game state {:?} -> {:?}", from, to);
        self.audio.play(event.cue_after());

        to
    }

    pub fn start(&mut self) -> GameState {
        self.transition(GameEvent::Start)
    }

    pub fn pause(&mut self) -> GameState {
        self.transition(GameEvent::Pause)
    }

    pub fn resume(&mut self) -> GameState {
        self.transition(GameEvent::Resume)
    }

    pub fn quit(&mut self) -> GameState {
        self.transition(GameEvent::Quit)
    }
}

impl std::fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
