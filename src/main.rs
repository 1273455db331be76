//! Pong Core entry point
//!
//! Runs a short headless session and logs each screen's view model.
//! Set `RUST_LOG=info` (or `debug`/`trace`) to see output.

use std::sync::Arc;
use std::time::Duration;

use pong_core::{GameEvent, LogAudio, Session, Settings};

/// Frames to run before pausing, and again after resuming
const DEMO_FRAMES: u32 = 90;

#[tokio::main]
async fn main() {
    env_logger::init();
    log::info!("Pong Core (headless) starting...");

    let settings = Settings::load();
    let audio = Arc::new(LogAudio::from_settings(&settings));
    let mut session = Session::new(audio, &settings);
    let run_for = session.frame_interval() * DEMO_FRAMES;

    log_view(&session);

    let script = [
        (GameEvent::Start, run_for),
        (GameEvent::Pause, session.frame_interval() * 4),
        (GameEvent::Resume, run_for),
        (GameEvent::Quit, Duration::ZERO),
    ];

    for (event, hold) in script {
        session.dispatch(event);
        log_view(&session);
        tokio::time::sleep(hold).await;

        let snap = session.snapshot();
        log::info!(
            "After {:?}: tick {} ball ({:.1}, {:.1}) vel ({}, {})",
            event,
            snap.tick,
            snap.ball.x(),
            snap.ball.y(),
            snap.ball.dx(),
            snap.ball.dy()
        );
    }

    log::info!("Pong Core finished");
}

fn log_view(session: &Session) {
    match serde_json::to_string(&session.view()) {
        Ok(json) => log::info!("View: {json}"),
        Err(e) => log::warn!("Could not serialize view: {e}"),
    }
}
