//! Game session: state machine + simulation + frame loop
//!
//! While the game is Playing a single tokio task sleeps one frame interval,
//! steps the simulation once, then publishes a snapshot. The task checks the
//! published game state only at the top of each cycle, so a pause issued
//! mid-delay lands after that delay and its step complete.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::audio::AudioCues;
use crate::machine::{GameEvent, GameState, StateMachine};
use crate::settings::Settings;
use crate::sim::{FrameSnapshot, Simulation, tick};
use crate::view::{self, ViewModel};

/// State shared between the session and its frame loop
#[derive(Debug, Default)]
struct Shared {
    sim: Simulation,
    /// Set while a loop task is alive; cleared by the task itself as it exits
    loop_running: bool,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A single active game.
///
/// The frame loop runs on the Tokio runtime captured at construction (or set
/// with [`Session::with_runtime`]). Without one, transitions still apply and
/// fire their cues, but no frames are stepped.
pub struct Session {
    machine: StateMachine,
    runtime: Option<Handle>,
    shared: Arc<Mutex<Shared>>,
    frames_tx: watch::Sender<FrameSnapshot>,
    frame_interval: Duration,
    loop_task: Option<JoinHandle<()>>,
}

impl Session {
    pub fn new(audio: Arc<dyn AudioCues>, settings: &Settings) -> Self {
        Self::with_frame_interval(audio, settings.frame_interval())
    }

    pub fn with_frame_interval(audio: Arc<dyn AudioCues>, frame_interval: Duration) -> Self {
        let sim = Simulation::new();
        let (frames_tx, _) = watch::channel(sim.snapshot());
        Self {
            machine: StateMachine::new(audio),
            runtime: Handle::try_current().ok(),
            shared: Arc::new(Mutex::new(Shared {
                sim,
                loop_running: false,
            })),
            frames_tx,
            frame_interval,
            loop_task: None,
        }
    }

    /// Run the frame loop on `runtime`, e.g. when built outside any runtime
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn state(&self) -> GameState {
        self.machine.state()
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Latest published frame
    pub fn snapshot(&self) -> FrameSnapshot {
        *self.frames_tx.borrow()
    }

    /// Receiver notified after every frame tick
    pub fn subscribe_frames(&self) -> watch::Receiver<FrameSnapshot> {
        self.frames_tx.subscribe()
    }

    /// Receiver notified on every state transition
    pub fn subscribe_state(&self) -> watch::Receiver<GameState> {
        self.machine.subscribe()
    }

    /// View model for the current state and latest frame
    pub fn view(&self) -> ViewModel {
        view::render(self.state(), &self.snapshot())
    }

    /// Apply a button event, starting the frame loop when entering Playing
    pub fn dispatch(&mut self, event: GameEvent) -> GameState {
        let state = self.machine.transition(event);
        if state == GameState::Playing {
            self.ensure_loop();
        }
        state
    }

    pub fn start(&mut self) -> GameState {
        self.dispatch(GameEvent::Start)
    }

    pub fn pause(&mut self) -> GameState {
        self.dispatch(GameEvent::Pause)
    }

    pub fn resume(&mut self) -> GameState {
        self.dispatch(GameEvent::Resume)
    }

    pub fn quit(&mut self) -> GameState {
        self.dispatch(GameEvent::Quit)
    }

    /// Spawn the frame loop unless one is still alive.
    ///
    /// A loop that has not yet re-checked the state will see Playing again
    /// and carry on, so a quick pause/resume never runs two loops.
    fn ensure_loop(&mut self) {
        let Some(runtime) = self.runtime.clone().or_else(|| Handle::try_current().ok()) else {
            log::warn!("No Tokio runtime available, frame loop not started");
            return;
        };

        let mut shared = lock(&self.shared);
        if shared.loop_running {
            return;
        }
        shared.loop_running = true;
        drop(shared);

        self.loop_task = Some(runtime.spawn(frame_loop(
            self.shared.clone(),
            self.machine.subscribe(),
            self.frames_tx.clone(),
            self.frame_interval,
        )));
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(task) = self.loop_task.take() {
            task.abort();
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state())
            .field("frame_interval", &self.frame_interval)
            .field("snapshot", &self.snapshot())
            .finish_non_exhaustive()
    }
}

async fn frame_loop(
    shared: Arc<Mutex<Shared>>,
    state_rx: watch::Receiver<GameState>,
    frames_tx: watch::Sender<FrameSnapshot>,
    frame_interval: Duration,
) {
    log::info!("Frame loop started ({} ms interval)", frame_interval.as_millis());

    loop {
        {
            let mut shared = lock(&shared);
            if *state_rx.borrow() != GameState::Playing {
                shared.loop_running = false;
                break;
            }
        }

        tokio::time::sleep(frame_interval).await;

        // The whole step runs under the lock, with no await inside
        let snapshot = {
            let mut shared = lock(&shared);
            tick(&mut shared.sim);
            shared.sim.snapshot()
        };
        frames_tx.send_replace(snapshot);
    }

    log::info!("Frame loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioCallbacks, Cue};
    use crate::machine::tests::RecordingAudio;
    use crate::sim::Ball;

    const FRAME: Duration = Duration::from_millis(16);

    fn session() -> Session {
        Session::with_frame_interval(Arc::new(AudioCallbacks::silent()), FRAME)
    }

    async fn wait(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_on_title_screen() {
        let s = session();
        wait(200).await;
        assert_eq!(s.state(), GameState::TitleScreen);
        assert_eq!(s.snapshot().tick, 0);
        assert_eq!(s.snapshot().ball, Ball::spawn());
    }

    #[tokio::test(start_paused = true)]
    async fn test_playing_steps_once_per_frame() {
        let mut s = session();
        let mut frames = s.subscribe_frames();
        s.start();

        wait(100).await;
        let snap = s.snapshot();
        assert_eq!(snap.tick, 6);
        assert_eq!(snap.ball, Ball::new(330.0, 430.0, 5.0, 5.0));
        assert!(frames.has_changed().unwrap());
        assert_eq!(frames.borrow_and_update().tick, 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_lands_after_in_flight_frame() {
        let mut s = session();
        s.start();
        wait(100).await;
        assert_eq!(s.snapshot().tick, 6);

        // The loop is mid-delay; it still completes this frame before stopping
        s.pause();
        wait(50).await;
        assert_eq!(s.snapshot().tick, 7);

        wait(500).await;
        assert_eq!(s.snapshot().tick, 7);
        assert_eq!(s.state(), GameState::Paused);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_resume_keeps_single_loop() {
        let mut s = session();
        s.start();
        wait(100).await;

        s.pause();
        s.resume();
        wait(50).await;
        // Frames at 112, 128 and 144 ms from the first loop only
        assert_eq!(s.snapshot().tick, 9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_after_loop_exit_restarts_loop() {
        let mut s = session();
        s.start();
        wait(100).await;
        s.pause();
        wait(100).await;
        assert_eq!(s.snapshot().tick, 7);

        s.resume();
        wait(40).await;
        assert_eq!(s.snapshot().tick, 9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_keeps_ball_and_stops_ticking() {
        let mut s = session();
        s.start();
        wait(100).await;
        s.quit();
        wait(100).await;

        let snap = s.snapshot();
        assert_eq!(s.state(), GameState::TitleScreen);
        assert_eq!(snap.tick, 7);
        assert_eq!(snap.ball, Ball::new(335.0, 435.0, 5.0, 5.0));

        s.start();
        wait(20).await;
        assert_eq!(s.snapshot().tick, 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_cues_follow_transitions() {
        let audio = Arc::new(RecordingAudio::default());
        let mut s = Session::with_frame_interval(audio.clone(), FRAME);

        s.start();
        s.pause();
        s.pause();
        s.resume();
        s.quit();

        assert_eq!(
            audio.take(),
            vec![
                Cue::ButtonPress,
                Cue::MusicStart,
                Cue::MusicStop,
                Cue::ButtonPress,
                Cue::MusicStart,
                Cue::ButtonPress,
                Cue::MusicStop,
            ]
        );
    }

    #[test]
    fn test_transitions_outside_runtime_do_not_panic() {
        let mut s = session();
        assert_eq!(s.start(), GameState::Playing);
        assert_eq!(s.pause(), GameState::Paused);
        assert_eq!(s.resume(), GameState::Playing);
        assert_eq!(s.snapshot().tick, 0);
        assert_eq!(s.quit(), GameState::TitleScreen);
    }

    #[test]
    fn test_loop_runs_on_supplied_runtime() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();
        let mut s = session().with_runtime(rt.handle().clone());

        assert_eq!(s.start(), GameState::Playing);
        rt.block_on(wait(100));
        assert_eq!(s.snapshot().tick, 6);

        s.pause();
        rt.block_on(wait(100));
        assert_eq!(s.snapshot().tick, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_paddles_stay_put_while_playing() {
        let mut s = session();
        s.start();
        wait(2000).await;
        let snap = s.snapshot();
        assert!(snap.tick > 100);
        assert_eq!(snap.left.position, 0.0);
        assert_eq!(snap.right.position, 0.0);
        assert_eq!(snap.ball.dx().abs(), 5.0);
        assert_eq!(snap.ball.dy().abs(), 5.0);
    }
}
