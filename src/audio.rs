//! Audio cues emitted on state transitions
//!
//! Sound playback lives outside this crate. The state machine only fires
//! zero-argument notifications; implementors decide what they mean.

use std::fmt;

use crate::settings::Settings;

/// Audio notification kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A menu button was pressed
    ButtonPress,
    /// Background music should start
    MusicStart,
    /// Background music should stop
    MusicStop,
}

impl Cue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::ButtonPress => "button press",
            Cue::MusicStart => "music start",
            Cue::MusicStop => "music stop",
        }
    }
}

/// Fire-and-forget audio capabilities. Calls must not block and cannot fail.
pub trait AudioCues: Send + Sync {
    fn button_sound(&self);
    fn start_music(&self);
    fn stop_music(&self);

    /// Dispatch a cue to the matching capability
    fn play(&self, cue: Cue) {
        match cue {
            Cue::ButtonPress => self.button_sound(),
            Cue::MusicStart => self.start_music(),
            Cue::MusicStop => self.stop_music(),
        }
    }
}

type Callback = Box<dyn Fn() + Send + Sync>;

/// Audio cues backed by three injected closures
pub struct AudioCallbacks {
    on_button: Callback,
    on_music_start: Callback,
    on_music_stop: Callback,
}

impl AudioCallbacks {
    pub fn new(
        on_button: impl Fn() + Send + Sync + 'static,
        on_music_start: impl Fn() + Send + Sync + 'static,
        on_music_stop: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            on_button: Box::new(on_button),
            on_music_start: Box::new(on_music_start),
            on_music_stop: Box::new(on_music_stop),
        }
    }

    /// Callbacks that do nothing
    pub fn silent() -> Self {
        Self::new(|| {}, || {}, || {})
    }
}

impl fmt::Debug for AudioCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioCallbacks").finish_non_exhaustive()
    }
}

impl AudioCues for AudioCallbacks {
    fn button_sound(&self) {
        (self.on_button)()
    }

    fn start_music(&self) {
        (self.on_music_start)()
    }

    fn stop_music(&self) {
        (self.on_music_stop)()
    }
}

/// Audio cues that only log, honoring volume settings
#[derive(Debug, Clone)]
pub struct LogAudio {
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl Default for LogAudio {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl LogAudio {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
            music_volume: settings.music_volume,
            muted: settings.muted,
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Effective volume for a cue
    pub fn effective_volume(&self, cue: Cue) -> f32 {
        if self.muted {
            return 0.0;
        }
        match cue {
            Cue::ButtonPress => self.master_volume * self.sfx_volume,
            Cue::MusicStart | Cue::MusicStop => self.master_volume * self.music_volume,
        }
    }

    fn emit(&self, cue: Cue) {
        let vol = self.effective_volume(cue);
        if vol <= 0.0 {
            log::debug!("Audio cue '{}' skipped (muted)", cue.as_str());
            return;
        }
        log::info!("Audio cue '{}' at volume {:.2}", cue.as_str(), vol);
    }
}

impl AudioCues for LogAudio {
    fn button_sound(&self) {
        self.emit(Cue::ButtonPress);
    }

    fn start_music(&self) {
        self.emit(Cue::MusicStart);
    }

    fn stop_music(&self) {
        self.emit(Cue::MusicStop);
    }
}
