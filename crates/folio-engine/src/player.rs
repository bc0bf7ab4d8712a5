//! Audio narration player state, kept free of any UI so it can be tested.
//!
//! The UI forwards media element events (`on_loaded`, `on_time_update`,
//! `on_ended`) and user actions into [`PlayerState`], then pushes the
//! resulting position and rate back to the media element.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlaybackRate {
    #[default]
    Normal,
    OneAndHalf,
    Double,
    Triple,
}

impl PlaybackRate {
    pub const ALL: [PlaybackRate; 4] = [
        PlaybackRate::Normal,
        PlaybackRate::OneAndHalf,
        PlaybackRate::Double,
        PlaybackRate::Triple,
    ];

    pub fn value(self) -> f64 {
        match self {
            PlaybackRate::Normal => 1.0,
            PlaybackRate::OneAndHalf => 1.5,
            PlaybackRate::Double => 2.0,
            PlaybackRate::Triple => 3.0,
        }
    }

    pub fn next(self) -> Self {
        match self {
            PlaybackRate::Normal => PlaybackRate::OneAndHalf,
            PlaybackRate::OneAndHalf => PlaybackRate::Double,
            PlaybackRate::Double => PlaybackRate::Triple,
            PlaybackRate::Triple => PlaybackRate::Normal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaybackRate::Normal => "1x",
            PlaybackRate::OneAndHalf => "1.5x",
            PlaybackRate::Double => "2x",
            PlaybackRate::Triple => "3x",
        }
    }
}

impl fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Formats seconds as `MM:SS`; anything that is not a finite, non-negative
/// number shows as `00:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerState {
    pub playing: bool,
    pub current_time: f64,
    /// Zero until the media metadata has loaded.
    pub duration: f64,
    pub rate: PlaybackRate,
}

impl PlayerState {
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Pauses and rewinds to the start.
    pub fn stop(&mut self) {
        self.playing = false;
        self.current_time = 0.0;
    }

    /// Moves to `time`, clamped to the known duration.
    pub fn seek(&mut self, time: f64) {
        self.current_time = if time.is_finite() {
            time.clamp(0.0, self.duration.max(0.0))
        } else {
            0.0
        };
    }

    pub fn cycle_rate(&mut self) -> PlaybackRate {
        self.rate = self.rate.next();
        self.rate
    }

    pub fn on_time_update(&mut self, time: f64) {
        if time.is_finite() {
            self.current_time = time.max(0.0);
        }
    }

    pub fn on_loaded(&mut self, duration: f64) {
        self.duration = if duration.is_finite() {
            duration.max(0.0)
        } else {
            0.0
        };
    }

    pub fn on_ended(&mut self) {
        self.stop();
    }

    /// The media element refused to start; keep the position but show as paused.
    pub fn on_play_failed(&mut self) {
        self.playing = false;
    }

    /// Fraction played, from 0 to 1.
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn elapsed_label(&self) -> String {
        format_time(self.current_time)
    }

    pub fn duration_label(&self) -> String {
        format_time(self.duration)
    }
}
