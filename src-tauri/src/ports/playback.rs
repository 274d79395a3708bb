//! Audio playback port traits
//!
//! Split into two traits:
//! - `PlaybackBackend` — starts cues from audio files
//! - `ActiveCue` — per-cue control handle (volume, stop, finished?)
//!
//! Note: no `Send` bound on either. rodio's output stream must live on the
//! thread that created it, so the backend is constructed on the cue engine
//! thread and never leaves it.

use std::path::Path;

use crate::domain::CuedeckResult;

/// Trait for starting audio cues.
pub trait PlaybackBackend {
    /// Begin playback of an audio file at the given effective volume,
    /// returning a handle for later control.
    fn start(&mut self, path: &Path, volume: f32) -> CuedeckResult<Box<dyn ActiveCue>>;
}

/// A cue that has been started and may still be audible.
pub trait ActiveCue {
    /// Change the effective volume of this cue.
    fn set_volume(&mut self, volume: f32);

    /// Stop playback immediately.
    fn stop(&mut self);

    /// True once the cue has played to completion (or was stopped).
    fn is_finished(&self) -> bool;
}
