//! Rodio playback adapter
//!
//! Implements `PlaybackBackend` by decoding audio files into rodio sinks
//! on the default output device.
//!
//! Important: `OutputStream` is `!Send` and killing it silences every sink
//! attached to it, so the adapter is constructed on the cue engine thread
//! and stays there for the life of the app.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::domain::{CuedeckError, CuedeckResult};
use crate::ports::{ActiveCue, PlaybackBackend};

pub struct RodioPlayback {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl RodioPlayback {
    /// Open the default output device
    pub fn new() -> CuedeckResult<Self> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| CuedeckError::Audio(format!("No audio output device: {e}")))?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }
}

impl PlaybackBackend for RodioPlayback {
    fn start(&mut self, path: &Path, volume: f32) -> CuedeckResult<Box<dyn ActiveCue>> {
        let file = File::open(path)
            .map_err(|e| CuedeckError::Audio(format!("Failed to open {}: {e}", path.display())))?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| {
            CuedeckError::Audio(format!("Failed to decode {}: {e}", path.display()))
        })?;
        let sink = Sink::try_new(&self.handle)
            .map_err(|e| CuedeckError::Audio(format!("Failed to create sink: {e}")))?;

        sink.set_volume(volume);
        sink.append(source);

        Ok(Box::new(RodioCue { sink }))
    }
}

struct RodioCue {
    sink: Sink,
}

impl ActiveCue for RodioCue {
    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume);
    }

    fn stop(&mut self) {
        self.sink.stop();
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }
}
