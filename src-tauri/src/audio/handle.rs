//! App-side handle to the cue engine thread
//!
//! Cheap to clone; every clone talks to the same engine. When the last
//! clone drops, the channel disconnects and the engine loop exits.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;

use crossbeam_channel::Sender;

use crate::adapters::rodio_playback::RodioPlayback;
use crate::audio::{CueCommand, CueEngine};
use crate::domain::{CuedeckError, CuedeckResult};
use crate::ports::PlaybackBackend;

#[derive(Clone)]
pub struct AudioHandle {
    commands: Sender<CueCommand>,
    active: Arc<Mutex<Vec<String>>>,
    master_volume: Arc<Mutex<f32>>,
}

impl AudioHandle {
    /// Spawn the engine thread with a rodio backend and return the handle.
    ///
    /// If no output device is available the thread exits immediately and
    /// every later command returns an `Audio` error.
    pub fn spawn(initial_volume: f32) -> Self {
        let (commands, receiver) = crossbeam_channel::unbounded();
        let active = Arc::new(Mutex::new(Vec::new()));
        let master_volume = Arc::new(Mutex::new(initial_volume));

        let engine_active = Arc::clone(&active);
        let engine_volume = Arc::clone(&master_volume);
        thread::spawn(move || {
            // The rodio output stream must be created on this thread and
            // lives as long as the engine loop.
            match RodioPlayback::new() {
                Ok(backend) => {
                    CueEngine::new(backend, initial_volume, engine_active, engine_volume)
                        .run(receiver)
                }
                Err(e) => log::error!("Cue engine unavailable: {e}"),
            }
        });

        Self {
            commands,
            active,
            master_volume,
        }
    }

    /// Spawn the engine thread with the given backend. Unlike `spawn`,
    /// the backend is constructed by the caller, so it must be `Send`;
    /// this is how tests run the engine against a recording backend.
    pub fn spawn_with<B>(backend: B, initial_volume: f32) -> Self
    where
        B: PlaybackBackend + Send + 'static,
    {
        let (commands, receiver) = crossbeam_channel::unbounded();
        let active = Arc::new(Mutex::new(Vec::new()));
        let master_volume = Arc::new(Mutex::new(initial_volume));

        let engine_active = Arc::clone(&active);
        let engine_volume = Arc::clone(&master_volume);
        thread::spawn(move || {
            CueEngine::new(backend, initial_volume, engine_active, engine_volume).run(receiver)
        });

        Self {
            commands,
            active,
            master_volume,
        }
    }

    pub fn play(&self, name: String, path: PathBuf, volume: f32) -> CuedeckResult<()> {
        self.send(CueCommand::Play { name, path, volume })
    }

    pub fn stop(&self, name: &str) -> CuedeckResult<()> {
        self.send(CueCommand::Stop {
            name: name.to_string(),
        })
    }

    pub fn stop_all(&self) -> CuedeckResult<()> {
        self.send(CueCommand::StopAll)
    }

    pub fn set_master_volume(&self, volume: f32) -> CuedeckResult<()> {
        self.send(CueCommand::SetMasterVolume(volume))
    }

    /// Names of the cues currently playing
    pub fn active_cues(&self) -> Vec<String> {
        self.active.lock().unwrap().clone()
    }

    pub fn master_volume(&self) -> f32 {
        *self.master_volume.lock().unwrap()
    }

    fn send(&self, command: CueCommand) -> CuedeckResult<()> {
        self.commands
            .send(command)
            .map_err(|_| CuedeckError::Audio("Cue engine is not running".to_string()))
    }
}
