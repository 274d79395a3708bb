//! Application state

use std::sync::{Arc, Mutex};

use crate::audio::AudioHandle;
use crate::dmx::DmxController;
use crate::domain::Configuration;
use crate::router::CommandRouter;

/// Shared application state managed by Tauri
pub struct AppState {
    pub dmx: Arc<Mutex<DmxController>>,
    pub audio: AudioHandle,
    pub config: Arc<Mutex<Configuration>>,
    pub router: CommandRouter,
}

impl AppState {
    /// Build runtime state from the default profile and spawn the cue
    /// engine thread.
    pub fn new() -> Self {
        let profile = Configuration::default();
        let dmx = Arc::new(Mutex::new(DmxController::new(profile.universe_count)));
        let audio = AudioHandle::spawn(profile.master_volume);
        let config = Arc::new(Mutex::new(profile));
        let router = CommandRouter::new(Arc::clone(&dmx), audio.clone(), Arc::clone(&config));

        Self {
            dmx,
            audio,
            config,
            router,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
