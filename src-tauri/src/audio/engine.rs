//! Cue playback engine
//!
//! Architecture: rodio's `OutputStream` is `!Send`, so the backend can't
//! live in AppState behind a Mutex. Instead the engine runs on a dedicated
//! thread that owns the backend and every active cue; the rest of the app
//! sends `CueCommand`s over a crossbeam channel. Active cue names and the
//! master volume are mirrored into shared state so the status command can
//! report them without touching the engine thread.
//!
//! Cues are identified by the name they were started with. Starting the
//! same file twice yields two cues with the same name; stopping by name
//! stops both.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};

use crate::ports::{ActiveCue, PlaybackBackend};

/// How often the engine wakes to reap finished cues
const REAP_INTERVAL: Duration = Duration::from_millis(250);

/// Control messages accepted by the engine thread
pub enum CueCommand {
    /// Start a cue. `name` is what stop commands will match against;
    /// `volume` is the cue's own volume, scaled by the master volume.
    Play {
        name: String,
        path: PathBuf,
        volume: f32,
    },
    /// Stop every active cue started under `name`
    Stop { name: String },
    /// Stop every active cue
    StopAll,
    /// Change the master volume and rescale all active cues
    SetMasterVolume(f32),
    /// Exit the engine loop
    Shutdown,
}

struct Cue {
    name: String,
    /// The cue's own volume, before master scaling
    volume: f32,
    handle: Box<dyn ActiveCue>,
}

pub struct CueEngine<B: PlaybackBackend> {
    backend: B,
    cues: Vec<Cue>,
    master_volume: f32,
    /// Mirror of active cue names for the status snapshot
    active: Arc<Mutex<Vec<String>>>,
    /// Mirror of the master volume for the status snapshot
    shared_volume: Arc<Mutex<f32>>,
}

impl<B: PlaybackBackend> CueEngine<B> {
    pub fn new(
        backend: B,
        master_volume: f32,
        active: Arc<Mutex<Vec<String>>>,
        shared_volume: Arc<Mutex<f32>>,
    ) -> Self {
        *shared_volume.lock().unwrap() = master_volume;
        Self {
            backend,
            cues: Vec::new(),
            master_volume,
            active,
            shared_volume,
        }
    }

    /// Drive the engine until `Shutdown` arrives or every sender is gone.
    /// Dropping the engine (and with it the backend) silences any cues
    /// still playing.
    pub fn run(mut self, commands: Receiver<CueCommand>) {
        log::info!("Cue engine running");
        loop {
            match commands.recv_timeout(REAP_INTERVAL) {
                Ok(CueCommand::Shutdown) => break,
                Ok(command) => self.handle(command),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
            self.reap();
        }
        log::info!("Cue engine stopped");
    }

    /// Apply one command. Public so tests can drive the engine inline
    /// without a thread.
    pub fn handle(&mut self, command: CueCommand) {
        match command {
            CueCommand::Play { name, path, volume } => self.play(name, path, volume),
            CueCommand::Stop { name } => self.stop(&name),
            CueCommand::StopAll => self.stop_all(),
            CueCommand::SetMasterVolume(volume) => self.set_master_volume(volume),
            CueCommand::Shutdown => {}
        }
    }

    /// Drop cues that have played to completion. Public for inline tests.
    pub fn reap(&mut self) {
        let before = self.cues.len();
        self.cues.retain(|cue| !cue.handle.is_finished());
        if self.cues.len() != before {
            log::debug!("Reaped {} finished cue(s)", before - self.cues.len());
            self.sync_active();
        }
    }

    fn play(&mut self, name: String, path: PathBuf, volume: f32) {
        match self.backend.start(&path, self.master_volume * volume) {
            Ok(handle) => {
                log::info!("Cue started: {name} (volume {volume})");
                self.cues.push(Cue {
                    name,
                    volume,
                    handle,
                });
                self.sync_active();
            }
            Err(e) => log::error!("Failed to start cue {name}: {e}"),
        }
    }

    fn stop(&mut self, name: &str) {
        let mut stopped = 0;
        for cue in self.cues.iter_mut().filter(|c| c.name == name) {
            cue.handle.stop();
            stopped += 1;
        }
        self.cues.retain(|c| c.name != name);
        if stopped > 0 {
            log::info!("Stopped {stopped} cue(s): {name}");
        } else {
            log::warn!("No active cue named {name}");
        }
        self.sync_active();
    }

    fn stop_all(&mut self) {
        for cue in self.cues.iter_mut() {
            cue.handle.stop();
        }
        log::info!("Stopped all cues ({})", self.cues.len());
        self.cues.clear();
        self.sync_active();
    }

    fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume;
        *self.shared_volume.lock().unwrap() = volume;
        for cue in self.cues.iter_mut() {
            cue.handle.set_volume(volume * cue.volume);
        }
        log::info!("Master volume set to {volume}");
    }

    fn sync_active(&self) {
        *self.active.lock().unwrap() = self.cues.iter().map(|c| c.name.clone()).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CuedeckResult;
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    enum Event {
        Start(String, String),
        SetVolume(String, String),
        Stop(String),
    }

    fn fmt_volume(volume: f32) -> String {
        format!("{volume:.2}")
    }

    #[derive(Clone, Default)]
    struct FakeBackend {
        events: Rc<RefCell<Vec<Event>>>,
        finished: Rc<RefCell<bool>>,
    }

    struct FakeCue {
        label: String,
        events: Rc<RefCell<Vec<Event>>>,
        finished: Rc<RefCell<bool>>,
    }

    impl PlaybackBackend for FakeBackend {
        fn start(&mut self, path: &Path, volume: f32) -> CuedeckResult<Box<dyn ActiveCue>> {
            let label = path.display().to_string();
            self.events
                .borrow_mut()
                .push(Event::Start(label.clone(), fmt_volume(volume)));
            Ok(Box::new(FakeCue {
                label,
                events: Rc::clone(&self.events),
                finished: Rc::clone(&self.finished),
            }))
        }
    }

    impl ActiveCue for FakeCue {
        fn set_volume(&mut self, volume: f32) {
            self.events
                .borrow_mut()
                .push(Event::SetVolume(self.label.clone(), fmt_volume(volume)));
        }

        fn stop(&mut self) {
            self.events.borrow_mut().push(Event::Stop(self.label.clone()));
        }

        fn is_finished(&self) -> bool {
            *self.finished.borrow()
        }
    }

    fn engine() -> (CueEngine<FakeBackend>, FakeBackend) {
        let backend = FakeBackend::default();
        let engine = CueEngine::new(
            backend.clone(),
            1.0,
            Arc::new(Mutex::new(Vec::new())),
            Arc::new(Mutex::new(1.0)),
        );
        (engine, backend)
    }

    fn play(name: &str, volume: f32) -> CueCommand {
        CueCommand::Play {
            name: name.to_string(),
            path: PathBuf::from(name),
            volume,
        }
    }

    #[test]
    fn play_scales_cue_volume_by_master() {
        let (mut engine, backend) = engine();
        engine.handle(CueCommand::SetMasterVolume(0.5));
        engine.handle(play("beep.wav", 0.8));
        assert_eq!(
            backend.events.borrow()[0],
            Event::Start("beep.wav".into(), fmt_volume(0.4))
        );
    }

    #[test]
    fn master_volume_change_rescales_active_cues() {
        let (mut engine, backend) = engine();
        engine.handle(play("beep.wav", 0.8));
        engine.handle(CueCommand::SetMasterVolume(0.25));
        assert_eq!(
            backend.events.borrow()[1],
            Event::SetVolume("beep.wav".into(), fmt_volume(0.2))
        );
    }

    #[test]
    fn stop_by_name_stops_duplicates() {
        let (mut engine, backend) = engine();
        engine.handle(play("beep.wav", 1.0));
        engine.handle(play("beep.wav", 1.0));
        engine.handle(play("other.wav", 1.0));
        engine.handle(CueCommand::Stop {
            name: "beep.wav".to_string(),
        });

        let stops: Vec<_> = backend
            .events
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Stop(_)))
            .map(|e| match e {
                Event::Stop(label) => label.clone(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(stops, vec!["beep.wav", "beep.wav"]);
    }

    #[test]
    fn stop_all_clears_every_cue() {
        let (mut engine, backend) = engine();
        let active = Arc::clone(&engine.active);
        engine.handle(play("a.wav", 1.0));
        engine.handle(play("b.wav", 1.0));
        engine.handle(CueCommand::StopAll);

        let events = backend.events.borrow();
        assert_eq!(events.iter().filter(|e| matches!(e, Event::Stop(_))).count(), 2);
        assert!(active.lock().unwrap().is_empty());
    }

    #[test]
    fn reap_drops_finished_cues_from_the_active_list() {
        let (mut engine, backend) = engine();
        let active = Arc::clone(&engine.active);
        engine.handle(play("a.wav", 1.0));
        assert_eq!(*active.lock().unwrap(), ["a.wav"]);

        *backend.finished.borrow_mut() = true;
        engine.reap();
        assert!(active.lock().unwrap().is_empty());
    }
}
