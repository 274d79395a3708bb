//! DMX controller
//!
//! Tracks a set of universes and pushes updated frames to the transport.
//! The controller is useful without hardware: channel state is tracked
//! either way, frames only go out while a transport is attached.

use crate::dmx::Universe;
use crate::domain::{CuedeckError, CuedeckResult};
use crate::ports::DmxTransport;

pub struct DmxController {
    universes: Vec<Universe>,
    transport: Option<Box<dyn DmxTransport>>,
}

impl DmxController {
    /// Create a controller tracking `universe_count` dark universes,
    /// with no transport attached.
    pub fn new(universe_count: usize) -> Self {
        Self {
            universes: (0..universe_count).map(|_| Universe::new()).collect(),
            transport: None,
        }
    }

    /// Attach the wire side. Replaces any previous transport.
    pub fn attach_transport(&mut self, transport: Box<dyn DmxTransport>) {
        log::info!("DMX transport attached: {}", transport.describe());
        self.transport = Some(transport);
    }

    /// Detach the wire side. Channel state is kept.
    pub fn detach_transport(&mut self) {
        if self.transport.is_some() {
            log::info!("DMX transport detached");
        }
        self.transport = None;
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_some()
    }

    /// Name of the attached transport, if any
    pub fn transport_name(&self) -> Option<String> {
        self.transport.as_ref().map(|t| t.describe())
    }

    pub fn universe_count(&self) -> usize {
        self.universes.len()
    }

    /// Reset to `count` dark universes. Channel state does not survive.
    pub fn set_universe_count(&mut self, count: usize) {
        self.universes = (0..count).map(|_| Universe::new()).collect();
    }

    /// Set one channel and, when a transport is attached, transmit the
    /// updated universe frame.
    pub fn set_value(&mut self, universe: usize, channel: usize, value: u8) -> CuedeckResult<()> {
        let count = self.universes.len();
        let target = self.universes.get_mut(universe).ok_or_else(|| {
            CuedeckError::Dmx(format!("Universe {universe} out of range (0-{})", count.saturating_sub(1)))
        })?;
        target.set(channel, value)?;
        log::info!("DMX value set: universe {universe} channel {channel} -> {value}");

        if let Some(transport) = &mut self.transport {
            transport.write_frame(self.universes[universe].frame())?;
        } else {
            log::debug!("No DMX transport attached, frame not sent");
        }
        Ok(())
    }

    /// Read one channel value
    pub fn get_value(&self, universe: usize, channel: usize) -> CuedeckResult<u8> {
        let count = self.universes.len();
        self.universes
            .get(universe)
            .ok_or_else(|| {
                CuedeckError::Dmx(format!("Universe {universe} out of range (0-{})", count.saturating_sub(1)))
            })?
            .get(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Captures every frame the controller writes
    struct CaptureTransport {
        frames: Arc<Mutex<Vec<Vec<u8>>>>,
    }

    impl DmxTransport for CaptureTransport {
        fn write_frame(&mut self, frame: &[u8]) -> CuedeckResult<()> {
            self.frames.lock().unwrap().push(frame.to_vec());
            Ok(())
        }

        fn describe(&self) -> String {
            "capture".to_string()
        }
    }

    fn capture() -> (Box<CaptureTransport>, Arc<Mutex<Vec<Vec<u8>>>>) {
        let frames = Arc::new(Mutex::new(Vec::new()));
        (
            Box::new(CaptureTransport {
                frames: Arc::clone(&frames),
            }),
            frames,
        )
    }

    #[test]
    fn set_value_transmits_the_updated_frame() {
        let (transport, frames) = capture();
        let mut controller = DmxController::new(2);
        controller.attach_transport(transport);

        controller.set_value(1, 10, 128).unwrap();

        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), 512);
        assert_eq!(frames[0][10], 128);
    }

    #[test]
    fn set_value_without_transport_still_tracks_state() {
        let mut controller = DmxController::new(2);
        controller.set_value(0, 3, 42).unwrap();
        assert_eq!(controller.get_value(0, 3).unwrap(), 42);
        assert!(!controller.is_connected());
    }

    #[test]
    fn universe_out_of_range_is_rejected() {
        let mut controller = DmxController::new(2);
        assert!(controller.set_value(2, 0, 1).is_err());
        assert!(controller.get_value(2, 0).is_err());
    }

    #[test]
    fn detach_keeps_channel_state() {
        let (transport, _frames) = capture();
        let mut controller = DmxController::new(1);
        controller.attach_transport(transport);
        controller.set_value(0, 0, 200).unwrap();
        controller.detach_transport();
        assert_eq!(controller.get_value(0, 0).unwrap(), 200);
    }
}
