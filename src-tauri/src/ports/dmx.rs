//! DMX transport port trait

use crate::domain::CuedeckResult;

/// Trait for the wire side of DMX output.
///
/// Only requires `Send` (not `Sync`) since the controller owning it is
/// always accessed behind a Mutex.
pub trait DmxTransport: Send {
    /// Transmit one full universe frame (the raw 512 channel bytes).
    fn write_frame(&mut self, frame: &[u8]) -> CuedeckResult<()>;

    /// Where frames go, for status display (port name, or "mock").
    fn describe(&self) -> String;
}
