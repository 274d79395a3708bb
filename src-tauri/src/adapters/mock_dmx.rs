//! Mock DMX transport for development and testing without an interface.
//!
//! Activate by setting MOCK_DMX=1 in the environment:
//!
//!   MOCK_DMX=1 RUST_LOG=cuedeck_lib=info cargo tauri dev
//!
//! Every frame write is logged at INFO with the channels that are up, so
//! you can verify exactly what a real interface would receive.

use crate::domain::CuedeckResult;
use crate::ports::DmxTransport;

pub struct MockDmxTransport {
    frames_sent: u64,
}

impl MockDmxTransport {
    pub fn new() -> Self {
        log::info!("[MOCK DMX] Initialized, frames go nowhere");
        Self { frames_sent: 0 }
    }
}

impl Default for MockDmxTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl DmxTransport for MockDmxTransport {
    fn write_frame(&mut self, frame: &[u8]) -> CuedeckResult<()> {
        self.frames_sent += 1;
        let lit: Vec<String> = frame
            .iter()
            .enumerate()
            .filter(|(_, &value)| value > 0)
            .map(|(channel, &value)| format!("{channel}={value}"))
            .collect();
        log::info!(
            "[MOCK DMX] frame {} ({} bytes) lit channels: [{}]",
            self.frames_sent,
            frame.len(),
            lit.join(", ")
        );
        Ok(())
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
