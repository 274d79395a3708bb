//! Adapters (implementations of ports)
//!
//! Real I/O lives here: the serialport-backed DMX transport, the rodio
//! playback backend, plus the mock transport used for development without
//! hardware and the in-process invocation bridge.

pub mod local_bridge;
pub mod mock_dmx;
pub mod rodio_playback;
pub mod serial_dmx;
