//! Port traits (interfaces)
//!
//! These traits define the boundaries between the core domain and external
//! I/O. Adapters implement these traits to connect to real hardware and to
//! the hosting runtime.

pub mod bridge;
pub mod dmx;
pub mod playback;

pub use bridge::*;
pub use dmx::*;
pub use playback::*;
