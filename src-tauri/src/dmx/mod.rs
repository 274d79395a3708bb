//! DMX512 output
//!
//! Universe buffers and the controller that pushes them to a transport.

pub mod controller;
pub mod universe;

pub use controller::DmxController;
pub use universe::Universe;
