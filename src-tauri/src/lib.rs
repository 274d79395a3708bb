//! Cuedeck
//!
//! A desktop application for running light and sound cues from a single
//! command console. The frontend form submits `{ verb, args }` pairs
//! through the `parse_command` bridge; the backend drives a DMX512
//! interface and audio cue playback.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Pure domain types, no I/O dependencies
//! - `ports/` - Trait definitions (interfaces) for external dependencies
//! - `dmx/` - Universe buffers and the DMX controller
//! - `audio/` - Cue playback engine (dedicated thread) and its handle
//! - `form` - The command form, submitting through the invocation bridge
//! - `router` - Verb dispatch behind `parse_command`
//! - `adapters/` - Implementations of ports (serialport DMX, rodio playback)
//! - `commands/` - Tauri command handlers (driving adapters)
//! - `state` - Application state management

// Core domain (pure, no I/O)
pub mod dmx;
pub mod domain;
pub mod form;
pub mod ports;
pub mod router;

// Adapters (external I/O)
pub mod adapters;
pub mod audio;

// Tauri integration
pub mod commands;
pub mod state;

use state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(AppState::new())
        .invoke_handler(tauri::generate_handler![
            // Console command
            commands::console::parse_command,
            // DMX interface commands
            commands::dmx::list_dmx_ports,
            commands::dmx::connect_dmx,
            commands::dmx::disconnect_dmx,
            // Configuration commands
            commands::config::save_configuration,
            commands::config::load_configuration,
            commands::config::list_configurations,
            commands::config::delete_configuration,
            // Status command
            commands::status::get_status,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
