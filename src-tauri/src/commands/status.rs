//! Status command
//!
//! Returns current runtime state for frontend hydration, so the status
//! bar can reconstruct indicator state after a reload.

use serde::Serialize;
use tauri::State;

use crate::state::AppState;

/// Snapshot returned by `get_status`
#[derive(Serialize)]
pub struct StatusSnapshot {
    pub dmx_connected: bool,
    pub dmx_port: Option<String>,
    pub universe_count: usize,
    pub active_cues: Vec<String>,
    pub master_volume: f32,
}

#[tauri::command]
pub fn get_status(state: State<'_, AppState>) -> StatusSnapshot {
    let dmx = state.dmx.lock().unwrap();

    StatusSnapshot {
        dmx_connected: dmx.is_connected(),
        dmx_port: dmx.transport_name(),
        universe_count: dmx.universe_count(),
        active_cues: state.audio.active_cues(),
        master_volume: state.audio.master_volume(),
    }
}
