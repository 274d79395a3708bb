//! DMX interface commands (list ports, connect, disconnect)

use tauri::State;

use crate::adapters::mock_dmx::MockDmxTransport;
use crate::adapters::serial_dmx::SerialDmxTransport;
use crate::domain::DmxPortInfo;
use crate::ports::DmxTransport;
use crate::state::AppState;

/// True when MOCK_DMX=1, which substitutes the logging mock for real
/// hardware on connect.
fn mock_requested() -> bool {
    std::env::var("MOCK_DMX").map(|v| v == "1").unwrap_or(false)
}

#[tauri::command]
pub fn list_dmx_ports() -> Result<Vec<DmxPortInfo>, String> {
    SerialDmxTransport::list_ports().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn connect_dmx(state: State<'_, AppState>, port: String) -> Result<(), String> {
    let transport: Box<dyn DmxTransport> = if mock_requested() {
        Box::new(MockDmxTransport::new())
    } else {
        Box::new(SerialDmxTransport::open(&port).map_err(|e| e.to_string())?)
    };

    state
        .dmx
        .lock()
        .map_err(|_| "DMX state corrupted".to_string())?
        .attach_transport(transport);

    // remember the port so a later profile save captures it
    state
        .config
        .lock()
        .map_err(|_| "Config state corrupted".to_string())?
        .dmx_port = Some(port);

    Ok(())
}

#[tauri::command]
pub fn disconnect_dmx(state: State<'_, AppState>) -> Result<(), String> {
    state
        .dmx
        .lock()
        .map_err(|_| "DMX state corrupted".to_string())?
        .detach_transport();
    Ok(())
}
