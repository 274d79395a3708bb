//! The `parse_command` invocation
//!
//! Single entry point for the frontend form: it sends `{ verb, args }`
//! verbatim and everything else (arity, number parsing, range checks)
//! happens in the router. The response is opaque to the frontend, which
//! only logs it.

use serde_json::Value;
use tauri::State;

use crate::domain::InvocationRequest;
use crate::state::AppState;

#[tauri::command]
pub fn parse_command(
    state: State<'_, AppState>,
    verb: String,
    args: Vec<String>,
) -> Result<Value, String> {
    state
        .router
        .execute(&InvocationRequest::new(verb, args))
        .map_err(|e| e.to_string())
}
