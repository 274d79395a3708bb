//! Configuration persistence commands
//!
//! Save/load/list/delete configuration profiles as JSON files in the
//! platform-appropriate app data directory. Loading a profile also
//! applies it to the running app (universe count, master volume).

use std::path::{Path, PathBuf};

use tauri::{AppHandle, Manager, State};

use crate::domain::Configuration;
use crate::state::AppState;

/// Get (and create if needed) the profiles directory
fn profiles_dir(app: &AppHandle) -> Result<PathBuf, String> {
    let base = app
        .path()
        .app_data_dir()
        .map_err(|e| format!("Failed to get app data dir: {e}"))?;
    let dir = base.join("profiles");
    std::fs::create_dir_all(&dir).map_err(|e| format!("Failed to create profiles dir: {e}"))?;
    Ok(dir)
}

/// Sanitize a profile name so it is safe to use as a file stem.
/// Rejects empty names, path separators, ".." and anything outside
/// alphanumerics, spaces, hyphens and underscores.
fn sanitize_name(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Profile name cannot be empty".to_string());
    }
    if trimmed.contains("..") || trimmed.contains('/') || trimmed.contains('\\') {
        return Err("Invalid profile name".to_string());
    }
    if !trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_')
    {
        return Err("Profile name contains invalid characters".to_string());
    }
    Ok(trimmed.to_string())
}

// Directory-level helpers, testable without a Tauri runtime.

fn save_to(dir: &Path, profile: &Configuration) -> Result<(), String> {
    let name = sanitize_name(&profile.name)?;
    let path = dir.join(format!("{name}.json"));
    let json =
        serde_json::to_string_pretty(profile).map_err(|e| format!("Serialization error: {e}"))?;
    std::fs::write(&path, json).map_err(|e| format!("Failed to write profile: {e}"))
}

fn load_from(dir: &Path, name: &str) -> Result<Configuration, String> {
    let name = sanitize_name(name)?;
    let path = dir.join(format!("{name}.json"));
    let json = std::fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read profile '{name}': {e}"))?;
    serde_json::from_str(&json).map_err(|e| format!("Failed to parse profile '{name}': {e}"))
}

fn list_in(dir: &Path) -> Result<Vec<String>, String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read profiles dir: {e}"))?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension()?.to_str()? == "json" {
                path.file_stem()?.to_str().map(String::from)
            } else {
                None
            }
        })
        .collect();
    names.sort();
    Ok(names)
}

fn delete_in(dir: &Path, name: &str) -> Result<(), String> {
    let name = sanitize_name(name)?;
    if name == "Default" {
        return Err("Cannot delete the Default profile".to_string());
    }
    let path = dir.join(format!("{name}.json"));
    if !path.exists() {
        return Err(format!("Profile '{name}' not found"));
    }
    std::fs::remove_file(&path).map_err(|e| format!("Failed to delete profile '{name}': {e}"))
}

#[tauri::command]
pub fn save_configuration(app: AppHandle, config: Configuration) -> Result<(), String> {
    save_to(&profiles_dir(&app)?, &config)
}

#[tauri::command]
pub fn load_configuration(
    app: AppHandle,
    state: State<'_, AppState>,
    name: String,
) -> Result<Configuration, String> {
    let profile = load_from(&profiles_dir(&app)?, &name)?;

    // Apply to the running app. Reshaping the rig drops channel state.
    state
        .dmx
        .lock()
        .map_err(|_| "DMX state corrupted".to_string())?
        .set_universe_count(profile.universe_count);
    state
        .audio
        .set_master_volume(profile.master_volume)
        .map_err(|e| e.to_string())?;
    *state
        .config
        .lock()
        .map_err(|_| "Config state corrupted".to_string())? = profile.clone();

    Ok(profile)
}

#[tauri::command]
pub fn list_configurations(app: AppHandle) -> Result<Vec<String>, String> {
    list_in(&profiles_dir(&app)?)
}

#[tauri::command]
pub fn delete_configuration(app: AppHandle, name: String) -> Result<(), String> {
    delete_in(&profiles_dir(&app)?, &name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_name_rejects_path_traversal() {
        assert!(sanitize_name("../evil").is_err());
        assert!(sanitize_name("foo/bar").is_err());
        assert!(sanitize_name("foo\\bar").is_err());
        assert!(sanitize_name("").is_err());
        assert!(sanitize_name("  ").is_err());
    }

    #[test]
    fn sanitize_name_accepts_valid_names() {
        assert_eq!(sanitize_name("Default").unwrap(), "Default");
        assert_eq!(sanitize_name("Main Hall").unwrap(), "Main Hall");
        assert_eq!(sanitize_name("venue_2-b").unwrap(), "venue_2-b");
    }

    #[test]
    fn sanitize_name_rejects_special_characters() {
        assert!(sanitize_name("hall<>").is_err());
        assert!(sanitize_name("hall;drop").is_err());
        assert!(sanitize_name("hall|pipe").is_err());
    }

    #[test]
    fn save_load_list_delete_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let mut profile = Configuration::default();
        profile.name = "Main Hall".to_string();
        profile.universe_count = 4;
        save_to(dir.path(), &profile).unwrap();

        let loaded = load_from(dir.path(), "Main Hall").unwrap();
        assert_eq!(loaded.name, "Main Hall");
        assert_eq!(loaded.universe_count, 4);

        assert_eq!(list_in(dir.path()).unwrap(), vec!["Main Hall"]);

        delete_in(dir.path(), "Main Hall").unwrap();
        assert!(list_in(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn default_profile_cannot_be_deleted() {
        let dir = tempfile::tempdir().unwrap();
        let profile = Configuration::default();
        save_to(dir.path(), &profile).unwrap();
        assert!(delete_in(dir.path(), "Default").is_err());
    }

    #[test]
    fn loading_a_missing_profile_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from(dir.path(), "nope").is_err());
    }
}
