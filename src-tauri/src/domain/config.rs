//! Configuration profiles
//!
//! A Configuration is a saved profile containing the settings for a
//! particular venue setup (DMX interface port, universe count, master
//! volume, cue directory).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_universe_count() -> usize {
    2
}

fn default_master_volume() -> f32 {
    1.0
}

/// A saved configuration profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    /// Profile name (e.g., "Main Hall", "Rehearsal Room")
    pub name: String,
    /// Serial port of the DMX interface (e.g., "/dev/ttyUSB0", "COM3")
    pub dmx_port: Option<String>,
    /// Number of DMX universes to track
    #[serde(default = "default_universe_count")]
    pub universe_count: usize,
    /// Master volume applied on top of every cue's own volume
    #[serde(default = "default_master_volume")]
    pub master_volume: f32,
    /// Base directory against which relative cue file paths are resolved
    pub cue_dir: Option<PathBuf>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            dmx_port: None,
            universe_count: default_universe_count(),
            master_volume: default_master_volume(),
            cue_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_has_sensible_values() {
        let config = Configuration::default();
        assert_eq!(config.name, "Default");
        assert_eq!(config.universe_count, 2);
        assert_eq!(config.master_volume, 1.0);
        assert!(config.dmx_port.is_none());
    }

    #[test]
    fn configuration_serializes_to_json() {
        let config = Configuration::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"name\":\"Default\""));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        // Profiles written by older builds may lack newer fields
        let config: Configuration =
            serde_json::from_str(r#"{"name":"Old","dmx_port":null,"cue_dir":null}"#).unwrap();
        assert_eq!(config.universe_count, 2);
        assert_eq!(config.master_volume, 1.0);
    }
}
