//! Core domain types

use serde::{Deserialize, Serialize};

/// Channels per DMX universe
pub const UNIVERSE_CHANNELS: usize = 512;

/// DMX512 line rate in baud
pub const DMX_BAUD: u32 = 250_000;

/// One request submitted through the invocation bridge: a verb naming the
/// backend operation plus its ordered string arguments.
///
/// This is exactly the wire shape of `parse_command`; the request carries
/// no other metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationRequest {
    pub verb: String,
    pub args: Vec<String>,
}

impl InvocationRequest {
    pub fn new(verb: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            verb: verb.into(),
            args,
        }
    }
}

/// Information about a serial port that may carry a DMX interface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmxPortInfo {
    pub name: String,
    pub port_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_request_matches_the_wire_shape() {
        let request = InvocationRequest::new("sum", vec!["3".to_string(), "4".to_string()]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"verb": "sum", "args": ["3", "4"]})
        );
    }
}
