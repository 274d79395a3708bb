//! Domain error types

use thiserror::Error;

/// Errors that can occur in the cuedeck application
#[derive(Error, Debug)]
pub enum CuedeckError {
    #[error("DMX error: {0}")]
    Dmx(String),

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Command error: {0}")]
    Command(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for cuedeck operations
pub type CuedeckResult<T> = Result<T, CuedeckError>;
