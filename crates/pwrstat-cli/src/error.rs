//! Error types for the reporting CLI.

use pwrstat_protocol::ProtocolError;
use thiserror::Error;

/// Errors that can occur while decoding or rendering a dump.
#[derive(Debug, Error)]
pub enum CliError {
    /// Record decoding failed.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Input was not a valid hex dump.
    #[error("Invalid hex dump: {0}")]
    Hex(#[from] hex::FromHexError),

    /// A status byte literal could not be parsed.
    #[error("Invalid status byte: {0:?}")]
    InvalidStatus(String),

    /// Reading input or configuration failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file was malformed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
