//! Protocol error types.

use thiserror::Error;

/// Errors that can occur when encoding or decoding records.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Input ended before a whole record was available.
    #[error("{record} record truncated: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Record being decoded.
        record: &'static str,
        /// Encoded size of the record.
        expected: usize,
        /// Bytes actually available.
        actual: usize,
    },

    /// The underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProtocolError {
    /// Returns true if this error is a truncated-input failure.
    pub fn is_truncated(&self) -> bool {
        matches!(self, ProtocolError::Truncated { .. })
    }
}
