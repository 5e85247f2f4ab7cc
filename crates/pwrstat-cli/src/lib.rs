//! Power Telemetry Reporting
//!
//! Turns hex dumps of device records into log lines or JSON documents. The
//! bytes are captured elsewhere (bus sniffer, register dump, firmware log);
//! this crate only parses the dump text and renders the decoded record.
//!
//! # Example
//!
//! ```rust
//! use pwrstat_cli::{decode_dump, parse_hex, OutputFormat, RecordKind};
//!
//! let data = parse_hex("40 41 45 70 a4 01 f4 40 20 00 00")?;
//! let line = decode_dump(RecordKind::Power, &data, OutputFormat::Text)?;
//! assert_eq!(
//!     line,
//!     "Driver voltage=12.3, current sense=500, reference voltage=2.50, status(40)=+powered."
//! );
//! # Ok::<(), pwrstat_cli::CliError>(())
//! ```

pub mod config;
mod error;

use std::fmt;

use clap::ValueEnum;
use pwrstat_protocol::{DeviceInfo, PowerStatus, StatusFlags, WireRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use config::CliConfig;
pub use error::CliError;

/// How decoded records are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable log line.
    #[default]
    Text,
    /// Single-line JSON document.
    Json,
}

/// Which record a dump holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    /// Power status record.
    Power,
    /// Device identity record.
    Info,
}

impl RecordKind {
    /// Encoded size of this record kind.
    pub fn size(&self) -> usize {
        match self {
            RecordKind::Power => PowerStatus::SIZE,
            RecordKind::Info => DeviceInfo::SIZE,
        }
    }
}

/// Status byte paired with its flag names, for JSON flag reports.
#[derive(Debug, Clone, Copy, Serialize)]
struct FlagsReport {
    status: u8,
    flags: StatusFlags,
}

/// Parse a hex dump into bytes.
///
/// Each whitespace-separated token may carry its own `0x` prefix, and `:` and
/// `-` separators are ignored, so `"40 41:45-70"`, `"0x40414570"` and
/// `"0x40 0x41 0x45 0x70"` are equivalent.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, CliError> {
    let digits: String = input
        .split_whitespace()
        .map(strip_hex_prefix)
        .flat_map(|token| token.chars())
        .filter(|c| *c != ':' && *c != '-')
        .collect();
    Ok(hex::decode(digits)?)
}

/// Parse a status byte written in decimal or `0x` hex.
///
/// Only digits are accepted after the optional prefix; a sign is rejected.
pub fn parse_status(input: &str) -> Result<StatusFlags, CliError> {
    let trimmed = input.trim();
    let invalid = || CliError::InvalidStatus(input.to_string());
    let digits = strip_hex_prefix(trimmed);
    if digits.len() == trimmed.len() {
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        trimmed.parse::<u8>().map(StatusFlags).map_err(|_| invalid())
    } else {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        u8::from_str_radix(digits, 16)
            .map(StatusFlags)
            .map_err(|_| invalid())
    }
}

fn strip_hex_prefix(token: &str) -> &str {
    token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token)
}

/// Decode one record from the start of `data` and render it.
pub fn decode_dump(kind: RecordKind, data: &[u8], format: OutputFormat) -> Result<String, CliError> {
    if data.len() > kind.size() {
        warn!(
            "ignoring {} trailing bytes after {:?} record",
            data.len() - kind.size(),
            kind
        );
    }
    match kind {
        RecordKind::Power => render(&PowerStatus::decode(data)?, format),
        RecordKind::Info => render(&DeviceInfo::decode(data)?, format),
    }
}

/// Encode a power status record as a lowercase hex string.
pub fn encode_power(status: &PowerStatus) -> String {
    let encoded = status.encode();
    debug!("encoded {} into {} bytes", status, encoded.len());
    hex::encode(encoded)
}

/// Render the flag names of a status byte.
///
/// Text output is the `+`-prefixed form; JSON output carries the raw byte
/// and the comma-joined names.
pub fn render_flags(flags: StatusFlags, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(flags.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&FlagsReport {
            status: flags.bits(),
            flags,
        })?),
    }
}

fn render<T: fmt::Display + Serialize>(record: &T, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(record.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
    }
}
