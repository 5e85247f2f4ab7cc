//! Reporting configuration.
//!
//! Loaded from an optional YAML file; command-line flags override it.
//!
//! ```yaml
//! format: json
//! log_level: debug
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CliError, OutputFormat};

/// Default log filter when neither the config nor `RUST_LOG` set one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Reporting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Output format for decoded records.
    #[serde(default)]
    pub format: OutputFormat,
    /// Log filter directive (e.g. `info`, `pwrstat_protocol=trace`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, CliError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a configuration file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => {
                let yaml = std::fs::read_to_string(path)?;
                Self::from_yaml(&yaml)
            }
            None => Ok(CliConfig::default()),
        }
    }

    /// Output format, with a command-line choice taking precedence.
    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.format)
    }

    /// Log filter raised by `verbosity` levels above the configured one.
    pub fn effective_log_level(&self, verbosity: u8) -> String {
        match verbosity {
            0 => self.log_level.clone(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}
