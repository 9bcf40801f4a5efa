// src/config.rs
//
// Configuration file parsing for the checker.
// Supports TOML config files with global settings and check defaults.

use crate::catalog::CheckPolicy;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

// =============================================================================
// Configuration Types
// =============================================================================

/// Root configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub global: GlobalConfig,
    /// Defaults for `check` mode
    #[serde(default)]
    pub check: CheckConfig,
}

/// Global configuration settings.
#[derive(Debug, Default, Deserialize)]
pub struct GlobalConfig {
    /// Log level, used when RUST_LOG is unset
    pub log_level: Option<String>,
}

/// Defaults for payload checks. Command-line flags take precedence.
#[derive(Debug, Deserialize)]
pub struct CheckConfig {
    /// Reject payloads carrying undocumented fields
    #[serde(default)]
    pub strict: bool,
    /// Shape to check against when --shape is not given
    pub shape: Option<String>,
    /// Cap on undocumented fields printed per record
    #[serde(default = "default_max_reported_fields")]
    pub max_reported_fields: usize,
}

fn default_max_reported_fields() -> usize {
    20
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            strict: false,
            shape: None,
            max_reported_fields: default_max_reported_fields(),
        }
    }
}

impl CheckConfig {
    pub fn policy(&self) -> CheckPolicy {
        CheckPolicy::from_strict(self.strict)
    }

    /// Policy for a run: an explicit `--strict` value wins over the file.
    pub fn resolve_policy(&self, strict_flag: Option<bool>) -> CheckPolicy {
        strict_flag.map_or_else(|| self.policy(), CheckPolicy::from_strict)
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

// =============================================================================
// Default Configuration
// =============================================================================

/// Returns a default configuration string for documentation.
pub fn default_config_template() -> &'static str {
    r#"# MWS payload checker configuration

[global]
# Log level when RUST_LOG is not set (error, warn, info, debug, trace)
log_level = "info"

[check]
# Reject payloads that carry fields the shape does not document
strict = false

# Shape used when --shape is not given, e.g. "Order" or "Inbound.Address"
# shape = "Order"

# Maximum undocumented fields printed per record
max_reported_fields = 20
"#
}

// =============================================================================
// Tests
// =============================================================================
