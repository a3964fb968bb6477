//! Configuration system for the LS-8 emulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline machine constants (stack base) and observability switches.
//! 2. **Structures:** Hierarchical config for general and system settings.
//! 3. **Loading:** Parsing from a JSON string or file.
//!
//! Every field is optional in JSON; missing fields take the values in `defaults`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the emulator.
mod defaults {
    /// Initial stack pointer (R7) value.
    pub const STACK_BASE: u8 = crate::common::STACK_BASE;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ls8_core::Config;
///
/// let json = r#"{ "general": { "trace_instructions": true } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.system.stack_base, 0xF4);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run options.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Machine parameters.
    #[serde(default)]
    pub system: SystemConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the JSON is malformed or has wrongly typed fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// General run options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Write a trace line to stderr before every instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Print execution statistics when the run ends.
    #[serde(default)]
    pub print_stats: bool,
}

/// Machine parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Initial stack pointer value written to R7 at construction and reset.
    #[serde(default = "SystemConfig::default_stack_base")]
    pub stack_base: u8,
}

impl SystemConfig {
    /// Returns the default stack base.
    const fn default_stack_base() -> u8 {
        defaults::STACK_BASE
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            stack_base: defaults::STACK_BASE,
        }
    }
}
