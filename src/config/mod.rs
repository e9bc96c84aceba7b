mod loader;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE, FileConfigLoader};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolsniffError};
use crate::output::OutputFormat;

/// Narrower than this and the hanging indent eats most of the line.
pub const MIN_WRAP_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format name: "text" or "json"
    pub format: String,
    /// Wrap column for the text report
    pub width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            width: crate::output::DEFAULT_WRAP_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Rule ids to skip during the scan
    pub disabled: Vec<String>,
}

impl Config {
    /// # Errors
    /// Returns a configuration error if the format name is unknown or the
    /// wrap width is too narrow to be useful.
    pub fn validate(&self) -> Result<()> {
        self.output
            .format
            .parse::<OutputFormat>()
            .map_err(SolsniffError::Config)?;

        if self.output.width < MIN_WRAP_WIDTH {
            return Err(SolsniffError::Config(format!(
                "output.width must be at least {MIN_WRAP_WIDTH}, got {}",
                self.output.width
            )));
        }

        Ok(())
    }

    /// # Errors
    /// Returns a configuration error if the format name is unknown.
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output
            .format
            .parse::<OutputFormat>()
            .map_err(SolsniffError::Config)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
