use std::fs;
use std::path::Path;

use crate::error::{Result, SolsniffError};

use super::Config;

pub const DEFAULT_CONFIG_FILE: &str = ".solsniff.toml";

pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to
    /// defaults when no file is present.
    ///
    /// # Errors
    /// Returns an error if a file exists but cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

#[derive(Debug, Default)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            self.load_from_path(default_path)
        } else {
            Ok(Config::default())
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        // FileRead is reserved for the scan input; a config problem maps
        // to the config exit code.
        let content = fs::read_to_string(path).map_err(|e| {
            SolsniffError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
