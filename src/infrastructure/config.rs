//! Configuration management

use crate::domain::DocumentSettings;
use crate::error::{Result, TeiError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "lalp-tei.toml";

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "LALP_TEI_CONFIG";

/// File extensions used by batch conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchSettings {
    pub source_extension: String,
    pub output_extension: String,
}

impl Default for BatchSettings {
    fn default() -> Self {
        BatchSettings {
            source_extension: "txt".to_string(),
            output_extension: "xml".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub document: DocumentSettings,
    pub batch: BatchSettings,
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TeiError::Config(format!("Config file not found: {}", path.display()))
            } else {
                TeiError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            TeiError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save config as pretty TOML, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Resolve the active config.
    ///
    /// Order: explicit path, then `LALP_TEI_CONFIG`, then `lalp-tei.toml` in
    /// the current directory, then built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!("loading config from {}", path.display());
            return Self::load_from_path(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(env_path);
            if !path.is_file() {
                return Err(TeiError::Config(format!(
                    "{} is set to '{}' but the file does not exist",
                    CONFIG_ENV,
                    path.display()
                )));
            }
            tracing::debug!("loading config from {} ({})", path.display(), CONFIG_ENV);
            return Self::load_from_path(&path);
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_in(&current_dir)
    }

    /// Load `lalp-tei.toml` from `dir` if present, otherwise defaults
    pub fn discover_in(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!("loading config from {}", path.display());
            Self::load_from_path(&path)
        } else {
            tracing::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            Ok(Config::default())
        }
    }
}
