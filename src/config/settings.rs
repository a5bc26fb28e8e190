//! User configuration
//!
//! Optional settings read from `config.toml` in the sdkvm configuration
//! directory. A missing file is not an error: every field has a default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::defaults;
use crate::infra::dirs::SdkvmDirs;

/// Errors from reading the configuration file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read config file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    #[error("Failed to parse config file '{path}': {error}")]
    Parse { path: PathBuf, error: String },
}

/// Settings from the user configuration file
///
/// All fields are optional. `cache_dir` relocates the sdkvm home, and
/// `sdk_repository` points installs at an alternative upstream clone URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Root directory for cached versions and the global link
    pub cache_dir: Option<PathBuf>,

    /// Upstream SDK repository cloned when installing a version
    pub sdk_repository: Option<String>,
}

impl Settings {
    /// Load settings from the default configuration path
    pub fn load(dirs: &SdkvmDirs) -> Result<Self, SettingsError> {
        Self::load_from_path(&dirs.config_path())
    }

    /// Load settings from an explicit path, returning defaults if the file
    /// does not exist
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Resolve the sdkvm home directory
    ///
    /// Precedence: the `SDKVM_HOME` environment variable, then `cache_dir`
    /// from the configuration file, then the platform data directory.
    pub fn sdkvm_home(&self, dirs: &SdkvmDirs) -> PathBuf {
        if let Some(path) = std::env::var_os(defaults::ENV_HOME) {
            return PathBuf::from(path);
        }

        self.cache_dir
            .clone()
            .unwrap_or_else(|| dirs.data_home())
    }

    /// Upstream repository URL, falling back to the built-in default
    pub fn sdk_repository(&self) -> &str {
        self.sdk_repository
            .as_deref()
            .unwrap_or(defaults::DEFAULT_SDK_REPOSITORY)
    }
}

// ============================================================================
// Tests
// ============================================================================
