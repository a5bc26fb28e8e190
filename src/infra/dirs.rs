//! Platform-specific directory management
//!
//! Provides platform-specific paths for the sdkvm configuration directory
//! and the default data (cache) location. Follows the XDG Base Directory
//! Specification on Linux and standard locations on macOS.
//!
//! Environment variables can override default directories:
//! - `SDKVM_CONFIG_DIR` - Override config directory
//! - `SDKVM_HOME` - Override the sdkvm home (applied during settings
//!   resolution, see [`crate::config::settings::Settings::sdkvm_home`])

use std::env;
use std::path::PathBuf;

use crate::config::defaults::{APP_NAME, CONFIG_FILE, ENV_CONFIG_DIR};

/// Platform-specific directory provider for sdkvm
///
/// Provides paths to the config directory and the default data directory
/// following platform conventions (XDG on Linux, Library on macOS).
#[derive(Debug, Clone)]
pub struct SdkvmDirs {
    config_dir: PathBuf,
    data_home: PathBuf,
}

impl SdkvmDirs {
    /// Create a new `SdkvmDirs` instance
    ///
    /// Checks environment variables first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
            data_home: Self::platform_data_home(),
        }
    }

    /// Get the config directory path
    ///
    /// Used for the user configuration file.
    /// - Linux: `$XDG_CONFIG_HOME/sdkvm` or `~/.config/sdkvm`
    /// - macOS: `~/Library/Application Support/sdkvm`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the default sdkvm home path
    ///
    /// Used for cached SDK versions when no override is configured.
    /// - Linux: `$XDG_DATA_HOME/sdkvm` or `~/.local/share/sdkvm`
    /// - macOS: `~/Library/Application Support/sdkvm`
    #[must_use]
    pub fn data_home(&self) -> PathBuf {
        self.data_home.clone()
    }

    /// Get the configuration file path
    ///
    /// Returns the path to `config.toml` in the config directory.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// Resolve config directory from environment or platform default
    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        Self::platform_config_dir()
    }

    /// Get platform-specific config directory
    fn platform_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }

    /// Get platform-specific data directory
    fn platform_data_home() -> PathBuf {
        dirs::data_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".local").join("share").join(APP_NAME))
                    .unwrap_or_else(|| {
                        PathBuf::from(".")
                            .join(".local")
                            .join("share")
                            .join(APP_NAME)
                    })
            })
    }
}

impl Default for SdkvmDirs {
    fn default() -> Self {
        Self::new()
    }
}
