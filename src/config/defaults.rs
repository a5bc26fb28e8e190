//! Default configuration values and cache layout constants

/// Application name, used for platform directory paths
pub const APP_NAME: &str = "sdkvm";

/// Environment variable overriding the sdkvm home directory
pub const ENV_HOME: &str = "SDKVM_HOME";

/// Environment variable overriding the configuration directory
pub const ENV_CONFIG_DIR: &str = "SDKVM_CONFIG_DIR";

/// Subdirectory of the sdkvm home holding one directory per cached version
pub const VERSIONS_SUBDIR: &str = "versions";

/// Name of the symlink in the sdkvm home designating the global version
pub const GLOBAL_LINK_NAME: &str = "default";

/// Configuration file name within the configuration directory
pub const CONFIG_FILE: &str = "config.toml";

/// Directory holding the SDK executable inside a cached build
pub const SDK_BIN_DIR: &str = "bin";

/// Name of the SDK executable inside a cached build
#[cfg(not(windows))]
pub const SDK_EXECUTABLE: &str = "sdk";

/// Name of the SDK executable inside a cached build
#[cfg(windows)]
pub const SDK_EXECUTABLE: &str = "sdk.bat";

/// Metadata file inside a cached build recording the resolved SDK version
pub const VERSION_METADATA_FILE: &str = "version.json";

/// Upstream SDK repository cloned when installing a version
pub const DEFAULT_SDK_REPOSITORY: &str = "https://github.com/sdkvm-project/sdk.git";
