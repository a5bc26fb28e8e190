//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Isolated sdkvm environment
///
/// Creates a temporary home and configuration directory so tests never
/// touch the real user cache, and runs the sdkvm binary against them.
pub struct TestEnv {
    /// Temporary sdkvm home (versions directory and global link)
    pub home: TempDir,

    /// Temporary configuration directory
    pub config: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new isolated environment
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("Failed to create temp home"),
            config: TempDir::new().expect("Failed to create temp config dir"),
        }
    }

    /// Path of the sdkvm home
    pub fn home_path(&self) -> &Path {
        self.home.path()
    }

    /// Path of the versions directory
    pub fn versions_dir(&self) -> PathBuf {
        self.home.path().join("versions")
    }

    /// Path of the global link
    pub fn global_link(&self) -> PathBuf {
        self.home.path().join("default")
    }

    /// Create a cached version directory holding a complete build
    pub fn add_version(&self, name: &str, sdk_version: Option<&str>) -> PathBuf {
        let dir = self.versions_dir().join(name);
        write_build(&dir, sdk_version);
        dir
    }

    /// Write a configuration file into the configuration directory
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config.path().join("config.toml"), content)
            .expect("Failed to write config");
    }

    /// Run sdkvm against the isolated home and configuration
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sdkvm"));
        cmd.env("SDKVM_HOME", self.home.path());
        cmd.env("SDKVM_CONFIG_DIR", self.config.path());
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute sdkvm")
    }

    /// Run sdkvm with only the configuration directory overridden
    ///
    /// Used to verify that `cache_dir` from the configuration file is
    /// honored when no home override is present.
    pub fn run_without_home(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sdkvm"));
        cmd.env_remove("SDKVM_HOME");
        cmd.env("SDKVM_CONFIG_DIR", self.config.path());
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute sdkvm")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Populate `dir` with a minimal SDK build
///
/// Creates the executable under `bin/` and, when `sdk_version` is given,
/// the metadata file recording the resolved version.
#[allow(dead_code)]
pub fn write_build(dir: &Path, sdk_version: Option<&str>) {
    let bin = dir.join("bin");
    std::fs::create_dir_all(&bin).expect("Failed to create bin dir");

    let exe = bin.join(if cfg!(windows) { "sdk.bat" } else { "sdk" });
    std::fs::write(&exe, "#!/bin/sh\nexit 0\n").expect("Failed to write executable");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to set permissions");
    }

    if let Some(version) = sdk_version {
        std::fs::write(
            dir.join("version.json"),
            format!("{{\"version\": \"{version}\"}}"),
        )
        .expect("Failed to write metadata");
    }
}
