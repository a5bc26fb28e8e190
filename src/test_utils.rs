//! Test utilities shared between unit tests
//!
//! Provides a temporary cache fixture and helpers for writing fake SDK
//! builds with the expected layout.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::defaults::{SDK_BIN_DIR, SDK_EXECUTABLE, VERSIONS_SUBDIR, VERSION_METADATA_FILE};
use crate::core::cache::CacheRegistry;
use crate::core::pointer::SymlinkPointer;

/// Write a fake SDK build layout into `dir`
///
/// Creates `bin/sdk` marked executable and, when given, a `version.json`
/// recording the resolved SDK version.
pub fn write_build(dir: &Path, sdk_version: Option<&str>) {
    let bin = dir.join(SDK_BIN_DIR);
    std::fs::create_dir_all(&bin).unwrap();

    let exe = bin.join(SDK_EXECUTABLE);
    std::fs::write(&exe, "#!/bin/sh\necho sdk\n").unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    if let Some(version) = sdk_version {
        std::fs::write(
            dir.join(VERSION_METADATA_FILE),
            format!("{{\"version\": \"{version}\"}}"),
        )
        .unwrap();
    }
}

/// Temporary sdkvm home directory for registry tests
pub struct TestCache {
    temp: TempDir,
}

impl TestCache {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    /// The sdkvm home directory
    pub fn home(&self) -> &Path {
        self.temp.path()
    }

    /// The versions directory under the home
    pub fn versions_dir(&self) -> PathBuf {
        self.temp.path().join(VERSIONS_SUBDIR)
    }

    /// Directory a version named `name` would occupy
    pub fn version_dir(&self, name: &str) -> PathBuf {
        self.versions_dir().join(name)
    }

    /// Create a cached version containing a fake build
    ///
    /// `name` is used verbatim as the directory name, so tests can also
    /// plant directories that are not valid version names.
    pub fn add_version(&self, name: &str, sdk_version: Option<&str>) -> PathBuf {
        let dir = self.version_dir(name);
        std::fs::create_dir_all(&dir).unwrap();
        write_build(&dir, sdk_version);
        dir
    }

    /// A registry rooted at this cache's home
    pub fn registry(&self) -> CacheRegistry<SymlinkPointer> {
        CacheRegistry::new(self.home())
    }
}

impl Default for TestCache {
    fn default() -> Self {
        Self::new()
    }
}
