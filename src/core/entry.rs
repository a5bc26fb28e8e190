//! Cached version entries
//!
//! A [`CachedVersionEntry`] is the in-memory handle to one cached SDK build:
//! its version label, its directory, derived paths, and the resolved SDK
//! version lazily read from the build's metadata file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config::defaults::{SDK_BIN_DIR, SDK_EXECUTABLE, VERSION_METADATA_FILE};
use crate::core::version::VersionLabel;
use crate::infra::filesystem;

/// Result of a cache entry integrity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityStatus {
    /// Executable present and version consistent
    Valid,
    /// The SDK executable is missing or not executable
    Invalid,
    /// The resolved SDK version differs from the entry name
    VersionMismatch,
}

/// Resolved version metadata written into each build by the fetched source
#[derive(Debug, Deserialize)]
struct VersionMetadata {
    version: String,
}

/// One cached version: a directory under the cache root named by its label
///
/// The entry does not own lifecycle decisions; creating, relocating, and
/// removing directories is the registry's job. The entry only derives paths
/// and answers read-only questions about the build on disk.
#[derive(Debug, Clone)]
pub struct CachedVersionEntry {
    version: VersionLabel,
    directory: PathBuf,
    sdk_version: OnceLock<Option<String>>,
}

impl CachedVersionEntry {
    /// Create an entry for a version cached at `directory`
    #[must_use]
    pub fn new(version: VersionLabel, directory: PathBuf) -> Self {
        Self {
            version,
            directory,
            sdk_version: OnceLock::new(),
        }
    }

    /// The parsed version label
    #[must_use]
    pub fn version(&self) -> &VersionLabel {
        &self.version
    }

    /// The version name, exactly as used for the directory
    #[must_use]
    pub fn name(&self) -> String {
        self.version.to_string()
    }

    /// The entry's directory under the cache root
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the SDK executable inside this build
    #[must_use]
    pub fn executable_path(&self) -> PathBuf {
        self.directory.join(SDK_BIN_DIR).join(SDK_EXECUTABLE)
    }

    /// Path of the metadata file recording the resolved SDK version
    #[must_use]
    pub fn metadata_path(&self) -> PathBuf {
        self.directory.join(VERSION_METADATA_FILE)
    }

    /// Whether this entry tracks a channel rather than a fixed version
    #[must_use]
    pub fn is_channel(&self) -> bool {
        self.version.is_channel()
    }

    /// The resolved SDK version recorded in the build's metadata
    ///
    /// Read from disk on first call and cached for the lifetime of the
    /// entry. Returns `None` when the metadata file is absent, unreadable,
    /// or does not carry a `version` field.
    pub fn sdk_version(&self) -> Option<&str> {
        self.sdk_version
            .get_or_init(|| read_sdk_version(&self.metadata_path()))
            .as_deref()
    }

    /// Check this entry's on-disk integrity
    ///
    /// - [`IntegrityStatus::Invalid`] when the executable is missing or not
    ///   marked executable
    /// - [`IntegrityStatus::VersionMismatch`] when a fixed-version entry
    ///   resolved to a different SDK version than its name
    /// - [`IntegrityStatus::Valid`] otherwise
    ///
    /// Channels always float to whatever build was fetched, so a channel is
    /// never reported as mismatched. The check is read-only; repairing a
    /// broken entry (remove and re-install) is the caller's decision.
    pub fn verify_integrity(&self) -> IntegrityStatus {
        if !is_executable(&self.executable_path()) {
            return IntegrityStatus::Invalid;
        }

        if self.is_channel() {
            return IntegrityStatus::Valid;
        }

        match self.sdk_version() {
            Some(resolved) if resolved != self.name() => IntegrityStatus::VersionMismatch,
            _ => IntegrityStatus::Valid,
        }
    }
}

/// Read the `version` field from a metadata file, tolerating absence
fn read_sdk_version(path: &Path) -> Option<String> {
    let content = filesystem::read_file(path).ok()?;
    let metadata: VersionMetadata = serde_json::from_str(&content).ok()?;
    Some(metadata.version)
}

/// Whether `path` is a file the current platform would execute
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
