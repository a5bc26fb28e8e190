//! Cache registry
//!
//! The [`CacheRegistry`] is the only component that touches the cache root
//! structurally. It lists, stores, relocates, removes, and designates-global
//! cached versions; entries themselves are read-only handles.
//!
//! The registry is bound to its paths at construction and holds no other
//! state, so tests run it against a temporary root. One process invocation
//! at a time is assumed: there is no cross-process locking, and concurrent
//! mutations of the same cache root can race.

use std::path::{Path, PathBuf};

use crate::config::defaults::{GLOBAL_LINK_NAME, VERSIONS_SUBDIR};
use crate::core::entry::CachedVersionEntry;
use crate::core::pointer::{GlobalPointer, SymlinkPointer};
use crate::core::version::{VersionError, VersionLabel};
use crate::error::{CacheError, FetchError};
use crate::infra::filesystem;

/// Produces the on-disk content of a version
///
/// Implementations populate `dest` with a working build, including the
/// executable and version metadata; the registry adopts the directory
/// afterwards. `dest` does not exist when `fetch` is called. Retry policy
/// is the implementation's concern, not the registry's.
pub trait Fetcher {
    /// Populate `dest` with the build for `version`
    fn fetch(&self, version: &VersionLabel, dest: &Path) -> Result<(), FetchError>;
}

/// Registry of cached SDK versions under a single cache root
#[derive(Debug)]
pub struct CacheRegistry<P = SymlinkPointer> {
    versions_dir: PathBuf,
    pointer: P,
}

impl CacheRegistry<SymlinkPointer> {
    /// Registry rooted at an sdkvm home directory
    ///
    /// Version directories live under `<home>/versions`; the global link is
    /// `<home>/default`.
    #[must_use]
    pub fn new(home: &Path) -> Self {
        Self {
            versions_dir: home.join(VERSIONS_SUBDIR),
            pointer: SymlinkPointer::new(home.join(GLOBAL_LINK_NAME)),
        }
    }
}

impl<P: GlobalPointer> CacheRegistry<P> {
    /// Registry with an explicit versions directory and pointer store
    pub fn with_pointer(versions_dir: PathBuf, pointer: P) -> Self {
        Self {
            versions_dir,
            pointer,
        }
    }

    /// Directory holding one subdirectory per cached version
    #[must_use]
    pub fn versions_dir(&self) -> &Path {
        &self.versions_dir
    }

    /// The global pointer store
    pub fn pointer(&self) -> &P {
        &self.pointer
    }

    /// Find a cached entry by version
    ///
    /// Only checks that the directory exists; integrity is a separate
    /// question answered by [`CachedVersionEntry::verify_integrity`].
    #[must_use]
    pub fn find(&self, version: &VersionLabel) -> Option<CachedVersionEntry> {
        let directory = self.versions_dir.join(version.to_string());
        directory
            .is_dir()
            .then(|| CachedVersionEntry::new(version.clone(), directory))
    }

    /// List all cached entries in presentation order
    ///
    /// Scans the cache root, builds one entry per subdirectory, sorts
    /// ascending by the version order, and returns the list reversed:
    /// highest-priority channel first, then newest semantic version first.
    /// A missing cache root is an empty cache, not an error. A subdirectory
    /// whose name is not a valid version name is an error; the cache layout
    /// guarantees names, so an unrecognized one means outside interference.
    pub fn list_all(&self) -> Result<Vec<CachedVersionEntry>, CacheError> {
        if !self.versions_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for directory in filesystem::list_subdirectories(&self.versions_dir)? {
            entries.push(entry_for(directory)?);
        }

        entries.sort_by(|a, b| a.version().cmp(b.version()));
        entries.reverse();
        Ok(entries)
    }

    /// Ensure `version` is cached, fetching it if absent
    ///
    /// Returns the existing entry when the version is already cached. On a
    /// fetch failure the partially populated directory is cleaned up so a
    /// later attempt starts fresh, and the fetch error propagates.
    pub fn materialize(
        &self,
        version: &VersionLabel,
        fetcher: &dyn Fetcher,
    ) -> Result<CachedVersionEntry, CacheError> {
        if let Some(existing) = self.find(version) {
            tracing::debug!("Version '{version}' is already cached");
            return Ok(existing);
        }

        filesystem::create_dir_all(&self.versions_dir)?;
        let dest = self.versions_dir.join(version.to_string());

        tracing::info!("Fetching version '{version}'");
        if let Err(error) = fetcher.fetch(version, &dest) {
            if let Err(cleanup) = filesystem::remove_dir_all(&dest) {
                tracing::warn!(
                    "Failed to clean up partial fetch at '{}': {cleanup}",
                    dest.display()
                );
            }
            return Err(error.into());
        }

        Ok(CachedVersionEntry::new(version.clone(), dest))
    }

    /// Remove a cached entry's directory recursively
    ///
    /// No-op if the directory is already gone. The global pointer is not
    /// consulted; callers that designate versions decide whether to clear
    /// a pointer aimed at this entry first.
    pub fn remove(&self, entry: &CachedVersionEntry) -> Result<(), CacheError> {
        tracing::debug!("Removing cached version '{}'", entry.name());
        filesystem::remove_dir_all(entry.directory())?;
        Ok(())
    }

    /// Rename an entry's directory to its resolved SDK version
    ///
    /// Requires the resolved version to be known; fails otherwise and
    /// leaves the directory untouched. If the canonical directory already
    /// exists it is deleted first, so the promoted entry wins. Returns the
    /// entry under its new identity.
    pub fn promote_to_resolved(
        &self,
        entry: &CachedVersionEntry,
    ) -> Result<CachedVersionEntry, CacheError> {
        let resolved = entry
            .sdk_version()
            .ok_or_else(|| CacheError::UnresolvedVersion { name: entry.name() })?;

        let version: VersionLabel = resolved.parse()?;
        let canonical = self.versions_dir.join(resolved);

        if canonical == entry.directory() {
            return Ok(entry.clone());
        }

        tracing::debug!("Promoting '{}' to '{resolved}'", entry.name());
        filesystem::remove_dir_all(&canonical)?;
        filesystem::rename(entry.directory(), &canonical)?;

        Ok(CachedVersionEntry::new(version, canonical))
    }

    /// Designate `entry` as the global version
    ///
    /// Replaces any previous designation without a window where the
    /// pointer is absent, where the pointer store supports that.
    pub fn set_global(&self, entry: &CachedVersionEntry) -> Result<(), CacheError> {
        tracing::debug!("Setting global version to '{}'", entry.name());
        self.pointer.set_target(entry.directory())?;
        Ok(())
    }

    /// The entry currently designated global
    ///
    /// Resolves the pointer target's directory name back through [`find`],
    /// so an unset pointer, or a target whose entry no longer exists,
    /// yields `None`.
    pub fn get_global(&self) -> Result<Option<CachedVersionEntry>, CacheError> {
        let Some(target) = self.pointer.current_target()? else {
            return Ok(None);
        };

        let name = target
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| VersionError::InvalidVersion {
                name: target.display().to_string(),
                reason: "global pointer target has no directory name".to_string(),
            })?;

        let version: VersionLabel = name.parse()?;
        Ok(self.find(&version))
    }

    /// Whether `entry` is the current global designation
    ///
    /// Compares the pointer target against the entry's directory by path
    /// equality, not by name.
    pub fn is_global(&self, entry: &CachedVersionEntry) -> Result<bool, CacheError> {
        Ok(self.pointer.current_target()?.as_deref() == Some(entry.directory()))
    }

    /// Clear the global designation if set
    pub fn clear_global(&self) -> Result<(), CacheError> {
        tracing::debug!("Clearing global version");
        self.pointer.clear()?;
        Ok(())
    }
}

/// Build an entry from a cache subdirectory
fn entry_for(directory: PathBuf) -> Result<CachedVersionEntry, CacheError> {
    let name = directory
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| VersionError::InvalidVersion {
            name: directory.display().to_string(),
            reason: "directory name is not valid UTF-8".to_string(),
        })?;

    let version: VersionLabel = name.parse()?;
    Ok(CachedVersionEntry::new(version, directory))
}
