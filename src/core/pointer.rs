//! Global version designation
//!
//! At most one cached version is "global" at a time. The designation lives
//! outside the entries themselves, behind the [`GlobalPointer`] trait, so
//! the symlink store used here could be swapped for a pointer file without
//! touching registry logic.

use std::path::{Path, PathBuf};

use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Store designating one cached version directory as global
pub trait GlobalPointer {
    /// The directory the pointer currently designates, or `None` if unset
    fn current_target(&self) -> Result<Option<PathBuf>, FilesystemError>;

    /// Point at `target`, replacing any existing designation
    ///
    /// Replacement must not leave a window where the pointer is absent,
    /// where the backing store supports that.
    fn set_target(&self, target: &Path) -> Result<(), FilesystemError>;

    /// Remove the designation; no-op if the pointer is unset
    fn clear(&self) -> Result<(), FilesystemError>;

    /// Whether the pointer is currently set (its target may be stale)
    fn exists(&self) -> bool;
}

/// Global pointer backed by a single symlink
#[derive(Debug)]
pub struct SymlinkPointer {
    link_path: PathBuf,
}

impl SymlinkPointer {
    /// Create a pointer stored at `link_path`
    #[must_use]
    pub fn new(link_path: PathBuf) -> Self {
        Self { link_path }
    }

    /// Path of the symlink itself
    #[must_use]
    pub fn link_path(&self) -> &Path {
        &self.link_path
    }

    /// Scratch path used while replacing the link
    fn staging_path(&self) -> PathBuf {
        self.link_path.with_extension("tmp")
    }
}

impl GlobalPointer for SymlinkPointer {
    fn current_target(&self) -> Result<Option<PathBuf>, FilesystemError> {
        if !filesystem::link_exists(&self.link_path) {
            return Ok(None);
        }

        filesystem::read_link(&self.link_path).map(Some)
    }

    fn set_target(&self, target: &Path) -> Result<(), FilesystemError> {
        // Build the new link aside, then move it into place. On POSIX the
        // rename replaces the old link in one step, so readers never observe
        // a missing pointer.
        let staging = self.staging_path();
        if filesystem::link_exists(&staging) {
            filesystem::remove_link(&staging)?;
        }
        filesystem::symlink_dir(target, &staging)?;

        // Windows cannot rename over an existing link
        #[cfg(windows)]
        if filesystem::link_exists(&self.link_path) {
            filesystem::remove_link(&self.link_path)?;
        }

        filesystem::rename(&staging, &self.link_path)
    }

    fn clear(&self) -> Result<(), FilesystemError> {
        if filesystem::link_exists(&self.link_path) {
            filesystem::remove_link(&self.link_path)?;
        }
        Ok(())
    }

    fn exists(&self) -> bool {
        filesystem::link_exists(&self.link_path)
    }
}
