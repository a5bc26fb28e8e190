//! Filesystem operations
//!
//! Handles file, directory, and symlink operations.

use std::path::{Path, PathBuf};

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Remove a directory and all its contents
pub fn remove_dir_all(path: &Path) -> Result<(), FilesystemError> {
    if path.exists() {
        std::fs::remove_dir_all(path).map_err(|e| FilesystemError::RemoveDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
    }
    Ok(())
}

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// List the immediate subdirectories of a directory
///
/// Entries that are not directories (files, symlinks) are skipped.
pub fn list_subdirectories(path: &Path) -> Result<Vec<PathBuf>, FilesystemError> {
    let read_dir_error = |e: std::io::Error| FilesystemError::ReadDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    };

    let mut subdirs = Vec::new();
    for entry in std::fs::read_dir(path).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let file_type = entry.file_type().map_err(read_dir_error)?;
        if file_type.is_dir() {
            subdirs.push(entry.path());
        }
    }
    Ok(subdirs)
}

/// Rename a file or directory
pub fn rename(from: &Path, to: &Path) -> Result<(), FilesystemError> {
    std::fs::rename(from, to).map_err(|e| FilesystemError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        error: e.to_string(),
    })
}

/// Create a symlink at `link` pointing to the directory `target`
pub fn symlink_dir(target: &Path, link: &Path) -> Result<(), FilesystemError> {
    #[cfg(unix)]
    let result = std::os::unix::fs::symlink(target, link);
    #[cfg(windows)]
    let result = std::os::windows::fs::symlink_dir(target, link);

    result.map_err(|e| FilesystemError::Symlink {
        path: link.to_path_buf(),
        error: e.to_string(),
    })
}

/// Read the target of a symlink
pub fn read_link(path: &Path) -> Result<PathBuf, FilesystemError> {
    std::fs::read_link(path).map_err(|e| FilesystemError::ReadLink {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Remove a symlink without following it
pub fn remove_link(path: &Path) -> Result<(), FilesystemError> {
    // On Windows a symlink to a directory must be removed with remove_dir.
    #[cfg(windows)]
    let result = if path.is_dir() {
        std::fs::remove_dir(path)
    } else {
        std::fs::remove_file(path)
    };
    #[cfg(not(windows))]
    let result = std::fs::remove_file(path);

    result.map_err(|e| FilesystemError::RemoveLink {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Check whether a path exists without following symlinks
///
/// Unlike [`Path::exists`], this returns `true` for a dangling symlink.
#[must_use]
pub fn link_exists(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}
