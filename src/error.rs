//! Error types for sdkvm
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::version::VersionError;

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to read directory
    #[error("Failed to read directory '{path}': {error}")]
    ReadDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to rename a path
    #[error("Failed to rename '{from}' to '{to}': {error}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Failed to create or replace a symlink
    #[error("Failed to create symlink '{path}': {error}")]
    Symlink { path: PathBuf, error: String },

    /// Failed to read a symlink target
    #[error("Failed to read symlink '{path}': {error}")]
    ReadLink { path: PathBuf, error: String },

    #[error("Failed to remove symlink '{path}': {error}")]
    RemoveLink { path: PathBuf, error: String },
}

/// Fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// The fetcher failed to populate the version directory
    #[error("Failed to fetch version '{version}': {error}")]
    FetchFailed { version: String, error: String },
}

/// Errors surfaced by cache registry operations
#[derive(Error, Debug)]
pub enum CacheError {
    /// Promotion requires the entry's resolved SDK version
    #[error("Cannot promote '{name}': its resolved SDK version is unknown. Re-install the version to repair its metadata.")]
    UnresolvedVersion { name: String },

    /// Version name error
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Filesystem error
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),

    /// Fetch error
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
