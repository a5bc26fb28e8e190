//! Sdkvm - SDK version manager
//!
//! This library provides the core functionality for installing, caching,
//! and switching between SDK versions fetched from a git repository.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Version ordering, cache registry, and health checks
//! - [`infra`] - Infrastructure layer (filesystem, git, platform paths)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
