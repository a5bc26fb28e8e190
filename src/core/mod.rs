//! Core business logic module
//!
//! This module contains the cache model for sdkvm. Filesystem side effects
//! go through [`crate::infra`].
//!
//! # Submodules
//!
//! - [`version`] - Version names and the presentation order
//! - [`entry`] - Cached version entries and integrity checks
//! - [`pointer`] - Global version designation
//! - [`cache`] - The cache registry and fetcher seam
//! - [`doctor`] - Cache and configuration diagnostics

pub mod cache;
pub mod doctor;
pub mod entry;
pub mod pointer;
pub mod version;
