//! Configuration module
//!
//! Cache layout constants and the optional user configuration file.
//!
//! # Submodules
//!
//! - [`defaults`] - Layout constants, environment variable names, defaults
//! - [`settings`] - User configuration (`config.toml`) loading

pub mod defaults;
pub mod settings;
