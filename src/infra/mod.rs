//! Infrastructure layer
//!
//! Handles all I/O operations: filesystem, symlinks, and git network access.

pub mod dirs;
pub mod filesystem;
pub mod git;
