//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress spinners,
//! status-prefixed messages, and machine-readable JSON output.

use std::sync::OnceLock;

use indicatif::{ProgressBar, ProgressStyle};

/// Global output configuration shared by all commands
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration derived from global CLI flags
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress all output except errors
    pub quiet: bool,

    /// Emit machine-readable JSON instead of human-readable text
    pub json: bool,
}

impl OutputConfig {
    /// Create a new output configuration
    #[must_use]
    pub fn new(quiet: bool, json: bool) -> Self {
        Self { quiet, json }
    }

    /// Install this configuration as the process-wide default
    ///
    /// Later calls are ignored; the first configuration wins.
    pub fn apply_global(self) {
        let _ = OUTPUT_CONFIG.set(self);
    }

    /// The currently active configuration
    #[must_use]
    pub fn current() -> Self {
        OUTPUT_CONFIG.get().copied().unwrap_or_default()
    }
}

/// Whether JSON output was requested
#[must_use]
pub fn is_json() -> bool {
    OutputConfig::current().json
}

/// Whether quiet mode is active
#[must_use]
pub fn is_quiet() -> bool {
    OutputConfig::current().quiet
}

/// Whether human-readable messages should be suppressed
fn suppressed() -> bool {
    let config = OutputConfig::current();
    config.quiet || config.json
}

/// Print an informational message
pub fn print_info(message: &str) {
    if !suppressed() {
        println!("{} {message}", status::INFO);
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    if !suppressed() {
        println!("{} {message}", status::SUCCESS);
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    if !suppressed() {
        println!("{} {message}", status::WARNING);
    }
}

/// Print an indented detail line under a status message
pub fn print_detail(message: &str) {
    if !suppressed() {
        println!("    {message}");
    }
}

/// Display an error and its cause chain on stderr
///
/// In JSON mode the error is emitted as a single JSON object so that
/// scripted callers get a parseable failure report.
pub fn display_error(error: &anyhow::Error) {
    if is_json() {
        let payload = serde_json::json!({
            "status": "error",
            "error": format!("{error:#}"),
        });
        eprintln!("{payload}");
        return;
    }

    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("    Caused by: {cause}");
    }
}

/// Create a spinner for operations with unknown duration
///
/// In quiet or JSON mode the spinner is hidden so that nothing is
/// drawn to the terminal.
pub fn create_spinner(message: &str) -> ProgressBar {
    if suppressed() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

// ============================================================================
// Tests
// ============================================================================
