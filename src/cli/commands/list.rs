//! CLI command for `sdkvm list`
//!
//! Lists cached SDK versions in presentation order, marking the one the
//! global pointer designates.

use anyhow::Result;

use crate::cli::output::{is_json, is_quiet, print_detail, print_info};
use crate::config::settings::Settings;
use crate::core::cache::CacheRegistry;
use crate::infra::dirs::SdkvmDirs;

/// Execute the list command
pub fn execute() -> Result<()> {
    let dirs = SdkvmDirs::new();
    let settings = Settings::load(&dirs)?;
    let registry = CacheRegistry::new(&settings.sdkvm_home(&dirs));

    let entries = registry.list_all()?;
    let global = registry.get_global()?;
    let global_dir = global.as_ref().map(|e| e.directory().to_path_buf());

    // JSON output mode
    if is_json() {
        let json_result = serde_json::json!({
            "versions": entries.iter().map(|entry| serde_json::json!({
                "name": entry.name(),
                "channel": entry.is_channel(),
                "sdk_version": entry.sdk_version(),
                "directory": entry.directory().display().to_string(),
                "global": global_dir.as_deref() == Some(entry.directory()),
            })).collect::<Vec<_>>(),
            "global": global.as_ref().map(|entry| entry.name()),
        });
        println!("{}", serde_json::to_string_pretty(&json_result).unwrap_or_default());
        return Ok(());
    }

    // Quiet mode - bare names for scripting
    if is_quiet() {
        for entry in &entries {
            println!("{}", entry.name());
        }
        return Ok(());
    }

    if entries.is_empty() {
        print_info("No SDK versions installed");
        print_detail("Run 'sdkvm install <version>' to install one");
        return Ok(());
    }

    print_info(&format!("Installed SDK versions ({})", entries.len()));
    for entry in &entries {
        let name = entry.name();
        let mut line = name.clone();
        if entry.is_channel() {
            if let Some(resolved) = entry.sdk_version() {
                line.push_str(&format!(" ({resolved})"));
            }
        }
        if global_dir.as_deref() == Some(entry.directory()) {
            line.push_str(" [global]");
        }
        println!("  {line}");
    }

    Ok(())
}
