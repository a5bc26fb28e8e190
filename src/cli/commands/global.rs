//! CLI implementation for `sdkvm global` command
//!
//! Shows or sets the SDK version the global link designates.

use anyhow::{Context, Result};

use crate::cli::output::{is_json, print_detail, print_info, print_success};
use crate::config::settings::Settings;
use crate::core::cache::CacheRegistry;
use crate::core::version::VersionLabel;
use crate::infra::dirs::SdkvmDirs;

/// Execute the global command
pub fn execute(version: Option<&str>) -> Result<()> {
    let dirs = SdkvmDirs::new();
    let settings = Settings::load(&dirs)?;
    let registry = CacheRegistry::new(&settings.sdkvm_home(&dirs));

    match version {
        Some(name) => set(name, &registry),
        None => show(&registry),
    }
}

/// Designate an installed version as global
fn set(name: &str, registry: &CacheRegistry) -> Result<()> {
    let version: VersionLabel = name.parse()?;

    let Some(entry) = registry.find(&version) else {
        anyhow::bail!("Version '{version}' is not installed. Run 'sdkvm install {version}' first");
    };

    registry
        .set_global(&entry)
        .with_context(|| format!("Failed to set global version to '{version}'"))?;

    if is_json() {
        let json_result = serde_json::json!({
            "status": "success",
            "global": entry.name(),
            "directory": entry.directory().display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&json_result).unwrap_or_default());
        return Ok(());
    }

    print_success(&format!("Global version is now {}", entry.name()));
    print_detail(&format!("Link: {}", registry.pointer().link_path().display()));

    Ok(())
}

/// Show the current global version
fn show(registry: &CacheRegistry) -> Result<()> {
    let global = registry.get_global()?;

    if is_json() {
        let json_result = serde_json::json!({
            "global": global.as_ref().map(|entry| entry.name()),
        });
        println!("{}", serde_json::to_string_pretty(&json_result).unwrap_or_default());
        return Ok(());
    }

    match global {
        Some(entry) => {
            let mut line = entry.name();
            if entry.is_channel() {
                if let Some(resolved) = entry.sdk_version() {
                    line.push_str(&format!(" ({resolved})"));
                }
            }
            print_info(&format!("Global version: {line}"));
        }
        None => {
            print_info("No global version set");
            print_detail("Run 'sdkvm global <version>' to set one");
        }
    }

    Ok(())
}
