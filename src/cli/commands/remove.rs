//! CLI implementation for `sdkvm remove` command
//!
//! Deletes a cached SDK version. When the removed version is the global
//! one, the global link is cleared first so it does not dangle.

use anyhow::{Context, Result};

use crate::cli::output::{is_json, print_success, print_warning};
use crate::config::settings::Settings;
use crate::core::cache::CacheRegistry;
use crate::core::version::VersionLabel;
use crate::infra::dirs::SdkvmDirs;

/// Execute the remove command
pub fn execute(name: &str) -> Result<()> {
    let version: VersionLabel = name.parse()?;

    let dirs = SdkvmDirs::new();
    let settings = Settings::load(&dirs)?;
    let registry = CacheRegistry::new(&settings.sdkvm_home(&dirs));

    let Some(entry) = registry.find(&version) else {
        anyhow::bail!("Version '{version}' is not installed");
    };

    let was_global = registry.is_global(&entry)?;
    if was_global {
        registry.clear_global()?;
        print_warning(&format!("'{version}' was the global version; the global link has been removed"));
    }

    registry
        .remove(&entry)
        .with_context(|| format!("Failed to remove version '{version}'"))?;

    if is_json() {
        let json_result = serde_json::json!({
            "status": "success",
            "removed": entry.name(),
            "was_global": was_global,
        });
        println!("{}", serde_json::to_string_pretty(&json_result).unwrap_or_default());
        return Ok(());
    }

    print_success(&format!("Removed {}", entry.name()));

    Ok(())
}
