//! CLI implementation for `sdkvm install` command
//!
//! Fetches an SDK version or channel into the cache. With `--pin` the
//! installed build is renamed to the exact SDK version it resolved to,
//! so a floating channel build becomes a fixed version.

use anyhow::{Context, Result};

use crate::cli::output::{create_spinner, is_json, print_detail, print_info, print_success};
use crate::config::settings::Settings;
use crate::core::cache::CacheRegistry;
use crate::core::version::VersionLabel;
use crate::infra::dirs::SdkvmDirs;
use crate::infra::git::GitFetcher;

/// Execute the install command
pub fn execute(name: &str, pin: bool) -> Result<()> {
    let version: VersionLabel = name.parse()?;

    let dirs = SdkvmDirs::new();
    let settings = Settings::load(&dirs)?;
    let registry = CacheRegistry::new(&settings.sdkvm_home(&dirs));
    let fetcher = GitFetcher::new(settings.sdk_repository());

    let already_installed = registry.find(&version).is_some();
    let entry = if already_installed {
        print_info(&format!("Version '{version}' is already installed"));
        registry
            .materialize(&version, &fetcher)
            .with_context(|| format!("Failed to open cached version '{version}'"))?
    } else {
        let spinner = create_spinner(&format!("Installing {version}..."));
        let result = registry.materialize(&version, &fetcher);
        spinner.finish_and_clear();
        let entry = result.with_context(|| format!("Failed to install version '{version}'"))?;
        print_success(&format!("Installed {}", entry.name()));
        entry
    };

    let entry = if pin {
        let was_global = registry.is_global(&entry)?;
        let promoted = registry
            .promote_to_resolved(&entry)
            .with_context(|| format!("Failed to pin version '{version}'"))?;
        if promoted.name() != entry.name() {
            // The rename moved the directory the global link targeted
            if was_global {
                registry.set_global(&promoted)?;
            }
            print_success(&format!("Pinned '{}' as '{}'", entry.name(), promoted.name()));
        }
        promoted
    } else {
        entry
    };

    if is_json() {
        let json_result = serde_json::json!({
            "status": "success",
            "version": entry.name(),
            "channel": entry.is_channel(),
            "sdk_version": entry.sdk_version(),
            "directory": entry.directory().display().to_string(),
            "already_installed": already_installed,
        });
        println!("{}", serde_json::to_string_pretty(&json_result).unwrap_or_default());
        return Ok(());
    }

    if entry.is_channel() {
        if let Some(resolved) = entry.sdk_version() {
            print_detail(&format!("Resolved SDK version: {resolved}"));
        }
    }
    print_detail(&format!("Location: {}", entry.directory().display()));

    Ok(())
}
