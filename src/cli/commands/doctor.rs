//! CLI command for `sdkvm doctor`
//!
//! Checks cache and configuration health and reports issues with
//! suggestions.

use anyhow::Result;

use crate::cli::output::{
    is_json, is_quiet, print_detail, print_info, print_success, print_warning, status,
};
use crate::config::settings::Settings;
use crate::core::cache::CacheRegistry;
use crate::core::doctor::run_report;
use crate::infra::dirs::SdkvmDirs;

/// Execute the doctor command
pub fn execute() -> Result<()> {
    let dirs = SdkvmDirs::new();
    // The config check reports parse problems itself, so a broken
    // configuration must not stop the diagnosis.
    let settings = Settings::load(&dirs).unwrap_or_default();
    let registry = CacheRegistry::new(&settings.sdkvm_home(&dirs));

    let report = run_report(&registry, &dirs.config_path());

    // JSON output mode
    if is_json() {
        let json_result = serde_json::json!({
            "status": if report.all_passed() { "success" } else if report.all_required_passed() { "warning" } else { "error" },
            "checks": report.checks.iter().map(|c| serde_json::json!({
                "name": c.name,
                "passed": c.passed,
                "required": c.required,
                "detail": c.detail,
                "error": c.error,
                "suggestion": c.suggestion
            })).collect::<Vec<_>>(),
            "issues": report.issues,
            "passed_count": report.passed_count(),
            "total_count": report.checks.len()
        });
        println!("{}", serde_json::to_string_pretty(&json_result).unwrap_or_default());

        if !report.all_required_passed() {
            return Err(anyhow::anyhow!("Cache health checks failed"));
        }
        return Ok(());
    }

    // Quiet mode - only show errors
    if is_quiet() {
        let failed_required = report.failed_required();
        if !failed_required.is_empty() {
            for check in failed_required {
                eprintln!("{} Failed: {}", status::ERROR, check.name);
            }
            return Err(anyhow::anyhow!("Cache health checks failed"));
        }
        return Ok(());
    }

    // Normal output mode
    print_info("Checking SDK cache health...");
    println!();

    // Print check results
    for check in &report.checks {
        let detail_str = check
            .detail
            .as_ref()
            .map(|d| format!(" ({d})"))
            .unwrap_or_default();

        let required_str = if check.required { "" } else { " [optional]" };

        if check.passed {
            println!("  {} {}{detail_str}{required_str}", status::SUCCESS, check.name);
        } else {
            println!("  {} {}{required_str}", status::ERROR, check.name);
            if let Some(error) = &check.error {
                print_detail(&format!("Error: {error}"));
            }
            if let Some(suggestion) = &check.suggestion {
                print_detail(&format!("Suggestion: {suggestion}"));
            }
        }
    }

    // Print cache layout issues
    if !report.issues.is_empty() {
        println!();
        print_warning("Cache issues:");
        for issue in &report.issues {
            print_detail(&format!("• {issue}"));
        }
    }

    // Print summary
    println!();
    let passed = report.passed_count();
    let total = report.checks.len();
    let failed_required = report.failed_required();

    if report.all_passed() {
        print_success(&format!("All checks passed ({passed}/{total})"));
        print_detail("SDK cache is healthy!");
    } else if failed_required.is_empty() {
        print_warning(&format!("{passed}/{total} checks passed"));
        print_detail("The cache is usable, but some optional checks failed.");
    } else {
        println!("{} {passed}/{total} checks passed", status::ERROR);
        print_detail("Please repair the failing entries:");
        for check in &failed_required {
            if let Some(suggestion) = &check.suggestion {
                print_detail(&format!("• {}: {suggestion}", check.name));
            }
        }
        return Err(anyhow::anyhow!(
            "Cache health checks failed. Run 'sdkvm doctor' for details."
        ));
    }

    Ok(())
}
