//! Doctor command logic
//!
//! Inspects the cache and configuration, reporting issues with suggestions.
//! Checks are read-only; repairs stay in the user's hands.

use std::path::Path;

use crate::config::settings::Settings;
use crate::core::cache::CacheRegistry;
use crate::core::entry::IntegrityStatus;
use crate::core::pointer::GlobalPointer;
use crate::core::version::VersionLabel;
use crate::infra::filesystem;

/// Result of a single doctor check
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// What was checked
    pub name: String,
    /// Whether the check passed
    pub passed: bool,
    /// Extra detail shown for a passing check
    pub detail: Option<String>,
    /// Error message if the check failed
    pub error: Option<String>,
    /// Suggestion for fixing the issue
    pub suggestion: Option<String>,
    /// Whether a failure makes the tool unusable
    pub required: bool,
}

impl CheckResult {
    /// Create a passing check result
    pub fn pass(name: &str, detail: Option<String>, required: bool) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            detail,
            error: None,
            suggestion: None,
            required,
        }
    }

    /// Create a failing check result
    pub fn fail(name: &str, error: &str, suggestion: Option<&str>, required: bool) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            detail: None,
            error: Some(error.to_string()),
            suggestion: suggestion.map(String::from),
            required,
        }
    }
}

/// Overall doctor report
#[derive(Debug, Default)]
pub struct DoctorReport {
    /// Individual check results
    pub checks: Vec<CheckResult>,
    /// Cache layout issues that are not tied to a single check
    pub issues: Vec<String>,
}

impl DoctorReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check result
    pub fn add_check(&mut self, result: CheckResult) {
        self.checks.push(result);
    }

    /// Add a cache layout issue
    pub fn add_issue(&mut self, issue: String) {
        self.issues.push(issue);
    }

    /// Check if all required checks passed
    pub fn all_required_passed(&self) -> bool {
        self.checks.iter().filter(|c| c.required).all(|c| c.passed)
    }

    /// Required checks that failed
    pub fn failed_required(&self) -> Vec<&CheckResult> {
        self.checks
            .iter()
            .filter(|c| c.required && !c.passed)
            .collect()
    }

    /// Check if everything passed, including optional checks and issues
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed) && self.issues.is_empty()
    }

    /// Count passed checks
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Count failed checks
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }
}

/// Check that the configuration file is absent or parseable
pub fn check_config_file(config_path: &Path) -> CheckResult {
    if !config_path.exists() {
        return CheckResult::pass(
            "Configuration",
            Some("using defaults".to_string()),
            false,
        );
    }

    match Settings::load_from_path(config_path) {
        Ok(_) => CheckResult::pass(
            "Configuration",
            Some(config_path.display().to_string()),
            false,
        ),
        Err(e) => CheckResult::fail(
            "Configuration",
            &e.to_string(),
            Some("Fix or delete the config file; defaults apply without it"),
            false,
        ),
    }
}

/// Check the cache root directory
pub fn check_cache_root<P: GlobalPointer>(registry: &CacheRegistry<P>) -> CheckResult {
    let versions_dir = registry.versions_dir();

    if !versions_dir.exists() {
        return CheckResult::pass(
            "Cache directory",
            Some("empty, created on first install".to_string()),
            true,
        );
    }

    if versions_dir.is_dir() {
        let size = format_size(calculate_dir_size(versions_dir));
        CheckResult::pass(
            "Cache directory",
            Some(format!("{}, {size}", versions_dir.display())),
            true,
        )
    } else {
        CheckResult::fail(
            "Cache directory",
            &format!("'{}' exists but is not a directory", versions_dir.display()),
            Some("Move the file out of the way"),
            true,
        )
    }
}

/// Calculate directory size recursively
fn calculate_dir_size(path: &Path) -> u64 {
    if !path.exists() {
        return 0;
    }

    walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

/// Format size for display
fn format_size(size_bytes: u64) -> String {
    if size_bytes == 0 {
        "0 bytes".to_string()
    } else if size_bytes < 1024 {
        format!("{size_bytes} bytes")
    } else if size_bytes < 1024 * 1024 {
        format!("{:.1} KB", size_bytes as f64 / 1024.0)
    } else if size_bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", size_bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", size_bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

/// Check the global pointer
pub fn check_global_pointer<P: GlobalPointer>(registry: &CacheRegistry<P>) -> CheckResult {
    if !registry.pointer().exists() {
        return CheckResult::pass("Global version", Some("not set".to_string()), true);
    }

    let target = match registry.pointer().current_target() {
        Ok(Some(target)) => target,
        Ok(None) => return CheckResult::pass("Global version", Some("not set".to_string()), true),
        Err(e) => {
            return CheckResult::fail(
                "Global version",
                &e.to_string(),
                Some("Run 'sdkvm global <version>' to recreate the link"),
                true,
            )
        }
    };

    if !target.is_dir() {
        return CheckResult::fail(
            "Global version",
            &format!("link points at missing directory '{}'", target.display()),
            Some("Run 'sdkvm global <version>' to repoint it"),
            true,
        );
    }

    if target.parent() != Some(registry.versions_dir()) {
        return CheckResult::fail(
            "Global version",
            &format!("link points outside the cache: '{}'", target.display()),
            Some("Run 'sdkvm global <version>' to repoint it"),
            true,
        );
    }

    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    CheckResult::pass("Global version", Some(name), true)
}

/// Check every cached entry and collect layout issues
///
/// Unlike a listing, the scan tolerates directories that are not valid
/// version names: they become issues instead of hard errors, so doctor can
/// diagnose exactly the caches that break `sdkvm list`.
pub fn check_entries<P: GlobalPointer>(
    registry: &CacheRegistry<P>,
    report: &mut DoctorReport,
) {
    let versions_dir = registry.versions_dir();
    if !versions_dir.exists() {
        return;
    }

    let subdirs = match filesystem::list_subdirectories(versions_dir) {
        Ok(subdirs) => subdirs,
        Err(e) => {
            report.add_check(CheckResult::fail(
                "Cached versions",
                &e.to_string(),
                None,
                true,
            ));
            return;
        }
    };

    for directory in subdirs {
        let Some(name) = directory.file_name().and_then(|n| n.to_str()) else {
            report.add_issue(format!(
                "Directory '{}' has a non-UTF-8 name",
                directory.display()
            ));
            continue;
        };

        let Ok(version) = name.parse::<VersionLabel>() else {
            report.add_issue(format!(
                "Directory '{name}' is not a valid version name; move it out of the cache"
            ));
            continue;
        };

        let Some(entry) = registry.find(&version) else {
            continue;
        };

        let check_name = format!("Version '{name}'");
        let result = match entry.verify_integrity() {
            IntegrityStatus::Valid => CheckResult::pass(&check_name, None, true),
            IntegrityStatus::Invalid => CheckResult::fail(
                &check_name,
                "SDK executable is missing or not executable",
                Some(&format!(
                    "Run 'sdkvm remove {name}' and 'sdkvm install {name}' to re-fetch it"
                )),
                true,
            ),
            IntegrityStatus::VersionMismatch => CheckResult::fail(
                &check_name,
                &format!(
                    "resolved SDK version '{}' does not match the entry name",
                    entry.sdk_version().unwrap_or("unknown")
                ),
                Some(&format!("Run 'sdkvm install {name}' to repair it")),
                true,
            ),
        };
        report.add_check(result);
    }
}

/// Run all checks and assemble a report
pub fn run_report<P: GlobalPointer>(
    registry: &CacheRegistry<P>,
    config_path: &Path,
) -> DoctorReport {
    let mut report = DoctorReport::new();

    report.add_check(check_config_file(config_path));
    report.add_check(check_cache_root(registry));
    check_entries(registry, &mut report);
    report.add_check(check_global_pointer(registry));

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestCache;
    use tempfile::TempDir;

    fn report_for(cache: &TestCache) -> DoctorReport {
        run_report(&cache.registry(), &cache.home().join("config.toml"))
    }

    // ============================================
    // Unit Tests - Individual checks
    // ============================================

    #[test]
    fn test_config_check_missing_file_passes() {
        let temp = TempDir::new().unwrap();
        let result = check_config_file(&temp.path().join("config.toml"));

        assert!(result.passed);
        assert_eq!(result.detail.as_deref(), Some("using defaults"));
    }

    #[test]
    fn test_config_check_invalid_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "cache_dir = [broken").unwrap();

        let result = check_config_file(&path);

        assert!(!result.passed);
        assert!(result.suggestion.is_some());
    }

    #[test]
    fn test_cache_root_check_tolerates_missing_root() {
        let cache = TestCache::new();
        let result = check_cache_root(&cache.registry());

        assert!(result.passed);
    }

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(0), "0 bytes");
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn test_global_pointer_check_unset_passes() {
        let cache = TestCache::new();
        let result = check_global_pointer(&cache.registry());

        assert!(result.passed);
        assert_eq!(result.detail.as_deref(), Some("not set"));
    }

    #[cfg(unix)]
    #[test]
    fn test_global_pointer_check_dangling_fails() {
        let cache = TestCache::new();
        cache.add_version("stable", None);
        let registry = cache.registry();
        let entry = registry.find(&"stable".parse().unwrap()).unwrap();

        registry.set_global(&entry).unwrap();
        registry.remove(&entry).unwrap();

        let result = check_global_pointer(&registry);

        assert!(!result.passed);
        assert!(result.suggestion.is_some());
    }

    #[test]
    fn test_global_pointer_check_reports_target_name() {
        let cache = TestCache::new();
        cache.add_version("beta", None);
        let registry = cache.registry();
        let entry = registry.find(&"beta".parse().unwrap()).unwrap();
        registry.set_global(&entry).unwrap();

        let result = check_global_pointer(&registry);

        assert!(result.passed);
        assert_eq!(result.detail.as_deref(), Some("beta"));
    }

    // ============================================
    // Unit Tests - Full report
    // ============================================

    #[test]
    fn test_report_all_passed_on_healthy_cache() {
        let cache = TestCache::new();
        cache.add_version("stable", Some("2.0.0"));
        cache.add_version("2.0.0", Some("2.0.0"));

        let report = report_for(&cache);

        assert!(report.all_passed(), "unexpected failures: {report:?}");
        assert_eq!(report.failed_count(), 0);
    }

    #[test]
    fn test_report_flags_broken_entry() {
        let cache = TestCache::new();
        let dir = cache.add_version("2.0.0", Some("2.0.0"));
        std::fs::remove_dir_all(dir.join("bin")).unwrap();

        let report = report_for(&cache);

        assert!(!report.all_passed());
        assert!(!report.all_required_passed());
        let failed: Vec<_> = report.checks.iter().filter(|c| !c.passed).collect();
        assert_eq!(failed.len(), 1);
        assert!(failed[0].name.contains("2.0.0"));
    }

    #[test]
    fn test_report_flags_version_mismatch() {
        let cache = TestCache::new();
        cache.add_version("2.0.0", Some("2.1.0"));

        let report = report_for(&cache);

        assert!(!report.all_passed());
        let failed: Vec<_> = report.checks.iter().filter(|c| !c.passed).collect();
        assert!(failed[0]
            .error
            .as_deref()
            .unwrap()
            .contains("2.1.0"));
    }

    #[test]
    fn test_report_collects_unrecognized_directories_as_issues() {
        let cache = TestCache::new();
        cache.add_version("stable", None);
        cache.add_version("scratch-build", None);

        let report = report_for(&cache);

        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].contains("scratch-build"));
        assert!(!report.all_passed());
        // The parseable entry is still checked normally
        assert!(report
            .checks
            .iter()
            .any(|c| c.name.contains("stable") && c.passed));
    }
}
