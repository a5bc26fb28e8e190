//! End-to-end workflow test across commands
//!
//! Walks a cache through its whole life: seed versions, list them, pick a
//! global, check health, and remove the global version again.

mod common;

use common::TestEnv;

#[cfg(unix)]
#[test]
fn test_full_version_lifecycle() {
    let env = TestEnv::new();
    env.add_version("stable", Some("2.1.0"));
    env.add_version("1.20.0", Some("1.20.0"));

    // Both versions are listed, channel first
    let list = env.run(&["list"]);
    let stdout = String::from_utf8_lossy(&list.stdout);
    assert!(list.status.success(), "list should succeed: {stdout}");
    let stable_pos = stdout.find("stable").unwrap();
    let semver_pos = stdout.find("1.20.0").unwrap();
    assert!(stable_pos < semver_pos, "channels list before versions");

    // Designate stable as global
    assert!(env.run(&["global", "stable"]).status.success());
    let list = env.run(&["list"]);
    let stdout = String::from_utf8_lossy(&list.stdout);
    assert!(stdout.contains("[global]"), "stdout: {stdout}");

    // The cache is healthy
    let doctor = env.run(&["doctor"]);
    let stdout = String::from_utf8_lossy(&doctor.stdout);
    assert!(doctor.status.success(), "doctor should succeed: {stdout}");
    assert!(stdout.contains("All checks passed"));

    // Removing the global version clears the designation
    let remove = env.run(&["remove", "stable"]);
    assert!(remove.status.success());

    let global = env.run(&["global"]);
    let stdout = String::from_utf8_lossy(&global.stdout);
    assert!(global.status.success());
    assert!(stdout.contains("No global version set"), "stdout: {stdout}");

    // Only the semantic version remains, and the cache is still healthy
    let list = env.run(&["list", "--quiet"]);
    let stdout = String::from_utf8_lossy(&list.stdout);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["1.20.0"]);

    let doctor = env.run(&["doctor"]);
    assert!(doctor.status.success());
}

#[cfg(unix)]
#[test]
fn test_pin_then_designate_workflow() {
    let env = TestEnv::new();
    env.add_version("beta", Some("2.2.0-1.0.pre"));

    // Pin the channel build to its resolved version
    let install = env.run(&["install", "beta", "--pin"]);
    let stdout = String::from_utf8_lossy(&install.stdout);
    assert!(install.status.success(), "install should succeed: {stdout}");

    // The pinned version can become global under its new name
    assert!(env.run(&["global", "2.2.0-1.0.pre"]).status.success());

    let global = env.run(&["global"]);
    let stdout = String::from_utf8_lossy(&global.stdout);
    assert!(stdout.contains("2.2.0-1.0.pre"), "stdout: {stdout}");
}
