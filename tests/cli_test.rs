//! Integration tests for the CLI surface
//!
//! Covers help behavior, manifest and environment validation, and exit
//! codes on the failure paths that never spawn a build tool.

mod common;

use common::{run_crossforge, TestProject};

#[test]
fn test_no_subcommand_prints_help_and_exits_zero() {
    let project = TestProject::new();

    let output = run_crossforge(&project, &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("configure"));
    assert!(stdout.contains("build"));
    assert!(stdout.contains("install"));
    assert!(stdout.contains("all"));
}

#[test]
fn test_help_leaves_no_side_effects() {
    let project = TestProject::new();

    let output = run_crossforge(&project, &["--help"]);
    assert!(output.status.success());
    assert!(!project.file_exists("build"));
    assert!(!project.file_exists("cmake.log"));
}

#[test]
fn test_version_includes_crate_version() {
    let project = TestProject::new();

    let output = run_crossforge(&project, &["--version"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_manifest_is_a_resolution_error() {
    let project = TestProject::new();

    let output = run_crossforge(&project, &["configure"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("crossforge.toml"));
}

#[test]
fn test_missing_deps_root_fails_before_any_side_effect() {
    let project = TestProject::new();
    project.write_manifest(&["linux_x86_64"]);

    let output = run_crossforge(&project, &["configure"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CROSSFORGE_DEPS_ROOT"));

    // Nothing was spawned, nothing was written
    assert!(!project.file_exists("build"));
    assert!(!project.file_exists("cmake.log"));
}

#[test]
fn test_invalid_manifest_version_rejected() {
    let project = TestProject::new();
    project.create_file(
        "crossforge.toml",
        r#"
[package]
name = "shaderc"
version = "sixteen"
"#,
    );

    let output = run_crossforge(&project, &["configure"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sixteen"));
}

#[test]
fn test_unparseable_target_name_is_a_usage_error() {
    let project = TestProject::new();
    project.write_manifest(&["linux_x86_64"]);

    let output = run_crossforge(&project, &["configure", "--target", "linux_mips"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("linux_mips"));
}

#[cfg(unix)]
#[test]
fn test_unknown_target_reported_before_any_step() {
    use common::run_crossforge_with_env;

    let project = TestProject::new();
    project.write_manifest(&["linux_x86_64"]);
    let deps_root = project.write_fake_deps_root();

    // windows_x86_64 parses but is not in this package's matrix
    let output = run_crossforge_with_env(
        &project,
        &["configure", "--target", "windows_x86_64"],
        &[("CROSSFORGE_DEPS_ROOT", &deps_root.display().to_string())],
    );
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("windows_x86_64"));
    assert!(stderr.contains("linux_x86_64"));
    assert!(!project.file_exists("cmake.log"));
}

#[cfg(unix)]
#[test]
fn test_missing_toolchain_binary_is_fatal() {
    use common::run_crossforge_with_env;

    let project = TestProject::new();
    project.write_manifest(&["linux_x86_64"]);
    let deps_root = project.write_fake_deps_root();
    std::fs::remove_file(deps_root.join("toolchains/llvm-mingw/bin/clang")).unwrap();

    let output = run_crossforge_with_env(
        &project,
        &["configure"],
        &[("CROSSFORGE_DEPS_ROOT", &deps_root.display().to_string())],
    );
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("clang"));
    assert!(stderr.contains("linux_x86_64"));
}
