//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory holding a crossforge.toml plus a fake
/// dependency root and provides utilities for driving the binary.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Write a minimal manifest restricted to the given targets
    pub fn write_manifest(&self, targets: &[&str]) {
        let list = targets
            .iter()
            .map(|t| format!("\"{t}\""))
            .collect::<Vec<_>>()
            .join(", ");
        self.create_file(
            "crossforge.toml",
            &format!(
                r#"
[package]
name = "shaderc"
version = "16.0.0"
out_dir = "build"

[build]
targets = [{list}]
"#
            ),
        );
    }

    /// Lay out a fake dependency root with executable toolchain binaries,
    /// returning its path (for CROSSFORGE_DEPS_ROOT).
    pub fn write_fake_deps_root(&self) -> PathBuf {
        let root = self.dir.path().join("deps");
        let bin = root.join("toolchains/llvm-mingw/bin");
        std::fs::create_dir_all(&bin).expect("Failed to create sysroot bin");
        for name in [
            "clang",
            "clang++",
            "llvm-windres",
            "aarch64-w64-mingw32-windres",
        ] {
            write_executable(&bin.join(name), "#!/bin/sh\nexit 0\n");
        }
        let pkgconf_dir = root.join("dependencies/cpp/clang/bin");
        std::fs::create_dir_all(&pkgconf_dir).expect("Failed to create pkgconf dir");
        write_executable(&pkgconf_dir.join("pkgconf"), "#!/bin/sh\nexit 0\n");
        root
    }

    /// Install a cmake stub on a private PATH entry that appends its
    /// arguments to `cmake.log` in the project directory. `fail_build`
    /// makes `cmake --build` exit with code 7.
    pub fn write_cmake_stub(&self, fail_build: bool) -> PathBuf {
        let stub_dir = self.dir.path().join("stubs");
        std::fs::create_dir_all(&stub_dir).expect("Failed to create stub dir");
        let log = self.dir.path().join("cmake.log");
        let fail_case = if fail_build {
            "case \"$1\" in --build) exit 7;; esac\n"
        } else {
            ""
        };
        write_executable(
            &stub_dir.join("cmake"),
            &format!("#!/bin/sh\necho \"$@\" >> \"{}\"\n{fail_case}exit 0\n", log.display()),
        );
        stub_dir
    }

    /// Install a cmake stub that logs its arguments and then blocks,
    /// for interrupt tests.
    pub fn write_sleeping_cmake_stub(&self) -> PathBuf {
        let stub_dir = self.dir.path().join("stubs");
        std::fs::create_dir_all(&stub_dir).expect("Failed to create stub dir");
        let log = self.dir.path().join("cmake.log");
        write_executable(
            &stub_dir.join("cmake"),
            &format!("#!/bin/sh\necho \"$@\" >> \"{}\"\nsleep 30\n", log.display()),
        );
        stub_dir
    }

    /// Read the cmake stub's invocation log, one line per invocation
    pub fn cmake_log(&self) -> Vec<String> {
        let path = self.dir.path().join("cmake.log");
        std::fs::read_to_string(path)
            .unwrap_or_default()
            .lines()
            .map(ToString::to_string)
            .collect()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

fn write_executable(path: &Path, content: &str) {
    std::fs::write(path, content).expect("Failed to write executable");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to set permissions");
    }
}

/// Run the crossforge binary with arguments, isolated from the caller's
/// environment variables that could leak configuration.
pub fn run_crossforge(project: &TestProject, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_crossforge"));
    cmd.current_dir(project.path());
    cmd.env_remove("CROSSFORGE_DEPS_ROOT");
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute crossforge")
}

/// Spawn the crossforge binary without waiting for it, with an explicit
/// environment and captured output
pub fn spawn_crossforge_with_env(
    project: &TestProject,
    args: &[&str],
    env: &[(&str, &str)],
) -> std::process::Child {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_crossforge"));
    cmd.current_dir(project.path());
    cmd.env_remove("CROSSFORGE_DEPS_ROOT");
    for (key, value) in env {
        cmd.env(key, value);
    }
    for arg in args {
        cmd.arg(arg);
    }
    cmd.stdout(std::process::Stdio::piped());
    cmd.stderr(std::process::Stdio::piped());
    cmd.spawn().expect("Failed to spawn crossforge")
}

/// Run the crossforge binary with an explicit environment
pub fn run_crossforge_with_env(
    project: &TestProject,
    args: &[&str],
    env: &[(&str, &str)],
) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_crossforge"));
    cmd.current_dir(project.path());
    cmd.env_remove("CROSSFORGE_DEPS_ROOT");
    for (key, value) in env {
        cmd.env(key, value);
    }
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute crossforge")
}
