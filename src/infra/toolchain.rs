//! Toolchain path resolution
//!
//! Resolves absolute paths to the cross compiler, resource compiler, and
//! pkg-config binaries for a target. Every resolved path is checked for
//! existence and executability before matrix generation proceeds; a missing
//! binary is fatal, never silently replaced by a host default.

use std::path::{Path, PathBuf};

use crate::config::{to_slash, EnvConfig};
use crate::core::target::TargetId;
use crate::error::ToolchainError;
use crate::infra::filesystem;

/// Resolved toolchain binary paths for one target.
///
/// Paths are stored slash-normalized, ready to be spliced into command
/// strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainPaths {
    /// C compiler driver
    pub c_compiler: String,
    /// C++ compiler driver
    pub cxx_compiler: String,
    /// Resource compiler (Windows targets only)
    pub resource_compiler: Option<String>,
    /// pkg-config binary
    pub pkg_config: String,
}

/// Resource compiler binary name for a target, if the target needs one.
///
/// Windows aarch64 uses the target-prefixed windres because the generic
/// llvm-windres defaults to the host architecture.
fn resource_compiler_name(target: TargetId) -> Option<&'static str> {
    match target {
        TargetId::WindowsX86_64 => Some("llvm-windres"),
        TargetId::WindowsAarch64 => Some("aarch64-w64-mingw32-windres"),
        TargetId::LinuxX86_64 | TargetId::LinuxAarch64 => None,
    }
}

/// Append the host executable suffix to a binary name
fn with_exe_suffix(name: &str) -> String {
    format!("{name}{}", std::env::consts::EXE_SUFFIX)
}

/// Resolve and verify one binary under the sysroot bin directory
fn resolve_binary(
    bin_dir: &Path,
    name: &str,
    target: TargetId,
) -> Result<String, ToolchainError> {
    let path = bin_dir.join(with_exe_suffix(name));
    verify_executable(&path, target)
}

/// Verify that a path exists and is executable, returning it slash-normalized
fn verify_executable(path: &Path, target: TargetId) -> Result<String, ToolchainError> {
    if !filesystem::exists(path) {
        return Err(ToolchainError::NotFound {
            target: target.to_string(),
            path: to_slash(path),
        });
    }
    if !filesystem::is_executable(path) {
        return Err(ToolchainError::NotExecutable {
            target: target.to_string(),
            path: to_slash(path),
        });
    }
    Ok(to_slash(path))
}

/// Resolve toolchain paths for a target.
///
/// Deterministic for identical inputs: the same sysroot and target always
/// yield the same paths.
pub fn resolve(env: &EnvConfig, target: TargetId) -> Result<ToolchainPaths, ToolchainError> {
    let bin_dir = env.sysroot.join("bin");

    let c_compiler = resolve_binary(&bin_dir, "clang", target)?;
    let cxx_compiler = resolve_binary(&bin_dir, "clang++", target)?;
    let resource_compiler = match resource_compiler_name(target) {
        Some(name) => Some(resolve_binary(&bin_dir, name, target)?),
        None => None,
    };

    let pkg_config_path = PathBuf::from(format!(
        "{}{}",
        env.pkg_config.display(),
        std::env::consts::EXE_SUFFIX
    ));
    let pkg_config = verify_executable(&pkg_config_path, target)?;

    Ok(ToolchainPaths {
        c_compiler,
        cxx_compiler,
        resource_compiler,
        pkg_config,
    })
}

/// Resolve toolchains for a list of targets, in order.
///
/// Fails on the first target whose toolchain is incomplete; resolution is
/// all-or-nothing, so no build step ever runs against a partial toolchain.
pub fn resolve_all(
    env: &EnvConfig,
    targets: &[TargetId],
) -> Result<Vec<(TargetId, ToolchainPaths)>, ToolchainError> {
    targets
        .iter()
        .map(|&target| Ok((target, resolve(env, target)?)))
        .collect()
}
