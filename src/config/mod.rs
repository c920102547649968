//! Configuration and constants
//!
//! The process environment is read exactly once, at startup, into an
//! [`EnvConfig`] that is passed explicitly into the toolchain resolver and
//! matrix generator. Nothing below this layer touches `std::env`.

pub mod defaults;

use std::path::{Path, PathBuf};

use crate::error::ToolchainError;

/// Normalize a path to forward slashes for use inside command strings.
///
/// Build command lines are composed as strings and handed to a shell; a
/// single separator convention keeps them identical across host platforms.
pub fn to_slash(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

/// Resolved environment configuration.
///
/// All paths are derived from the dependency-tree root named by the
/// `CROSSFORGE_DEPS_ROOT` environment variable.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvConfig {
    /// Root of the external dependency tree
    pub deps_root: PathBuf,
    /// Host sysroot containing the cross toolchain binaries
    pub sysroot: PathBuf,
    /// Path to the pkg-config binary
    pub pkg_config: PathBuf,
    /// Directory containing per-target CMake toolchain files
    pub cmake_tools: PathBuf,
    /// Root directory for installed build products
    pub output_root: PathBuf,
}

impl EnvConfig {
    /// Derive the configuration from a dependency root directory
    pub fn new(deps_root: PathBuf) -> Self {
        Self {
            sysroot: deps_root.join(defaults::SYSROOT_SUBDIR),
            pkg_config: deps_root.join(defaults::PKG_CONFIG_SUBPATH),
            cmake_tools: deps_root.join(defaults::CMAKE_TOOLS_SUBDIR),
            output_root: deps_root.join(defaults::OUTPUT_ROOT_SUBDIR),
            deps_root,
        }
    }

    /// Load the configuration from the process environment.
    ///
    /// Fails if `CROSSFORGE_DEPS_ROOT` is unset or empty. This is checked
    /// once, before any resolution or process spawn happens.
    pub fn from_env() -> Result<Self, ToolchainError> {
        Self::from_value(&std::env::var(defaults::DEPS_ROOT_VAR).unwrap_or_default())
    }

    /// Parse a dependency-root value, ignoring surrounding whitespace
    fn from_value(value: &str) -> Result<Self, ToolchainError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ToolchainError::MissingEnvironment {
                variable: defaults::DEPS_ROOT_VAR.to_string(),
            });
        }
        Ok(Self::new(PathBuf::from(value)))
    }

    /// CMake toolchain-file directory, slash-normalized for command strings
    pub fn cmake_tools_slash(&self) -> String {
        to_slash(&self.cmake_tools)
    }

    /// Install output root, slash-normalized for command strings
    pub fn output_root_slash(&self) -> String {
        to_slash(&self.output_root)
    }
}
