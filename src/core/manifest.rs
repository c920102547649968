//! Manifest (crossforge.toml) parsing and validation
//!
//! The manifest is the static configuration for one package build. It holds
//! the package descriptor and optional build settings; the environment
//! (dependency root, sysroot) comes from [`crate::config::EnvConfig`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::descriptor::PackageDescriptor;
use crate::core::target::{TargetId, ALL_TARGETS};
use crate::error::ManifestError;

/// The project manifest (crossforge.toml)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    /// Package descriptor
    pub package: PackageDescriptor,

    /// Build configuration
    #[serde(default)]
    pub build: BuildConfig,
}

/// Build configuration section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BuildConfig {
    /// Number of parallel jobs passed to the build tool
    #[serde(default)]
    pub jobs: Option<usize>,

    /// Continue with remaining targets after one target fails
    #[serde(default)]
    pub keep_going: bool,

    /// Targets to generate matrix entries for (default: all supported).
    ///
    /// Omitting a target here means "unsupported for this package", not an
    /// error; requesting an omitted target on the command line is one.
    #[serde(default)]
    pub targets: Option<Vec<TargetId>>,
}

impl Manifest {
    /// Parse a manifest from TOML content
    pub fn from_toml(content: &str) -> Result<Self, ManifestError> {
        let manifest: Self =
            toml::from_str(content).map_err(|source| ManifestError::ParseError { source })?;
        manifest.package.validate()?;
        Ok(manifest)
    }

    /// Load the manifest from a project directory
    pub fn load(project_dir: &Path) -> Result<Self, ManifestError> {
        let path = project_dir.join(crate::config::defaults::MANIFEST_FILE);
        if !path.exists() {
            return Err(ManifestError::NotFound { path });
        }
        let content = std::fs::read_to_string(&path).map_err(|e| ManifestError::ReadError {
            path: path.clone(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Targets this package builds for, in declaration order.
    ///
    /// The manifest list is honored as written; without one, every
    /// supported target is enabled.
    pub fn enabled_targets(&self) -> Vec<TargetId> {
        match &self.build.targets {
            Some(targets) => targets.clone(),
            None => ALL_TARGETS.to_vec(),
        }
    }

    /// Serialize back to TOML (used by tests and project scaffolding)
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
