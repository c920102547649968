//! Package descriptor
//!
//! Static identity for the package being built. Validated once at
//! construction and immutable afterwards.

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;

/// Identity and metadata for the package being built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    /// Package name (identifier-safe)
    pub name: String,

    /// Package version (dotted numeric, e.g. "16.0.0")
    pub version: String,

    /// Build output directory, relative to the working directory
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_out_dir() -> String {
    "build".to_string()
}

impl PackageDescriptor {
    /// Create a validated descriptor
    pub fn new(name: &str, version: &str, out_dir: &str) -> Result<Self, DescriptorError> {
        let descriptor = Self {
            name: name.to_string(),
            version: version.to_string(),
            out_dir: out_dir.to_string(),
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Validate name, version, and output directory
    pub fn validate(&self) -> Result<(), DescriptorError> {
        validate_name(&self.name)?;
        validate_version(&self.version)?;
        validate_out_dir(&self.out_dir)?;
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), DescriptorError> {
    if name.is_empty() {
        return Err(DescriptorError::InvalidName {
            name: name.to_string(),
            reason: "name must not be empty".to_string(),
        });
    }
    let mut chars = name.chars();
    let first = chars.next().unwrap_or_default();
    if !first.is_ascii_alphanumeric() {
        return Err(DescriptorError::InvalidName {
            name: name.to_string(),
            reason: "name must start with an ASCII letter or digit".to_string(),
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(DescriptorError::InvalidName {
            name: name.to_string(),
            reason: "name may only contain ASCII letters, digits, '-' and '_'".to_string(),
        });
    }
    Ok(())
}

fn validate_version(version: &str) -> Result<(), DescriptorError> {
    // Dotted numeric only: no pre-release or build metadata suffixes,
    // which semver itself would accept.
    if !version.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(DescriptorError::InvalidVersion {
            version: version.to_string(),
            reason: "version must contain only digits and dots".to_string(),
        });
    }
    Version::parse(version).map_err(|e| DescriptorError::InvalidVersion {
        version: version.to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

fn validate_out_dir(out_dir: &str) -> Result<(), DescriptorError> {
    if out_dir.is_empty() || out_dir.starts_with('/') || out_dir.starts_with('\\') {
        return Err(DescriptorError::InvalidOutDir {
            out_dir: out_dir.to_string(),
        });
    }
    Ok(())
}
