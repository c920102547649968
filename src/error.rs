//! Error types for crossforge
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Package descriptor validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DescriptorError {
    /// Package name is empty or contains non-identifier characters
    #[error("Invalid package name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Version does not parse as a dotted numeric string
    #[error("Invalid package version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    /// Output directory must be a relative path
    #[error("Invalid output directory '{out_dir}': must be a non-empty relative path")]
    InvalidOutDir { out_dir: String },
}

/// Manifest (crossforge.toml) errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest not found in the working directory
    #[error("No crossforge.toml found at '{path}'. Create one with a [package] section.")]
    NotFound { path: PathBuf },

    /// Failed to read the manifest file
    #[error("Failed to read manifest at '{path}': {error}")]
    ReadError { path: PathBuf, error: String },

    /// Manifest parse error
    #[error("Failed to parse crossforge.toml: {source}")]
    ParseError { source: toml::de::Error },

    /// Descriptor validation failed
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

/// Toolchain resolution errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolchainError {
    /// Required environment variable is not set
    #[error("{variable} environment variable is not set. Set it to the root of your dependency tree.")]
    MissingEnvironment { variable: String },

    /// Resolved binary path does not exist
    #[error("Toolchain binary not found for target '{target}': {path}")]
    NotFound { target: String, path: String },

    /// Resolved binary path exists but is not executable
    #[error("Toolchain binary is not executable for target '{target}': {path}")]
    NotExecutable { target: String, path: String },
}

/// Pipeline execution errors
#[derive(Error, Debug)]
pub enum RunError {
    /// Requested target is not defined in the build matrix
    #[error("Target '{name}' is not in the build matrix. Available targets: {available}")]
    UnknownTarget { name: String, available: String },

    /// A build step exited with a non-zero status
    #[error("{stage} step failed for target '{target}' (exit code {code}): {command}")]
    StepFailed {
        target: String,
        stage: String,
        command: String,
        code: i32,
    },

    /// The running child process was interrupted
    #[error("Interrupted during {stage} step for target '{target}'")]
    Interrupted { target: String, stage: String },

    /// The command could not be spawned at all
    #[error("Failed to spawn {stage} step for target '{target}': {error}")]
    Spawn {
        target: String,
        stage: String,
        error: String,
    },
}

/// Top-level crossforge error type
#[derive(Error, Debug)]
pub enum CrossforgeError {
    /// Descriptor error
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// Manifest error
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Toolchain error
    #[error(transparent)]
    Toolchain(#[from] ToolchainError),

    /// Run error
    #[error(transparent)]
    Run(#[from] RunError),

    /// IO error
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
