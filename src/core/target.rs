//! Build target identifiers
//!
//! A target is an (operating system, CPU architecture) pair the package is
//! built for. The set is closed: adding a target means adding an enum
//! variant plus a data entry in the matrix profile table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported (OS, architecture) build target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TargetId {
    /// Windows on x86_64
    WindowsX86_64,
    /// Windows on aarch64
    WindowsAarch64,
    /// Linux on x86_64
    LinuxX86_64,
    /// Linux on aarch64
    LinuxAarch64,
}

/// All supported targets, in declaration order.
///
/// Matrix generation and the runner iterate in this order, so builds are
/// deterministic and logs interleave predictably.
pub const ALL_TARGETS: [TargetId; 4] = [
    TargetId::WindowsX86_64,
    TargetId::WindowsAarch64,
    TargetId::LinuxX86_64,
    TargetId::LinuxAarch64,
];

impl TargetId {
    /// Operating system component (e.g. "linux")
    pub fn os(&self) -> &'static str {
        match self {
            Self::WindowsX86_64 | Self::WindowsAarch64 => "windows",
            Self::LinuxX86_64 | Self::LinuxAarch64 => "linux",
        }
    }

    /// CPU architecture component (e.g. "aarch64")
    pub fn arch(&self) -> &'static str {
        match self {
            Self::WindowsX86_64 | Self::LinuxX86_64 => "x86_64",
            Self::WindowsAarch64 | Self::LinuxAarch64 => "aarch64",
        }
    }

    /// Per-target output subpath ("{os}/{arch}").
    ///
    /// Build and install directories are derived from this, so each
    /// target's output tree is exclusive to that target.
    pub fn subpath(&self) -> String {
        format!("{}/{}", self.os(), self.arch())
    }

    /// LLVM target triple used for cross-compiler hints
    pub fn triple(&self) -> &'static str {
        match self {
            Self::WindowsX86_64 => "x86_64-w64-mingw32",
            Self::WindowsAarch64 => "aarch64-w64-mingw32",
            Self::LinuxX86_64 => "x86_64-unknown-linux-gnu",
            Self::LinuxAarch64 => "aarch64-unknown-linux-gnu",
        }
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.os(), self.arch())
    }
}

impl FromStr for TargetId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "windows_x86_64" => Ok(Self::WindowsX86_64),
            "windows_aarch64" => Ok(Self::WindowsAarch64),
            "linux_x86_64" => Ok(Self::LinuxX86_64),
            "linux_aarch64" => Ok(Self::LinuxAarch64),
            other => Err(format!(
                "unknown target '{other}' (expected one of: {})",
                supported_names()
            )),
        }
    }
}

impl TryFrom<String> for TargetId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TargetId> for String {
    fn from(target: TargetId) -> Self {
        target.to_string()
    }
}

/// Comma-separated list of all supported target names, for error messages
pub fn supported_names() -> String {
    ALL_TARGETS
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
