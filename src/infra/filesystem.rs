//! Filesystem checks
//!
//! Read-only existence and executability probes used by toolchain
//! resolution.

use std::path::Path;

/// Check whether a path exists
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Check whether a path is an executable file.
///
/// On Unix this requires at least one execute permission bit. On other
/// platforms executability is not encoded in permissions, so any regular
/// file passes.
pub fn is_executable(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        match std::fs::metadata(path) {
            Ok(metadata) => metadata.permissions().mode() & 0o111 != 0,
            Err(_) => false,
        }
    }
    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exists() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("tool");
        assert!(!exists(&file));
        std::fs::write(&file, "").unwrap();
        assert!(exists(&file));
    }

    #[test]
    fn test_directory_is_not_executable_file() {
        let dir = TempDir::new().unwrap();
        assert!(!is_executable(dir.path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_executable_bit_required() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let file = dir.path().join("tool");
        std::fs::write(&file, "#!/bin/sh\n").unwrap();

        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o644)).unwrap();
        assert!(!is_executable(&file));

        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert!(is_executable(&file));
    }
}
