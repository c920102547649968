//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    use crate::core::target::{TargetId, ALL_TARGETS};

    /// Generate a valid package name (alphanumeric with hyphens/underscores)
    pub fn package_name() -> impl Strategy<Value = String> {
        "[a-z0-9][a-z0-9_-]{0,30}"
    }

    /// Generate a valid dotted numeric version string
    pub fn dotted_version() -> impl Strategy<Value = String> {
        (0u32..100, 0u32..100, 0u32..100)
            .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
    }

    /// Generate a supported target
    pub fn target() -> impl Strategy<Value = TargetId> {
        prop_oneof![
            Just(ALL_TARGETS[0]),
            Just(ALL_TARGETS[1]),
            Just(ALL_TARGETS[2]),
            Just(ALL_TARGETS[3]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_package_name_generator(name in package_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'));
        }

        #[test]
        fn test_dotted_version_generator(version in dotted_version()) {
            let parts: Vec<&str> = version.split('.').collect();
            prop_assert_eq!(parts.len(), 3);
            for part in parts {
                prop_assert!(part.parse::<u32>().is_ok());
            }
        }

        #[test]
        fn test_target_generator_round_trips(target in target()) {
            prop_assert_eq!(target.to_string().parse::<crate::core::target::TargetId>(), Ok(target));
        }
    }
}
