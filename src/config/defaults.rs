//! Default configuration values

/// Name of the required environment variable pointing at the dependency tree root
pub const DEPS_ROOT_VAR: &str = "CROSSFORGE_DEPS_ROOT";

/// Sysroot location under the dependency root (host cross toolchain)
pub const SYSROOT_SUBDIR: &str = "toolchains/llvm-mingw";

/// pkg-config binary location under the dependency root
pub const PKG_CONFIG_SUBPATH: &str = "dependencies/cpp/clang/bin/pkgconf";

/// CMake toolchain-file directory under the dependency root
pub const CMAKE_TOOLS_SUBDIR: &str = "cmake";

/// Install output root under the dependency root
pub const OUTPUT_ROOT_SUBDIR: &str = "dependencies/cpp";

/// Default manifest file name
pub const MANIFEST_FILE: &str = "crossforge.toml";

/// Exit code for resolution and configuration failures
pub const RESOLUTION_EXIT_CODE: i32 = 2;

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
