//! Build matrix generation
//!
//! Synthesizes the per-target configure/build/install command strings from
//! the package descriptor, resolved toolchain paths, and a per-target flag
//! profile. Per-target differences are data entries in [`TargetProfile`],
//! consumed by a single template function; adding a target does not add a
//! code path.
//!
//! This module does pure string composition only. Path validation happens
//! at resolution time, command validation at execution time.

use std::fmt;

use crate::config::EnvConfig;
use crate::core::descriptor::PackageDescriptor;
use crate::core::target::TargetId;
use crate::infra::toolchain::ToolchainPaths;

/// Pipeline stage selected by an action verb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// CMake configure
    Configure,
    /// CMake build
    Build,
    /// CMake install
    Install,
}

impl Stage {
    /// All stages in pipeline order
    pub const ALL: [Stage; 3] = [Stage::Configure, Stage::Build, Stage::Install];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Configure => write!(f, "configure"),
            Stage::Build => write!(f, "build"),
            Stage::Install => write!(f, "install"),
        }
    }
}

/// The three command strings for one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSteps {
    /// Configure command
    pub config_step: String,
    /// Build command
    pub build_step: String,
    /// Install command
    pub install_step: String,
}

impl BuildSteps {
    /// Command string for a stage
    pub fn step(&self, stage: Stage) -> &str {
        match stage {
            Stage::Configure => &self.config_step,
            Stage::Build => &self.build_step,
            Stage::Install => &self.install_step,
        }
    }
}

/// Per-target flag record.
///
/// Everything that differs between targets lives here as data. The Linux
/// entries disable windowing backends because those targets are headless
/// server builds; Windows x86_64 is the only shared-library target.
#[derive(Debug, Clone)]
pub struct TargetProfile {
    /// CMake toolchain file name under the toolchain-file directory
    pub toolchain_file: &'static str,
    /// Build shared libraries instead of static
    pub shared_libs: bool,
    /// Let the build fetch its own dependency revisions
    pub update_deps: bool,
    /// Pass the resolved pkg-config binary to CMake
    pub use_pkg_config: bool,
    /// Pass the C compiler as assembler driver
    pub set_asm_compiler: bool,
    /// Pass the target triple as the per-language compiler target
    pub set_compiler_target: bool,
    /// Fixed extra defines, in order
    pub extra_defines: &'static [&'static str],
}

impl TargetProfile {
    /// The flag record for a target
    pub fn for_target(target: TargetId) -> Self {
        match target {
            TargetId::WindowsX86_64 => Self {
                toolchain_file: "windows_x86-64.cmake",
                shared_libs: true,
                update_deps: true,
                use_pkg_config: false,
                set_asm_compiler: false,
                set_compiler_target: false,
                extra_defines: &[],
            },
            TargetId::WindowsAarch64 => Self {
                toolchain_file: "windows_aarch64.cmake",
                shared_libs: false,
                update_deps: true,
                use_pkg_config: false,
                set_asm_compiler: false,
                set_compiler_target: false,
                extra_defines: &["-DCMAKE_RC_FLAGS=--target=aarch64-w64-mingw32"],
            },
            TargetId::LinuxX86_64 => Self {
                toolchain_file: "linux_x86-64.cmake",
                shared_libs: false,
                update_deps: false,
                use_pkg_config: true,
                set_asm_compiler: false,
                set_compiler_target: true,
                extra_defines: &[
                    "-DBUILD_WSI_XCB_SUPPORT=OFF",
                    "-DBUILD_WSI_XLIB_SUPPORT=OFF",
                    "-DBUILD_WSI_WAYLAND_SUPPORT=OFF",
                    "-DBUILD_WSI_DIRECTFB_SUPPORT=OFF",
                    "-UWIN32",
                    "-DCMAKE_SYSTEM_PROCESSOR=x86_64",
                ],
            },
            TargetId::LinuxAarch64 => Self {
                toolchain_file: "linux_aarch64.cmake",
                shared_libs: false,
                update_deps: false,
                use_pkg_config: true,
                set_asm_compiler: true,
                set_compiler_target: true,
                extra_defines: &[
                    "-DBUILD_WSI_XCB_SUPPORT=OFF",
                    "-DBUILD_WSI_XLIB_SUPPORT=OFF",
                    "-DBUILD_WSI_WAYLAND_SUPPORT=OFF",
                    "-DBUILD_WSI_DIRECTFB_SUPPORT=OFF",
                    "-UWIN32",
                    "-DCMAKE_TRY_COMPILE_TARGET_TYPE=STATIC_LIBRARY",
                ],
            },
        }
    }
}

/// Immutable mapping from target to build steps, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMatrix {
    entries: Vec<(TargetId, BuildSteps)>,
}

impl BuildMatrix {
    /// Generate the matrix for a package.
    ///
    /// Pure function of its inputs; identical inputs yield an identical
    /// matrix. Targets appear in the order `toolchains` lists them.
    pub fn generate(
        pkg: &PackageDescriptor,
        toolchains: &[(TargetId, ToolchainPaths)],
        env: &EnvConfig,
        jobs: usize,
    ) -> Self {
        let entries = toolchains
            .iter()
            .map(|(target, paths)| (*target, compose_steps(pkg, *target, paths, env, jobs)))
            .collect();
        Self { entries }
    }

    /// Targets in the matrix, in declaration order
    pub fn targets(&self) -> Vec<TargetId> {
        self.entries.iter().map(|(target, _)| *target).collect()
    }

    /// Steps for a target, or None if the target is not in the matrix
    pub fn steps_for(&self, target: TargetId) -> Option<&BuildSteps> {
        self.entries
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, steps)| steps)
    }

    /// Number of targets in the matrix
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the matrix has no targets
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The single command-template function all targets go through
fn compose_steps(
    pkg: &PackageDescriptor,
    target: TargetId,
    paths: &ToolchainPaths,
    env: &EnvConfig,
    jobs: usize,
) -> BuildSteps {
    let profile = TargetProfile::for_target(target);
    let build_dir = format!("{}/{}", pkg.out_dir, target.subpath());
    let install_prefix = format!(
        "{}/{}/{}",
        env.output_root_slash(),
        pkg.name,
        target.subpath()
    );

    let mut parts: Vec<String> = vec![
        "cmake".to_string(),
        "-S".to_string(),
        ".".to_string(),
        "-B".to_string(),
        build_dir.clone(),
        "-G".to_string(),
        "Ninja".to_string(),
        format!(
            "-DCMAKE_TOOLCHAIN_FILE={}/{}",
            env.cmake_tools_slash(),
            profile.toolchain_file
        ),
        "-DCMAKE_BUILD_TYPE=Release".to_string(),
        format!("-DBUILD_SHARED_LIBS={}", on_off(profile.shared_libs)),
        format!("-DUPDATE_DEPS={}", on_off(profile.update_deps)),
        "-DBUILD_TESTS=OFF".to_string(),
    ];

    parts.extend(profile.extra_defines.iter().map(ToString::to_string));

    if profile.set_compiler_target {
        let triple = target.triple();
        parts.push(format!("-DCMAKE_C_COMPILER_TARGET={triple}"));
        parts.push(format!("-DCMAKE_CXX_COMPILER_TARGET={triple}"));
        parts.push(format!("-DCMAKE_ASM_COMPILER_TARGET={triple}"));
    }

    if profile.use_pkg_config {
        parts.push(format!("-DPKG_CONFIG_EXECUTABLE={}", paths.pkg_config));
    }

    parts.push(format!("-DCMAKE_C_COMPILER={}", paths.c_compiler));
    parts.push(format!("-DCMAKE_CXX_COMPILER={}", paths.cxx_compiler));

    if profile.set_asm_compiler {
        parts.push(format!("-DCMAKE_ASM_COMPILER={}", paths.c_compiler));
    }

    if let Some(rc) = &paths.resource_compiler {
        parts.push(format!("-DCMAKE_RC_COMPILER={rc}"));
    }

    parts.push(format!("-DCMAKE_INSTALL_PREFIX={install_prefix}"));

    BuildSteps {
        config_step: parts.join(" "),
        build_step: format!("cmake --build {build_dir} -j{jobs}"),
        install_step: format!("cmake --install {build_dir}"),
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "ON"
    } else {
        "OFF"
    }
}
