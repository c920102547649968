//! Crossforge - cross-target native library build orchestrator
//!
//! This library drives the configure/build/install pipeline of one native
//! package (CMake/Ninja) across a matrix of (OS, architecture) targets,
//! cross-compiling from a single host toolchain sysroot.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (no I/O operations)
//! - [`infra`] - Infrastructure layer (filesystem, processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
