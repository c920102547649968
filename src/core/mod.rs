//! Core business logic module
//!
//! This module contains all business logic for crossforge.
//! It has NO I/O operations - those belong in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`descriptor`] - Package descriptor validation
//! - [`manifest`] - Manifest (crossforge.toml) parsing and validation
//! - [`matrix`] - Build matrix generation
//! - [`runner`] - Action dispatch and pipeline state machine
//! - [`target`] - Build target identifiers

pub mod descriptor;
pub mod manifest;
pub mod matrix;
pub mod runner;
pub mod target;
