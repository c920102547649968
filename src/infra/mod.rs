//! Infrastructure layer
//!
//! Handles all I/O: filesystem checks, environment, and external processes.
//! This module is the only place where side effects occur.

pub mod filesystem;
pub mod process;
pub mod toolchain;
