//! Shared utilities for ssmenv
//!
//! Atomic file writes for the env file and tracing subscriber setup.

pub mod atomic_file;
pub mod tracing;

pub use atomic_file::*;
