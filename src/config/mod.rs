//! Configuration module for processor instances
//!
//! This module provides `ProcessorOptions`, its builder and JSON loader, the
//! output mode enum, and per-call overrides.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{ProcessorOptionsBuilder, validate_language};
pub use types::{ExecuteOverrides, OutputMode, ProcessorOptions};
