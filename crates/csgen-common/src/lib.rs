//! Common types and utilities for csgen.
//!
//! This crate provides foundational types used across all csgen crates:
//! - Newline handling (`NewLineKind`)
//! - Rendering configuration (`RenderOptions`)
//! - Centralized limits

// Newline kinds for rendered output
pub mod new_line;
pub use new_line::NewLineKind;

// Rendering configuration shared by the emitter and the facade
pub mod options;
pub use options::{DEFAULT_SUPPRESSED_WARNINGS, RenderOptions};

// Centralized limits and thresholds
pub mod limits;

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod options_tests;
