//! Error types for Cascade operations.
//!
//! This module provides the main error type [`CascadeError`]. The layout
//! engine itself never fails on malformed tasks; errors come from loading
//! inputs and configuration, exporting results, or strict key checking.

use std::io;

use thiserror::Error;

use cascade_core::identifier::TaskKey;

/// The main error type for Cascade operations.
#[derive(Debug, Error)]
pub enum CascadeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid task input: {0}")]
    Input(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Duplicate task key `{0}` in one day")]
    DuplicateKey(TaskKey),
}
