//! Error adapter for converting CascadeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use cascade::CascadeError;

/// Adapter giving a [`CascadeError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a CascadeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CascadeError::Io(_) => "cascade::io",
            CascadeError::Config(_) => "cascade::config",
            CascadeError::Input(_) => "cascade::input",
            CascadeError::Export(_) => "cascade::export",
            CascadeError::DuplicateKey(_) => "cascade::duplicate_key",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CascadeError::Config(_) => {
                "check the [layout] section of the configuration file"
            }
            CascadeError::Input(_) => {
                "each [[task]] needs a `key`; times are local date-times like 2026-10-19T10:00:00 without an offset"
            }
            CascadeError::DuplicateKey(_) => {
                "recurring tasks need one key per occurrence: key = { series = <id>, start = \"...\" }"
            }
            CascadeError::Io(_) | CascadeError::Export(_) => return None,
        };
        Some(Box::new(help))
    }
}
