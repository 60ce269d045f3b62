//! Command-line argument definitions for the Cascade CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, duplicate-key handling and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Cascade layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input day file (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output TOML file; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Fail when a task key appears twice within one day
    #[arg(long)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
