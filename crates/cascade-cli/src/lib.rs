//! CLI logic for the Cascade layout tool.
//!
//! This module contains the core CLI logic: load configuration, read a day
//! file, lay out every day it contains and write the result as TOML.

pub mod error_adapter;

mod args;
mod config;
mod input;
mod report;

pub use args::Args;

use std::fs;

use log::{info, warn};

use cascade::{CascadeError, LayoutBuilder, Schedule};

use input::DayFile;
use report::Report;

/// Run the Cascade CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CascadeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed day files
/// - Duplicate task keys in strict mode
/// - Report serialization errors
pub fn run(args: &Args) -> Result<(), CascadeError> {
    info!(
        input_path = args.input,
        strict = args.strict;
        "Processing day file"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let max_visible_layers = app_config.layout().max_visible_layers();

    let source = fs::read_to_string(&args.input)?;
    let day_file = DayFile::parse(&source)?;

    let builder = LayoutBuilder::new(app_config);
    let schedule = Schedule::from_tasks(day_file.tasks());
    let days = if args.strict {
        builder.calculate_schedule_strict(&schedule)?
    } else {
        builder.calculate_schedule(&schedule)
    };

    for (date, layout) in &days {
        if layout.overcrowded(max_visible_layers).next().is_some() {
            warn!(
                date:% = date,
                max_layers = layout.max_layers();
                "Day has more layers than fit legibly"
            );
        }
    }

    let output = Report::new(&days, max_visible_layers).to_toml()?;

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            info!(output_file = path; "Layout written successfully");
        }
        None => print!("{output}"),
    }

    Ok(())
}
