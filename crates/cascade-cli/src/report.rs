//! Serializable layout report written by the CLI.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use cascade::{CascadeError, DayLayout, placement::LayoutResult};

/// Layout of every day found in the input.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    day: Vec<DayReport<'a>>,
}

/// Layout of one day.
#[derive(Debug, Serialize)]
struct DayReport<'a> {
    date: NaiveDate,
    max_layers: usize,
    overcrowded: bool,
    layout: Vec<&'a LayoutResult>,
}

impl<'a> Report<'a> {
    /// Builds a report from per-day layouts.
    ///
    /// A day is flagged as overcrowded when any of its groups uses more than
    /// `max_visible_layers` layers.
    pub fn new(days: &'a BTreeMap<NaiveDate, DayLayout>, max_visible_layers: usize) -> Self {
        let day = days
            .iter()
            .map(|(date, layout)| DayReport {
                date: *date,
                max_layers: layout.max_layers(),
                overcrowded: layout.overcrowded(max_visible_layers).next().is_some(),
                layout: layout.iter().collect(),
            })
            .collect();
        Self { day }
    }

    /// Renders the report as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`CascadeError::Export`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, CascadeError> {
        toml::to_string(self).map_err(|err| CascadeError::Export(err.to_string()))
    }
}
