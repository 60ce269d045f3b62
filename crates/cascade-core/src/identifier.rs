//! Task identifiers used as keys of a day layout.
//!
//! This module provides the [`TaskKey`] type. A key identifies one laid-out
//! interval: a plain task, or a single occurrence of a recurring series so that
//! two occurrences of the same series on one day stay independent.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};

/// Format used for the occurrence part of a displayed key.
const OCCURRENCE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Stable identifier of a task, unique within one layout computation.
///
/// Keys are totally ordered. Numeric ids sort before textual ids, which sort
/// before recurring occurrences.
///
/// # Examples
///
/// ```
/// use cascade_core::identifier::TaskKey;
/// use chrono::NaiveDate;
///
/// let task = TaskKey::from(42);
/// assert_eq!(task.to_string(), "42");
///
/// let start = NaiveDate::from_ymd_opt(2026, 10, 19)
///     .unwrap()
///     .and_hms_opt(9, 0, 0)
///     .unwrap();
/// let occurrence = TaskKey::occurrence(7, start);
/// assert_eq!(occurrence.to_string(), "7@2026-10-19T09:00:00");
/// assert_eq!(occurrence.series(), Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskKey {
    /// A numeric task id.
    ///
    /// Serialized as an integer, or as its decimal string when it exceeds
    /// `i64::MAX` since many formats (TOML among them) only carry signed
    /// 64-bit integers.
    Id(#[serde(serialize_with = "serialize_id")] u64),
    /// A textual task id.
    Name(String),
    /// One occurrence of a recurring series, identified by its start.
    Occurrence {
        #[serde(serialize_with = "serialize_id")]
        series: u64,
        start: NaiveDateTime,
    },
}

impl TaskKey {
    /// Creates the key of one occurrence of a recurring series.
    ///
    /// # Arguments
    ///
    /// * `series` - Id of the recurring series.
    /// * `start` - Local start of this particular occurrence.
    pub fn occurrence(series: u64, start: NaiveDateTime) -> Self {
        Self::Occurrence { series, start }
    }

    /// Returns the series id when this key names a recurring occurrence.
    pub fn series(&self) -> Option<u64> {
        match self {
            Self::Occurrence { series, .. } => Some(*series),
            Self::Id(_) | Self::Name(_) => None,
        }
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
            Self::Occurrence { series, start } => {
                write!(f, "{series}@{}", start.format(OCCURRENCE_FORMAT))
            }
        }
    }
}

impl From<u64> for TaskKey {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for TaskKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for TaskKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

fn serialize_id<S: Serializer>(id: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    match i64::try_from(*id) {
        Ok(id) => serializer.serialize_i64(id),
        Err(_) => serializer.collect_str(id),
    }
}
