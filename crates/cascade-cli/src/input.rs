//! Day file parsing.
//!
//! A day file is TOML with one `[[task]]` table per task:
//!
//! ```toml
//! [[task]]
//! key = 1
//! title = "Planning"
//! start = 2026-10-19T10:00:00
//! end = "2026-10-19T11:00:00"
//!
//! [[task]]
//! key = { series = 7, start = "2026-10-19T09:00:00" }
//! start = 2026-10-19T09:00:00
//! end = 2026-10-19T09:15:00
//! ```
//!
//! Task times are local wall-clock values, written either as TOML local
//! date-times or as quoted strings. Offset date-times, bare dates and bare
//! times are rejected.

use chrono::NaiveDateTime;
use serde::Deserialize;
use toml::Value;

use cascade::{CascadeError, identifier::TaskKey, task::Task};

/// Contents of a day file.
#[derive(Debug, Default)]
pub struct DayFile {
    tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
struct RawDayFile {
    #[serde(default, rename = "task")]
    tasks: Vec<TaskEntry>,
}

/// One `[[task]]` table before its times are resolved.
#[derive(Debug, Deserialize)]
struct TaskEntry {
    key: TaskKey,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    start: Option<Value>,
    #[serde(default)]
    end: Option<Value>,
}

impl TaskEntry {
    fn into_task(self) -> Result<Task, CascadeError> {
        let start = self
            .start
            .map(|value| wall_clock(&self.key, "start", value))
            .transpose()?;
        let end = self
            .end
            .map(|value| wall_clock(&self.key, "end", value))
            .transpose()?;

        let mut task = Task::new(self.key);
        if let Some(title) = self.title {
            task = task.with_title(title);
        }
        if let Some(start) = start {
            task = task.with_start(start);
        }
        if let Some(end) = end {
            task = task.with_end(end);
        }
        Ok(task)
    }
}

/// Resolves a `start`/`end` value into a local wall-clock instant.
fn wall_clock(key: &TaskKey, field: &str, value: Value) -> Result<NaiveDateTime, CascadeError> {
    let text = match value {
        Value::String(text) => text,
        Value::Datetime(datetime) => {
            if datetime.offset.is_some() {
                return Err(CascadeError::Input(format!(
                    "task `{key}`: `{field}` = {datetime} carries an offset; \
                     expected a local date-time like 2026-10-19T10:00:00"
                )));
            }
            if datetime.date.is_none() || datetime.time.is_none() {
                return Err(CascadeError::Input(format!(
                    "task `{key}`: `{field}` = {datetime} needs both a date and a time"
                )));
            }
            datetime.to_string()
        }
        other => {
            return Err(CascadeError::Input(format!(
                "task `{key}`: `{field}` must be a local date-time, found {}",
                other.type_str()
            )));
        }
    };

    text.parse().map_err(|err| {
        CascadeError::Input(format!(
            "task `{key}`: `{field}` = \"{text}\" is not a local date-time: {err}"
        ))
    })
}

impl DayFile {
    /// Parses a day file from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`CascadeError::Input`] when the source is not valid TOML, a
    /// task table is malformed, or a task time is not a local date-time.
    pub fn parse(source: &str) -> Result<Self, CascadeError> {
        let raw: RawDayFile =
            toml::from_str(source).map_err(|err| CascadeError::Input(err.to_string()))?;
        let tasks = raw
            .tasks
            .into_iter()
            .map(TaskEntry::into_task)
            .collect::<Result<_, _>>()?;
        Ok(Self { tasks })
    }

    /// Returns the parsed tasks in file order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
