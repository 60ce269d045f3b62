//! Task inputs and the time intervals derived from them.
//!
//! The engine accepts any type implementing [`Timed`]. [`Task`] is the plain
//! implementation used by front ends that have no task type of their own.

use chrono::NaiveDateTime;
use log::trace;

use crate::{identifier::TaskKey, time::hour_fraction};

/// Something that can be placed on a day view.
///
/// Bounds are local wall-clock instants; either may be missing, in which case
/// the item is left out of the layout.
pub trait Timed {
    /// Key under which the layout result of this item is reported.
    fn key(&self) -> TaskKey;

    /// Local wall-clock start, if known.
    fn start(&self) -> Option<NaiveDateTime>;

    /// Local wall-clock end, if known.
    fn end(&self) -> Option<NaiveDateTime>;
}

impl<T: Timed + ?Sized> Timed for &T {
    fn key(&self) -> TaskKey {
        (**self).key()
    }

    fn start(&self) -> Option<NaiveDateTime> {
        (**self).start()
    }

    fn end(&self) -> Option<NaiveDateTime> {
        (**self).end()
    }
}

/// A calendar task as handed over by the surrounding application.
///
/// # Examples
///
/// ```
/// use cascade_core::task::Task;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let task = Task::new(1)
///     .with_title("Standup")
///     .with_span(
///         day.and_hms_opt(9, 0, 0).unwrap(),
///         day.and_hms_opt(9, 15, 0).unwrap(),
///     );
///
/// assert_eq!(task.title(), Some("Standup"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    key: TaskKey,
    title: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
}

impl Task {
    /// Creates a task without title or time bounds.
    pub fn new(key: impl Into<TaskKey>) -> Self {
        Self {
            key: key.into(),
            title: None,
            start: None,
            end: None,
        }
    }

    /// Set the display title (builder style).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the start instant (builder style).
    pub fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end instant (builder style).
    pub fn with_end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set both bounds at once (builder style).
    pub fn with_span(self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.with_start(start).with_end(end)
    }

    /// Returns the display title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Timed for Task {
    fn key(&self) -> TaskKey {
        self.key.clone()
    }

    fn start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    fn end(&self) -> Option<NaiveDateTime> {
        self.end
    }
}

/// A task reduced to the data the layout engine needs.
///
/// `start` and `end` are fractional hours with `start <= end`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeInterval {
    key: TaskKey,
    start: f64,
    end: f64,
}

impl TimeInterval {
    /// Creates an interval from fractional hours.
    ///
    /// Returns `None` when a bound is not finite or `end < start`.
    pub fn new(key: impl Into<TaskKey>, start: f64, end: f64) -> Option<Self> {
        if !start.is_finite() || !end.is_finite() || end < start {
            return None;
        }

        Some(Self {
            key: key.into(),
            start,
            end,
        })
    }

    /// Projects a [`Timed`] item onto the hours of its day.
    ///
    /// Returns `None` when either bound is missing or the projected end lies
    /// before the projected start.
    pub fn from_timed<T: Timed + ?Sized>(item: &T) -> Option<Self> {
        let (Some(start), Some(end)) = (item.start(), item.end()) else {
            trace!(key:% = item.key(); "Skipping task without time bounds");
            return None;
        };

        let interval = Self::new(item.key(), hour_fraction(start), hour_fraction(end));
        if interval.is_none() {
            trace!(key:% = item.key(), start:?, end:?; "Skipping task ending before it starts");
        }
        interval
    }

    /// Returns the key of the originating task.
    pub fn key(&self) -> &TaskKey {
        &self.key
    }

    /// Returns the start in fractional hours.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the end in fractional hours.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns `end - start`.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` if the two intervals share any time.
    ///
    /// Touching intervals (one ends exactly when the other starts) do not
    /// overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && self.end > other.start
    }
}
