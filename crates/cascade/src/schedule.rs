//! Multi-day views built from independent day layouts.
//!
//! A [`Schedule`] buckets tasks by the calendar date of their start so that a
//! week view can lay out every visible day separately. Tasks are not split at
//! midnight; a task belongs to the day it starts on.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::trace;

use cascade_core::task::Timed;

/// Tasks grouped by the date they start on.
#[derive(Debug, Clone)]
pub struct Schedule<'a, T> {
    days: BTreeMap<NaiveDate, Vec<&'a T>>,
}

impl<'a, T: Timed> Schedule<'a, T> {
    /// Buckets `tasks` by start date.
    ///
    /// Tasks without a start are ignored; they could not be laid out anyway.
    /// Within a day, tasks keep their input order.
    pub fn from_tasks(tasks: &'a [T]) -> Self {
        let mut days: BTreeMap<NaiveDate, Vec<&'a T>> = BTreeMap::new();

        for task in tasks {
            match task.start() {
                Some(start) => days.entry(start.date()).or_default().push(task),
                None => trace!(key:% = task.key(); "Task without start has no day"),
            }
        }

        Self { days }
    }

    /// Returns the tasks starting on `date`.
    pub fn tasks_on(&self, date: NaiveDate) -> &[&'a T] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the days that have tasks, in date order.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &[&'a T])> {
        self.days.iter().map(|(date, tasks)| (*date, tasks.as_slice()))
    }

    /// Returns a schedule restricted to `from..=to`.
    ///
    /// A reversed range (`from > to`) selects no days.
    pub fn days_in_range(&self, from: NaiveDate, to: NaiveDate) -> Self {
        if from > to {
            return Self {
                days: BTreeMap::new(),
            };
        }

        let days = self
            .days
            .range(from..=to)
            .map(|(date, tasks)| (*date, tasks.clone()))
            .collect();
        Self { days }
    }

    /// Returns the number of days that have tasks.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if no task has a start date.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
