//! Cascade - overlap layout for calendar day and week views.
//!
//! Given the time-bounded tasks of one day, Cascade partitions them into
//! overlap groups and assigns every task a layer, so overlapping tasks render
//! side by side with progressive horizontal offsets while the longest task of
//! a cluster keeps the full width.

pub mod config;
pub mod layout;
pub mod schedule;

mod error;

pub use cascade_core::{identifier, placement, task, time};

pub use error::CascadeError;
pub use layout::DayLayout;
pub use schedule::Schedule;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::{debug, info};

use cascade_core::{placement::LayoutResult, task::Timed};

use config::AppConfig;
use layout::Engine;

/// Entry point for laying out tasks.
///
/// The builder holds only configuration and can be shared between threads;
/// every call computes a fresh layout.
///
/// # Examples
///
/// ```rust
/// use cascade::{LayoutBuilder, config::AppConfig, identifier::TaskKey, task::Task};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let at = |h, m| day.and_hms_opt(h, m, 0).unwrap();
///
/// let tasks = vec![
///     Task::new(1u64).with_span(at(10, 0), at(11, 0)),
///     Task::new(2u64).with_span(at(10, 30), at(11, 0)),
/// ];
///
/// let builder = LayoutBuilder::new(AppConfig::default());
/// let layout = builder.calculate_layout(&tasks);
///
/// let second = layout.get(&TaskKey::from(2u64)).unwrap();
/// assert_eq!(second.layer(), 1);
/// assert_eq!(second.width().to_string(), "calc(100% - 26px)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutBuilder {
    config: AppConfig,
}

impl LayoutBuilder {
    /// Create a new layout builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn engine(&self) -> Engine {
        Engine::new(self.config.layout().stacking())
    }

    /// Lays out the tasks of one day.
    ///
    /// Tasks missing a start or an end are silently left out of the result.
    /// Duplicate keys are logged and listed by [`DayLayout::duplicate_keys`].
    pub fn calculate_layout<T: Timed>(&self, tasks: &[T]) -> DayLayout {
        let layout = self.engine().calculate(tasks);
        debug!(
            laid_out = layout.len(),
            max_layers = layout.max_layers();
            "Day layout calculated",
        );
        layout
    }

    /// Lays out the tasks of one day, rejecting duplicate keys.
    ///
    /// # Errors
    ///
    /// Returns [`CascadeError::DuplicateKey`] naming the first key that
    /// appears more than once among the laid-out tasks.
    pub fn calculate_layout_strict<T: Timed>(&self, tasks: &[T]) -> Result<DayLayout, CascadeError> {
        let layout = self.calculate_layout(tasks);
        match layout.duplicate_keys().first() {
            Some(key) => Err(CascadeError::DuplicateKey(key.clone())),
            None => Ok(layout),
        }
    }

    /// Lays out every day of `schedule` independently.
    pub fn calculate_schedule<T: Timed>(
        &self,
        schedule: &Schedule<'_, T>,
    ) -> BTreeMap<NaiveDate, DayLayout> {
        info!(days = schedule.len(); "Laying out schedule");
        schedule
            .days()
            .map(|(date, tasks)| (date, self.calculate_layout(tasks)))
            .collect()
    }

    /// Lays out every day of `schedule`, rejecting duplicate keys within a day.
    ///
    /// # Errors
    ///
    /// Returns [`CascadeError::DuplicateKey`] for the first day containing a
    /// duplicated key.
    pub fn calculate_schedule_strict<T: Timed>(
        &self,
        schedule: &Schedule<'_, T>,
    ) -> Result<BTreeMap<NaiveDate, DayLayout>, CascadeError> {
        info!(days = schedule.len(); "Laying out schedule in strict mode");
        schedule
            .days()
            .map(|(date, tasks)| Ok((date, self.calculate_layout_strict(tasks)?)))
            .collect()
    }

    /// Returns the largest layer count of the day, at least `1`.
    ///
    /// Recomputes the layout of `tasks`.
    pub fn max_layers<T: Timed>(&self, tasks: &[T]) -> usize {
        self.calculate_layout(tasks).max_layers()
    }

    /// Returns `true` when the group of `result` uses more layers than remain
    /// legible, so the caller should offer a compact view instead.
    pub fn has_too_many_layers(&self, result: &LayoutResult) -> bool {
        result.total_layers() > self.config.layout().max_visible_layers()
    }

    /// Rough percentage of the column width left to `result` after its offset.
    ///
    /// Computed as `max(min_effective_width_percent, 100 - left_offset / 2)`.
    /// This is an estimate for secondary decisions such as text truncation,
    /// not a layout guarantee.
    pub fn effective_width_percent(&self, result: &LayoutResult) -> f32 {
        let floor = self.config.layout().min_effective_width_percent();
        (100.0 - result.left_offset() / 2.0).max(floor)
    }
}
