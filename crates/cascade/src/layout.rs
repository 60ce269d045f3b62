//! Overlap layout of the tasks of one day.
//!
//! The [`Engine`] projects tasks onto fractional hours, partitions them into
//! overlap groups and assigns each task a layer inside its group. The result
//! is a [`DayLayout`], a map from task key to [`LayoutResult`].
//!
//! The computation is pure: no state survives a call, and independent days
//! can be laid out concurrently.

mod group;
mod layer;

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, warn};

use cascade_core::{
    identifier::TaskKey,
    placement::{LayoutResult, Stacking},
    task::{TimeInterval, Timed},
};

use group::{overlap_groups, primary_order};
use layer::StackedGroup;

/// Layout results of one day, keyed by task.
///
/// Iteration follows the engine's primary ordering (start ascending, longest
/// first).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayLayout {
    results: IndexMap<TaskKey, LayoutResult>,
    duplicate_keys: Vec<TaskKey>,
}

impl DayLayout {
    /// Returns the result for `key`, or `None` if the task was not laid out.
    ///
    /// A missing entry means the task had no usable time bounds.
    pub fn get(&self, key: &TaskKey) -> Option<&LayoutResult> {
        self.results.get(key)
    }

    /// Returns an iterator over all results.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutResult> {
        self.results.values()
    }

    /// Returns the number of laid-out tasks.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if no task was laid out.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the largest layer count of any group, at least `1`.
    pub fn max_layers(&self) -> usize {
        self.iter()
            .map(LayoutResult::total_layers)
            .max()
            .unwrap_or(1)
            .max(1)
    }

    /// Returns the keys that appeared more than once in the input.
    ///
    /// For each of them only the result of the last occurrence in primary
    /// order was kept.
    pub fn duplicate_keys(&self) -> &[TaskKey] {
        &self.duplicate_keys
    }

    /// Returns the results whose group uses more than `max_visible_layers`.
    pub fn overcrowded(&self, max_visible_layers: usize) -> impl Iterator<Item = &LayoutResult> {
        self.iter()
            .filter(move |result| result.total_layers() > max_visible_layers)
    }
}

impl<'a> IntoIterator for &'a DayLayout {
    type Item = &'a LayoutResult;
    type IntoIter = indexmap::map::Values<'a, TaskKey, LayoutResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.values()
    }
}

/// The overlap layout engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    stacking: Stacking,
}

impl Engine {
    /// Create an engine producing directives with the given [`Stacking`].
    pub fn new(stacking: Stacking) -> Self {
        Self { stacking }
    }

    /// Lays out the tasks of one day.
    ///
    /// Tasks without both bounds, or ending before they start, are left out.
    /// Duplicate keys are reported through [`DayLayout::duplicate_keys`]; the
    /// later result in primary order replaces the earlier one.
    pub fn calculate<T: Timed>(&self, tasks: &[T]) -> DayLayout {
        let mut intervals: Vec<TimeInterval> =
            tasks.iter().filter_map(TimeInterval::from_timed).collect();
        let duplicate_keys = find_duplicates(&intervals);

        for key in &duplicate_keys {
            warn!(key:%; "Duplicate task key, earlier layout result will be overwritten");
        }

        intervals.sort_by(primary_order);
        let groups = overlap_groups(intervals);
        debug!(
            tasks = tasks.len(),
            groups = groups.len();
            "Partitioned tasks into overlap groups",
        );

        let mut results = IndexMap::new();
        for group in groups {
            let stacked = StackedGroup::stack(group);
            let total_layers = stacked.layer_count();

            for (interval, layer) in stacked.into_members() {
                let key = interval.key().clone();
                let result = LayoutResult::new(key.clone(), layer, total_layers, self.stacking);
                results.insert(key, result);
            }
        }

        DayLayout {
            results,
            duplicate_keys,
        }
    }
}

/// Returns every key seen more than once, in order of its second appearance.
fn find_duplicates(intervals: &[TimeInterval]) -> Vec<TaskKey> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for interval in intervals {
        let key = interval.key();
        if !seen.insert(key) && !duplicates.contains(key) {
            duplicates.push(key.clone());
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use float_cmp::assert_approx_eq;

    use cascade_core::task::Task;

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn task(key: u64, start: (u32, u32), end: (u32, u32)) -> Task {
        Task::new(key).with_span(at(start.0, start.1), at(end.0, end.1))
    }

    #[test]
    fn test_empty_day() {
        let layout = Engine::default().calculate::<Task>(&[]);

        assert!(layout.is_empty());
        assert_eq!(layout.max_layers(), 1);
    }

    #[test]
    fn test_total_layers_differ_between_groups() {
        let layout = Engine::default().calculate(&[
            task(1, (8, 0), (10, 0)),
            task(2, (8, 30), (9, 30)),
            task(3, (9, 0), (9, 45)),
            task(4, (13, 0), (14, 0)),
        ]);

        let totals: Vec<usize> = layout.iter().map(LayoutResult::total_layers).collect();
        assert_eq!(totals, vec![3, 3, 3, 1]);
        assert_eq!(layout.max_layers(), 3);
    }

    #[test]
    fn test_iteration_follows_primary_order() {
        let layout = Engine::default().calculate(&[
            task(3, (14, 0), (15, 0)),
            task(1, (9, 0), (9, 30)),
            task(2, (9, 0), (11, 0)),
        ]);

        let keys: Vec<String> = layout.iter().map(|r| r.task_key().to_string()).collect();
        assert_eq!(keys, vec!["2", "1", "3"]);
    }

    #[test]
    fn test_custom_stacking_is_applied() {
        let engine = Engine::new(Stacking::new(10.0, 100));
        let layout = engine.calculate(&[task(1, (10, 0), (11, 0)), task(2, (10, 15), (10, 45))]);

        let second = layout.get(&TaskKey::from(2)).expect("task 2 laid out");
        assert_approx_eq!(f32, second.left_offset(), 10.0);
        assert_eq!(second.z_index(), 101);
    }

    #[test]
    fn test_duplicate_keys_are_reported() {
        let layout = Engine::default().calculate(&[
            task(1, (10, 0), (11, 0)),
            task(1, (10, 30), (11, 0)),
            task(2, (12, 0), (13, 0)),
        ]);

        assert_eq!(layout.duplicate_keys(), &[TaskKey::from(1)]);
        assert_eq!(layout.len(), 2);

        // The later interval in primary order wins.
        let kept = layout.get(&TaskKey::from(1)).expect("key 1 laid out");
        assert_eq!(kept.layer(), 1);
        assert_eq!(kept.total_layers(), 2);
    }

    #[test]
    fn test_overcrowded_lists_groups_beyond_threshold() {
        let tasks: Vec<Task> = (0..4)
            .map(|i| task(i, (9, 0), (10, 0)))
            .chain(std::iter::once(task(10, (15, 0), (16, 0))))
            .collect();
        let layout = Engine::default().calculate(&tasks);

        assert_eq!(layout.overcrowded(3).count(), 4);
        assert_eq!(layout.overcrowded(4).count(), 0);
    }

    #[test]
    fn test_borrowed_tasks() {
        let owned = [task(1, (9, 0), (10, 0)), task(2, (9, 30), (10, 0))];
        let borrowed: Vec<&Task> = owned.iter().collect();

        assert_eq!(
            Engine::default().calculate(&borrowed),
            Engine::default().calculate(&owned)
        );
    }
}
