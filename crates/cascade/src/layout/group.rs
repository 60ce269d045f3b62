//! Ordering and partitioning of intervals into overlap groups.

use std::cmp::Ordering;

use cascade_core::task::TimeInterval;

/// Primary ordering of the engine.
///
/// Start ascending, then duration descending so the longest of several
/// same-start tasks comes first, then key ascending so identical spans are
/// ordered independently of input order.
pub(super) fn primary_order(a: &TimeInterval, b: &TimeInterval) -> Ordering {
    a.start()
        .total_cmp(&b.start())
        .then_with(|| b.duration().total_cmp(&a.duration()))
        .then_with(|| a.key().cmp(b.key()))
}

/// Splits start-ordered intervals into maximal transitively overlapping runs.
///
/// An interval joins the open group while its start is strictly before the
/// latest end seen in that group.
pub(super) fn overlap_groups(sorted: Vec<TimeInterval>) -> Vec<Vec<TimeInterval>> {
    let mut groups = Vec::new();
    let mut current: Vec<TimeInterval> = Vec::new();
    let mut group_end = f64::NEG_INFINITY;

    for interval in sorted {
        if !current.is_empty() && interval.start() >= group_end {
            groups.push(std::mem::take(&mut current));
        }

        group_end = if current.is_empty() {
            interval.end()
        } else {
            group_end.max(interval.end())
        };
        current.push(interval);
    }

    if !current.is_empty() {
        groups.push(current);
    }

    groups
}
