//! Greedy first-fit layer assignment within one overlap group.

use log::trace;

use cascade_core::task::TimeInterval;

use super::group::primary_order;

/// Intervals of one overlap group together with their assigned layers.
#[derive(Debug)]
pub(super) struct StackedGroup {
    members: Vec<(TimeInterval, usize)>,
    layer_count: usize,
}

impl StackedGroup {
    /// Assigns every interval of `group` to the lowest layer free of conflicts.
    ///
    /// The group is re-sorted by the primary ordering first, so the longest
    /// early task anchors layer 0 and later, shorter ones cascade to the right.
    pub(super) fn stack(mut group: Vec<TimeInterval>) -> Self {
        group.sort_by(primary_order);

        // Member indices per layer.
        let mut layers: Vec<Vec<usize>> = Vec::new();
        let mut assigned = Vec::with_capacity(group.len());

        for (idx, interval) in group.iter().enumerate() {
            let free = layers
                .iter()
                .position(|members| members.iter().all(|&m| !group[m].overlaps(interval)));

            let layer = match free {
                Some(layer) => layer,
                None => {
                    layers.push(Vec::new());
                    layers.len() - 1
                }
            };

            trace!(key:% = interval.key(), layer; "Assigned layer");
            layers[layer].push(idx);
            assigned.push(layer);
        }

        Self {
            members: group.into_iter().zip(assigned).collect(),
            layer_count: layers.len(),
        }
    }

    /// Returns the number of layers the group uses.
    pub(super) fn layer_count(&self) -> usize {
        self.layer_count
    }

    /// Consumes the group, yielding intervals with their layers in primary order.
    pub(super) fn into_members(self) -> impl Iterator<Item = (TimeInterval, usize)> {
        self.members.into_iter()
    }
}
