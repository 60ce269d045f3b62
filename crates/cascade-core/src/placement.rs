//! Per-task layout directives for stacked day views.
//!
//! A [`LayoutResult`] tells the renderer how far to shift a task to the right,
//! how wide to draw it and where it sits in the z-order. Nothing here knows
//! about absolute pixel geometry; offsets are in the caller's pixel units and
//! widths are relative to the day column.
//!
//! # Example
//!
//! ```
//! # use cascade_core::placement::{LayoutResult, Stacking};
//! let stacking = Stacking::new(26.0, 10);
//! let result = LayoutResult::new(7, 2, 3, stacking);
//!
//! assert_eq!(result.left_offset(), 52.0);
//! assert_eq!(result.width().to_string(), "calc(100% - 52px)");
//! assert_eq!(result.z_index(), 12);
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

use crate::identifier::TaskKey;

/// Reference horizontal shift per layer, in pixel units.
pub const LAYER_OFFSET_UNIT: f32 = 26.0;

/// Reference z-index of layer 0.
pub const BASE_Z_INDEX: i32 = 10;

/// Converts a layer index into offset and stacking order.
///
/// Higher layers are shifted further right and stacked above lower ones, so
/// the z-index is strictly increasing in the layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stacking {
    offset_unit: f32,
    base_z_index: i32,
}

impl Stacking {
    /// Creates a stacking rule.
    ///
    /// # Arguments
    ///
    /// * `offset_unit` - Horizontal shift added per layer.
    /// * `base_z_index` - z-index of layer 0.
    pub fn new(offset_unit: f32, base_z_index: i32) -> Self {
        Self {
            offset_unit,
            base_z_index,
        }
    }

    /// Returns the horizontal shift added per layer.
    pub fn offset_unit(&self) -> f32 {
        self.offset_unit
    }

    /// Returns the z-index of layer 0.
    pub fn base_z_index(&self) -> i32 {
        self.base_z_index
    }

    /// Left offset of `layer`.
    pub fn left_offset(&self, layer: usize) -> f32 {
        layer as f32 * self.offset_unit
    }

    /// z-index of `layer`, saturating at `i32::MAX`.
    pub fn z_index(&self, layer: usize) -> i32 {
        i32::try_from(layer)
            .map(|layer| self.base_z_index.saturating_add(layer))
            .unwrap_or(i32::MAX)
    }
}

impl Default for Stacking {
    fn default() -> Self {
        Self::new(LAYER_OFFSET_UNIT, BASE_Z_INDEX)
    }
}

/// Relative width directive: the full container minus a left offset.
///
/// Displays as a CSS `calc()` expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthDirective {
    offset: f32,
}

impl WidthDirective {
    /// Creates a directive subtracting `offset` from the container width.
    pub fn minus(offset: f32) -> Self {
        Self { offset }
    }

    /// Returns the subtracted offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }
}

impl fmt::Display for WidthDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "calc(100% - {}px)", self.offset)
    }
}

impl Serialize for WidthDirective {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Layout of one task within its day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    task_key: TaskKey,
    layer: usize,
    total_layers: usize,
    left_offset: f32,
    width: WidthDirective,
    z_index: i32,
}

impl LayoutResult {
    /// Builds the directives for a task on `layer` of a group with
    /// `total_layers` layers.
    pub fn new(
        task_key: impl Into<TaskKey>,
        layer: usize,
        total_layers: usize,
        stacking: Stacking,
    ) -> Self {
        let left_offset = stacking.left_offset(layer);
        Self {
            task_key: task_key.into(),
            layer,
            total_layers,
            left_offset,
            width: WidthDirective::minus(left_offset),
            z_index: stacking.z_index(layer),
        }
    }

    /// Returns the key of the task this result belongs to.
    pub fn task_key(&self) -> &TaskKey {
        &self.task_key
    }

    /// Returns the zero-based layer within the overlap group.
    pub fn layer(&self) -> usize {
        self.layer
    }

    /// Returns the number of layers used by the task's overlap group.
    pub fn total_layers(&self) -> usize {
        self.total_layers
    }

    /// Returns the horizontal shift from the left edge of the day column.
    pub fn left_offset(&self) -> f32 {
        self.left_offset
    }

    /// Returns the width directive.
    pub fn width(&self) -> WidthDirective {
        self.width
    }

    /// Returns the stacking order.
    pub fn z_index(&self) -> i32 {
        self.z_index
    }
}
