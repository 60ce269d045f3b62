//! Configuration types for the Cascade layout engine.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources. Every field is optional and falls back to the reference
//! value.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration root.
//! - [`LayoutConfig`] - Offsets, stacking order and visibility thresholds.
//!
//! # Example
//!
//! ```
//! # use cascade::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().max_visible_layers(), 5);
//! assert!(config.layout().validate().is_ok());
//! ```

use serde::Deserialize;

use cascade_core::placement::{BASE_Z_INDEX, LAYER_OFFSET_UNIT, Stacking};

/// Layers beyond this count are considered too narrow to read.
pub const MAX_VISIBLE_LAYERS: usize = 5;

/// Lower bound of [`LayoutBuilder::effective_width_percent`](crate::LayoutBuilder::effective_width_percent).
pub const MIN_EFFECTIVE_WIDTH_PERCENT: f32 = 20.0;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout configuration.
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}

/// Parameters of the overlap layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayoutConfig {
    /// Horizontal shift per layer, in pixel units.
    #[serde(default = "default_layer_offset_unit")]
    layer_offset_unit: f32,

    /// Number of layers that still render legibly.
    #[serde(default = "default_max_visible_layers")]
    max_visible_layers: usize,

    /// z-index of layer 0.
    #[serde(default = "default_base_z_index")]
    base_z_index: i32,

    /// Floor of the effective width estimate, in percent.
    #[serde(default = "default_min_effective_width_percent")]
    min_effective_width_percent: f32,
}

fn default_layer_offset_unit() -> f32 {
    LAYER_OFFSET_UNIT
}

fn default_max_visible_layers() -> usize {
    MAX_VISIBLE_LAYERS
}

fn default_base_z_index() -> i32 {
    BASE_Z_INDEX
}

fn default_min_effective_width_percent() -> f32 {
    MIN_EFFECTIVE_WIDTH_PERCENT
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            layer_offset_unit: default_layer_offset_unit(),
            max_visible_layers: default_max_visible_layers(),
            base_z_index: default_base_z_index(),
            min_effective_width_percent: default_min_effective_width_percent(),
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    ///
    /// # Arguments
    ///
    /// * `layer_offset_unit` - Horizontal shift per layer.
    /// * `max_visible_layers` - Threshold for [`has_too_many_layers`](crate::LayoutBuilder::has_too_many_layers).
    /// * `base_z_index` - z-index of layer 0.
    /// * `min_effective_width_percent` - Floor of the effective width estimate.
    pub fn new(
        layer_offset_unit: f32,
        max_visible_layers: usize,
        base_z_index: i32,
        min_effective_width_percent: f32,
    ) -> Self {
        Self {
            layer_offset_unit,
            max_visible_layers,
            base_z_index,
            min_effective_width_percent,
        }
    }

    /// Returns the horizontal shift per layer.
    pub fn layer_offset_unit(&self) -> f32 {
        self.layer_offset_unit
    }

    /// Returns the number of layers that still render legibly.
    pub fn max_visible_layers(&self) -> usize {
        self.max_visible_layers
    }

    /// Returns the z-index of layer 0.
    pub fn base_z_index(&self) -> i32 {
        self.base_z_index
    }

    /// Returns the floor of the effective width estimate.
    pub fn min_effective_width_percent(&self) -> f32 {
        self.min_effective_width_percent
    }

    /// Returns the [`Stacking`] rule described by this configuration.
    pub fn stacking(&self) -> Stacking {
        Stacking::new(self.layer_offset_unit, self.base_z_index)
    }

    /// Checks that the values can produce a sensible layout.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if !self.layer_offset_unit.is_finite() || self.layer_offset_unit < 0.0 {
            return Err(format!(
                "layer_offset_unit must be a non-negative number, got {}",
                self.layer_offset_unit
            ));
        }

        if !(0.0..=100.0).contains(&self.min_effective_width_percent) {
            return Err(format!(
                "min_effective_width_percent must be within 0..=100, got {}",
                self.min_effective_width_percent
            ));
        }

        Ok(())
    }
}
