//! Configuration for the wheel layout engine

use serde::{Deserialize, Serialize};

use super::error::{ensure_finite, ensure_non_negative, LayoutError};

/// Parameters for one wheel layout pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelParams {
    /// Side length of every (square) item
    pub item_size: f64,

    /// Arc-length gap between adjacent items; may be negative to overlap
    pub spacing: f64,

    /// Lower bound for the inner radius
    pub min_inner_radius: f64,

    /// Rotation of the first item in degrees (0 = top, clockwise positive)
    pub angle_offset: f64,
}

impl Default for WheelParams {
    fn default() -> Self {
        Self {
            item_size: 20.0,
            spacing: 10.0,
            min_inner_radius: 50.0,
            angle_offset: 0.0,
        }
    }
}

impl WheelParams {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the item side length
    pub fn with_item_size(mut self, item_size: f64) -> Self {
        self.item_size = item_size;
        self
    }

    /// Set the spacing between items
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the minimum inner radius
    pub fn with_min_inner_radius(mut self, radius: f64) -> Self {
        self.min_inner_radius = radius;
        self
    }

    /// Set the angle offset of the first item, in degrees
    pub fn with_angle_offset(mut self, degrees: f64) -> Self {
        self.angle_offset = degrees;
        self
    }

    /// Distance along the inner circle taken by one item slot
    pub fn slot_length(&self) -> f64 {
        self.item_size + self.spacing
    }

    /// Check that every field is inside the legal domain
    pub fn validate(&self) -> Result<(), LayoutError> {
        ensure_non_negative("item_size", self.item_size)?;
        ensure_finite("spacing", self.spacing)?;
        ensure_non_negative("min_inner_radius", self.min_inner_radius)?;
        ensure_finite("angle_offset", self.angle_offset)?;
        Ok(())
    }
}
