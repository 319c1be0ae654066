//! Host adapter driving the wheel through a measure/arrange cycle
//!
//! A UI host hands its children to a [`WheelPanel`] as [`WheelItem`]s. The
//! panel measures them with the uniform item size, reports the size the wheel
//! needs, and on arrange writes each item's rectangle and angle back to it.

use tracing::debug;

use super::config::WheelParams;
use super::error::LayoutError;
use super::types::{BoundingBox, Size};
use super::wheel::{compute_layout, WheelGeometry};

/// A child of a wheel panel
pub trait WheelItem {
    /// Called during measurement with the square each item is given
    fn measure(&mut self, _available: Size) {}

    /// Final rectangle of the item, in panel coordinates
    fn arrange(&mut self, bounds: BoundingBox);

    /// Angle of the item around the wheel in degrees, for self-orientation
    fn set_angle(&mut self, degrees: f64);
}

/// Wheel container owning its items
#[derive(Debug, Clone)]
pub struct WheelPanel<T> {
    params: WheelParams,
    items: Vec<T>,
    outer_radius: f64,
}

impl<T: WheelItem> WheelPanel<T> {
    pub fn new(params: WheelParams) -> Self {
        Self::with_items(params, Vec::new())
    }

    pub fn with_items(params: WheelParams, items: Vec<T>) -> Self {
        Self {
            params,
            items,
            outer_radius: 0.0,
        }
    }

    pub fn params(&self) -> &WheelParams {
        &self.params
    }

    pub fn set_params(&mut self, params: WheelParams) {
        self.params = params;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Outer radius from the last measurement (0 before the first one)
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Measure every item and return the size the wheel needs
    pub fn measure(&mut self) -> Result<Size, LayoutError> {
        let geometry = WheelGeometry::new(self.items.len(), &self.params)?;
        let item_size = Size::square(self.params.item_size);
        for item in &mut self.items {
            item.measure(item_size);
        }
        self.outer_radius = geometry.outer_radius;
        Ok(geometry.container_size())
    }

    /// Place every item inside `final_size` and hand it its angle
    pub fn arrange(&mut self, final_size: Size) -> Result<Size, LayoutError> {
        let layout = compute_layout(self.items.len(), &self.params, final_size)?;
        debug!(items = layout.len(), width = final_size.width, "arranging panel");
        for (item, placement) in self.items.iter_mut().zip(&layout.placements) {
            item.arrange(placement.bounds);
            item.set_angle(placement.angle_degrees);
        }
        Ok(final_size)
    }

    /// Measure, then arrange in the measured size
    pub fn update_layout(&mut self) -> Result<Size, LayoutError> {
        let size = self.measure()?;
        self.arrange(size)
    }
}
