//! Radial ("wheel") placement of uniform square items.
//!
//! Items are spread along a circle whose circumference holds one slot of
//! `item_size + spacing` per item. The circle never shrinks below
//! `min_inner_radius`, so a handful of items sits on a partial arc instead of
//! collapsing onto a tiny ring.
//!
//! Layout happens in two passes, mirroring a measure/arrange cycle:
//! 1. [`compute_required_size`] reports the square the ring needs
//! 2. [`compute_layout`] places every item inside a container of a given size
//!
//! Angles are clockwise-positive with 0 at 12 o'clock, so index order runs
//! clockwise and rotating an item by its own angle makes it face outward.

use std::f64::consts::TAU;

use serde::Serialize;
use tracing::{debug, trace};

use super::config::WheelParams;
use super::error::{ensure_finite, ensure_non_negative, LayoutError};
use super::transform::{RotationTransform, UP};
use super::types::{BoundingBox, ItemPlacement, Point, Size};

/// Radii and angular step for a given item count
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WheelGeometry {
    /// Radius whose circumference is split into item slots
    pub inner_radius: f64,
    /// Radius of the circle through every item center
    pub middle_radius: f64,
    /// Radius used to size the container
    pub outer_radius: f64,
    /// Angle between adjacent items, in radians
    pub step_radians: f64,
}

impl WheelGeometry {
    pub fn new(count: usize, params: &WheelParams) -> Result<Self, LayoutError> {
        let inner_radius = inner_radius(count, params)?;
        let item_size = params.item_size;

        // Outer radius keeps a full item of headroom past the item centers'
        // circle instead of the tight `inner + item_size`.
        let outer_radius = ensure_finite("outer_radius", inner_radius + item_size * 2.0)?;

        let step_radians = if inner_radius == 0.0 {
            0.0
        } else {
            params.slot_length() / inner_radius
        };

        Ok(Self {
            inner_radius,
            middle_radius: inner_radius + item_size / 2.0,
            outer_radius,
            step_radians,
        })
    }

    /// Square that encloses the outer circle
    pub fn container_size(&self) -> Size {
        Size::square(self.outer_radius * 2.0)
    }

    /// Angle between adjacent items, in degrees
    pub fn step_degrees(&self) -> f64 {
        self.step_radians.to_degrees()
    }
}

/// Result of a full layout pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WheelLayout {
    /// Size the items were arranged in
    pub container_size: Size,
    pub geometry: WheelGeometry,
    /// One entry per item, in input order
    pub placements: Vec<ItemPlacement>,
}

impl WheelLayout {
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Center of the wheel in container coordinates
    pub fn center(&self) -> Point {
        self.container_size.center()
    }

    pub fn outer_radius(&self) -> f64 {
        self.geometry.outer_radius
    }

    /// Angle of the item at `index`, in degrees
    pub fn angle_of(&self, index: usize) -> Option<f64> {
        self.placements.get(index).map(|p| p.angle_degrees)
    }

    /// Angle of every item, indexed like the input
    pub fn angles(&self) -> Vec<f64> {
        self.placements.iter().map(|p| p.angle_degrees).collect()
    }

    /// On-screen bounds of the item at `index` once it is rotated to face outward
    pub fn oriented_bounds(&self, index: usize) -> Option<BoundingBox> {
        self.placements.get(index).map(|p| {
            RotationTransform::new(p.angle_degrees, p.center()).transform_bounds(&p.bounds)
        })
    }
}

/// Radius of the circle that holds `count` item slots, clamped to the minimum
pub fn inner_radius(count: usize, params: &WheelParams) -> Result<f64, LayoutError> {
    params.validate()?;
    let circumference = count as f64 * params.slot_length();
    let raw = ensure_finite("inner_radius", circumference / TAU)?;
    Ok(raw.max(params.min_inner_radius))
}

/// Measurement pass: the square a wheel of `count` items needs
pub fn compute_required_size(count: usize, params: &WheelParams) -> Result<Size, LayoutError> {
    Ok(WheelGeometry::new(count, params)?.container_size())
}

/// Arrangement pass: place `count` items around the center of `container_size`
pub fn compute_layout(
    count: usize,
    params: &WheelParams,
    container_size: Size,
) -> Result<WheelLayout, LayoutError> {
    ensure_non_negative("container_width", container_size.width)?;
    ensure_non_negative("container_height", container_size.height)?;
    let geometry = WheelGeometry::new(count, params)?;

    debug!(
        count,
        inner_radius = geometry.inner_radius,
        outer_radius = geometry.outer_radius,
        step_degrees = geometry.step_degrees(),
        "arranging wheel"
    );

    let center = container_size.center();
    let item_size = Size::square(params.item_size);
    let offset_radians = params.angle_offset.to_radians();

    let placements = (0..count)
        .map(|index| {
            let angle = offset_radians + geometry.step_radians * index as f64;
            let direction = RotationTransform::from_radians(angle, center).rotate_vector(UP);
            let item_center = center.offset(
                direction.x * geometry.middle_radius,
                direction.y * geometry.middle_radius,
            );
            let placement = ItemPlacement {
                index,
                bounds: BoundingBox::centered_at(item_center, item_size),
                angle_degrees: angle.to_degrees(),
            };
            trace!(
                index,
                angle = placement.angle_degrees,
                x = placement.bounds.x,
                y = placement.bounds.y,
                "placed item"
            );
            placement
        })
        .collect();

    Ok(WheelLayout {
        container_size,
        geometry,
        placements,
    })
}

/// Both passes: measure, then arrange in the measured size
pub fn compute(count: usize, params: &WheelParams) -> Result<WheelLayout, LayoutError> {
    let size = compute_required_size(count, params)?;
    compute_layout(count, params, size)
}
