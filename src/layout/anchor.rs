//! Anchor centering for popups
//!
//! A popup is normally positioned by its top-left corner. To make its center
//! sit on the anchor point (e.g. the mouse pointer) the offset from the anchor
//! to the corner has to follow the popup's size, axis by axis.

use serde::Serialize;

use super::error::{ensure_non_negative, LayoutError};

/// Offset from the anchor point to the popup's top-left corner
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CenteringOffset {
    pub horizontal_offset: f64,
    pub vertical_offset: f64,
}

/// Offset that puts the center of a `width` x `height` popup on the anchor
pub fn compute_centering_offset(width: f64, height: f64) -> Result<CenteringOffset, LayoutError> {
    Ok(CenteringOffset {
        horizontal_offset: horizontal_offset(width)?,
        vertical_offset: vertical_offset(height)?,
    })
}

fn horizontal_offset(width: f64) -> Result<f64, LayoutError> {
    Ok(-ensure_non_negative("popup_width", width)? / 2.0)
}

fn vertical_offset(height: f64) -> Result<f64, LayoutError> {
    Ok(-ensure_non_negative("popup_height", height)? / 2.0)
}

/// A size notification from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeChange {
    Width(f64),
    Height(f64),
}

/// Keeps a popup centered on its anchor as its size changes
///
/// Each axis is only recomputed by a notification for that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnchorCenteringTracker {
    offset: CenteringOffset,
}

impl AnchorCenteringTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset to apply to the popup position
    pub fn offset(&self) -> CenteringOffset {
        self.offset
    }

    pub fn on_width_changed(&mut self, width: f64) -> Result<CenteringOffset, LayoutError> {
        self.offset.horizontal_offset = horizontal_offset(width)?;
        Ok(self.offset)
    }

    pub fn on_height_changed(&mut self, height: f64) -> Result<CenteringOffset, LayoutError> {
        self.offset.vertical_offset = vertical_offset(height)?;
        Ok(self.offset)
    }

    pub fn on_size_changed(&mut self, change: SizeChange) -> Result<CenteringOffset, LayoutError> {
        match change {
            SizeChange::Width(width) => self.on_width_changed(width),
            SizeChange::Height(height) => self.on_height_changed(height),
        }
    }
}
