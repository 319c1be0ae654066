//! Wheel Layout - radial placement of uniform items and popup centering
//!
//! This library spreads a collection of same-sized items evenly around a
//! circle, sizes the enclosing square to fit the ring, and reports each
//! item's angle so it can orient itself. It also keeps popups centered on
//! their anchor point, and can render a layout to SVG for inspection.
//!
//! # Example
//!
//! ```rust
//! use wheel_layout::layout::{compute, WheelParams};
//!
//! let layout = compute(4, &WheelParams::default()).unwrap();
//! assert_eq!(layout.container_size.width, 180.0);
//! assert_eq!(layout.placements[0].bounds.x, 80.0);
//! ```

pub mod config;
pub mod layout;
pub mod renderer;

pub use config::{ConfigError, WheelFile};
pub use layout::{
    compute_centering_offset, compute_layout, compute_required_size, AnchorCenteringTracker,
    CenteringOffset, LayoutError, WheelLayout, WheelParams,
};
pub use renderer::{render_svg, SvgConfig};

use thiserror::Error;
use tracing::debug;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Wheel parameters
    pub wheel: WheelParams,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Debug mode: log the computed layout
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wheel parameters
    pub fn with_wheel(mut self, params: WheelParams) -> Self {
        self.wheel = params;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl From<WheelFile> for RenderConfig {
    fn from(file: WheelFile) -> Self {
        Self::new().with_wheel(file.wheel).with_svg(file.svg)
    }
}

/// Render a wheel of `count` items to SVG with default configuration
///
/// # Example
///
/// ```rust
/// use wheel_layout::render;
///
/// let svg = render(6).unwrap();
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains(r#"id="item-5""#));
/// ```
pub fn render(count: usize) -> Result<String, RenderError> {
    render_with_config(count, RenderConfig::default())
}

/// Render a wheel of `count` items to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use wheel_layout::{render_with_config, RenderConfig, SvgConfig, WheelParams};
///
/// let config = RenderConfig::new()
///     .with_wheel(WheelParams::default().with_item_size(32.0))
///     .with_svg(SvgConfig::default().with_guides(true));
///
/// let svg = render_with_config(3, config).unwrap();
/// assert!(svg.contains("wheel-outer"));
/// ```
pub fn render_with_config(count: usize, config: RenderConfig) -> Result<String, RenderError> {
    let layout = layout::compute(count, &config.wheel)?;

    if config.debug {
        let g = &layout.geometry;
        debug!(
            count,
            inner = g.inner_radius,
            middle = g.middle_radius,
            outer = g.outer_radius,
            "wheel geometry"
        );
        for p in &layout.placements {
            debug!(
                "[{}] x={:.1} y={:.1} w={:.1} h={:.1} angle={:.2}",
                p.index, p.bounds.x, p.bounds.y, p.bounds.width, p.bounds.height, p.angle_degrees
            );
        }
    }

    Ok(render_svg(&layout, &config.svg))
}
