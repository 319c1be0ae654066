//! SVG renderer for previewing wheel layouts
//!
//! This module takes a WheelLayout and produces an SVG string
//! with CSS classes for styling.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::render_svg;
