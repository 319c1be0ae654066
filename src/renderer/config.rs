//! Configuration for SVG rendering

use serde::{Deserialize, Serialize};

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    /// Padding around the viewBox
    pub viewbox_padding: f64,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "wheel-" for "wheel-item")
    pub class_prefix: Option<String>,

    /// Draw the inner, middle and outer circles
    pub show_guides: bool,

    /// Write each item's index in its center
    pub label_items: bool,

    /// Fill color for items
    pub item_fill: String,

    /// Stroke color for items and guides
    pub stroke: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewbox_padding: 10.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("wheel-".to_string()),
            show_guides: false,
            label_items: true,
            item_fill: "#2196f3".to_string(),
            stroke: "#333333".to_string(),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewBox padding
    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set whether radius guides are drawn
    pub fn with_guides(mut self, show: bool) -> Self {
        self.show_guides = show;
        self
    }

    /// Set whether items are labelled with their index
    pub fn with_item_labels(mut self, label: bool) -> Self {
        self.label_items = label;
        self
    }

    /// Set the item fill color
    pub fn with_item_fill(mut self, fill: impl Into<String>) -> Self {
        self.item_fill = fill.into();
        self
    }
}
