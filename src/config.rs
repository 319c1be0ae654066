//! Wheel description files
//!
//! A wheel file is TOML with up to three sections. Every key is optional and
//! falls back to the built-in defaults:
//!
//! ```toml
//! [metadata]
//! name = "launcher"
//! count = 8
//!
//! [wheel]
//! item_size = 32
//! spacing = 8
//! min_inner_radius = 60
//! angle_offset = -90
//!
//! [svg]
//! show_guides = true
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::{LayoutError, WheelParams};
use crate::renderer::SvgConfig;

/// Errors that can occur when loading or parsing wheel files
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read wheel file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse wheel TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid wheel parameters: {0}")]
    Invalid(#[from] LayoutError),
}

/// A wheel description loaded from TOML
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WheelFile {
    /// Optional name for the wheel
    pub name: Option<String>,
    /// Number of items, if the file fixes one
    pub count: Option<usize>,
    pub wheel: WheelParams,
    pub svg: SvgConfig,
}

/// TOML structure for deserializing wheel files
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlWheelFile {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    wheel: WheelParams,
    #[serde(default)]
    svg: SvgConfig,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    count: Option<usize>,
}

impl WheelFile {
    /// Load a wheel file from disk
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a wheel file from a TOML string
    ///
    /// The wheel parameters are validated here so a bad file fails on load
    /// rather than on the first layout pass.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlWheelFile = toml::from_str(content)?;
        parsed.wheel.validate()?;

        Ok(WheelFile {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            count: parsed.metadata.as_ref().and_then(|m| m.count),
            wheel: parsed.wheel,
            svg: parsed.svg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = WheelFile::from_str("").unwrap();
        assert_eq!(file, WheelFile::default());
    }

    #[test]
    fn test_parse_full_file() {
        let toml_str = r##"
[metadata]
name = "launcher"
count = 8

[wheel]
item_size = 32.0
spacing = 8.0
min_inner_radius = 60.0
angle_offset = -90.0

[svg]
show_guides = true
item_fill = "#ff9800"
"##;
        let file = WheelFile::from_str(toml_str).expect("Should parse");
        assert_eq!(file.name, Some("launcher".to_string()));
        assert_eq!(file.count, Some(8));
        assert_eq!(
            file.wheel,
            WheelParams::new()
                .with_item_size(32.0)
                .with_spacing(8.0)
                .with_min_inner_radius(60.0)
                .with_angle_offset(-90.0)
        );
        assert!(file.svg.show_guides);
        assert_eq!(file.svg.item_fill, "#ff9800");
        assert!(file.svg.pretty_print);
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = WheelFile::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result = WheelFile::from_str("[colors]\nfg = \"#000\"");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let result = WheelFile::from_str("[wheel]\nitem_size = -4.0");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = WheelFile::from_file(Path::new("/nonexistent/wheel.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
