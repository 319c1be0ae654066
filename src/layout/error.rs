//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur during layout computation
///
/// Every layout operation is total over its legal domain, so the only failure
/// is a caller passing a value outside that domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// NaN or infinite input
    #[error("parameter '{parameter}' must be finite, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },

    /// Negative value for a parameter that must be >= 0
    #[error("parameter '{parameter}' must not be negative, got {value}")]
    Negative { parameter: &'static str, value: f64 },
}

impl LayoutError {
    /// Name of the offending parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::NonFinite { parameter, .. } | Self::Negative { parameter, .. } => parameter,
        }
    }
}

/// Reject NaN and infinities
pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64, LayoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LayoutError::NonFinite { parameter, value })
    }
}

/// Reject NaN, infinities and negative values
pub(crate) fn ensure_non_negative(
    parameter: &'static str,
    value: f64,
) -> Result<f64, LayoutError> {
    let value = ensure_finite(parameter, value)?;
    if value < 0.0 {
        return Err(LayoutError::Negative { parameter, value });
    }
    Ok(value)
}
