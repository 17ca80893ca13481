//! Error types for threshold validation

use std::fmt;

/// Error type for chroma threshold validation.
///
/// A threshold is the boundary between "gray" and "colored" in Lab chroma
/// units and must be a finite, strictly positive number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdError {
    /// Threshold is zero or negative
    NotPositive(f32),
    /// Threshold is NaN or infinite
    NotFinite(f32),
}

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThresholdError::NotPositive(value) => {
                write!(f, "chroma threshold must be positive, got {}", value)
            }
            ThresholdError::NotFinite(value) => {
                write!(f, "chroma threshold must be finite, got {}", value)
            }
        }
    }
}

impl std::error::Error for ThresholdError {}
