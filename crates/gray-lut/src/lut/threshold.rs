//! Validated chroma threshold

use std::fmt;

use super::error::ThresholdError;

/// Boundary between near-gray and colored, in Lab chroma units.
///
/// Always finite and strictly positive. Pixels with chroma strictly below
/// the threshold are near-gray.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ChromaThreshold(f32);

impl ChromaThreshold {
    /// Strict gray: only visually neutral pixels count as gray.
    pub const STRICT: ChromaThreshold = ChromaThreshold(5.0);

    /// Sepia-tolerant: warm-toned and off-white pixels also count as gray.
    pub const SEPIA: ChromaThreshold = ChromaThreshold(13.0);

    /// Validate a threshold.
    ///
    /// # Example
    /// ```
    /// use gray_lut::ChromaThreshold;
    /// assert!(ChromaThreshold::new(7.5).is_ok());
    /// assert!(ChromaThreshold::new(0.0).is_err());
    /// ```
    pub fn new(value: f32) -> Result<Self, ThresholdError> {
        if !value.is_finite() {
            return Err(ThresholdError::NotFinite(value));
        }
        if value <= 0.0 {
            return Err(ThresholdError::NotPositive(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Threshold squared, for comparison against squared chroma.
    #[inline]
    pub fn squared(self) -> f32 {
        self.0 * self.0
    }
}

impl Default for ChromaThreshold {
    fn default() -> Self {
        Self::STRICT
    }
}

impl fmt::Display for ChromaThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert_eq!(ChromaThreshold::new(5.0), Ok(ChromaThreshold::STRICT));
        assert_eq!(
            ChromaThreshold::new(0.0),
            Err(ThresholdError::NotPositive(0.0))
        );
        assert_eq!(
            ChromaThreshold::new(-3.0),
            Err(ThresholdError::NotPositive(-3.0))
        );
        assert!(matches!(
            ChromaThreshold::new(f32::NAN),
            Err(ThresholdError::NotFinite(_))
        ));
        assert!(matches!(
            ChromaThreshold::new(f32::INFINITY),
            Err(ThresholdError::NotFinite(_))
        ));
    }

    #[test]
    fn test_squared() {
        assert_eq!(ChromaThreshold::STRICT.squared(), 25.0);
        assert_eq!(ChromaThreshold::default(), ChromaThreshold::STRICT);
    }
}
