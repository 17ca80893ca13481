//! Per-image pixel classification
//!
//! [`Classifier`] walks a packed RGB8 buffer once, counting colored pixels
//! through the gray-range table and optionally tracking the peak chroma.

use crate::color::Srgb8;
use crate::fast;
use crate::lut::GrayRangeLut;

/// Bytes per packed RGB8 pixel
pub const CHANNELS: usize = 3;

/// Aggregate result of scanning one image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChromaStats {
    /// Pixels scanned
    pub total: u64,
    /// Pixels classified as colored
    pub colored: u64,
    /// Largest squared chroma seen, if peak tracking was enabled
    pub peak_chroma_squared: Option<f32>,
}

impl ChromaStats {
    /// Fraction of colored pixels; 0.0 for an empty image.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.colored as f64 / self.total as f64
        }
    }

    /// Peak chroma, with the square root taken once here.
    pub fn peak_chroma(&self) -> Option<f32> {
        self.peak_chroma_squared.map(f32::sqrt)
    }
}

/// Classifies pixels against a borrowed gray-range table.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    lut: &'a GrayRangeLut,
    track_peak: bool,
}

impl<'a> Classifier<'a> {
    pub fn new(lut: &'a GrayRangeLut) -> Self {
        Self {
            lut,
            track_peak: false,
        }
    }

    /// Also record the peak chroma while scanning.
    pub fn track_peak(mut self, enabled: bool) -> Self {
        self.track_peak = enabled;
        self
    }

    /// Scan a tightly packed RGB8 buffer. Trailing bytes that do not form a
    /// whole pixel are ignored.
    ///
    /// # Example
    /// ```
    /// use gray_lut::{ChromaThreshold, Classifier, GrayRangeLut};
    ///
    /// let lut = GrayRangeLut::for_threshold(ChromaThreshold::STRICT);
    /// let pixels = [10, 10, 10, 200, 10, 10, 128, 128, 128, 0, 0, 0];
    /// let stats = Classifier::new(&lut).scan(&pixels);
    /// assert_eq!(stats.colored, 1);
    /// assert_eq!(stats.ratio(), 0.25);
    /// ```
    pub fn scan(&self, rgb: &[u8]) -> ChromaStats {
        let mut colored = 0u64;
        let mut total = 0u64;

        if self.track_peak {
            let mut peak = 0.0f32;
            for chunk in rgb.chunks_exact(CHANNELS) {
                let px = Srgb8::new(chunk[0], chunk[1], chunk[2]);
                total += 1;
                if !self.lut.is_gray(px) {
                    colored += 1;
                }
                peak = peak.max(fast::chroma_squared_cbrt(px));
            }
            ChromaStats {
                total,
                colored,
                peak_chroma_squared: Some(peak),
            }
        } else {
            for chunk in rgb.chunks_exact(CHANNELS) {
                total += 1;
                if !self.lut.is_gray(Srgb8::new(chunk[0], chunk[1], chunk[2])) {
                    colored += 1;
                }
            }
            ChromaStats {
                total,
                colored,
                peak_chroma_squared: None,
            }
        }
    }
}
