//! 8-bit sRGB samples and gamma decoding
//!
//! Decoded images arrive as packed 8-bit sRGB triples. Chroma is only
//! meaningful after the sRGB transfer curve has been undone, so every
//! conversion goes through [`LinearRgb`] first.

use super::tables::SRGB8_TO_LINEAR;

/// One decoded pixel: an 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Srgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Srgb8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a sample from a byte array [R, G, B].
    ///
    /// # Example
    /// ```
    /// use gray_lut::Srgb8;
    /// let px = Srgb8::from_bytes([200, 10, 10]);
    /// assert_eq!(px.r, 200);
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl From<[u8; 3]> for Srgb8 {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

/// IEC 61966-2-1 decode of one 8-bit sRGB code, evaluated directly.
///
/// Same values as the table behind `LinearRgb::from(Srgb8)`.
#[inline]
pub fn srgb_to_linear(code: u8) -> f32 {
    let srgb = code as f32 / 255.0;
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear light intensity per channel, typically 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb8> for LinearRgb {
    /// Decode through the compile-time 256-entry table. The table holds the
    /// exact curve for every 8-bit code, so this is not an approximation.
    fn from(px: Srgb8) -> Self {
        Self {
            r: SRGB8_TO_LINEAR[px.r as usize],
            g: SRGB8_TO_LINEAR[px.g as usize],
            b: SRGB8_TO_LINEAR[px.b as usize],
        }
    }
}
