//! CIE XYZ and L*a*b* (D65)
//!
//! The exact chroma path. It is the reference the fast path is measured
//! against and is never used inside the per-pixel classification loop.
//!
//! # References
//!
//! IEC 61966-2-1 (sRGB primaries), CIE 15:2004 (L*a*b*).

use super::srgb::{LinearRgb, Srgb8};

/// D65 standard illuminant reference white point
pub const D65_X: f32 = 0.95047;
pub const D65_Y: f32 = 1.00000;
pub const D65_Z: f32 = 1.08883;

/// sRGB to XYZ matrix (D65)
pub const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// Below this normalized value the Lab curve switches to its linear segment.
pub const LAB_EPSILON: f32 = 0.008856;

/// CIE XYZ tristimulus values (Y = 1.0 for the reference white).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<LinearRgb> for Xyz {
    fn from(rgb: LinearRgb) -> Self {
        let m = &SRGB_TO_XYZ;
        Self {
            x: m[0][0] * rgb.r + m[0][1] * rgb.g + m[0][2] * rgb.b,
            y: m[1][0] * rgb.r + m[1][1] * rgb.g + m[1][2] * rgb.b,
            z: m[2][0] * rgb.r + m[2][1] * rgb.g + m[2][2] * rgb.b,
        }
    }
}

/// CIE L*a*b* color.
///
/// - `l`: 0.0..=100.0
/// - `a`: green (-) to red (+)
/// - `b`: blue (-) to yellow (+)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

/// Lab companding function f(t).
#[inline]
pub fn lab_f(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

impl Lab {
    /// Radial distance from the neutral axis in the a-b plane.
    #[inline]
    pub fn chroma(self) -> f32 {
        self.chroma_squared().sqrt()
    }

    /// Squared chroma, for comparisons that can skip the square root.
    #[inline]
    pub fn chroma_squared(self) -> f32 {
        self.a * self.a + self.b * self.b
    }

    /// Assemble Lab from the three companded, white-normalized components.
    #[inline]
    pub(crate) fn from_companded(fx: f32, fy: f32, fz: f32) -> Self {
        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        Self::from_companded(
            lab_f(xyz.x / D65_X),
            lab_f(xyz.y / D65_Y),
            lab_f(xyz.z / D65_Z),
        )
    }
}

impl From<Srgb8> for Lab {
    /// Exact conversion: sRGB decode, matrix, Lab curve.
    ///
    /// # Example
    /// ```
    /// use gray_lut::{Lab, Srgb8};
    /// let gray = Lab::from(Srgb8::new(128, 128, 128));
    /// assert!(gray.chroma() < 0.01);
    /// ```
    fn from(px: Srgb8) -> Self {
        Lab::from(Xyz::from(LinearRgb::from(px)))
    }
}

/// Exact chroma of an 8-bit sRGB sample.
#[inline]
pub fn chroma(px: Srgb8) -> f32 {
    Lab::from(px).chroma()
}

/// Exact squared chroma of an 8-bit sRGB sample.
#[inline]
pub fn chroma_squared(px: Srgb8) -> f32 {
    Lab::from(px).chroma_squared()
}
