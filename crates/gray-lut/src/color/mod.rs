//! Color model: 8-bit sRGB to CIE L*a*b* and chroma
//!
//! Two paths compute the same quantity:
//!
//! - the exact path ([`Lab::from`], [`chroma`], [`chroma_squared`]) decodes,
//!   applies the matrix and evaluates the Lab curve directly;
//! - the fast path ([`crate::fast`]) sums precomputed per-channel XYZ
//!   contributions and samples the Lab curve from a table.
//!
//! # Example
//!
//! ```
//! use gray_lut::{chroma, Srgb8};
//!
//! assert!(chroma(Srgb8::new(90, 90, 90)) < 0.01);
//! assert!(chroma(Srgb8::new(200, 10, 10)) > 50.0);
//! ```

mod lab;
mod srgb;
pub(crate) mod tables;

pub use lab::{chroma, chroma_squared, lab_f, Lab, Xyz, D65_X, D65_Y, D65_Z, SRGB_TO_XYZ};
pub use srgb::{srgb_to_linear, LinearRgb, Srgb8};
