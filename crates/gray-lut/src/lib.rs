// Generated tables
#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

//! gray-lut: near-gray pixel classification in CIE L*a*b*
//!
//! A pixel is near-gray when its Lab chroma (distance from the neutral axis
//! in the a-b plane) is below a threshold. Evaluating that directly costs a
//! gamma decode and three cube roots per pixel; this crate precomputes a
//! 64x64 table of gray B ranges so classification is one table read.
//!
//! # Quick Start
//!
//! ```
//! use gray_lut::{ChromaThreshold, Classifier, GrayRangeLut, Srgb8};
//!
//! let lut = GrayRangeLut::for_threshold(ChromaThreshold::STRICT);
//! assert!(lut.is_gray(Srgb8::new(128, 128, 128)));
//!
//! let pixels = [128, 128, 128, 200, 10, 10];
//! let stats = Classifier::new(&lut).scan(&pixels);
//! assert_eq!(stats.ratio(), 0.5);
//! ```
//!
//! # Three Ways to Get Chroma
//!
//! | Function | Lab curve | Used for |
//! |----------|-----------|----------|
//! | [`chroma_squared`] | exact (`powf` decode, `cbrt`) | reference, tests |
//! | [`fast::chroma_squared_cbrt`] | exact `cbrt`, tabled decode | peak-chroma reporting |
//! | [`fast::chroma_squared`] | sampled table | building [`GrayRangeLut`] |
//!
//! # Approximation
//!
//! The table lookup quantizes R and G to 4-wide buckets and stores the
//! union of gray B values over each bucket, so it can call a pixel gray
//! when its own chroma is a little above the threshold. The size of that
//! error is measured in the `domain_tests` module, not assumed.

pub mod classify;
pub mod color;
pub mod fast;
pub mod lut;


pub use classify::{ChromaStats, Classifier};
pub use color::{chroma, chroma_squared, Lab, LinearRgb, Srgb8, Xyz};
pub use lut::{ChromaThreshold, GrayRangeLut, ThresholdError};
