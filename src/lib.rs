//! chromascan - colored pixel ratio scanner
//!
//! Reports how much of each image is colored rather than near-gray, using
//! CIE Lab chroma through the `gray-lut` lookup table. This library exposes
//! modules for integration testing.

pub mod app;
pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod services;
