//! Gray-range lookup tables
//!
//! [`GrayRangeLut`] trades a one-time scan of the RGB cube for a single
//! table read per pixel. Tables are immutable once built; share them with
//! `Arc` rather than rebuilding per task.

mod error;
mod presets;
mod table;
mod threshold;

pub use error::ThresholdError;
pub use table::{GrayRangeLut, BLOCKS, BLOCK_SIZE, EMPTY_CELL};
pub use threshold::ChromaThreshold;
