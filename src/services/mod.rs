pub mod decoder;
pub mod driver;
pub mod file_task;

pub use decoder::{Codec, FileDecoder, ImageDecoder, ImageFormat, PixelBuffer};
pub use driver::{sort_by_value_descending, RunSummary, ScanDriver};
pub use file_task::process_file;
