pub mod config;
pub mod options;
pub mod record;

pub use config::{ConfigFile, ScanConfig, CONFIG_ENV};
pub use options::{ColumnOrder, FilenameMode, Metric, ScanOptions, ValueFilter};
pub use record::{Outcome, ProcessingResult};
