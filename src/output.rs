//! Record formatting

use gray_lut::ChromaStats;
use std::path::Path;

use crate::models::{ColumnOrder, Metric, ScanOptions};

/// The number a record is filtered and sorted by.
pub fn record_value(stats: &ChromaStats, metric: Metric) -> f64 {
    match metric {
        Metric::Ratio => stats.ratio(),
        Metric::PeakChroma => stats.peak_chroma().map_or(0.0, f64::from),
    }
}

/// Format one record without trailing newline.
///
/// The ratio is printed with six decimals. In peak mode the peak chroma
/// follows it, rounded to an integer.
pub fn format_record(path: &Path, stats: &ChromaStats, options: &ScanOptions) -> String {
    let name = path.display();
    if options.names_only {
        return name.to_string();
    }

    let value = match options.metric {
        Metric::Ratio => format!("{:.6}", stats.ratio()),
        Metric::PeakChroma => {
            let peak = stats.peak_chroma().unwrap_or(0.0).round() as u32;
            format!("{:.6} {peak}", stats.ratio())
        }
    };

    if !options.show_filename {
        return value;
    }
    match options.column_order {
        ColumnOrder::NameFirst => format!("{name} {value}"),
        ColumnOrder::ValueFirst => format!("{value} {name}"),
    }
}
