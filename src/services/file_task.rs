use gray_lut::{Classifier, GrayRangeLut};
use std::path::Path;

use super::decoder::ImageDecoder;
use crate::models::{ProcessingResult, ScanOptions};
use crate::output::{format_record, record_value};

/// Decode one file, classify every pixel and build its record.
///
/// Never fails: a decode error becomes a `Failed` record so sibling files
/// are unaffected. The pixel buffer is dropped before the record is
/// returned on every path.
pub fn process_file(
    path: &Path,
    options: &ScanOptions,
    lut: &GrayRangeLut,
    decoder: &dyn ImageDecoder,
) -> ProcessingResult {
    let stats = match decoder.decode(path) {
        Ok(buffer) => {
            let stats = Classifier::new(lut)
                .track_peak(options.needs_peak())
                .scan(&buffer.data);
            tracing::debug!(
                path = %path.display(),
                width = buffer.width,
                height = buffer.height,
                pixels = buffer.pixel_count(),
                codec = ?buffer.codec,
                colored = stats.colored,
                "Scanned image"
            );
            stats
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Decode failed");
            return ProcessingResult::failed(
                path.to_path_buf(),
                format!("failed to decode {}: {e}", path.display()),
            );
        }
    };

    let value = record_value(&stats, options.metric);
    if !options.filter.accepts(value) {
        return ProcessingResult::filtered(path.to_path_buf(), value);
    }

    ProcessingResult::line(
        path.to_path_buf(),
        format_record(path, &stats, options),
        value,
    )
}
