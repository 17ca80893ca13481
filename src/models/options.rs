use serde::Deserialize;

/// Which number a record reports and sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Fraction of colored pixels
    #[default]
    Ratio,
    /// Ratio plus the largest chroma in the image; sorts by the chroma
    PeakChroma,
}

/// When the file name is part of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilenameMode {
    /// Only when more than one file is given
    #[default]
    Auto,
    Always,
    Never,
    /// Print the file name alone (for use with filters)
    Only,
}

/// Position of the file name relative to the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnOrder {
    #[default]
    NameFirst,
    ValueFirst,
}

/// Emit a record only if its value lies strictly inside the given bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValueFilter {
    pub above: Option<f64>,
    pub below: Option<f64>,
}

impl ValueFilter {
    pub fn accepts(&self, value: f64) -> bool {
        self.above.map_or(true, |above| value > above)
            && self.below.map_or(true, |below| value < below)
    }

    pub fn is_active(&self) -> bool {
        self.above.is_some() || self.below.is_some()
    }
}

/// Per-file formatting and filtering options, resolved for a given run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanOptions {
    pub metric: Metric,
    pub show_filename: bool,
    pub names_only: bool,
    pub column_order: ColumnOrder,
    pub filter: ValueFilter,
}

impl ScanOptions {
    /// Resolve `FilenameMode::Auto` against the number of input files.
    pub fn new(
        metric: Metric,
        filename_mode: FilenameMode,
        column_order: ColumnOrder,
        filter: ValueFilter,
        file_count: usize,
    ) -> Self {
        let (show_filename, names_only) = match filename_mode {
            FilenameMode::Auto => (file_count > 1, false),
            FilenameMode::Always => (true, false),
            FilenameMode::Never => (false, false),
            FilenameMode::Only => (true, true),
        };
        Self {
            metric,
            show_filename,
            names_only,
            column_order,
            filter,
        }
    }

    /// Whether peak chroma has to be tracked while scanning.
    pub fn needs_peak(&self) -> bool {
        self.metric == Metric::PeakChroma
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new(
            Metric::default(),
            FilenameMode::default(),
            ColumnOrder::default(),
            ValueFilter::default(),
            1,
        )
    }
}
