use std::path::PathBuf;

/// What a finished task produced for its file.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A formatted record, without trailing newline
    Line(String),
    /// Scanned, but the value fell outside the filter
    Filtered,
    /// Could not be decoded; the message names the file
    Failed(String),
}

/// Result slot of one input file. Written once by its task.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingResult {
    pub path: PathBuf,
    pub outcome: Outcome,
    /// Ratio or peak chroma, used for sorting. `None` on failure.
    pub value: Option<f64>,
}

impl ProcessingResult {
    pub fn line(path: PathBuf, text: String, value: f64) -> Self {
        Self {
            path,
            outcome: Outcome::Line(text),
            value: Some(value),
        }
    }

    pub fn filtered(path: PathBuf, value: f64) -> Self {
        Self {
            path,
            outcome: Outcome::Filtered,
            value: Some(value),
        }
    }

    pub fn failed(path: PathBuf, message: String) -> Self {
        Self {
            path,
            outcome: Outcome::Failed(message),
            value: None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }
}
