use std::path::{Path, PathBuf};

use gray_lut::ThresholdError;
use thiserror::Error;

/// Failure to turn one input file into an RGB8 pixel buffer.
///
/// Always local to that file: the driver reports it as an error record and
/// the remaining files are unaffected.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("cannot open file: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    Decode { path: PathBuf, message: String },

    #[error("decoded buffer has {actual} bytes, expected {expected}")]
    Layout {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

impl DecodeError {
    /// The file the error refers to
    pub fn path(&self) -> &Path {
        match self {
            DecodeError::Open { path, .. }
            | DecodeError::Decode { path, .. }
            | DecodeError::Layout { path, .. } => path.as_path(),
        }
    }
}

/// Invalid configuration. Fatal at startup; nothing is processed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid chroma threshold: {0}")]
    Threshold(#[from] ThresholdError),

    #[error("no input files given")]
    NoInput,

    #[error("filter bound must be a finite number, got {0}")]
    InvalidBound(f64),

    #[error("empty value range: above ({above}) must be less than below ({below})")]
    EmptyRange { above: f64, below: f64 },

    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
