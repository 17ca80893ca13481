use gray_lut::ChromaThreshold;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::options::{ColumnOrder, FilenameMode, Metric, ScanOptions, ValueFilter};
use crate::cli::Cli;
use crate::error::ConfigError;

/// Environment variable naming a defaults file when `--config` is absent
pub const CONFIG_ENV: &str = "CHROMASCAN_CONFIG";

/// Defaults loaded from a YAML file. Every field is optional; command-line
/// flags take precedence.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Chroma threshold
    pub chroma: Option<f32>,

    /// Use the sepia preset
    pub sepia: Option<bool>,

    /// `ratio` or `peak-chroma`
    pub metric: Option<Metric>,

    /// `auto`, `always`, `never` or `only`
    pub filename: Option<FilenameMode>,

    /// `name-first` or `value-first`
    pub columns: Option<ColumnOrder>,

    pub above: Option<f64>,
    pub below: Option<f64>,
    pub sort: Option<bool>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}

/// Everything one run needs, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub threshold: ChromaThreshold,
    pub sepia: bool,
    pub metric: Metric,
    pub filename_mode: FilenameMode,
    pub column_order: ColumnOrder,
    pub filter: ValueFilter,
    pub sort: bool,
    /// Print the table for this threshold instead of scanning files
    pub dump_lut: Option<ChromaThreshold>,
    pub files: Vec<PathBuf>,
}

impl ScanConfig {
    /// Load the defaults file named by `--config` or `CHROMASCAN_CONFIG`,
    /// if any, and merge the command line over it.
    pub fn resolve(cli: Cli) -> Result<Self, ConfigError> {
        let path = cli
            .config
            .clone()
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

        let file = match path {
            Some(path) => ConfigFile::load(&path)?,
            None => ConfigFile::default(),
        };

        Self::merge(cli, file)
    }

    pub fn merge(cli: Cli, file: ConfigFile) -> Result<Self, ConfigError> {
        let sepia = cli.sepia || file.sepia.unwrap_or(false);
        let threshold = if sepia {
            ChromaThreshold::SEPIA
        } else {
            match cli.chroma.or(file.chroma) {
                Some(value) => ChromaThreshold::new(value)?,
                None => ChromaThreshold::default(),
            }
        };

        let metric = if cli.max_chroma {
            Metric::PeakChroma
        } else {
            file.metric.unwrap_or_default()
        };

        let filename_mode = if cli.names_only {
            FilenameMode::Only
        } else if cli.with_filename {
            FilenameMode::Always
        } else if cli.no_filename {
            FilenameMode::Never
        } else {
            file.filename.unwrap_or_default()
        };

        let column_order = if cli.reverse_column {
            ColumnOrder::ValueFirst
        } else {
            file.columns.unwrap_or_default()
        };

        let filter = ValueFilter {
            above: cli.above.or(file.above),
            below: cli.below.or(file.below),
        };
        for bound in [filter.above, filter.below].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(ConfigError::InvalidBound(bound));
            }
        }
        if let (Some(above), Some(below)) = (filter.above, filter.below) {
            if above >= below {
                return Err(ConfigError::EmptyRange { above, below });
            }
        }

        let dump_lut = cli.lookup_table.map(ChromaThreshold::new).transpose()?;
        if dump_lut.is_none() && cli.files.is_empty() {
            return Err(ConfigError::NoInput);
        }

        Ok(Self {
            threshold,
            sepia,
            metric,
            filename_mode,
            column_order,
            filter,
            sort: cli.sort || file.sort.unwrap_or(false),
            dump_lut,
            files: cli.files,
        })
    }

    /// Options for the per-file tasks of this run
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new(
            self.metric,
            self.filename_mode,
            self.column_order,
            self.filter,
            self.files.len(),
        )
    }
}
