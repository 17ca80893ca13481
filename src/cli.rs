use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "chromascan")]
#[command(about = "Report the share of colored pixels in images, using Lab chroma")]
#[command(version)]
pub struct Cli {
    /// Image files to scan
    pub files: Vec<PathBuf>,

    /// Chroma threshold; pixels below it count as gray
    #[arg(short, long)]
    pub chroma: Option<f32>,

    /// Sepia-tolerant preset (threshold 13)
    #[arg(short, long)]
    pub sepia: bool,

    /// Also report the peak chroma, and filter and sort by it
    #[arg(short, long)]
    pub max_chroma: bool,

    /// Print the value before the file name
    #[arg(short, long)]
    pub reverse_column: bool,

    /// Always print file names
    #[arg(short = 'H', long, conflicts_with = "no_filename")]
    pub with_filename: bool,

    /// Never print file names
    #[arg(long)]
    pub no_filename: bool,

    /// Print only the names of files that pass the filters
    #[arg(short = 'l', long, conflicts_with_all = ["with_filename", "no_filename"])]
    pub names_only: bool,

    /// Only report files whose value is strictly greater than this
    #[arg(long)]
    pub above: Option<f64>,

    /// Only report files whose value is strictly less than this
    #[arg(long)]
    pub below: Option<f64>,

    /// Sort records by value, highest first, after all files are done
    #[arg(long)]
    pub sort: bool,

    /// Print the lookup table for this threshold and exit
    #[arg(short = 't', long, value_name = "THRESHOLD")]
    pub lookup_table: Option<f32>,

    /// YAML file with default settings (also CHROMASCAN_CONFIG)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
