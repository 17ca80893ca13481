//! Top-level command flow, shared by the binary and the tests

use gray_lut::{ChromaThreshold, GrayRangeLut};
use std::io::Write;
use std::sync::Arc;

use crate::cli::Cli;
use crate::models::ScanConfig;
use crate::services::{FileDecoder, ScanDriver};

/// Exit status for usage and configuration errors
pub const EXIT_USAGE: i32 = 2;

/// Resolve the configuration and run the requested command.
///
/// Returns the process exit status. Configuration errors are reported once
/// on `err` and yield [`EXIT_USAGE`]; files that fail to decode are
/// reported per file and still yield 0.
pub async fn run<W, E>(cli: Cli, out: &mut W, err: &mut E) -> anyhow::Result<i32>
where
    W: Write,
    E: Write,
{
    let config = match ScanConfig::resolve(cli) {
        Ok(config) => config,
        Err(e) => {
            writeln!(err, "chromascan: {e}")?;
            return Ok(EXIT_USAGE);
        }
    };

    if let Some(threshold) = config.dump_lut {
        run_dump_command(threshold, out).await?;
        return Ok(0);
    }

    run_scan_command(config, out, err).await?;
    Ok(0)
}

/// Print the lookup table for one threshold, without scanning any file
async fn run_dump_command<W: Write>(threshold: ChromaThreshold, out: &mut W) -> anyhow::Result<()> {
    let lut = build_lut(threshold).await?;
    lut.dump(out)?;
    out.flush()?;
    Ok(())
}

async fn run_scan_command<W, E>(config: ScanConfig, out: &mut W, err: &mut E) -> anyhow::Result<()>
where
    W: Write,
    E: Write,
{
    tracing::info!(
        threshold = config.threshold.value(),
        sepia = config.sepia,
        files = config.files.len(),
        filter = config.filter.is_active(),
        "Starting scan"
    );

    let lut = build_lut(config.threshold).await?;
    let driver = ScanDriver::new(lut, Arc::new(FileDecoder::new()), config.scan_options())
        .sorted(config.sort);

    let summary = driver.run(&config.files, out, err).await?;

    if summary.failed > 0 {
        tracing::warn!(failed = summary.failed, "Some files could not be decoded");
    }
    Ok(())
}

/// A table build evaluates about 16M colors, so it runs off the async workers
async fn build_lut(threshold: ChromaThreshold) -> anyhow::Result<Arc<GrayRangeLut>> {
    let lut = tokio::task::spawn_blocking(move || GrayRangeLut::for_threshold(threshold))
        .await
        .map_err(|e| anyhow::anyhow!("Lookup table build failed: {e}"))?;
    tracing::debug!(?lut, "Lookup table ready");
    Ok(lut)
}
