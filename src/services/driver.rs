use gray_lut::GrayRangeLut;
use std::cmp::Ordering;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::oneshot;

use super::decoder::ImageDecoder;
use super::file_task::process_file;
use crate::models::{Outcome, ProcessingResult, ScanOptions};

/// Counts for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Files decoded and scanned, including filtered ones
    pub processed: usize,
    pub failed: usize,
    /// Scanned but not printed because of the value filter
    pub filtered: usize,
}

impl RunSummary {
    fn record(&mut self, result: &ProcessingResult) {
        match result.outcome {
            Outcome::Line(_) => self.processed += 1,
            Outcome::Filtered => {
                self.processed += 1;
                self.filtered += 1;
            }
            Outcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Scans many files concurrently and emits their records in input order.
///
/// Every file gets its own blocking task. The lookup table and decoder
/// are shared read-only through `Arc`; each task hands its result back
/// over a oneshot channel.
pub struct ScanDriver {
    lut: Arc<GrayRangeLut>,
    decoder: Arc<dyn ImageDecoder>,
    options: ScanOptions,
    sort: bool,
}

impl ScanDriver {
    pub fn new(lut: Arc<GrayRangeLut>, decoder: Arc<dyn ImageDecoder>, options: ScanOptions) -> Self {
        Self {
            lut,
            decoder,
            options,
            sort: false,
        }
    }

    /// Wait for every file, then emit records by value, highest first.
    pub fn sorted(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Process `files`, writing records to `out` and failures to `err`.
    ///
    /// In input-order mode a record is written as soon as it and every
    /// earlier record are done. A slow file holds back the output after
    /// it, never the work on other files.
    pub async fn run<W, E>(
        &self,
        files: &[PathBuf],
        out: &mut W,
        err: &mut E,
    ) -> io::Result<RunSummary>
    where
        W: Write,
        E: Write,
    {
        let mut receivers = Vec::with_capacity(files.len());
        let mut handles = Vec::with_capacity(files.len());

        for path in files {
            let (tx, rx) = oneshot::channel();
            let path = path.clone();
            let lut = self.lut.clone();
            let decoder = self.decoder.clone();
            let options = self.options;

            handles.push(tokio::task::spawn_blocking(move || {
                let result = process_file(&path, &options, &lut, decoder.as_ref());
                // The receiver only goes away if the run was abandoned
                let _ = tx.send(result);
            }));
            receivers.push(rx);
        }
        tracing::debug!(tasks = files.len(), "Spawned scan tasks");

        let mut summary = RunSummary::default();

        if self.sort {
            let mut results = Vec::with_capacity(files.len());
            for (path, rx) in files.iter().zip(receivers) {
                results.push(Self::receive(path, rx).await);
            }
            sort_by_value_descending(&mut results);
            for result in &results {
                summary.record(result);
                emit(result, out, err)?;
            }
        } else {
            for (path, rx) in files.iter().zip(receivers) {
                let result = Self::receive(path, rx).await;
                summary.record(&result);
                emit(&result, out, err)?;
            }
        }

        for handle in handles {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "Scan task did not finish cleanly");
            }
        }

        tracing::info!(
            processed = summary.processed,
            failed = summary.failed,
            filtered = summary.filtered,
            "Scan finished"
        );
        Ok(summary)
    }

    async fn receive(path: &Path, rx: oneshot::Receiver<ProcessingResult>) -> ProcessingResult {
        match rx.await {
            Ok(result) => result,
            // Sender dropped without a result: the task panicked
            Err(_) => ProcessingResult::failed(
                path.to_path_buf(),
                format!("failed to process {}: worker panicked", path.display()),
            ),
        }
    }
}

/// Stable sort, highest value first. Records without a value keep their
/// relative order after all valued ones.
pub fn sort_by_value_descending(results: &mut [ProcessingResult]) {
    results.sort_by(|a, b| match (a.value, b.value) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

fn emit<W: Write, E: Write>(result: &ProcessingResult, out: &mut W, err: &mut E) -> io::Result<()> {
    match &result.outcome {
        Outcome::Line(text) => {
            writeln!(out, "{text}")?;
            out.flush()
        }
        Outcome::Failed(message) => {
            writeln!(err, "{message}")?;
            err.flush()
        }
        Outcome::Filtered => Ok(()),
    }
}
