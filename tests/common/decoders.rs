//! In-memory decoders for driver tests.

use chromascan::error::DecodeError;
use chromascan::services::{Codec, ImageDecoder, PixelBuffer};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

/// One fixture entry: pixels or a failure, optionally after a delay.
#[derive(Clone)]
struct Entry {
    pixels: Option<Vec<u8>>,
    delay: Duration,
}

/// Serves fixed pixel data per path and records completion order.
#[derive(Default)]
pub struct FixtureDecoder {
    entries: HashMap<PathBuf, Entry>,
    completed: Mutex<Vec<PathBuf>>,
}

impl FixtureDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-row image of the given packed RGB pixels
    pub fn with_pixels(mut self, path: &str, pixels: &[u8]) -> Self {
        self.entries.insert(
            PathBuf::from(path),
            Entry {
                pixels: Some(pixels.to_vec()),
                delay: Duration::ZERO,
            },
        );
        self
    }

    /// `colored` red pixels followed by gray ones, `total` in all
    pub fn with_ratio(self, path: &str, colored: usize, total: usize) -> Self {
        let mut pixels = Vec::with_capacity(total * 3);
        for i in 0..total {
            if i < colored {
                pixels.extend_from_slice(&[200, 10, 10]);
            } else {
                pixels.extend_from_slice(&[128, 128, 128]);
            }
        }
        self.with_pixels(path, &pixels)
    }

    pub fn with_failure(mut self, path: &str) -> Self {
        self.entries.insert(
            PathBuf::from(path),
            Entry {
                pixels: None,
                delay: Duration::ZERO,
            },
        );
        self
    }

    pub fn with_delay(mut self, path: &str, delay: Duration) -> Self {
        if let Some(entry) = self.entries.get_mut(Path::new(path)) {
            entry.delay = delay;
        }
        self
    }

    /// Paths in the order their decode returned
    pub fn completion_order(&self) -> Vec<PathBuf> {
        self.completed.lock().unwrap().clone()
    }
}

impl ImageDecoder for FixtureDecoder {
    fn decode(&self, path: &Path) -> Result<PixelBuffer, DecodeError> {
        let entry = self.entries.get(path).cloned();
        if let Some(entry) = &entry {
            std::thread::sleep(entry.delay);
        }
        self.completed.lock().unwrap().push(path.to_path_buf());

        match entry.and_then(|e| e.pixels) {
            Some(pixels) => {
                let width = (pixels.len() / 3) as u32;
                PixelBuffer::new(path, width, 1, pixels, Codec::Generic)
            }
            None => Err(DecodeError::Decode {
                path: path.to_path_buf(),
                message: "corrupt data".to_string(),
            }),
        }
    }
}

/// Panics on one path, serves the reference image otherwise.
pub struct PanickingDecoder {
    pub panic_on: PathBuf,
}

impl ImageDecoder for PanickingDecoder {
    fn decode(&self, path: &Path) -> Result<PixelBuffer, DecodeError> {
        if path == self.panic_on {
            panic!("decoder bug on {}", path.display());
        }
        PixelBuffer::new(
            path,
            2,
            2,
            super::fixtures::REFERENCE_PIXELS.to_vec(),
            Codec::Generic,
        )
    }
}
