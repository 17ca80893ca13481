//! Process-wide cache for the named threshold presets
//!
//! The strict (5.0) and sepia (13.0) tables are requested far more often
//! than any other threshold. Each is scanned at most once per process and
//! then handed out as a shared `Arc`.

use std::sync::{Arc, OnceLock};

use super::table::GrayRangeLut;
use super::threshold::ChromaThreshold;

static STRICT_LUT: OnceLock<Arc<GrayRangeLut>> = OnceLock::new();
static SEPIA_LUT: OnceLock<Arc<GrayRangeLut>> = OnceLock::new();

fn preset_slot(threshold: ChromaThreshold) -> Option<&'static OnceLock<Arc<GrayRangeLut>>> {
    if threshold == ChromaThreshold::STRICT {
        Some(&STRICT_LUT)
    } else if threshold == ChromaThreshold::SEPIA {
        Some(&SEPIA_LUT)
    } else {
        None
    }
}

impl GrayRangeLut {
    /// Shared table for `threshold`.
    ///
    /// Named presets come from the process-wide cache; any other threshold
    /// triggers a full scan.
    pub fn for_threshold(threshold: ChromaThreshold) -> Arc<GrayRangeLut> {
        match preset_slot(threshold) {
            Some(slot) => slot
                .get_or_init(|| Arc::new(GrayRangeLut::build(threshold)))
                .clone(),
            None => Arc::new(GrayRangeLut::build(threshold)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_shared() {
        let a = GrayRangeLut::for_threshold(ChromaThreshold::STRICT);
        let b = GrayRangeLut::for_threshold(ChromaThreshold::STRICT);
        assert!(Arc::ptr_eq(&a, &b), "strict preset was rebuilt");

        let sepia = GrayRangeLut::for_threshold(ChromaThreshold::SEPIA);
        assert!(!Arc::ptr_eq(&a, &sepia));
        assert_eq!(sepia.threshold(), ChromaThreshold::SEPIA);
    }

    #[test]
    fn test_preset_matches_fresh_build() {
        let cached = GrayRangeLut::for_threshold(ChromaThreshold::SEPIA);
        let fresh = GrayRangeLut::build(ChromaThreshold::SEPIA);
        assert!(*cached == fresh, "preset differs from a fresh scan");
    }

    #[test]
    fn test_other_thresholds_build_fresh() {
        let threshold = ChromaThreshold::new(7.0).unwrap();
        assert!(preset_slot(threshold).is_none());
        let a = GrayRangeLut::for_threshold(threshold);
        let b = GrayRangeLut::for_threshold(threshold);
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(*a == *b);
    }
}
