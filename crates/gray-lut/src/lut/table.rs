//! The 64x64 gray-range table
//!
//! Each cell covers a 4x4 block of (R, G) values and stores the inclusive
//! range of B values for which at least one (r, g, b) in the block has fast
//! chroma below the threshold. The range is the union over the block, so a
//! lookup can report gray for a pixel whose own chroma is slightly above the
//! threshold near bucket edges. Classification error is bounded by the
//! bucket width, not eliminated.

use std::io::{self, Write};
use std::ops::RangeInclusive;

use super::threshold::ChromaThreshold;
use crate::color::Srgb8;
use crate::fast;

/// Number of buckets per axis
pub const BLOCKS: usize = 64;

/// Channel values per bucket
pub const BLOCK_SIZE: usize = 4;

/// Packed value of a cell with no gray B value: minB = 255, maxB = 0.
pub const EMPTY_CELL: u16 = 0xFF00;

#[inline]
const fn pack(min_b: u8, max_b: u8) -> u16 {
    ((min_b as u16) << 8) | max_b as u16
}

#[inline]
const fn unpack(cell: u16) -> (u8, u8) {
    ((cell >> 8) as u8, (cell & 0xFF) as u8)
}

/// Immutable gray-range lookup table for one chroma threshold.
///
/// Built once, then shared read-only (typically behind an `Arc`) by every
/// classification call.
#[derive(Clone, PartialEq)]
pub struct GrayRangeLut {
    threshold: ChromaThreshold,
    cells: Box<[[u16; BLOCKS]; BLOCKS]>,
}

impl GrayRangeLut {
    /// Scan every 4x4x256 sub-cube and record the gray B range per cell.
    ///
    /// Cost is 64 x 64 x 16 x 256 fast chroma evaluations, independent of
    /// any image. The result is bit-exact for a given threshold.
    pub fn build(threshold: ChromaThreshold) -> Self {
        let limit = threshold.squared();
        let mut cells = Box::new([[EMPTY_CELL; BLOCKS]; BLOCKS]);

        for (rb, row) in cells.iter_mut().enumerate() {
            for (gb, cell) in row.iter_mut().enumerate() {
                let r0 = rb * BLOCK_SIZE;
                let g0 = gb * BLOCK_SIZE;
                let mut min_b = u8::MAX;
                let mut max_b = u8::MIN;
                let mut any = false;

                for r in r0..r0 + BLOCK_SIZE {
                    for g in g0..g0 + BLOCK_SIZE {
                        for b in 0..=255u8 {
                            let px = Srgb8::new(r as u8, g as u8, b);
                            if fast::chroma_squared(px) < limit {
                                any = true;
                                min_b = min_b.min(b);
                                max_b = max_b.max(b);
                            }
                        }
                    }
                }

                if any {
                    *cell = pack(min_b, max_b);
                }
            }
        }

        Self { threshold, cells }
    }

    /// Threshold this table was built for.
    pub fn threshold(&self) -> ChromaThreshold {
        self.threshold
    }

    /// Raw packed cell `(minB << 8) | maxB` for bucket indices.
    #[inline]
    pub fn cell(&self, rb: usize, gb: usize) -> u16 {
        self.cells[rb][gb]
    }

    /// Gray B range for the bucket containing (r, g), or `None` if empty.
    pub fn range(&self, r: u8, g: u8) -> Option<RangeInclusive<u8>> {
        let (min_b, max_b) = unpack(self.cells[(r >> 2) as usize][(g >> 2) as usize]);
        (min_b <= max_b).then_some(min_b..=max_b)
    }

    /// Constant-time near-gray test.
    ///
    /// # Example
    /// ```
    /// use gray_lut::{ChromaThreshold, GrayRangeLut, Srgb8};
    /// let lut = GrayRangeLut::for_threshold(ChromaThreshold::STRICT);
    /// assert!(lut.is_gray(Srgb8::new(128, 128, 128)));
    /// assert!(!lut.is_gray(Srgb8::new(200, 10, 10)));
    /// ```
    #[inline(always)]
    pub fn is_gray(&self, px: Srgb8) -> bool {
        let (min_b, max_b) = unpack(self.cells[(px.r >> 2) as usize][(px.g >> 2) as usize]);
        min_b <= px.b && px.b <= max_b
    }

    /// Number of non-empty cells.
    pub fn gray_cell_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| {
                let (min_b, max_b) = unpack(cell);
                min_b <= max_b
            })
            .count()
    }

    /// Write the table as 64 lines of 64 space-separated 4-digit hex cells.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in self.cells.iter() {
            for (gb, cell) in row.iter().enumerate() {
                let sep = if gb == BLOCKS - 1 { "\n" } else { " " };
                write!(out, "{cell:04x}{sep}")?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for GrayRangeLut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrayRangeLut")
            .field("threshold", &self.threshold().value())
            .field("gray_cells", &self.gray_cell_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        assert_eq!(pack(10, 200), 0x0AC8);
        assert_eq!(unpack(0x0AC8), (10, 200));
        assert_eq!(unpack(EMPTY_CELL), (255, 0));
    }

    #[test]
    fn test_strict_table_shape() {
        let lut = GrayRangeLut::for_threshold(ChromaThreshold::STRICT);

        // The neutral diagonal is always gray
        for v in (0..=255u8).step_by(4) {
            let range = lut.range(v, v).expect("diagonal cell must not be empty");
            assert!(
                range.contains(&v),
                "gray ({v}, {v}, {v}) outside {range:?}"
            );
        }

        // Far off the diagonal nothing is gray
        assert_eq!(lut.cell(63, 0), EMPTY_CELL);
        assert_eq!(lut.cell(0, 63), EMPTY_CELL);
        assert!(lut.range(255, 0).is_none());

        // Every stored range is well formed
        for rb in 0..BLOCKS {
            for gb in 0..BLOCKS {
                let (min_b, max_b) = unpack(lut.cell(rb, gb));
                assert!(min_b <= max_b || (min_b, max_b) == (255, 0));
            }
        }
    }

    #[test]
    fn test_dump_format() {
        let lut = GrayRangeLut::for_threshold(ChromaThreshold::STRICT);
        let mut out = Vec::new();
        lut.dump(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), BLOCKS);
        for line in &lines {
            let cells: Vec<&str> = line.split(' ').collect();
            assert_eq!(cells.len(), BLOCKS);
            assert!(cells.iter().all(|c| c.len() == 4));
        }
        assert!(text.ends_with('\n'));
        assert_eq!(lines[0].split(' ').nth(63), Some("ff00"));
    }
}
