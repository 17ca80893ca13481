//! Table-driven chroma for hot loops
//!
//! The sRGB to XYZ step is linear once each channel has been decoded on its
//! own, so `X/Xn = R_X[r] + G_X[g] + B_X[b]` (and likewise Y, Z) holds exactly.
//! Only the Lab curve is approximated: it is sampled into a 4096-entry table
//! over 0.0..=1.5 and looked up by nearest index, clamped at both ends.
//! [`chroma_squared`] therefore performs no transcendental calls at all.

use crate::color::tables::{
    B_X, B_Y, B_Z, G_X, G_Y, G_Z, LAB_F, LAB_F_SCALE, LAB_F_SIZE, R_X, R_Y, R_Z,
};
use crate::color::{lab_f, Lab, Srgb8};

/// White-normalized XYZ of a sample, from the per-channel tables.
#[inline(always)]
fn normalized_xyz(px: Srgb8) -> (f32, f32, f32) {
    let (r, g, b) = (px.r as usize, px.g as usize, px.b as usize);
    (
        R_X[r] + G_X[g] + B_X[b],
        R_Y[r] + G_Y[g] + B_Y[b],
        R_Z[r] + G_Z[g] + B_Z[b],
    )
}

/// Sampled Lab curve. Negative and out-of-domain inputs clamp to the ends.
#[inline(always)]
fn lab_f_sampled(t: f32) -> f32 {
    let index = (t * LAB_F_SCALE + 0.5).clamp(0.0, (LAB_F_SIZE - 1) as f32) as usize;
    LAB_F[index]
}

/// Approximate squared chroma using only table lookups.
///
/// This is the metric the gray-range tables are built from.
#[inline]
pub fn chroma_squared(px: Srgb8) -> f32 {
    let (x, y, z) = normalized_xyz(px);
    Lab::from_companded(lab_f_sampled(x), lab_f_sampled(y), lab_f_sampled(z)).chroma_squared()
}

/// Approximate chroma (one square root over [`chroma_squared`]).
#[inline]
pub fn chroma(px: Srgb8) -> f32 {
    chroma_squared(px).sqrt()
}

/// Squared chroma from the per-channel tables with the Lab curve evaluated
/// exactly (three cube roots, no `powf`).
///
/// Accurate to f32 precision; used for peak-chroma reporting where the
/// table error of [`chroma_squared`] would show up in the output.
#[inline]
pub fn chroma_squared_cbrt(px: Srgb8) -> f32 {
    let (x, y, z) = normalized_xyz(px);
    Lab::from_companded(lab_f(x), lab_f(y), lab_f(z)).chroma_squared()
}
