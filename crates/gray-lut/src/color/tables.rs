//! Compile-time color tables
//!
//! Generated by build.rs: the exact 8-bit sRGB decode, the per-channel
//! contributions to white-normalized XYZ, and a sampled Lab f(t) curve.

include!(concat!(env!("OUT_DIR"), "/chroma_tables.rs"));

/// Upper end of the f(t) table domain. Normalized XYZ of in-gamut sRGB never
/// exceeds 1.0, so the headroom only matters for rounding.
pub const LAB_F_DOMAIN: f32 = 1.5;

/// Scale from a normalized XYZ component to a `LAB_F` index.
pub const LAB_F_SCALE: f32 = (LAB_F_SIZE - 1) as f32 / LAB_F_DOMAIN;
