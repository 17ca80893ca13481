use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// sRGB to XYZ matrix (D65), rows X, Y, Z
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// D65 reference white
const WHITE: [f64; 3] = [0.95047, 1.0, 1.08883];

/// Number of samples in the f(t) table and the upper end of its domain
const LAB_F_SIZE: usize = 4096;
const LAB_F_DOMAIN: f64 = 1.5;

/// IEC 61966-2-1 exact formula: sRGB to linear
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// CIE Lab companding function
fn lab_f_exact(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn write_table(file: &mut File, name: &str, doc: &str, values: &[f64]) {
    writeln!(file, "/// {doc}").unwrap();
    writeln!(file, "pub static {name}: [f32; {}] = [", values.len()).unwrap();
    for (i, v) in values.iter().enumerate() {
        if i > 0 && i % 8 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {:.9},", *v as f32).unwrap();
    }
    writeln!(file, "\n];").unwrap();
    writeln!(file).unwrap();
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("chroma_tables.rs");
    let mut file = File::create(&dest_path).unwrap();

    let linear: Vec<f64> = (0..256)
        .map(|i| srgb_to_linear_exact(i as f64 / 255.0))
        .collect();

    write_table(
        &mut file,
        "SRGB8_TO_LINEAR",
        "Lookup table for 8-bit sRGB to linear conversion",
        &linear,
    );

    // Per-channel contributions to white-normalized X, Y, Z.
    // X/Xn = R_X[r] + G_X[g] + B_X[b], and likewise for Y and Z.
    let channels = ["R", "G", "B"];
    let axes = ["X", "Y", "Z"];
    for (c, channel) in channels.iter().enumerate() {
        for (a, axis) in axes.iter().enumerate() {
            let coeff = SRGB_TO_XYZ[a][c] / WHITE[a];
            let values: Vec<f64> = linear.iter().map(|l| l * coeff).collect();
            write_table(
                &mut file,
                &format!("{channel}_{axis}"),
                &format!("Contribution of the {channel} channel to {axis}/{axis}n"),
                &values,
            );
        }
    }

    writeln!(file, "/// Number of samples in [`LAB_F`]").unwrap();
    writeln!(file, "pub const LAB_F_SIZE: usize = {LAB_F_SIZE};").unwrap();
    writeln!(file).unwrap();

    let lab_f: Vec<f64> = (0..LAB_F_SIZE)
        .map(|i| lab_f_exact(i as f64 * LAB_F_DOMAIN / (LAB_F_SIZE - 1) as f64))
        .collect();
    write_table(
        &mut file,
        "LAB_F",
        "Lab f(t) sampled uniformly over 0.0..=1.5",
        &lab_f,
    );

    println!("cargo::rerun-if-changed=build.rs");
}
