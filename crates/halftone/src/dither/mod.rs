//! Dithering algorithms: luminance field in, binary bitmap out.
//!
//! Every algorithm shares one quantization rule: a pixel whose adjusted
//! luminance exceeds the threshold stays blank (255), everything else
//! becomes ink (0). The algorithms differ only in how "adjusted" is
//! computed:
//!
//! - **Threshold**: the raw luminance, unmodified
//! - **Random**: raw luminance plus uniform noise in -0.25..0.25
//! - **Bayer 2/4/8**: raw luminance biased by a tiled threshold matrix
//! - **Floyd-Steinberg / Atkinson / Jarvis**: sequential quantization with
//!   the error diffused forward to unprocessed neighbors
//!
//! Dispatch happens once per call in [`dither_field`]; each family then
//! runs its own loop over the field with no per-pixel branching on the
//! algorithm.

mod algorithm;
mod bayer;
mod kernel;

pub use algorithm::{DitherAlgorithm, ALL_ALGORITHMS};
pub use bayer::{BayerMatrix, BAYER_2, BAYER_4, BAYER_8};
pub use kernel::{Kernel, ATKINSON, FLOYD_STEINBERG, JARVIS};

use crate::bitmap::{Bitmap, BLANK, INK};

use rand::Rng;

/// Quantize one adjusted luminance value against the threshold.
#[inline]
fn quantize(adjusted: f32, threshold: f32) -> u8 {
    if adjusted > threshold {
        BLANK
    } else {
        INK
    }
}

/// Dither a luminance field with the selected algorithm.
///
/// The field holds one value per pixel in row-major order; `threshold` is
/// the luminance cutoff in 0.0..=1.0. Values above the cutoff stay blank,
/// values at or below it become ink.
///
/// # Panics (debug only)
///
/// Debug-asserts that `field.len() == width * height`.
pub fn dither_field(
    field: &[f32],
    width: usize,
    height: usize,
    algorithm: DitherAlgorithm,
    threshold: f32,
) -> Bitmap {
    debug_assert_eq!(
        field.len(),
        width * height,
        "field length must match width * height"
    );

    let data = match algorithm {
        DitherAlgorithm::Threshold => threshold_dither(field, threshold),
        DitherAlgorithm::Random => random_dither(field, threshold),
        DitherAlgorithm::Bayer2 => ordered_dither(field, width, height, &BAYER_2, threshold),
        DitherAlgorithm::Bayer4 => ordered_dither(field, width, height, &BAYER_4, threshold),
        DitherAlgorithm::Bayer8 => ordered_dither(field, width, height, &BAYER_8, threshold),
        DitherAlgorithm::FloydSteinberg => {
            diffusion_dither(field, width, height, &FLOYD_STEINBERG, threshold)
        }
        DitherAlgorithm::Atkinson => diffusion_dither(field, width, height, &ATKINSON, threshold),
        DitherAlgorithm::Jarvis => diffusion_dither(field, width, height, &JARVIS, threshold),
    };

    Bitmap::new(data, width, height)
}

/// Plain thresholding. Pure function of the field and cutoff.
fn threshold_dither(field: &[f32], threshold: f32) -> Vec<u8> {
    field.iter().map(|&v| quantize(v, threshold)).collect()
}

/// Thresholding with independent uniform noise per pixel.
fn random_dither(field: &[f32], threshold: f32) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    field
        .iter()
        .map(|&v| quantize(v + rng.gen_range(-0.25..0.25), threshold))
        .collect()
}

/// Ordered dithering against a tiled Bayer matrix.
///
/// The matrix bias is scaled by `1 - threshold` so the pattern keeps its
/// full swing when the cutoff sits low and collapses toward plain
/// thresholding as the cutoff approaches 1.
fn ordered_dither(
    field: &[f32],
    width: usize,
    height: usize,
    matrix: &BayerMatrix,
    threshold: f32,
) -> Vec<u8> {
    let mut data = Vec::with_capacity(field.len());
    for y in 0..height {
        for x in 0..width {
            let adjusted = field[y * width + x] + matrix.bias(x, y) * (1.0 - threshold);
            data.push(quantize(adjusted, threshold));
        }
    }
    data
}

/// Error diffusion over a request-local scratch copy of the field.
///
/// Scans row-major. Each pixel is quantized to a bit (1 above threshold),
/// the output sentinel is `bit * 255`, and the remaining error
/// `value - bit` is spread to forward neighbors per the kernel. Neighbors
/// outside the image are clipped; their share of the error is dropped.
fn diffusion_dither(
    field: &[f32],
    width: usize,
    height: usize,
    kernel: &Kernel,
    threshold: f32,
) -> Vec<u8> {
    let mut scratch = field.to_vec();
    let mut data = vec![0u8; width * height];
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let value = scratch[idx];
            let bit: u8 = if value > threshold { 1 } else { 0 };
            data[idx] = bit * 255;
            let error = value - bit as f32;

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i32 + dx;
                if nx >= 0 && (nx as usize) < width {
                    let ny = y + dy as usize;
                    if ny < height {
                        scratch[ny * width + nx as usize] += error * weight as f32 / divisor;
                    }
                }
            }
        }
    }

    data
}
