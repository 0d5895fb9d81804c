//! Grayscale reduction
//!
//! Converts interleaved RGBA pixel data into a luminance field: one f32 per
//! pixel in the range 0.0..=1.0, row-major. This is the input every dithering
//! algorithm operates on.

/// Convert a single gamma-encoded sRGB channel value to linear light.
///
/// Applies the piecewise IEC 61966-2-1 transfer function. Input and output
/// are in the range 0.0..=1.0.
///
/// # Example
/// ```
/// use halftone::gray::srgb_to_linear;
/// assert!(srgb_to_linear(0.0).abs() < f32::EPSILON);
/// assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn srgb_to_linear(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Reduce interleaved RGBA bytes to a luminance field.
///
/// Each pixel's red, green and blue channels are normalized to 0.0..=1.0 and
/// combined into a single luminance value. The alpha channel is ignored.
///
/// With `gamma_correct` the channels are first linearized via
/// [`srgb_to_linear`] and combined with Rec. 709 weights
/// (0.2126, 0.7152, 0.0722); otherwise the gamma-encoded channels are
/// combined directly with Rec. 601 broadcast weights (0.299, 0.587, 0.114).
///
/// The returned field has `width * height` entries in row-major order,
/// index = `y * width + x`.
///
/// # Arguments
/// * `pixels` - interleaved RGBA bytes, `4 * width * height` long
/// * `width` - image width in pixels
/// * `height` - image height in pixels
/// * `gamma_correct` - linearize channels before weighting
pub fn luminance(pixels: &[u8], width: usize, height: usize, gamma_correct: bool) -> Vec<f32> {
    debug_assert_eq!(
        pixels.len(),
        width * height * 4,
        "pixel buffer length must match 4*width*height"
    );

    pixels
        .chunks_exact(4)
        .take(width * height)
        .map(|px| {
            let r = px[0] as f32 / 255.0;
            let g = px[1] as f32 / 255.0;
            let b = px[2] as f32 / 255.0;

            if gamma_correct {
                0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
            } else {
                0.299 * r + 0.587 * g + 0.114 * b
            }
        })
        .collect()
}

/// Invert a luminance field in place (v becomes 1 - v).
///
/// Applied before dithering when the caller wants ink where the image is
/// light instead of dark.
pub fn invert_in_place(field: &mut [f32]) {
    for v in field.iter_mut() {
        *v = 1.0 - *v;
    }
}
