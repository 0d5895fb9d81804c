//! Ditherer builder -- the primary ergonomic entry point for the crate.
//!
//! [`Ditherer`] chains the full pipeline: grayscale reduction, optional
//! inversion, and the selected dithering algorithm.

use tracing::debug;

use crate::bitmap::Bitmap;
use crate::dither::{dither_field, DitherAlgorithm};
use crate::gray;

/// High-level pixels-to-bitmap builder.
///
/// `Ditherer` is the recommended entry point for the crate. It wraps the
/// complete pipeline (grayscale reduction, inversion, dithering) behind a
/// fluent builder.
///
/// # Design
///
/// - Constructor requires the algorithm (the one choice without a
///   universal default)
/// - Configuration methods consume and return `self`
/// - [`dither()`](Self::dither) takes `&self`, so one builder is reusable
///   across multiple images
///
/// # Example
///
/// ```
/// use halftone::{DitherAlgorithm, Ditherer};
///
/// let ditherer = Ditherer::new(DitherAlgorithm::Atkinson)
///     .threshold(0.4)
///     .gamma_correct(true);
///
/// // 2x2 all-black RGBA image
/// let pixels = [0u8, 0, 0, 255].repeat(4);
/// let bitmap = ditherer.dither(&pixels, 2, 2);
///
/// assert_eq!(bitmap.ink_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Ditherer {
    algorithm: DitherAlgorithm,
    threshold: f32,
    gamma_correct: bool,
    invert: bool,
}

impl Ditherer {
    /// Create a ditherer for the given algorithm.
    ///
    /// Defaults: threshold 0.5, no gamma correction, no inversion.
    pub fn new(algorithm: DitherAlgorithm) -> Self {
        Self {
            algorithm,
            threshold: 0.5,
            gamma_correct: false,
            invert: false,
        }
    }

    /// Set the luminance cutoff (0.0..=1.0).
    #[inline]
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Linearize sRGB channels before the luma weighting.
    #[inline]
    pub fn gamma_correct(mut self, enabled: bool) -> Self {
        self.gamma_correct = enabled;
        self
    }

    /// Invert the luminance field before dithering (ink where light).
    #[inline]
    pub fn invert(mut self, enabled: bool) -> Self {
        self.invert = enabled;
        self
    }

    /// Run the pipeline over interleaved RGBA bytes.
    ///
    /// # Arguments
    /// * `pixels` - interleaved RGBA bytes, `4 * width * height` long
    /// * `width` - image width in pixels
    /// * `height` - image height in pixels
    pub fn dither(&self, pixels: &[u8], width: usize, height: usize) -> Bitmap {
        let mut field = gray::luminance(pixels, width, height, self.gamma_correct);
        if self.invert {
            gray::invert_in_place(&mut field);
        }

        debug!(
            algorithm = %self.algorithm,
            width,
            height,
            threshold = self.threshold,
            "dithering"
        );
        dither_field(&field, width, height, self.algorithm, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::{BLANK, INK};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let ditherer = Ditherer::new(DitherAlgorithm::Threshold);
        assert!((ditherer.threshold - 0.5).abs() < f32::EPSILON);
        assert!(!ditherer.gamma_correct);
        assert!(!ditherer.invert);
    }

    #[test]
    fn test_builder_chaining() {
        let ditherer = Ditherer::new(DitherAlgorithm::Jarvis)
            .threshold(0.3)
            .gamma_correct(true)
            .invert(true);
        assert_eq!(ditherer.algorithm, DitherAlgorithm::Jarvis);
        assert!((ditherer.threshold - 0.3).abs() < f32::EPSILON);
        assert!(ditherer.gamma_correct);
        assert!(ditherer.invert);
    }

    #[test]
    fn test_all_black_image_is_all_ink() {
        let pixels = [0u8, 0, 0, 255].repeat(4);
        let bitmap = Ditherer::new(DitherAlgorithm::Threshold).dither(&pixels, 2, 2);
        assert_eq!(bitmap.data(), &[INK, INK, INK, INK]);
        assert_eq!(bitmap.ink_count(), 4);
    }

    #[test]
    fn test_invert_flips_black_to_blank() {
        let pixels = [0u8, 0, 0, 255].repeat(4);
        let bitmap = Ditherer::new(DitherAlgorithm::Threshold)
            .invert(true)
            .dither(&pixels, 2, 2);
        assert_eq!(bitmap.data(), &[BLANK, BLANK, BLANK, BLANK]);
        assert_eq!(bitmap.ink_count(), 0);
    }

    #[test]
    fn test_gamma_changes_midtone_classification() {
        // Encoded 0.55-gray sits above a 0.5 cutoff, but its linear
        // luminance falls well below it
        let v = (0.55f32 * 255.0).round() as u8;
        let pixels = [v, v, v, 255];

        let plain = Ditherer::new(DitherAlgorithm::Threshold).dither(&pixels, 1, 1);
        assert_eq!(plain.data(), &[BLANK]);

        let linearized = Ditherer::new(DitherAlgorithm::Threshold)
            .gamma_correct(true)
            .dither(&pixels, 1, 1);
        assert_eq!(linearized.data(), &[INK]);
    }

    #[test]
    fn test_builder_is_reusable() {
        let ditherer = Ditherer::new(DitherAlgorithm::Bayer2);
        let pixels = [255u8, 255, 255, 255].repeat(9);
        let first = ditherer.dither(&pixels, 3, 3);
        let second = ditherer.dither(&pixels, 3, 3);
        assert_eq!(first, second);
    }
}
