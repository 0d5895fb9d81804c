//! Binary bitmap output type.
//!
//! [`Bitmap`] wraps the two-level pixel data produced by dithering together
//! with its dimensions. Pixels carry one of exactly two sentinel values:
//! 0 for ink (black) and 255 for no ink (white).

/// Pixel value for ink (black).
pub const INK: u8 = 0;

/// Pixel value for no ink (white).
pub const BLANK: u8 = 255;

/// The canonical output of the dithering pipeline.
///
/// Stores one `u8` per pixel in row-major order (index = `y * width + x`),
/// each either [`INK`] or [`BLANK`]. The footprint generator turns every ink
/// pixel into one filled polygon, so [`ink_count()`](Bitmap::ink_count) is
/// also the number of geometry records a generated document will contain.
///
/// # Example
///
/// ```
/// use halftone::{Bitmap, INK, BLANK};
///
/// let bitmap = Bitmap::new(vec![INK, BLANK, BLANK, INK], 2, 2);
/// assert_eq!(bitmap.width(), 2);
/// assert_eq!(bitmap.height(), 2);
/// assert_eq!(bitmap.ink_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Pixel values, one per pixel, row-major order.
    data: Vec<u8>,
    /// Image width in pixels.
    width: usize,
    /// Image height in pixels.
    height: usize,
}

impl Bitmap {
    /// Create a new `Bitmap` from dithered pixel values.
    ///
    /// # Arguments
    ///
    /// * `data` - pixel values, one `u8` per pixel, row-major order
    /// * `width` - image width in pixels
    /// * `height` - image height in pixels
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `data.len() == width * height`.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            width * height,
            "data length ({}) must match width * height ({}x{}={})",
            data.len(),
            width,
            height,
            width * height,
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Returns the pixel values as a slice.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixel at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// Count the ink (value 0) pixels.
    pub fn ink_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == INK).count()
    }

    /// Consume the bitmap and return the raw pixel values.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}
