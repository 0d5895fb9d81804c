//! Bayer threshold matrices for ordered dithering.
//!
//! Each matrix holds the values 0..size²-1 exactly once, arranged so that
//! successive thresholds land as far apart as possible. Tiling the matrix
//! over the image and comparing each pixel against its cell produces the
//! characteristic crosshatch pattern without any per-pixel state.

/// An ordered dithering threshold matrix.
///
/// `cells[y][x]` holds the rank of that cell in 0..size²-1. During dithering
/// the matrix is tiled over the image; a pixel at (x, y) is biased by the
/// cell at `(x mod size, y mod size)`, normalized to a signed offset around
/// zero via [`bias()`](BayerMatrix::bias).
#[derive(Debug, Clone, Copy)]
pub struct BayerMatrix {
    /// Rank values, one row per entry, all rows `cells.len()` long.
    pub cells: &'static [&'static [u8]],
}

impl BayerMatrix {
    /// Matrix edge length (2, 4 or 8 for the built-in matrices).
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Signed threshold bias for the pixel at (x, y), in -0.5..0.5.
    ///
    /// The cell rank is normalized by size² and recentered around zero:
    /// `cells[y % size][x % size] / size² - 0.5`. The lowest-ranked cell
    /// biases by exactly -0.5, the highest by (size²-1)/size² - 0.5.
    #[inline]
    pub fn bias(&self, x: usize, y: usize) -> f32 {
        let size = self.size();
        let rank = self.cells[y % size][x % size];
        rank as f32 / (size * size) as f32 - 0.5
    }
}

/// 2x2 Bayer matrix.
pub const BAYER_2: BayerMatrix = BayerMatrix {
    cells: &[&[0, 2], &[3, 1]],
};

/// 4x4 Bayer matrix, the 2x2 pattern recursively subdivided.
pub const BAYER_4: BayerMatrix = BayerMatrix {
    cells: &[
        &[0, 8, 2, 10],
        &[12, 4, 14, 6],
        &[3, 11, 1, 9],
        &[15, 7, 13, 5],
    ],
};

/// 8x8 Bayer matrix, the finest built-in pattern (64 distinct thresholds).
pub const BAYER_8: BayerMatrix = BayerMatrix {
    cells: &[
        &[0, 32, 8, 40, 2, 34, 10, 42],
        &[48, 16, 56, 24, 50, 18, 58, 26],
        &[12, 44, 4, 36, 14, 46, 6, 38],
        &[60, 28, 52, 20, 62, 30, 54, 22],
        &[3, 35, 11, 43, 1, 33, 9, 41],
        &[51, 19, 59, 27, 49, 17, 57, 25],
        &[15, 47, 7, 39, 13, 45, 5, 37],
        &[63, 31, 55, 23, 61, 29, 53, 21],
    ],
};
