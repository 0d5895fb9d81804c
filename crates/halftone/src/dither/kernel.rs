//! Error diffusion kernel definitions.
//!
//! Each kernel specifies how the quantization error of a pixel is
//! distributed to neighbors that have not been processed yet. Entries are
//! relative offsets with integer weight numerators over a shared divisor,
//! so the tables stay exact and the division happens once per pixel.

/// An error diffusion kernel.
///
/// Each entry is a `(dx, dy, weight)` triple: the neighbor at
/// `(x + dx, y + dy)` receives `error * weight / divisor`. Entries only
/// reach forward in scan order (`dy >= 0`, and `dx > 0` when `dy == 0`),
/// so a single scratch buffer scanned row-major never rereads a written
/// value out of order. Neighbors falling outside the image are skipped;
/// their share of the error is dropped rather than renormalized.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    pub entries: &'static [(i32, i32, u8)],

    /// Shared divisor for normalizing weights.
    pub divisor: u8,
}

/// Floyd-Steinberg kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
/// The classic error diffusion algorithm.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // below-left
        (0, 1, 5),  // below
        (1, 1, 1),  // below-right
    ],
    divisor: 16,
};

/// Atkinson kernel.
///
/// Distributes error to 6 neighbors with 75% total propagation (6/8).
/// The dropped quarter of the error lifts contrast, which suits stencil
/// output where crisp edges beat tonal accuracy.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // below-left
        (0, 1, 1),  // below
        (1, 1, 1),  // below-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
};

/// Jarvis-Judice-Ninke kernel.
///
/// Distributes error to 12 neighbors over two rows ahead with 100%
/// propagation (48/48). The widest built-in kernel; smoothest gradients.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS: Kernel = Kernel {
    entries: &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    divisor: 48,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floyd_steinberg_propagates_all_error() {
        let sum: u8 = FLOYD_STEINBERG.entries.iter().map(|(_, _, w)| w).sum();
        assert_eq!(sum, 16, "Floyd-Steinberg weights should sum to 16");
        assert_eq!(FLOYD_STEINBERG.divisor, 16);
    }

    #[test]
    fn test_atkinson_propagates_three_quarters() {
        let sum: u8 = ATKINSON.entries.iter().map(|(_, _, w)| w).sum();
        assert_eq!(sum, 6, "Atkinson should have 6 weight units");
        assert_eq!(ATKINSON.divisor, 8);
        assert!(
            (sum as f32 / ATKINSON.divisor as f32 - 0.75).abs() < f32::EPSILON,
            "Atkinson should propagate 75% of error"
        );
    }

    #[test]
    fn test_jarvis_propagates_all_error() {
        let sum: u8 = JARVIS.entries.iter().map(|(_, _, w)| w).sum();
        assert_eq!(sum, 48, "Jarvis weights should sum to 48");
        assert_eq!(JARVIS.divisor, 48);
    }

    #[test]
    fn test_kernel_entry_counts() {
        assert_eq!(FLOYD_STEINBERG.entries.len(), 4);
        assert_eq!(ATKINSON.entries.len(), 6);
        assert_eq!(JARVIS.entries.len(), 12);
    }

    #[test]
    fn test_kernels_only_reach_forward() {
        for kernel in [FLOYD_STEINBERG, ATKINSON, JARVIS] {
            for &(dx, dy, _) in kernel.entries {
                assert!(dy >= 0, "kernels may not reach up");
                assert!(
                    dy > 0 || dx > 0,
                    "same-row entries must be right of the current pixel"
                );
            }
        }
    }
}
