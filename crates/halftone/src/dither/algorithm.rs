//! Dithering algorithm selection.

use tracing::warn;

/// Available dithering algorithms.
///
/// The selector is resolved once per request; each variant then runs as a
/// single tight loop over the luminance field. Selector names are the ones
/// accepted on the wire and the command line, see
/// [`from_name()`](DitherAlgorithm::from_name).
///
/// # Example
///
/// ```
/// use halftone::DitherAlgorithm;
///
/// assert_eq!(DitherAlgorithm::from_name("atkinson"), DitherAlgorithm::Atkinson);
/// assert_eq!(DitherAlgorithm::Bayer4.name(), "bayer4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherAlgorithm {
    /// Plain thresholding against the cutoff value.
    ///
    /// Stateless and deterministic; the fallback for unrecognized names.
    #[default]
    Threshold,

    /// Thresholding with uniform noise in -0.25..0.25 added per pixel.
    ///
    /// Non-deterministic, not reproducible across runs.
    Random,

    /// Ordered dithering against the 2x2 Bayer matrix.
    Bayer2,

    /// Ordered dithering against the 4x4 Bayer matrix.
    Bayer4,

    /// Ordered dithering against the 8x8 Bayer matrix.
    Bayer8,

    /// Floyd-Steinberg error diffusion (100% propagation).
    FloydSteinberg,

    /// Atkinson error diffusion (75% propagation, higher contrast).
    Atkinson,

    /// Jarvis-Judice-Ninke error diffusion (100% propagation, 12 neighbors).
    Jarvis,
}

/// Every algorithm, in selector order.
pub const ALL_ALGORITHMS: [DitherAlgorithm; 8] = [
    DitherAlgorithm::Threshold,
    DitherAlgorithm::Random,
    DitherAlgorithm::Bayer2,
    DitherAlgorithm::Bayer4,
    DitherAlgorithm::Bayer8,
    DitherAlgorithm::FloydSteinberg,
    DitherAlgorithm::Atkinson,
    DitherAlgorithm::Jarvis,
];

impl DitherAlgorithm {
    /// Resolve a selector name, falling back to [`Threshold`](Self::Threshold).
    ///
    /// Accepted names (ASCII case-insensitive): `threshold`, `random`,
    /// `bayer2`, `bayer4`, `bayer8`, `floydSteinberg`, `atkinson`,
    /// `jarvis`. Anything else maps to `Threshold` with a warning rather
    /// than failing the request.
    pub fn from_name(name: &str) -> Self {
        match name {
            s if s.eq_ignore_ascii_case("threshold") => Self::Threshold,
            s if s.eq_ignore_ascii_case("random") => Self::Random,
            s if s.eq_ignore_ascii_case("bayer2") => Self::Bayer2,
            s if s.eq_ignore_ascii_case("bayer4") => Self::Bayer4,
            s if s.eq_ignore_ascii_case("bayer8") => Self::Bayer8,
            s if s.eq_ignore_ascii_case("floydsteinberg") => Self::FloydSteinberg,
            s if s.eq_ignore_ascii_case("atkinson") => Self::Atkinson,
            s if s.eq_ignore_ascii_case("jarvis") => Self::Jarvis,
            other => {
                warn!(algorithm = other, "unknown dithering algorithm, using threshold");
                Self::Threshold
            }
        }
    }

    /// The canonical selector name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Threshold => "threshold",
            Self::Random => "random",
            Self::Bayer2 => "bayer2",
            Self::Bayer4 => "bayer4",
            Self::Bayer8 => "bayer8",
            Self::FloydSteinberg => "floydSteinberg",
            Self::Atkinson => "atkinson",
            Self::Jarvis => "jarvis",
        }
    }
}

impl std::fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
