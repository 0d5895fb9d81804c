//! halftone: binary halftoning for photo-etched PCB artwork
//!
//! This library reduces full-color raster images to two-level bitmaps
//! where every pixel is either ink (0) or blank (255). The output feeds a
//! footprint generator that turns each ink pixel into a filled polygon,
//! so the goal is a stencil that etches well, not a faithful grayscale
//! reproduction.
//!
//! # Quick Start
//!
//! The [`Ditherer`] builder is the primary entry point:
//!
//! ```
//! use halftone::{DitherAlgorithm, Ditherer};
//!
//! let ditherer = Ditherer::new(DitherAlgorithm::FloydSteinberg).threshold(0.5);
//!
//! // 2x2 RGBA image, all black
//! let pixels = [0u8, 0, 0, 255].repeat(4);
//! let bitmap = ditherer.dither(&pixels, 2, 2);
//!
//! assert_eq!(bitmap.width(), 2);
//! assert_eq!(bitmap.ink_count(), 4);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGBA bytes
//!     |
//!     v
//! luminance field        (gray::luminance, optional sRGB linearization)
//!     |
//!     v
//! [invert]               (optional, ink where light)
//!     |
//!     v
//! binary Bitmap          (dither::dither_field, one of 8 algorithms)
//! ```
//!
//! # Algorithms
//!
//! Eight algorithms are available via [`DitherAlgorithm`]:
//!
//! - Threshold (plain cutoff, the fallback for unknown names)
//! - Random (cutoff with uniform noise)
//! - Bayer 2/4/8 (ordered dithering, tiled threshold matrices)
//! - Floyd-Steinberg, Atkinson, Jarvis (error diffusion)
//!
//! All of them emit only the two sentinel values [`INK`] and [`BLANK`],
//! and all dispatch is resolved once per call, never per pixel.

pub mod bitmap;
pub mod dither;
pub mod ditherer;
pub mod gray;

pub use bitmap::{Bitmap, BLANK, INK};
pub use dither::{dither_field, DitherAlgorithm, ALL_ALGORITHMS};
pub use ditherer::Ditherer;
