//! Pcbink - Put Images on Copper
//!
//! Converts raster images into dithered KiCad footprint documents.
//! This library exposes modules for integration testing.

pub mod error;
pub mod footprint;
pub mod ident;
pub mod worker;
