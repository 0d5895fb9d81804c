//! Common fixtures for Pcbink integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

use halftone::{BLANK, INK};

/// Raw RGBA buffer filled with one gray level, fully opaque.
pub fn rgba_image(width: usize, height: usize, level: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * 4);
    for _ in 0..width * height {
        data.extend_from_slice(&[level, level, level, 255]);
    }
    data
}

/// Bitmap buffer with every pixel ink.
pub fn all_ink(width: usize, height: usize) -> Vec<u8> {
    vec![INK; width * height]
}

/// Bitmap buffer with every pixel blank.
pub fn all_blank(width: usize, height: usize) -> Vec<u8> {
    vec![BLANK; width * height]
}

/// Collects every `(uuid "...")` value in document order.
pub fn extract_uuids(document: &str) -> Vec<&str> {
    document
        .split("(uuid \"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}
