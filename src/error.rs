use thiserror::Error;

/// Errors reported while processing a worker request.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Pixel buffer is {actual} bytes (expected {expected} for {width}x{height} RGBA)")]
    PixelBufferMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Bitmap is {actual} pixels (expected {expected} for {width}x{height})")]
    BitmapMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Footprint error: {0}")]
    Footprint(#[from] FootprintError),

    #[error("Request decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors raised while assembling a footprint document.
#[derive(Debug, Error)]
pub enum FootprintError {
    #[error("Random source failure: {0}")]
    RandomSource(#[from] rand::Error),
}
