//! Record identifier generation.
//!
//! Every record in a footprint document carries a random version 4 UUID.
//! The generator is a thin wrapper around an owned RNG so documents can be
//! reproduced in tests by seeding, while production callers draw from the
//! thread-local entropy source.

use rand::rngs::ThreadRng;
use rand::RngCore;
use uuid::Uuid;

/// Draws RFC 4122 version 4 identifiers from an owned random source.
#[derive(Debug, Clone)]
pub struct UuidSource<R = ThreadRng> {
    rng: R,
}

impl UuidSource<ThreadRng> {
    /// Source backed by the thread-local RNG.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for UuidSource<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> UuidSource<R> {
    /// Source backed by a caller-supplied RNG. Seed it for reproducible
    /// documents.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Next identifier. Fails only if the underlying random source does,
    /// which is the one condition document generation cannot recover from.
    pub fn next_id(&mut self) -> Result<Uuid, rand::Error> {
        let mut bytes = [0u8; 16];
        self.rng.try_fill_bytes(&mut bytes)?;
        Ok(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}
