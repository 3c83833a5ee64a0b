//! Secret sequence generation
//!
//! The random source is injected so games can be replayed from a seed and
//! tests stay deterministic. Production games seed a `StdRng` (ChaCha) from
//! the operating system.

use crate::core::{Piece, Sequence};
use crate::error::EntropyError;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws secrets uniformly from all pieces, repeats allowed
#[derive(Debug)]
pub struct SequenceGenerator<R = StdRng> {
    rng: R,
}

impl SequenceGenerator<StdRng> {
    /// Generator seeded from operating system entropy
    ///
    /// # Errors
    /// Returns `EntropyError` if the OS random source is unavailable.
    pub fn from_entropy() -> Result<Self, EntropyError> {
        let rng = StdRng::try_from_os_rng().map_err(|e| EntropyError(e.to_string()))?;
        debug!("Secret generator seeded from OS entropy");
        Ok(Self::new(rng))
    }

    /// Generator with a fixed seed, for reproducible games
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        debug!("Secret generator seeded with {seed}");
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SequenceGenerator<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a new secret; every slot is independent
    pub fn generate(&mut self) -> Sequence {
        let secret = Sequence::new(std::array::from_fn(|_| {
            Piece::ALL[self.rng.random_range(0..Piece::ALL.len())]
        }));
        trace!("Generated secret {secret}");
        secret
    }
}
