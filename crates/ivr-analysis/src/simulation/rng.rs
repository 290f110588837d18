//! Randomness used by the simulation, behind a trait so tests can script it.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The two draws a trial needs.
pub trait TrialRng {
    /// Uniform index in `[0, len)`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;

    /// `true` with probability `p`. Values outside `[0, 1]` saturate.
    fn bernoulli(&mut self, p: f64) -> bool;
}

/// Seeded ChaCha stream driving the walks of one run or one chunk.
#[derive(Debug, Clone)]
pub struct SimRng {
    inner: ChaCha8Rng,
}

impl SimRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Split off an independent stream for a parallel chunk.
    /// The child is seeded from the next word of this stream, so the set of
    /// children depends only on the parent's seed and the number of splits.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.inner.next_u64())
    }

    fn unit(&mut self) -> f64 {
        self.inner.gen()
    }
}

impl TrialRng for SimRng {
    fn choose_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn bernoulli(&mut self, p: f64) -> bool {
        match p {
            p if p <= 0.0 => false,
            p if p >= 1.0 => true,
            p => self.unit() < p,
        }
    }
}
