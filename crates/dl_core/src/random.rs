//! Injectable randomness.
//!
//! The draw engine consumes randomness through `RandomSource` so runs are
//! reproducible: same seed + same inputs = byte-identical output. Production
//! callers use `SeededSource`; tests can script a source directly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws for the lottery.
pub trait RandomSource {
    /// Uniform draw in `[0, bound)`. `bound` is always non-zero.
    fn roll(&mut self, bound: u32) -> u32;
}

/// ChaCha8-backed source seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededSource {
    fn roll(&mut self, bound: u32) -> u32 {
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed sequence of rolls. Panics when the script runs dry or a
/// scripted value falls outside the requested bound, so a bad test fails loudly.
#[cfg(test)]
pub(crate) struct ScriptedSource {
    rolls: std::collections::VecDeque<u32>,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(rolls: &[u32]) -> Self {
        Self { rolls: rolls.iter().copied().collect() }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn roll(&mut self, bound: u32) -> u32 {
        let roll = self.rolls.pop_front().expect("scripted source ran out of rolls");
        assert!(roll < bound, "scripted roll {} out of bound {}", roll, bound);
        roll
    }
}
