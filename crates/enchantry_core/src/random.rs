//! # Random Sources
//!
//! The rule engines draw randomness only through [`RandomSource`], which is
//! implemented for every `rand` generator. Reproducible sessions seed a
//! [`ChaCha8Rng`] from a `u64`.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform integer and float draws.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. Returns 0 when `bound <= 0`.
    fn next_int(&mut self, bound: i32) -> i32;

    /// Uniform float in `[0, 1)`.
    fn next_float(&mut self) -> f32;
}

impl<R: RngCore> RandomSource for R {
    #[inline]
    fn next_int(&mut self, bound: i32) -> i32 {
        if bound <= 0 {
            return 0;
        }
        self.gen_range(0..bound)
    }

    #[inline]
    fn next_float(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Creates a reproducible generator from a seed.
#[must_use]
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fixed random source for deterministic testing.
///
/// Integer draws replay `ints` in order, reduced into range; float draws
/// replay `floats`. Both cycle when exhausted, and an empty sequence yields 0.
#[derive(Clone, Debug, Default)]
pub struct SequenceRandom {
    ints: Vec<i32>,
    floats: Vec<f32>,
    int_index: usize,
    float_index: usize,
}

impl SequenceRandom {
    /// Creates a source replaying the given draws.
    #[must_use]
    pub fn new(ints: impl Into<Vec<i32>>, floats: impl Into<Vec<f32>>) -> Self {
        Self {
            ints: ints.into(),
            floats: floats.into(),
            int_index: 0,
            float_index: 0,
        }
    }

    /// Number of integer draws made so far.
    #[must_use]
    pub fn int_draws(&self) -> usize {
        self.int_index
    }

    /// Number of float draws made so far.
    #[must_use]
    pub fn float_draws(&self) -> usize {
        self.float_index
    }
}

impl RandomSource for SequenceRandom {
    fn next_int(&mut self, bound: i32) -> i32 {
        let value = if self.ints.is_empty() {
            0
        } else {
            self.ints[self.int_index % self.ints.len()]
        };
        self.int_index += 1;
        if bound <= 0 {
            0
        } else {
            value.rem_euclid(bound)
        }
    }

    fn next_float(&mut self) -> f32 {
        let value = if self.floats.is_empty() {
            0.0
        } else {
            self.floats[self.float_index % self.floats.len()]
        };
        self.float_index += 1;
        value
    }
}
