//! Seedable RNG wrapper for stochastic search.
//!
//! The tour optimizer needs a uniform integer sampler (swap positions) and a
//! uniform real sampler over `[0, 1)` (Metropolis draw).  Both come from one
//! explicitly-passed `SearchRng` rather than a process-wide engine, so tests
//! seed it and replay a search deterministically.  Statistical unbiasedness
//! is what matters; bit-for-bit output stability across `rand` upgrades is
//! not promised.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable random source threaded through the optimizer.
pub struct SearchRng(SmallRng);

impl SearchRng {
    /// Deterministic construction from a seed — use in tests and anywhere
    /// reproducibility matters.
    pub fn new(seed: u64) -> Self {
        SearchRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy for production runs.
    pub fn from_entropy() -> Self {
        SearchRng(SmallRng::from_entropy())
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit_f64(&mut self) -> f64 {
        self.0.r#gen()
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
