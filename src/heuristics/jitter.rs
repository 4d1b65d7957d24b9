// src/heuristics/jitter.rs
//! Random perturbation added to every confidence value.
//!
//! The classifier takes its randomness through the `Jitter` trait so tests
//! can pin the perturbation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Half-width of the uniform perturbation interval.
pub const JITTER_SPREAD: f64 = 0.1;

/// Source of the confidence perturbation.
pub trait Jitter {
    /// Next offset, in `[-JITTER_SPREAD, JITTER_SPREAD)`.
    fn sample(&mut self) -> f64;
}

/// Uniform jitter drawn from a `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    /// Seeded from the operating system; results differ between runs.
    #[must_use]
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sequence for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `seeded` when a seed is given, `from_os` otherwise.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os, Self::seeded)
    }
}

impl Jitter for SeededJitter {
    fn sample(&mut self) -> f64 {
        self.rng.random_range(-JITTER_SPREAD..JITTER_SPREAD)
    }
}

/// Always returns the same offset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedJitter(pub f64);

impl Jitter for FixedJitter {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

impl<J: Jitter + ?Sized> Jitter for Box<J> {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}
