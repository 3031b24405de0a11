//! # Sampler Port
//!
//! The uniform random source the generator draws coordinates from.
//!
//! Any `rand::Rng` can be plugged in through `RngSampler`; closures
//! `FnMut(lo, hi) -> T` work directly, which keeps tests deterministic.

use rand::Rng;

use crate::core::Scalar;

/// Draws a value uniformly from the closed range `[lo, hi]`
pub trait UniformSampler<T> {
    /// Callers guarantee `lo <= hi`.
    fn sample(&mut self, lo: T, hi: T) -> T;
}

/// Adapter from a `rand` generator
#[derive(Clone, Debug)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<T: Scalar, R: Rng> UniformSampler<T> for RngSampler<R> {
    fn sample(&mut self, lo: T, hi: T) -> T {
        if lo == hi {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }
}

impl<T, F: FnMut(T, T) -> T> UniformSampler<T> for F {
    fn sample(&mut self, lo: T, hi: T) -> T {
        self(lo, hi)
    }
}
