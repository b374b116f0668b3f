//! Flat light-collection non-uniformity smearing.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Flat-distributed non-uniformity applied to a deposited energy.
///
/// [`apply`](Self::apply) draws uniformly from
/// `[e*(1 - p/100), e*(1 + p/100)]` where `p` is the configured
/// percentage. With `p == 0` (the default configuration) the input is
/// returned bit-exactly and no RNG state is consumed, so unsmeared runs
/// are deterministic independent of the seed.
///
/// Uses a seeded ChaCha8 RNG so smeared runs are reproducible for
/// identical seeds and step sequences.
#[derive(Clone, Debug)]
pub struct NonUniformity {
    percent: f64,
    rng: ChaCha8Rng,
}

impl NonUniformity {
    /// Create a smearer with the given percentage and RNG seed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `percent` is negative or not finite.
    pub fn new(percent: f64, seed: u64) -> Result<Self, String> {
        if !percent.is_finite() || percent < 0.0 {
            return Err(format!(
                "non-uniformity percent must be finite and >= 0, got {percent}"
            ));
        }
        Ok(Self {
            percent,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// The configured percentage.
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Restart the RNG sequence from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Smear one deposited energy.
    pub fn apply(&mut self, energy: f64) -> f64 {
        if self.percent == 0.0 {
            return energy;
        }
        let half_width = energy * self.percent / 100.0;
        let lo = energy - half_width;
        let hi = energy + half_width;
        lo + self.rng.random::<f64>() * (hi - lo)
    }
}
