//! Gaussian noise source
//!
//! Owns an explicit generator handle instead of ambient process-wide state.
//! Seeded sources are reproducible; unseeded ones draw from system entropy.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::SimError;

/// Normal(mu, sigma) sampler
#[derive(Debug, Clone)]
pub struct NoiseSource {
    rng: ChaCha8Rng,
    seed: Option<u64>,
}

impl NoiseSource {
    /// Create a noise source, seeded when `seed` is given and from system
    /// entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Create a reproducible noise source
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a non-reproducible noise source
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// Seed this source was created with, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draw one value from Normal(mu, sigma).
    ///
    /// `sigma == 0` returns `mu` exactly without advancing the generator.
    pub fn sample(&mut self, mu: f64, sigma: f64) -> Result<f64, SimError> {
        if !(sigma.is_finite() && sigma >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "sigma must be finite and >= 0, got {sigma}"
            )));
        }
        if sigma == 0.0 {
            return Ok(mu);
        }

        let dist = Normal::new(mu, sigma).map_err(|err| {
            SimError::InvalidConfig(format!("noise mu={mu}, sigma={sigma}: {err}"))
        })?;
        Ok(dist.sample(&mut self.rng))
    }
}
