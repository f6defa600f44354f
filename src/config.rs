use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::SimError;

/// Upper bound on `floor(tmax / dt)` accepted by [`SimulationConfig::validate`].
///
/// A run keeps two `f64` per step in memory, so this caps a series at 160 MB.
pub const MAX_STEPS: usize = 10_000_000;

/// Parameters of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Time step [s]
    pub dt: f64,
    /// Horizon [s]
    pub tmax: f64,
    /// Noise mean
    pub mu: f64,
    /// Noise standard deviation
    pub sigma: f64,
    /// Scale factor passed to the signal function
    pub amplitude: f64,
    /// RNG seed; `None` draws from system entropy
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: 0.1,
            tmax: 5.0,
            mu: 2.3,
            sigma: 0.1,
            amplitude: 1.0,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Build and validate a configuration with unit amplitude and no seed.
    pub fn new(dt: f64, tmax: f64, mu: f64, sigma: f64) -> Result<Self, SimError> {
        let config = Self {
            dt,
            tmax,
            mu,
            sigma,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, SimError> {
        let raw = fs::read_to_string(path)?;
        let config: SimulationConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        for (name, value) in [
            ("dt", self.dt),
            ("tmax", self.tmax),
            ("mu", self.mu),
            ("sigma", self.sigma),
            ("amplitude", self.amplitude),
        ] {
            if !value.is_finite() {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        if self.dt <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "dt must be > 0, got {}",
                self.dt
            )));
        }

        if self.tmax < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "tmax must be >= 0, got {}",
                self.tmax
            )));
        }

        if self.sigma < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "sigma must be >= 0, got {}",
                self.sigma
            )));
        }

        let ratio = (self.tmax / self.dt).floor();
        if !ratio.is_finite() || ratio > MAX_STEPS as f64 {
            return Err(SimError::InvalidConfig(format!(
                "tmax / dt yields more than {MAX_STEPS} steps"
            )));
        }

        Ok(())
    }

    /// Number of steps in the run: `floor(tmax / dt)`.
    pub fn steps(&self) -> usize {
        (self.tmax / self.dt).floor() as usize
    }
}
