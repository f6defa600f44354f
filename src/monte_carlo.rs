//! Seeded Monte Carlo replicates of the simulation
//!
//! Replicate `i` runs with seed `base_seed + i`, so a batch is reproducible
//! from its base seed alone.

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::sim;
use crate::SimError;

pub const DEFAULT_MONTE_CARLO_RUNS: usize = 100;
pub const DEFAULT_BASE_SEED: u64 = 0x5D_D0_2025;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    pub runs: usize,
    pub base_seed: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            runs: DEFAULT_MONTE_CARLO_RUNS,
            base_seed: DEFAULT_BASE_SEED,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MonteCarloRunRecord {
    pub run: usize,
    pub seed: u64,
    pub max: f64,
    pub max_t: f64,
}

#[derive(Clone, Debug)]
pub struct MonteCarloBatch {
    pub records: Vec<MonteCarloRunRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MonteCarloSummary {
    pub runs: usize,
    pub base_seed: u64,
    pub mean_max: f64,
    pub std_max: f64,
    pub min_max: f64,
    pub max_max: f64,
}

impl MonteCarloConfig {
    /// Batch of `runs` replicates starting at `base_seed`, or at a fresh
    /// entropy-drawn seed when none is given.
    pub fn new(runs: usize, base_seed: Option<u64>) -> Self {
        Self {
            runs,
            base_seed: base_seed.unwrap_or_else(rand::random),
        }
    }
}

pub fn run_monte_carlo(
    config: &SimulationConfig,
    mc: &MonteCarloConfig,
) -> Result<MonteCarloBatch, SimError> {
    if mc.runs == 0 {
        return Err(SimError::InvalidConfig(
            "runs must be greater than zero".to_string(),
        ));
    }

    let records = (0..mc.runs)
        .map(|run| {
            let seed = mc.base_seed.wrapping_add(run as u64);
            let result = sim::run(&config.clone().with_seed(seed))?;
            Ok(MonteCarloRunRecord {
                run,
                seed,
                max: result.max,
                max_t: result.t,
            })
        })
        .collect::<Result<Vec<_>, SimError>>()?;

    Ok(MonteCarloBatch { records })
}

pub fn summarize_batch(mc: &MonteCarloConfig, batch: &MonteCarloBatch) -> MonteCarloSummary {
    let n = batch.records.len().max(1) as f64;
    let maxima = batch.records.iter().map(|record| record.max);

    let mean_max = maxima.clone().sum::<f64>() / n;
    let variance = maxima
        .clone()
        .map(|value| (value - mean_max).powi(2))
        .sum::<f64>()
        / n;

    MonteCarloSummary {
        runs: batch.records.len(),
        base_seed: mc.base_seed,
        mean_max,
        std_max: variance.sqrt(),
        min_max: maxima.clone().fold(f64::INFINITY, f64::min),
        max_max: maxima.fold(f64::NEG_INFINITY, f64::max),
    }
}
