//! SPDM-SIM - stochastic sine time-series simulator
//!
//! Advances simulated time in fixed steps, evaluates `y * sin(t)` plus a
//! Normal(mu, sigma) draw at each step, and reduces the resulting series to
//! its maximum.

pub mod config;
pub mod monte_carlo;
pub mod noise;
pub mod output;
pub mod report;
pub mod series;
pub mod signal;
pub mod sim;

use thiserror::Error;

// Re-export main types
pub use config::SimulationConfig;
pub use monte_carlo::{run_monte_carlo, summarize_batch, MonteCarloBatch, MonteCarloConfig};
pub use noise::NoiseSource;
pub use report::{Delivery, Reporter};
pub use series::TimeSeries;
pub use signal::{SignalFunction, SineSignal};
pub use sim::{run, SimulationResult, SimulationRun, Simulator};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("empty run: horizon {tmax} is shorter than one step of {dt}")]
    EmptyRun { dt: f64, tmax: f64 },
}
