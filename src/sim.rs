//! Simulation loop
//!
//! Steps elapsed time, adds one noise draw to the deterministic signal at
//! every step, and reduces the collected series to its maximum.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::noise::NoiseSource;
use crate::series::TimeSeries;
use crate::signal::{SignalFunction, SineSignal};
use crate::SimError;

/// Maximum of one run, with where it occurred
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Largest sample value
    pub max: f64,
    /// Step index of the maximum (earliest on ties)
    pub step: usize,
    /// Elapsed time at that step [s]
    pub t: f64,
    /// Steps taken in the run
    pub steps: usize,
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.max)
    }
}

/// Full output of a run: the series and its reduction
#[derive(Debug, Clone)]
pub struct SimulationRun {
    pub series: TimeSeries,
    pub result: SimulationResult,
}

/// Drives a signal function and a noise source over a fixed horizon
pub struct Simulator<S = SineSignal> {
    config: SimulationConfig,
    signal: S,
    noise: NoiseSource,
}

impl Simulator<SineSignal> {
    /// Create a sine simulator; fails on invalid configuration.
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        Self::with_signal(config, SineSignal)
    }
}

impl<S: SignalFunction> Simulator<S> {
    pub fn with_signal(config: SimulationConfig, signal: S) -> Result<Self, SimError> {
        config.validate()?;
        let noise = NoiseSource::new(config.seed);
        Ok(Self {
            config,
            signal,
            noise,
        })
    }

    /// Replace the noise source, e.g. to continue an existing stream.
    pub fn with_noise(mut self, noise: NoiseSource) -> Self {
        self.noise = noise;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the full horizon.
    ///
    /// Fails with [`SimError::EmptyRun`] before drawing any noise when the
    /// horizon is shorter than one step.
    pub fn run(&mut self) -> Result<SimulationRun, SimError> {
        let SimulationConfig {
            dt,
            tmax,
            mu,
            sigma,
            amplitude,
            ..
        } = self.config;

        let steps = self.config.steps();
        if steps == 0 {
            return Err(SimError::EmptyRun { dt, tmax });
        }

        let mut series = TimeSeries::with_capacity(steps);
        let mut t = 0.0;

        for _ in 0..steps {
            t += dt;
            let noise = self.noise.sample(mu, sigma)?;
            let z = self.signal.evaluate(t, amplitude) + noise;
            series.push(t, z);
        }

        let peak = series.argmax().ok_or(SimError::EmptyRun { dt, tmax })?;
        let result = SimulationResult {
            max: peak.value,
            step: peak.step,
            t: peak.t,
            steps,
        };

        Ok(SimulationRun { series, result })
    }
}

/// Run one sine simulation and keep only its maximum.
pub fn run(config: &SimulationConfig) -> Result<SimulationResult, SimError> {
    let mut simulator = Simulator::new(config.clone())?;
    Ok(simulator.run()?.result)
}
