//! Append-only time series of simulated samples

use serde::Serialize;

/// One row of a time series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub step: usize,
    pub t: f64,
    pub value: f64,
}

/// Ordered samples indexed by step number
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    t: Vec<f64>,
    values: Vec<f64>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(steps: usize) -> Self {
        Self {
            t: Vec::with_capacity(steps),
            values: Vec::with_capacity(steps),
        }
    }

    /// Append the sample for the next step
    pub fn push(&mut self, t: f64, value: f64) {
        self.t.push(t);
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn times(&self) -> &[f64] {
        &self.t
    }

    pub fn get(&self, step: usize) -> Option<Sample> {
        Some(Sample {
            step,
            t: *self.t.get(step)?,
            value: *self.values.get(step)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.t
            .iter()
            .zip(self.values.iter())
            .enumerate()
            .map(|(step, (&t, &value))| Sample { step, t, value })
    }

    /// Sample holding the largest value; the earliest one wins on ties.
    ///
    /// Returns `None` for an empty series.
    pub fn argmax(&self) -> Option<Sample> {
        self.iter().fold(None, |best: Option<Sample>, sample| match best {
            Some(b) if b.value >= sample.value => Some(b),
            _ => Some(sample),
        })
    }

    /// Largest value in the series, `None` when empty.
    pub fn max(&self) -> Option<f64> {
        self.argmax().map(|sample| sample.value)
    }
}
