//! Result delivery
//!
//! A run's result is either handed back to the caller or emitted as the
//! run's sole line of output.

use std::io::{self, Write};

use crate::sim::SimulationResult;
use crate::SimError;

/// Where a result goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delivery {
    /// Hand the result back to the caller
    #[default]
    Return,
    /// Write the result as one line to the sink
    Emit,
}

/// Delivers simulation results to a caller or an output sink
pub struct Reporter<W> {
    delivery: Delivery,
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout(delivery: Delivery) -> Self {
        Self::new(delivery, io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(delivery: Delivery, out: W) -> Self {
        Self { delivery, out }
    }

    pub fn delivery(&self) -> Delivery {
        self.delivery
    }

    /// Deliver one result.
    ///
    /// Returns the result for [`Delivery::Return`] and `None` once it has
    /// been written for [`Delivery::Emit`].
    pub fn deliver(
        &mut self,
        result: SimulationResult,
    ) -> Result<Option<SimulationResult>, SimError> {
        match self.delivery {
            Delivery::Return => Ok(Some(result)),
            Delivery::Emit => {
                writeln!(self.out, "{result}")?;
                self.out.flush()?;
                Ok(None)
            }
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
