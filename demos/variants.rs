//! Reference Variants Example
//!
//! Runs the reference parameter set twice: once handing the maximum back to
//! the caller, once emitting it directly to stdout.

use spdm_sim::{Delivery, Reporter, SimError, SimulationConfig, Simulator};

fn simulate(delivery: Delivery) -> Result<Option<f64>, SimError> {
    let config = SimulationConfig::default();
    let run = Simulator::new(config)?.run()?;
    let delivered = Reporter::stdout(delivery).deliver(run.result)?;
    Ok(delivered.map(|result| result.max))
}

fn main() -> Result<(), SimError> {
    // Returned to the caller, printed here
    if let Some(max) = simulate(Delivery::Return)? {
        println!("{max}");
    }

    // Printed by the reporter itself
    simulate(Delivery::Emit)?;

    Ok(())
}
