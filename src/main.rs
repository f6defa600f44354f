use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spdm_sim::output::{
    create_timestamped_output_dir, write_rows_csv, write_run, write_summary_json,
};
use spdm_sim::{
    run_monte_carlo, summarize_batch, Delivery, MonteCarloConfig, Reporter, SimulationConfig,
    Simulator,
};
#[cfg(test)]
use spdm_sim::SimError;

#[derive(Debug, Parser)]
#[command(author, version, about = "Sine signal plus Gaussian noise, reduced to its maximum")]
struct Cli {
    /// TOML configuration file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Time step in seconds
    #[arg(long, allow_negative_numbers = true)]
    dt: Option<f64>,

    /// Horizon in seconds
    #[arg(long, allow_negative_numbers = true)]
    tmax: Option<f64>,

    /// Noise mean
    #[arg(long, allow_negative_numbers = true)]
    mu: Option<f64>,

    /// Noise standard deviation
    #[arg(long, allow_negative_numbers = true)]
    sigma: Option<f64>,

    /// Random seed (system entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Run this many seeded replicates and print the mean maximum
    #[arg(long)]
    runs: Option<usize>,

    /// Write series.csv / summary.json under a timestamped directory here
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print configuration and summary to stderr
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<SimulationConfig> {
    let mut cfg = match &cli.config {
        Some(path) => SimulationConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    if let Some(v) = cli.dt {
        cfg.dt = v;
    }
    if let Some(v) = cli.tmax {
        cfg.tmax = v;
    }
    if let Some(v) = cli.mu {
        cfg.mu = v;
    }
    if let Some(v) = cli.sigma {
        cfg.sigma = v;
    }
    if let Some(v) = cli.seed {
        cfg.seed = Some(v);
    }

    cfg.validate()?;
    Ok(cfg)
}

fn run_single(cli: &Cli, cfg: SimulationConfig) -> Result<()> {
    let mut simulator = Simulator::new(cfg.clone())?;
    let run = simulator.run()?;

    if cli.verbose {
        eprintln!(
            "Max {:.6} at step {} (t={:.3} s) of {}",
            run.result.max, run.result.step, run.result.t, run.result.steps
        );
    }

    if let Some(root) = &cli.output {
        let output_dir = create_timestamped_output_dir(root)?;
        write_run(&output_dir, &cfg, &run)?;
        if cli.verbose {
            eprintln!("Output directory: {}", output_dir.display());
        }
    }

    Reporter::stdout(Delivery::Emit).deliver(run.result)?;
    Ok(())
}

fn run_batch(cli: &Cli, cfg: SimulationConfig, runs: usize) -> Result<()> {
    let mc = MonteCarloConfig::new(runs, cfg.seed);
    let batch = run_monte_carlo(&cfg, &mc)?;
    let summary = summarize_batch(&mc, &batch);

    if cli.verbose {
        eprintln!(
            "Runs: {} | base seed {} | mean {:.6} | std {:.6} | min {:.6} | max {:.6}",
            summary.runs, summary.base_seed, summary.mean_max, summary.std_max, summary.min_max, summary.max_max
        );
    }

    if let Some(root) = &cli.output {
        let output_dir = create_timestamped_output_dir(root)?;
        write_rows_csv(&output_dir.join("runs.csv"), &batch.records)?;
        write_summary_json(&output_dir.join("summary.json"), &summary)?;
        if cli.verbose {
            eprintln!("Output directory: {}", output_dir.display());
        }
    }

    println!("{}", summary.mean_max);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(&cli)?;

    if cli.verbose {
        eprintln!("Configuration:");
        eprintln!("  Time step: {} s", cfg.dt);
        eprintln!("  Horizon: {} s ({} steps)", cfg.tmax, cfg.steps());
        eprintln!("  Noise: mu={} sigma={}", cfg.mu, cfg.sigma);
        match cfg.seed {
            Some(seed) => eprintln!("  Seed: {seed}"),
            None => eprintln!("  Seed: entropy"),
        }
    }

    match cli.runs {
        Some(runs) => run_batch(&cli, cfg, runs),
        None => run_single(&cli, cfg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from(["spdm-sim", "--sigma", "0", "--tmax", "1.0", "--seed", "3"]);
        let cfg = load_config(&cli).unwrap();
        assert_eq!(cfg.sigma, 0.0);
        assert_eq!(cfg.tmax, 1.0);
        assert_eq!(cfg.seed, Some(3));
        assert_eq!(cfg.mu, 2.3);
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let cli = Cli::parse_from(["spdm-sim", "--dt=-0.1"]);
        assert!(load_config(&cli).is_err());
    }

    #[test]
    fn test_negative_values_reach_validation() {
        for args in [
            ["spdm-sim", "--dt", "-0.1"],
            ["spdm-sim", "--tmax", "-1"],
            ["spdm-sim", "--sigma", "-0.1"],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            let err = load_config(&cli).unwrap_err();
            assert!(
                matches!(
                    err.downcast_ref::<SimError>(),
                    Some(SimError::InvalidConfig(_))
                ),
                "{args:?} should fail validation, got {err}"
            );
        }
    }

    #[test]
    fn test_negative_mu_accepted() {
        let cli = Cli::parse_from(["spdm-sim", "--mu", "-2.3"]);
        assert_eq!(load_config(&cli).unwrap().mu, -2.3);
    }
}
