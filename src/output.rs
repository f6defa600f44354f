use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use csv::Writer;
use serde::Serialize;

use crate::config::SimulationConfig;
use crate::series::TimeSeries;
use crate::sim::SimulationRun;
use crate::SimError;

/// JSON summary of a single run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub config: SimulationConfig,
    pub steps: usize,
    pub max: f64,
    pub max_step: usize,
    pub max_t: f64,
}

impl RunSummary {
    pub fn new(config: &SimulationConfig, run: &SimulationRun) -> Self {
        Self {
            config: config.clone(),
            steps: run.result.steps,
            max: run.result.max,
            max_step: run.result.step,
            max_t: run.result.t,
        }
    }
}

/// Create `<root>/<UTC timestamp>`, suffixing a counter if it already exists.
pub fn create_timestamped_output_dir(root: &Path) -> Result<PathBuf, SimError> {
    fs::create_dir_all(root)?;

    let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%SZ").to_string();
    let mut output_dir = root.join(&timestamp);
    let mut counter = 1_u32;

    while output_dir.exists() {
        output_dir = root.join(format!("{timestamp}-{counter:02}"));
        counter += 1;
    }

    fs::create_dir_all(&output_dir)?;
    Ok(output_dir)
}

fn fmt_f64(value: f64) -> String {
    format!("{value:.10}")
}

pub fn write_series_csv(path: &Path, series: &TimeSeries) -> Result<(), SimError> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["step", "t", "value"])?;

    for sample in series.iter() {
        writer.write_record([
            sample.step.to_string(),
            fmt_f64(sample.t),
            fmt_f64(sample.value),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Serialize rows with their field names as the header
pub fn write_rows_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), SimError> {
    let mut writer = Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_summary_json<T: Serialize>(path: &Path, summary: &T) -> Result<(), SimError> {
    fs::write(path, serde_json::to_string_pretty(summary)?)?;
    Ok(())
}

/// Write `series.csv` and `summary.json` for one run into `output_dir`.
pub fn write_run(
    output_dir: &Path,
    config: &SimulationConfig,
    run: &SimulationRun,
) -> Result<(), SimError> {
    fs::create_dir_all(output_dir)?;
    write_series_csv(&output_dir.join("series.csv"), &run.series)?;
    write_summary_json(
        &output_dir.join("summary.json"),
        &RunSummary::new(config, run),
    )?;
    Ok(())
}
