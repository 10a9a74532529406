//! Sweep Driver
//!
//! Runs the full sizes × shapes × algorithms iteration: one generated
//! dataset per (size, shape), one trial per algorithm against a private
//! copy of it, every measurement recorded into the results table. Purely
//! sequential; a failed trial prints its marker and the sweep moves on.

use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sortbench_core::{Algorithm, DatasetShape, TrialConfig, TrialOutcome, generate, run_trial};
use sortbench_report::ResultsTable;
use tracing::debug;

/// Default RNG seed when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 42;

/// Everything that defines one sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Input sizes, ascending.
    pub sizes: Vec<usize>,
    /// Dataset shapes to generate.
    pub shapes: Vec<DatasetShape>,
    /// Algorithms to run against each dataset.
    pub algorithms: Vec<Algorithm>,
    /// Seed for the dataset generator.
    pub seed: u64,
    /// Per-trial configuration.
    pub trial: TrialConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1000, 5000, 10_000],
            shapes: DatasetShape::ALL.to_vec(),
            algorithms: Algorithm::ALL.to_vec(),
            seed: DEFAULT_SEED,
            trial: TrialConfig::default(),
        }
    }
}

impl SweepConfig {
    /// Total number of trials this sweep will attempt.
    pub fn trial_count(&self) -> usize {
        self.sizes.len() * self.shapes.len() * self.algorithms.len()
    }
}

/// Execute the sweep and return the aggregated results.
pub fn run_sweep(config: &SweepConfig) -> ResultsTable {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut table = ResultsTable::new();

    let pb = ProgressBar::new(config.trial_count() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    for &size in &config.sizes {
        for &shape in &config.shapes {
            let dataset = generate(size, shape, &mut rng);
            debug!(size, shape = %shape, "dataset generated");

            for &algorithm in &config.algorithms {
                pb.set_message(format!("{algorithm} / {shape} / {size}"));
                let measurement = run_trial(algorithm, shape, &dataset, &config.trial);
                if let TrialOutcome::Failed { kind } = measurement.outcome {
                    pb.println(format!("  {algorithm}: {kind}!"));
                }
                table.record(measurement);
                pb.inc(1);
            }
        }
    }

    pb.finish_and_clear();
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_covers_the_full_grid() {
        let config = SweepConfig::default();
        assert_eq!(config.trial_count(), 3 * 3 * 2);
    }

    #[test]
    fn sweep_records_one_measurement_per_trial() {
        let config = SweepConfig {
            sizes: vec![50, 200],
            shapes: vec![DatasetShape::Random],
            algorithms: Algorithm::ALL.to_vec(),
            seed: 1,
            trial: TrialConfig::default(),
        };

        let table = run_sweep(&config);
        assert_eq!(table.trial_count(), config.trial_count());
        for algorithm in Algorithm::ALL {
            let series = table.series(algorithm, DatasetShape::Random);
            let sizes: Vec<usize> = series.iter().map(|m| m.size).collect();
            assert_eq!(sizes, vec![50, 200]);
            assert!(series.iter().all(|m| m.is_completed()));
        }
    }
}
