//! Report Data Structures
//!
//! The serde-serializable snapshot handed to external reporters: run
//! metadata, one series per (algorithm, shape) with per-size points for the
//! time and peak-memory metrics, and aggregate counts.

use crate::table::ResultsTable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sortbench_core::{Algorithm, DatasetShape, TrialOutcome};

/// Bumped whenever the JSON layout changes shape.
pub const SCHEMA_VERSION: u32 = 1;

/// Complete benchmark report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata.
    pub meta: ReportMeta,
    /// One entry per (algorithm, shape) series, insertion-ordered by size.
    pub series: Vec<SeriesReport>,
    /// Aggregate counts.
    pub summary: ReportSummary,
}

/// Report metadata: enough to reproduce the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// JSON schema version.
    pub schema_version: u32,
    /// Crate version that produced the report.
    pub version: String,
    /// When the report was built.
    pub timestamp: DateTime<Utc>,
    /// RNG seed the sweep ran with.
    pub seed: u64,
    /// Sizes attempted, in sweep order.
    pub sizes: Vec<usize>,
    /// Divide-depth budget in effect for every trial.
    pub recursion_limit: usize,
}

impl ReportMeta {
    /// Capture metadata for a run with the given sweep parameters.
    pub fn new(seed: u64, sizes: Vec<usize>, recursion_limit: usize) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            seed,
            sizes,
            recursion_limit,
        }
    }
}

/// All measurements for one (algorithm, shape) combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesReport {
    /// Algorithm this series benchmarked.
    pub algorithm: Algorithm,
    /// Dataset shape it ran against.
    pub shape: DatasetShape,
    /// Per-size points, in sweep order. A failed trial keeps its slot so
    /// the series stays index-aligned with `meta.sizes`.
    pub points: Vec<TrialPoint>,
}

/// One (size, outcome) point within a series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialPoint {
    /// Number of elements sorted.
    pub size: usize,
    /// Metrics or the recorded failure.
    #[serde(flatten)]
    pub outcome: TrialOutcome,
}

/// Aggregate counts over the whole run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Total trials attempted.
    pub total_trials: usize,
    /// Trials that completed.
    pub completed: usize,
    /// Trials recorded as failed.
    pub failed: usize,
    /// Wall-clock duration of the whole sweep in milliseconds.
    pub total_duration_ms: f64,
}

/// Build a [`Report`] from an aggregated results table.
pub fn build_report(table: &ResultsTable, meta: ReportMeta, total_duration_ms: f64) -> Report {
    let mut series = Vec::new();
    let mut summary = ReportSummary {
        total_duration_ms,
        ..ReportSummary::default()
    };

    for ((algorithm, shape), measurements) in table.iter() {
        summary.total_trials += measurements.len();
        for measurement in measurements {
            match measurement.outcome {
                TrialOutcome::Completed { .. } => summary.completed += 1,
                TrialOutcome::Failed { .. } => summary.failed += 1,
            }
        }

        series.push(SeriesReport {
            algorithm,
            shape,
            points: measurements
                .iter()
                .map(|m| TrialPoint {
                    size: m.size,
                    outcome: m.outcome,
                })
                .collect(),
        });
    }

    Report {
        meta,
        series,
        summary,
    }
}
