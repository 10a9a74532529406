//! Trial Execution
//!
//! One trial = one (algorithm, shape, size) sorter invocation, bracketed by
//! time and peak-memory instrumentation. The sorter runs on a private copy
//! of the dataset, so the caller can reuse the original across algorithms,
//! and a recursion-budget failure is contained in the returned
//! [`Measurement`] instead of aborting the sweep.

use crate::alloc::{peak_allocation, reset_peak_allocation};
use crate::dataset::DatasetShape;
use crate::measure::Timer;
use crate::sort::{Algorithm, DEFAULT_RECURSION_LIMIT, SortError, is_sorted};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-trial configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Divide-depth budget handed to the sorter.
    pub recursion_limit: usize,
    /// Check the output for sortedness after a successful run.
    pub verify: bool,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            verify: true,
        }
    }
}

/// Why a trial failed. Failures are expected benchmarking outcomes and are
/// recorded per trial; anything not listed here propagates as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FailureKind {
    /// The sorter exhausted its divide-depth budget.
    #[error("recursion budget of {limit} frames exhausted")]
    RecursionExhausted {
        /// The budget that was in effect.
        limit: usize,
    },
    /// The sorter returned but its output was not in order.
    #[error("output failed the sortedness check")]
    Unsorted,
}

impl From<SortError> for FailureKind {
    fn from(err: SortError) -> Self {
        match err {
            SortError::RecursionExhausted { limit } => FailureKind::RecursionExhausted { limit },
        }
    }
}

/// Outcome of a single trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrialOutcome {
    /// The sorter finished (and, if verification was on, produced ordered
    /// output).
    Completed {
        /// Wall-clock time of the sorter invocation in nanoseconds.
        elapsed_ns: u64,
        /// Peak heap growth observed during the invocation, in bytes.
        peak_bytes: u64,
    },
    /// The trial failed; metrics are omitted and the failure is recorded so
    /// every series stays index-aligned with the size list.
    Failed {
        /// What went wrong.
        kind: FailureKind,
    },
}

/// One immutable record per trial, owned by the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Algorithm that ran.
    pub algorithm: Algorithm,
    /// Shape of the input dataset.
    pub shape: DatasetShape,
    /// Number of elements sorted.
    pub size: usize,
    /// What happened.
    pub outcome: TrialOutcome,
}

impl Measurement {
    /// Whether the trial completed.
    pub fn is_completed(&self) -> bool {
        matches!(self.outcome, TrialOutcome::Completed { .. })
    }

    /// Elapsed wall-clock time, if the trial completed.
    pub fn elapsed(&self) -> Option<Duration> {
        match self.outcome {
            TrialOutcome::Completed { elapsed_ns, .. } => Some(Duration::from_nanos(elapsed_ns)),
            TrialOutcome::Failed { .. } => None,
        }
    }

    /// Peak heap growth in bytes, if the trial completed.
    pub fn peak_bytes(&self) -> Option<u64> {
        match self.outcome {
            TrialOutcome::Completed { peak_bytes, .. } => Some(peak_bytes),
            TrialOutcome::Failed { .. } => None,
        }
    }

    /// The failure, if the trial failed.
    pub fn failure(&self) -> Option<FailureKind> {
        match self.outcome {
            TrialOutcome::Completed { .. } => None,
            TrialOutcome::Failed { kind } => Some(kind),
        }
    }
}

/// Run one trial of `algorithm` over `dataset`.
///
/// The dataset is cloned before instrumentation starts, so the working
/// buffer's own allocation never counts toward the trial's peak and the
/// caller's copy is never mutated. Instrumentation start/stop is paired on
/// the success and failure paths alike.
pub fn run_trial(
    algorithm: Algorithm,
    shape: DatasetShape,
    dataset: &[i64],
    config: &TrialConfig,
) -> Measurement {
    let mut working = dataset.to_vec();

    reset_peak_allocation();
    let timer = Timer::start();
    let result = algorithm.sort(&mut working, config.recursion_limit);
    let elapsed = timer.stop();
    let peak_bytes = peak_allocation();

    let outcome = match result {
        Ok(()) if config.verify && !is_sorted(&working) => TrialOutcome::Failed {
            kind: FailureKind::Unsorted,
        },
        Ok(()) => TrialOutcome::Completed {
            elapsed_ns: elapsed.as_nanos() as u64,
            peak_bytes,
        },
        Err(err) => TrialOutcome::Failed { kind: err.into() },
    };

    Measurement {
        algorithm,
        shape,
        size: dataset.len(),
        outcome,
    }
}
