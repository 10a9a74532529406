#![warn(missing_docs)]
//! # SortBench
//!
//! Benchmark harness for two textbook divide-and-conquer sorters.
//!
//! SortBench sweeps quicksort and merge sort over synthetic datasets
//! (random, sorted, reverse-sorted) of varying size and records wall-clock
//! time and peak heap usage per trial:
//! - **Contained failures**: a trial that exhausts its divide-depth budget
//!   is recorded and the sweep keeps going
//! - **Reproducible datasets**: generation is seeded explicitly
//! - **Peak-Memory Tracking**: `TrackingAllocator` measures the high-water
//!   mark of heap usage per trial
//! - **Reports**: human-readable summary tables or JSON for external chart
//!   renderers
//!
//! ## Quick Start
//!
//! ```ignore
//! use sortbench::{SweepConfig, run_sweep};
//!
//! let table = run_sweep(&SweepConfig::default());
//! for algorithm in sortbench::Algorithm::ALL {
//!     for shape in sortbench::DatasetShape::ALL {
//!         println!("{algorithm}/{shape}: {} trials", table.series(algorithm, shape).len());
//!     }
//! }
//! ```
//!
//! Peak-memory numbers are only meaningful when the measuring binary
//! installs the interceptor:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOCATOR: sortbench::TrackingAllocator = sortbench::TrackingAllocator::new();
//! ```

mod cli;
mod sweep;

// Re-export core types
pub use sortbench_core::{
    Algorithm, DEFAULT_RECURSION_LIMIT, DatasetShape, FailureKind, InvalidAlgorithm, InvalidShape,
    Measurement, SortError, Timer, TrackingAllocator, TrialConfig, TrialOutcome,
    current_allocation, generate, is_sorted, merge_sort, peak_allocation, quicksort,
    reset_peak_allocation, run_trial,
};

// Re-export reporting
pub use sortbench_report::{
    OutputFormat, Report, ReportMeta, ReportSummary, ResultsTable, SeriesReport, TrialPoint,
    build_report, format_bytes, format_duration, format_human_output, generate_json_report,
};

pub use cli::{Cli, run, run_with_cli};
pub use sweep::{DEFAULT_SEED, SweepConfig, run_sweep};
