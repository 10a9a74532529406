#![warn(missing_docs)]
//! SortBench Core - Trial Runtime
//!
//! This crate provides everything a single benchmark trial needs:
//! - The two sorters under test (quicksort, merge sort) with an explicit
//!   divide-depth budget
//! - Synthetic dataset generation (random / sorted / reverse-sorted)
//! - Wall-clock timing and a global-allocator interceptor for peak-memory
//!   tracking
//! - The trial runner that brackets a sorter invocation with both and
//!   contains its failures

mod alloc;
mod dataset;
mod measure;
mod sort;
mod trial;

pub use alloc::{TrackingAllocator, current_allocation, peak_allocation, reset_peak_allocation};
pub use dataset::{DatasetShape, InvalidShape, generate};
pub use measure::Timer;
pub use sort::{
    Algorithm, DEFAULT_RECURSION_LIMIT, InvalidAlgorithm, SortError, is_sorted, merge_sort,
    quicksort,
};
pub use trial::{FailureKind, Measurement, TrialConfig, TrialOutcome, run_trial};
