//! Results Aggregation
//!
//! Accumulates [`Measurement`]s keyed by (algorithm, shape), preserving the
//! sweep's insertion order so every series stays aligned with the size list.
//! Deliberately append-only: re-running a sweep into the same table appends
//! rather than overwrites.

use sortbench_core::{Algorithm, DatasetShape, Measurement};
use std::collections::BTreeMap;

/// Ordered collection of every measurement a sweep produced.
#[derive(Debug, Clone, Default)]
pub struct ResultsTable {
    series: BTreeMap<(Algorithm, DatasetShape), Vec<Measurement>>,
}

impl ResultsTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a measurement to its (algorithm, shape) series.
    pub fn record(&mut self, measurement: Measurement) {
        self.series
            .entry((measurement.algorithm, measurement.shape))
            .or_default()
            .push(measurement);
    }

    /// The ordered measurements for one (algorithm, shape) series; empty if
    /// that combination never ran.
    pub fn series(&self, algorithm: Algorithm, shape: DatasetShape) -> &[Measurement] {
        self.series
            .get(&(algorithm, shape))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate all series in (algorithm, shape) order.
    pub fn iter(&self) -> impl Iterator<Item = ((Algorithm, DatasetShape), &[Measurement])> {
        self.series
            .iter()
            .map(|(&key, measurements)| (key, measurements.as_slice()))
    }

    /// Total number of recorded measurements.
    pub fn trial_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    /// Whether anything has been recorded.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::TrialOutcome;

    fn measurement(algorithm: Algorithm, shape: DatasetShape, size: usize) -> Measurement {
        Measurement {
            algorithm,
            shape,
            size,
            outcome: TrialOutcome::Completed {
                elapsed_ns: 1_000,
                peak_bytes: 64,
            },
        }
    }

    #[test]
    fn records_preserve_insertion_order() {
        let mut table = ResultsTable::new();
        for size in [100, 1000, 10_000] {
            table.record(measurement(Algorithm::QuickSort, DatasetShape::Random, size));
        }

        let sizes: Vec<usize> = table
            .series(Algorithm::QuickSort, DatasetShape::Random)
            .iter()
            .map(|m| m.size)
            .collect();
        assert_eq!(sizes, vec![100, 1000, 10_000]);
    }

    #[test]
    fn repeated_trials_append_rather_than_overwrite() {
        let mut table = ResultsTable::new();
        table.record(measurement(Algorithm::MergeSort, DatasetShape::Sorted, 500));
        table.record(measurement(Algorithm::MergeSort, DatasetShape::Sorted, 500));

        assert_eq!(table.series(Algorithm::MergeSort, DatasetShape::Sorted).len(), 2);
        assert_eq!(table.trial_count(), 2);
    }

    #[test]
    fn missing_series_is_empty() {
        let table = ResultsTable::new();
        assert!(table.is_empty());
        assert!(table.series(Algorithm::QuickSort, DatasetShape::Sorted).is_empty());
    }

    #[test]
    fn series_are_keyed_independently() {
        let mut table = ResultsTable::new();
        table.record(measurement(Algorithm::QuickSort, DatasetShape::Random, 10));
        table.record(measurement(Algorithm::MergeSort, DatasetShape::Random, 10));
        table.record(measurement(Algorithm::QuickSort, DatasetShape::Sorted, 10));

        assert_eq!(table.iter().count(), 3);
        assert_eq!(table.series(Algorithm::QuickSort, DatasetShape::Random).len(), 1);
    }
}
