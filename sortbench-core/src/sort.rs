//! Divide-and-Conquer Sorters
//!
//! In-place quicksort (Lomuto partition, last-element pivot) and top-down
//! merge sort. Both honor a per-call depth budget: the divide depth that a
//! recursive rendition would push onto the call stack is tracked explicitly,
//! and exhausting the budget is a recoverable [`SortError`] instead of a
//! stack overflow. Quicksort degrades to O(N²) time and O(N) divide depth on
//! sorted or reverse-sorted input — that pathology is the point of
//! benchmarking it, not a defect.

use serde::{Deserialize, Serialize};

/// Default divide-depth budget for a single sort call.
///
/// Generous enough that only genuinely pathological inputs (sorted or
/// reverse-sorted sequences of about a million elements fed to quicksort)
/// can exhaust it.
pub const DEFAULT_RECURSION_LIMIT: usize = 1_000_000;

/// Failure raised by a sorter. Callers treat this as a per-trial outcome,
/// not a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum SortError {
    /// The divide depth exceeded the configured budget.
    #[error("recursion budget of {limit} frames exhausted")]
    RecursionExhausted {
        /// The budget that was in effect when the sorter gave up.
        limit: usize,
    },
}

/// The closed set of algorithms the harness benchmarks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// In-place quicksort with Lomuto partitioning.
    QuickSort,
    /// Top-down merge sort with an O(N) scratch buffer per merge.
    MergeSort,
}

impl Algorithm {
    /// Every algorithm, in sweep order.
    pub const ALL: [Algorithm; 2] = [Algorithm::QuickSort, Algorithm::MergeSort];

    /// Stable lowercase name, also accepted by [`FromStr`](std::str::FromStr).
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::QuickSort => "quicksort",
            Algorithm::MergeSort => "mergesort",
        }
    }

    /// Sort `data` in place under the given depth budget.
    pub fn sort(self, data: &mut [i64], recursion_limit: usize) -> Result<(), SortError> {
        match self {
            Algorithm::QuickSort => quicksort(data, recursion_limit),
            Algorithm::MergeSort => merge_sort(data, recursion_limit),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse error for an unrecognized algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized algorithm {0:?} (expected quicksort or mergesort)")]
pub struct InvalidAlgorithm(pub String);

impl std::str::FromStr for Algorithm {
    type Err = InvalidAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quicksort" => Ok(Algorithm::QuickSort),
            "mergesort" => Ok(Algorithm::MergeSort),
            other => Err(InvalidAlgorithm(other.to_string())),
        }
    }
}

/// In-place quicksort over the whole slice.
///
/// The recursion is driven by an explicit worklist of inclusive (lo, hi)
/// ranges, so the host call stack stays flat no matter how lopsided the
/// partitions get. Each range remembers how many partition levels separate
/// it from the root; a range deeper than `recursion_limit` aborts the sort
/// with [`SortError::RecursionExhausted`]. On failure the slice is left
/// partially ordered — callers sort a scratch copy they can discard.
pub fn quicksort(data: &mut [i64], recursion_limit: usize) -> Result<(), SortError> {
    if data.len() <= 1 {
        return Ok(());
    }
    let mut pending = vec![(0usize, data.len() - 1, 0usize)];
    while let Some((lo, hi, depth)) = pending.pop() {
        if depth >= recursion_limit {
            return Err(SortError::RecursionExhausted {
                limit: recursion_limit,
            });
        }
        let pivot = lo + partition(&mut data[lo..=hi]);
        // Only ranges of two or more elements earn a worklist entry; the
        // one-element base case is a no-op.
        if pivot > lo + 1 {
            pending.push((lo, pivot - 1, depth + 1));
        }
        if pivot + 1 < hi {
            pending.push((pivot + 1, hi, depth + 1));
        }
    }
    Ok(())
}

/// Lomuto partition: last element is the pivot, `boundary` walks the count
/// of elements confirmed <= pivot. Returns the pivot's final index within
/// `range`. Caller guarantees `range.len() >= 2`.
fn partition(range: &mut [i64]) -> usize {
    let last = range.len() - 1;
    let pivot = range[last];
    let mut boundary = 0;
    for scan in 0..last {
        if range[scan] <= pivot {
            range.swap(boundary, scan);
            boundary += 1;
        }
    }
    range.swap(boundary, last);
    boundary
}

/// Top-down merge sort: split at floor(N/2), sort both halves, merge.
///
/// Divide depth is ⌈log₂N⌉, so only a deliberately tiny budget can exhaust
/// it — the same failure surface as quicksort, exercised in stress tests.
pub fn merge_sort(data: &mut [i64], recursion_limit: usize) -> Result<(), SortError> {
    merge_sort_range(data, recursion_limit, recursion_limit)
}

fn merge_sort_range(data: &mut [i64], depth_left: usize, limit: usize) -> Result<(), SortError> {
    if data.len() <= 1 {
        return Ok(());
    }
    if depth_left == 0 {
        return Err(SortError::RecursionExhausted { limit });
    }
    let mid = data.len() / 2;
    {
        let (left, right) = data.split_at_mut(mid);
        merge_sort_range(left, depth_left - 1, limit)?;
        merge_sort_range(right, depth_left - 1, limit)?;
    }
    merge(data, mid);
    Ok(())
}

/// Merge the two sorted halves of `data` split at `mid`, taking the left
/// head on ties.
fn merge(data: &mut [i64], mid: usize) {
    let mut merged = Vec::with_capacity(data.len());
    {
        let (left, right) = data.split_at(mid);
        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            if left[i] <= right[j] {
                merged.push(left[i]);
                i += 1;
            } else {
                merged.push(right[j]);
                j += 1;
            }
        }
        merged.extend_from_slice(&left[i..]);
        merged.extend_from_slice(&right[j..]);
    }
    data.copy_from_slice(&merged);
}

/// Whether `data` is in non-decreasing order.
pub fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn shuffled(len: usize, seed: u64) -> Vec<i64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut data: Vec<i64> = (0..len as i64).collect();
        data.shuffle(&mut rng);
        data
    }

    fn assert_sorts(algorithm: Algorithm, input: &[i64]) {
        let mut actual = input.to_vec();
        let mut expected = input.to_vec();
        algorithm
            .sort(&mut actual, DEFAULT_RECURSION_LIMIT)
            .unwrap();
        expected.sort();
        assert_eq!(actual, expected, "{algorithm} mis-sorted {input:?}");
    }

    #[test]
    fn sorts_random_permutations() {
        for algorithm in Algorithm::ALL {
            for seed in 0..4 {
                assert_sorts(algorithm, &shuffled(257, seed));
            }
        }
    }

    #[test]
    fn sorts_inputs_with_duplicates() {
        let input = vec![5, 2, 8, 2, 9, 5, 5, 1, 8, 0];
        for algorithm in Algorithm::ALL {
            assert_sorts(algorithm, &input);
        }
    }

    #[test]
    fn idempotent_on_sorted_input() {
        let sorted: Vec<i64> = (0..128).collect();
        for algorithm in Algorithm::ALL {
            let mut data = sorted.clone();
            algorithm.sort(&mut data, DEFAULT_RECURSION_LIMIT).unwrap();
            assert_eq!(data, sorted);
        }
    }

    #[test]
    fn empty_and_single_element_are_untouched() {
        for algorithm in Algorithm::ALL {
            let mut empty: Vec<i64> = vec![];
            algorithm.sort(&mut empty, DEFAULT_RECURSION_LIMIT).unwrap();
            assert!(empty.is_empty());

            let mut single = vec![42];
            algorithm
                .sort(&mut single, DEFAULT_RECURSION_LIMIT)
                .unwrap();
            assert_eq!(single, vec![42]);
        }
    }

    #[test]
    fn sorts_reverse_sorted_input() {
        let input: Vec<i64> = (1..=300).rev().collect();
        for algorithm in Algorithm::ALL {
            assert_sorts(algorithm, &input);
        }
    }

    #[test]
    fn quicksort_depth_grows_linearly_on_sorted_input() {
        // Last-element pivoting makes every partition maximally lopsided,
        // so a budget far below N must trip.
        let mut data: Vec<i64> = (0..256).collect();
        let err = quicksort(&mut data, 16).unwrap_err();
        assert_eq!(err, SortError::RecursionExhausted { limit: 16 });
    }

    #[test]
    fn quicksort_shallow_budget_suffices_for_random_input() {
        // Random input keeps partitions balanced, so a budget far below N
        // is plenty. 128 leaves a wide margin over the expected ~3·ln N.
        let mut data = shuffled(1024, 7);
        quicksort(&mut data, 128).unwrap();
        assert!(is_sorted(&data));
    }

    #[test]
    fn merge_sort_trips_on_tiny_budget() {
        let mut data = shuffled(64, 3);
        let err = merge_sort(&mut data, 2).unwrap_err();
        assert_eq!(err, SortError::RecursionExhausted { limit: 2 });
    }

    #[test]
    fn merge_sort_budget_is_logarithmic() {
        let mut data = shuffled(1024, 5);
        // 1024 elements need exactly 10 levels.
        merge_sort(&mut data, 10).unwrap();
        assert!(is_sorted(&data));
    }

    #[test]
    fn zero_budget_only_matters_for_real_work() {
        let mut empty: Vec<i64> = vec![];
        quicksort(&mut empty, 0).unwrap();
        merge_sort(&mut empty, 0).unwrap();

        let mut pair = vec![2, 1];
        assert!(quicksort(&mut pair, 0).is_err());
    }

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            let parsed: Algorithm = algorithm.name().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
        assert!("bubblesort".parse::<Algorithm>().is_err());
    }

    #[test]
    fn is_sorted_detects_order() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2, 3]));
        assert!(!is_sorted(&[2, 1]));
    }
}
