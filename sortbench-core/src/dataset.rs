//! Synthetic Dataset Generation
//!
//! Produces the three input shapes the sweep exercises. Generation is
//! driven by a caller-supplied RNG so a sweep is reproducible from its seed
//! alone.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Generation policy for a synthetic dataset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetShape {
    /// Uniformly random permutation of distinct integers.
    Random,
    /// Already in ascending order — quicksort's worst case.
    Sorted,
    /// Descending order — equally adversarial for last-element pivoting.
    ReverseSorted,
}

impl DatasetShape {
    /// Every shape, in sweep order.
    pub const ALL: [DatasetShape; 3] = [
        DatasetShape::Random,
        DatasetShape::Sorted,
        DatasetShape::ReverseSorted,
    ];

    /// Stable kebab-case name, also accepted by [`FromStr`](std::str::FromStr).
    pub fn name(self) -> &'static str {
        match self {
            DatasetShape::Random => "random",
            DatasetShape::Sorted => "sorted",
            DatasetShape::ReverseSorted => "reverse-sorted",
        }
    }
}

impl std::fmt::Display for DatasetShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse error for an unrecognized dataset shape tag.
///
/// Shape tags only exist at the textual boundary (CLI arguments, config);
/// in-process code carries the closed [`DatasetShape`] enum, so a bad tag is
/// a configuration error that aborts the run rather than a condition any
/// trial has to tolerate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized dataset shape {0:?} (expected random, sorted, or reverse-sorted)")]
pub struct InvalidShape(pub String);

impl std::str::FromStr for DatasetShape {
    type Err = InvalidShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(DatasetShape::Random),
            "sorted" => Ok(DatasetShape::Sorted),
            "reverse-sorted" => Ok(DatasetShape::ReverseSorted),
            other => Err(InvalidShape(other.to_string())),
        }
    }
}

/// Generate a dataset of `size` elements with the given shape.
///
/// - `Random`: `size` distinct integers sampled without replacement from
///   `[0, size*10)`.
/// - `Sorted`: `0, 1, …, size-1`.
/// - `ReverseSorted`: `size, size-1, …, 1`.
pub fn generate<R: Rng + ?Sized>(size: usize, shape: DatasetShape, rng: &mut R) -> Vec<i64> {
    match shape {
        DatasetShape::Random => rand::seq::index::sample(rng, size * 10, size)
            .into_iter()
            .map(|value| value as i64)
            .collect(),
        DatasetShape::Sorted => (0..size as i64).collect(),
        DatasetShape::ReverseSorted => (1..=size as i64).rev().collect(),
    }
}
