//! Output Formatting
//!
//! Human-readable terminal rendering of a [`Report`]: one section per
//! dataset shape with a row per input size and a column per algorithm,
//! showing elapsed time and peak memory (or the failure that took the
//! trial down), plus a trailing summary block.

use crate::report::{Report, SeriesReport};
use sortbench_core::{DatasetShape, TrialOutcome};
use std::collections::BTreeMap;

/// Width of one algorithm column in the per-shape tables.
const CELL_WIDTH: usize = 42;

/// Render a nanosecond count with a readable unit.
pub fn format_duration(nanos: u64) -> String {
    const MICRO: u64 = 1_000;
    const MILLI: u64 = 1_000_000;
    const SECOND: u64 = 1_000_000_000;

    if nanos < MICRO {
        format!("{} ns", nanos)
    } else if nanos < MILLI {
        format!("{:.2} µs", nanos as f64 / MICRO as f64)
    } else if nanos < SECOND {
        format!("{:.2} ms", nanos as f64 / MILLI as f64)
    } else {
        format!("{:.2} s", nanos as f64 / SECOND as f64)
    }
}

/// Render a byte count with a readable binary unit.
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    const GIB: u64 = 1024 * 1024 * 1024;

    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else if bytes < GIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.2} GiB", bytes as f64 / GIB as f64)
    }
}

fn format_cell(outcome: &TrialOutcome) -> String {
    match outcome {
        TrialOutcome::Completed {
            elapsed_ns,
            peak_bytes,
        } => format!(
            "✓ {} ({})",
            format_duration(*elapsed_ns),
            format_bytes(*peak_bytes)
        ),
        TrialOutcome::Failed { kind } => format!("✗ {}", kind),
    }
}

/// Format a report for human-readable terminal display.
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("SortBench Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");
    output.push_str(&format!(
        "Seed: {}  Recursion limit: {}\n\n",
        report.meta.seed, report.meta.recursion_limit
    ));

    // Group series by shape: one table per shape, one column per algorithm.
    let mut shapes: BTreeMap<DatasetShape, Vec<&SeriesReport>> = BTreeMap::new();
    for series in &report.series {
        shapes.entry(series.shape).or_default().push(series);
    }

    for (shape, series) in shapes {
        output.push_str(&format!("Shape: {}\n", shape));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        // Header row. Pad the name, not the Display impl — custom Display
        // impls ignore width flags.
        output.push_str(&format!("  {:>10}", "size"));
        for s in &series {
            output.push_str(&format!(
                "  {:<width$}",
                s.algorithm.name(),
                width = CELL_WIDTH
            ));
        }
        output.push('\n');

        let rows = series.iter().map(|s| s.points.len()).max().unwrap_or(0);
        for row in 0..rows {
            let size = series
                .iter()
                .find_map(|s| s.points.get(row))
                .map(|p| p.size)
                .unwrap_or(0);
            output.push_str(&format!("  {:>10}", size));
            for s in &series {
                let cell = s
                    .points
                    .get(row)
                    .map(|p| format_cell(&p.outcome))
                    .unwrap_or_else(|| "-".to_string());
                output.push_str(&format!("  {:<width$}", cell, width = CELL_WIDTH));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    // Summary
    output.push_str("Summary\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "  Trials: {}  Completed: {}  Failed: {}\n",
        report.summary.total_trials, report.summary.completed, report.summary.failed
    ));
    output.push_str(&format!(
        "  Duration: {:.2} ms\n",
        report.summary.total_duration_ms
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportMeta, build_report};
    use crate::table::ResultsTable;
    use sortbench_core::{Algorithm, FailureKind, Measurement};

    #[test]
    fn duration_units_scale() {
        assert_eq!(format_duration(999), "999 ns");
        assert_eq!(format_duration(1_500), "1.50 µs");
        assert_eq!(format_duration(2_340_000), "2.34 ms");
        assert_eq!(format_duration(1_500_000_000), "1.50 s");
    }

    #[test]
    fn byte_units_scale() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(40_960), "40.0 KiB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MiB");
    }

    #[test]
    fn human_output_shows_shapes_and_failures() {
        let mut table = ResultsTable::new();
        table.record(Measurement {
            algorithm: Algorithm::QuickSort,
            shape: DatasetShape::Sorted,
            size: 1000,
            outcome: TrialOutcome::Failed {
                kind: FailureKind::RecursionExhausted { limit: 16 },
            },
        });
        table.record(Measurement {
            algorithm: Algorithm::MergeSort,
            shape: DatasetShape::Sorted,
            size: 1000,
            outcome: TrialOutcome::Completed {
                elapsed_ns: 120_000,
                peak_bytes: 8192,
            },
        });

        let report = build_report(&table, ReportMeta::new(42, vec![1000], 16), 1.0);
        let text = format_human_output(&report);

        assert!(text.contains("Shape: sorted"));
        assert!(text.contains("quicksort"));
        assert!(text.contains("mergesort"));
        assert!(text.contains("✗ recursion budget of 16 frames exhausted"));
        assert!(text.contains("✓ 120.00 µs (8.0 KiB)"));
        assert!(text.contains("Trials: 2  Completed: 1  Failed: 1"));
    }
}
