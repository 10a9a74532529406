#![warn(missing_docs)]
//! SortBench Report - Results Aggregation and Reporting
//!
//! Collects per-trial measurements into an ordered results table and turns
//! it into the outputs external reporters consume:
//! - JSON (machine-readable, for chart renderers)
//! - Human-readable terminal summary

mod format;
mod json;
mod report;
mod table;

pub use format::{format_bytes, format_duration, format_human_output};
pub use json::generate_json_report;
pub use report::{
    Report, ReportMeta, ReportSummary, SCHEMA_VERSION, SeriesReport, TrialPoint, build_report,
};
pub use table::ResultsTable;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with full schema
    Json,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
