//! Command-Line Interface
//!
//! Thin layer over the sweep driver: parse arguments, run the sweep, build
//! the report, render it. Shape and algorithm tags are validated at this
//! boundary — an unrecognized tag aborts before any trial runs.

use crate::sweep::{DEFAULT_SEED, SweepConfig, run_sweep};
use clap::Parser;
use sortbench_core::{Algorithm, DEFAULT_RECURSION_LIMIT, DatasetShape, TrialConfig};
use sortbench_report::{
    OutputFormat, ReportMeta, build_report, format_human_output, generate_json_report,
};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// SortBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(version, about = "Divide-and-conquer sorting benchmark harness")]
pub struct Cli {
    /// Input sizes to sweep, ascending
    #[arg(long, value_delimiter = ',', default_values_t = vec![1000usize, 5000, 10_000])]
    pub sizes: Vec<usize>,

    /// Dataset shapes to generate: random, sorted, reverse-sorted
    #[arg(long, value_delimiter = ',', default_values_t = DatasetShape::ALL)]
    pub shapes: Vec<DatasetShape>,

    /// Algorithms to run: quicksort, mergesort
    #[arg(long, value_delimiter = ',', default_values_t = Algorithm::ALL)]
    pub algorithms: Vec<Algorithm>,

    /// Seed for the dataset generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Divide-depth budget for a single trial
    #[arg(long, default_value_t = DEFAULT_RECURSION_LIMIT)]
    pub recursion_limit: usize,

    /// Skip the post-sort sortedness check
    #[arg(long)]
    pub no_verify: bool,

    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Write the rendered report to a file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the SortBench CLI. This is the binary's entry point.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(Cli::parse())
}

/// Run the SortBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let filter = if cli.verbose {
        "sortbench=debug"
    } else {
        "sortbench=info"
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = SweepConfig {
        sizes: cli.sizes.clone(),
        shapes: cli.shapes.clone(),
        algorithms: cli.algorithms.clone(),
        seed: cli.seed,
        trial: TrialConfig {
            recursion_limit: cli.recursion_limit,
            verify: !cli.no_verify,
        },
    };
    anyhow::ensure!(config.trial_count() > 0, "nothing to run: empty sweep");

    println!(
        "Running {} trials ({} sizes x {} shapes x {} algorithms)...\n",
        config.trial_count(),
        config.sizes.len(),
        config.shapes.len(),
        config.algorithms.len()
    );

    let start_time = Instant::now();
    let table = run_sweep(&config);
    let total_duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    let meta = ReportMeta::new(cli.seed, config.sizes.clone(), cli.recursion_limit);
    let report = build_report(&table, meta, total_duration_ms);

    let output = match cli.format {
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Human => format_human_output(&report),
    };

    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)?;
        file.write_all(output.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    Ok(())
}
