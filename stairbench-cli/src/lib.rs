#![warn(missing_docs)]
//! StairBench CLI
//!
//! Command-line harness around the measurement runtime. Call
//! [`run`] from your binary's `main`; the binary must install the
//! tracking allocator for memory readings to be non-zero:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOC: stairbench_core::TrackingAllocator = stairbench_core::TrackingAllocator;
//!
//! fn main() -> anyhow::Result<()> {
//!     stairbench_cli::run()
//! }
//! ```

mod config;
mod inputs;

pub use config::{InputsConfig, OutputConfig, RunnerConfig, StairConfig};
pub use inputs::{read_inputs, DEFAULT_SIZES};

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use stairbench_algos::ALGORITHMS;
use stairbench_core::{pin_to_cpu, run_trials, AlgorithmDef, DEFAULT_REPETITIONS};
use stairbench_report::{
    format_memory, format_time, generate_csv_report, generate_json_report, generate_text_report,
    DataSheet, Report,
};
use stairbench_stats::aggregate;
use std::path::{Path, PathBuf};

/// StairBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "stairbench")]
#[command(author, version, about = "Staircase-climbing benchmark harness")]
pub struct Cli {
    /// Optional subcommand (run, analyze, list); defaults to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Trials per (algorithm, size) configuration.
    /// Invalid values fall back to the default (30) with a warning.
    pub repetitions: Option<String>,

    /// Input-size file, one positive integer per line
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Directory the report artifacts are written into
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Also write a JSON report next to the text and CSV artifacts
    #[arg(long)]
    pub json: bool,

    /// Pin the measurement thread to a CPU core (Linux only)
    #[arg(long)]
    pub pin_cpu: Option<usize>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the statistical benchmark (default)
    Run,
    /// Measure each (algorithm, size) once and print the record table
    Analyze {
        /// Sizes to analyze; defaults to the input file or built-ins
        sizes: Vec<u64>,
        /// Save the records to CSV, optionally naming the file
        #[arg(long)]
        csv: Option<Option<PathBuf>>,
    },
    /// List the registered algorithms and their size ceilings
    List,
}

/// Run the StairBench CLI. Main entry point for the `stairbench` binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the StairBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let filter = if cli.verbose {
        "stairbench=debug"
    } else {
        "stairbench=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .ok();

    let config = StairConfig::discover().unwrap_or_default();
    let repetitions = resolve_repetitions(cli.repetitions.as_deref(), &config);

    if let Some(cpu) = cli.pin_cpu.or(config.runner.pin_cpu) {
        if let Err(err) = pin_to_cpu(cpu) {
            eprintln!("Warning: failed to pin to CPU {}: {}", cpu, err);
        }
    }

    match cli.command {
        None | Some(Commands::Run) => run_benchmark(&cli, &config, repetitions),
        Some(Commands::Analyze { ref sizes, ref csv }) => {
            run_analysis(&cli, &config, sizes, csv.clone())
        }
        Some(Commands::List) => {
            list_algorithms();
            Ok(())
        }
    }
}

/// Resolve the trial count: CLI argument wins, leniently parsed; then the
/// config file; invalid CLI values warn and fall back to the default.
fn resolve_repetitions(raw: Option<&str>, config: &StairConfig) -> u32 {
    match raw {
        None => config.runner.repetitions.max(1),
        Some(raw) => match raw.parse::<u32>() {
            Ok(n) if n >= 1 => n,
            _ => {
                eprintln!(
                    "Warning: invalid repetition count '{}', using default ({})",
                    raw, DEFAULT_REPETITIONS
                );
                DEFAULT_REPETITIONS
            }
        },
    }
}

fn input_path(cli: &Cli, config: &StairConfig) -> PathBuf {
    cli.input
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.inputs.path))
}

fn output_dir(cli: &Cli, config: &StairConfig) -> PathBuf {
    cli.output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.directory))
}

/// The statistical benchmark: every algorithm at every input size,
/// `repetitions` trials each, aggregated and written to the report
/// artifacts.
fn run_benchmark(cli: &Cli, config: &StairConfig, repetitions: u32) -> anyhow::Result<()> {
    let input_path = input_path(cli, config);

    println!();
    println!("{}", "=".repeat(80));
    println!("{:^80}", "STAIRCASE BENCHMARK");
    println!("{}", "=".repeat(80));
    println!();
    println!("Configuration:");
    println!("  trials per configuration: {}", repetitions);
    println!("  primary metric: median");
    println!("  input sizes: {}", input_path.display());
    println!("{}", "=".repeat(80));

    let sizes = read_inputs(&input_path);
    println!("\nStaircase sizes: {:?}\n", sizes);

    let mut report = Report::new();

    for algo in ALGORITHMS {
        println!("{}", "=".repeat(80));
        println!("Benchmarking: {}", algo.name);
        println!("{}", "=".repeat(80));

        for &size in &sizes {
            println!("\nN = {}:", size);

            match run_measured_trials(algo, size, repetitions) {
                Ok(stats) => {
                    report.record(algo.name, size, stats);
                    println!(
                        "  -> median time: {}",
                        format_time(stats.time.median)
                    );
                    println!(
                        "  -> median memory: {}",
                        format_memory(stats.memory.median as u64)
                    );
                }
                Err(err) => {
                    eprintln!("  skipped: {}", err);
                    tracing::debug!("configuration dropped from the report: {err}");
                }
            }
        }
        println!();
    }

    write_report_artifacts(cli, config, &report, repetitions, &input_path)?;

    println!("{}", "=".repeat(80));
    println!("{:^80}", "BENCHMARK COMPLETE");
    println!("{}", "=".repeat(80));

    Ok(())
}

/// Run one (algorithm, size) configuration under a progress bar and
/// aggregate the samples.
fn run_measured_trials(
    algo: &AlgorithmDef,
    size: u64,
    repetitions: u32,
) -> anyhow::Result<stairbench_stats::AggregateStats> {
    let pb = ProgressBar::new(repetitions as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(format!("{} n={}", algo.id, size));

    let outcome = run_trials(algo, size, repetitions, |done| {
        pb.set_position(done as u64);
    });
    pb.finish_and_clear();

    let outcome = outcome?;
    let stats = aggregate(&outcome.samples)?;
    Ok(stats)
}

/// Write the text, CSV and (optional) JSON artifacts.
///
/// Each artifact is independent: a failure writing one is reported and
/// does not prevent the others.
fn write_report_artifacts(
    cli: &Cli,
    config: &StairConfig,
    report: &Report,
    repetitions: u32,
    input_path: &Path,
) -> anyhow::Result<()> {
    let dir = output_dir(cli, config);
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!(
            "Error: cannot create output directory '{}': {}",
            dir.display(),
            err
        );
        return Ok(());
    }

    let input_source = input_path.display().to_string();
    let text = generate_text_report(report, repetitions, &input_source);
    write_artifact(&dir.join(&config.output.text_file), &text, "text report");

    let csv = generate_csv_report(report);
    write_artifact(&dir.join(&config.output.csv_file), &csv, "CSV report");

    let json_file = if cli.json {
        Some(
            config
                .output
                .json_file
                .clone()
                .unwrap_or_else(|| "benchmark_results.json".to_string()),
        )
    } else {
        config.output.json_file.clone()
    };

    if let Some(json_file) = json_file {
        match generate_json_report(report, repetitions) {
            Ok(json) => {
                write_artifact(&dir.join(&json_file), &json, "JSON report");
            }
            Err(err) => eprintln!("Error: failed to encode JSON report: {}", err),
        }
    }

    Ok(())
}

fn write_artifact(path: &Path, contents: &str, label: &str) {
    match std::fs::write(path, contents) {
        Ok(()) => println!("\u{2713} {} written to: {}", label, path.display()),
        Err(err) => eprintln!(
            "Error: failed to write {} ({}): {}",
            label,
            path.display(),
            err
        ),
    }
}

/// Single-shot analysis: measure each (algorithm, size) once, print the
/// record table and the per-algorithm summary.
fn run_analysis(
    cli: &Cli,
    config: &StairConfig,
    sizes: &[u64],
    csv: Option<Option<PathBuf>>,
) -> anyhow::Result<()> {
    let sizes = if sizes.is_empty() {
        read_inputs(&input_path(cli, config))
    } else {
        sizes.to_vec()
    };

    println!();
    println!("{}", "=".repeat(80));
    println!("{:^80}", "STAIRCASE PROBLEM - COMPARATIVE ANALYSIS");
    println!("{}", "=".repeat(80));

    let mut sheet = DataSheet::new();

    for &size in &sizes {
        println!("\nTesting with N = {}", size);
        println!("{}", "-".repeat(60));

        for algo in ALGORITHMS {
            match run_trials(algo, size, 1, |_| {}) {
                Ok(outcome) => {
                    let Some(sample) = outcome.samples.first() else {
                        continue;
                    };
                    let digits = outcome.result.to_string().len();

                    println!("{}:", algo.name);
                    println!("  result: {} ({} digits)", outcome.result, digits);
                    println!(
                        "  time: {}",
                        format_time(sample.duration.as_secs_f64())
                    );
                    println!("  memory: {}", format_memory(sample.peak_bytes));

                    sheet.add_record(
                        algo.name,
                        size,
                        outcome.result,
                        sample.duration.as_secs_f64(),
                        sample.peak_bytes,
                    );
                }
                Err(err) => eprintln!("{}: skipped: {}", algo.name, err),
            }
        }
    }

    print!("{}", sheet.render_table());
    print!("{}", sheet.render_summary());

    if let Some(csv_path) = csv {
        let dir = output_dir(cli, config);
        if let Err(err) = std::fs::create_dir_all(&dir) {
            eprintln!(
                "Error: cannot create output directory '{}': {}",
                dir.display(),
                err
            );
            return Ok(());
        }
        let path = csv_path.unwrap_or_else(|| dir.join(DataSheet::default_csv_filename()));
        write_artifact(&path, &sheet.to_csv(), "record CSV");
    }

    Ok(())
}

fn list_algorithms() {
    println!("Registered algorithms:");
    for algo in ALGORITHMS {
        println!("  {:<12} {} (max n = {})", algo.id, algo.name, algo.max_n);
    }
    println!("{} algorithms found.", ALGORITHMS.len());
}
