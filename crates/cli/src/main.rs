//! atomeval CLI - evaluates predicted ground-atom truth values against ground truth
//!
//! This binary provides the command-line interface for the evaluator.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::{Context, Result};
use atomeval::{evaluate, load_dataset};
use atomeval_core::{AtomStatus, Config, ContinuousMetric};
use atomeval_evaluation::ComparisonOptions;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "atomeval")]
#[command(about = "Evaluate predicted truth values of ground atoms against ground truth")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare predicted atoms with ground-truth atoms
    Compare {
        /// JSON dump of predicted atoms
        #[arg(long, value_name = "FILE")]
        predicted: PathBuf,

        /// JSON dump of ground-truth atoms (observed unless marked otherwise)
        #[arg(long, value_name = "FILE")]
        truth: PathBuf,

        /// Predicate to compare; repeat for several (default: all predicted)
        #[arg(long = "predicate", value_name = "NAME")]
        predicates: Vec<String>,

        /// Binarization threshold, overrides the configuration
        #[arg(long)]
        threshold: Option<f64>,

        /// Continuous metric (mse or mae), overrides the configuration
        #[arg(long)]
        metric: Option<ContinuousMetric>,

        /// Print reports as JSON
        #[arg(long)]
        json: bool,
    },
}

struct CompareArgs {
    predicted: PathBuf,
    truth: PathBuf,
    predicates: Vec<String>,
    threshold: Option<f64>,
    metric: Option<ContinuousMetric>,
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    config.validate()?;

    // Initialize logging
    init_logging(cli.verbose, &config.logging.level)?;

    match cli.command {
        Some(Commands::Compare {
            predicted,
            truth,
            predicates,
            threshold,
            metric,
            json,
        }) => compare(
            &config,
            CompareArgs {
                predicted,
                truth,
                predicates,
                threshold,
                metric,
                json,
            },
        ),
        None => {
            // Default behavior - show help
            println!("Run 'atomeval compare --predicted FILE --truth FILE', or --help for more options");
            Ok(())
        }
    }
}

/// Initialize logging system
fn init_logging(verbose: bool, configured_level: &str) -> Result<()> {
    let level = if verbose {
        "debug".to_string()
    } else {
        configured_level.to_ascii_lowercase()
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "atomeval={level},atomeval_core={level},atomeval_evaluation={level}"
        ))
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn compare(config: &Config, args: CompareArgs) -> Result<()> {
    let mut evaluation = config.evaluation.clone();
    if let Some(threshold) = args.threshold {
        evaluation.threshold = threshold;
    }
    if let Some(metric) = args.metric {
        evaluation.metric = metric;
    }
    let options = ComparisonOptions::from_config(&evaluation)?;

    let predicate_names = if args.predicates.is_empty() {
        evaluation.predicates
    } else {
        args.predicates
    };

    let predicted = load(&args.predicted, AtomStatus::Unobserved)?;
    let truth = load(&args.truth, AtomStatus::Observed)?;
    info!(
        predicted = predicted.len(),
        truth = truth.len(),
        "Loaded atom dumps"
    );

    let reports = evaluate(&predicted, &truth, &predicate_names, options)?;

    if args.json {
        let output =
            serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?;
        println!("{output}");
    } else {
        for report in &reports {
            println!("{}: {}", report.predicate, report.statistics);
        }
    }

    Ok(())
}

fn load(path: &Path, default_status: AtomStatus) -> Result<atomeval_core::InMemoryDatabase> {
    load_dataset(path, default_status)
        .with_context(|| format!("Failed to load atom dump {}", path.display()))
}
