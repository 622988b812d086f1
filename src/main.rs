// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `venn` - compute a set operation and print the result with its diagram plan.
//!
//! ```bash
//! venn --set A=1,2,3 --set B=2,3,4 --op union
//! venn --set 1,2 --set 2,3 --set 2,4 --op intersection --format json
//! ```

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use venn_sets::input::{InputCollector, SetInput};
use venn_sets::report::{Formatter, OutputFormat};
use venn_sets::{Limits, Operation, Report};

/// Apply union, intersection, difference or symmetric difference to named sets.
#[derive(Debug, Parser)]
#[command(name = "venn")]
#[command(version, about, long_about = None)]
struct Cli {
    /// A set as NAME=a,b,c (or just a,b,c to name it A, B, ... by position)
    #[arg(short, long = "set", required = true)]
    sets: Vec<String>,

    /// Operation: union, intersection, difference, symmetric-difference
    #[arg(short, long, default_value = "union")]
    op: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: CliFormat,

    /// TOML file with input limits
    #[arg(short, long, env = "VENN_CONFIG")]
    config: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log computation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    Text,
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let limits = match &cli.config {
        Some(path) => Limits::load(path).with_context(|| format!("loading {}", path))?,
        None => Limits::default(),
    };

    let inputs = cli
        .sets
        .iter()
        .enumerate()
        .map(|(position, definition)| SetInput::parse(definition, position))
        .collect::<Result<Vec<_>, _>>()?;
    let sets = InputCollector::new(limits.clone()).collect(&inputs)?;
    let operation: Operation = cli.op.parse()?;

    let report = Report::build(&sets, operation, &limits)?;
    let formatter = Formatter::new(cli.format.into(), !cli.no_color);
    let output = formatter.format_report(&report)?;
    println!("{}", output.trim_end());
    Ok(())
}
