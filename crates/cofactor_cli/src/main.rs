//! Cofactor CLI
//!
//! Factor integers and derive their GCF and LCM by pairing shared primes.
//! Provides:
//! - `factor`: prime factorization of one integer
//! - `analyze`: GCF/LCM of a pair, optionally with the narrated steps
//! - `batch`: every pair listed in a cofactor.toml
//! - `init`: write a starter cofactor.toml

mod config;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cofactor_core::{analyze_with, factorize, parse_operand, Analysis, MatchStrategy};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CofactorConfig;
use crate::report::OutputFormat;

/// Prime-factor based GCF and LCM
#[derive(Parser, Debug)]
#[command(name = "cofactor")]
#[command(about = "Derive GCF and LCM by matching prime factors")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the prime factorization of N
    Factor {
        #[arg(value_parser = parse_operand, allow_negative_numbers = true)]
        n: u64,
    },

    /// Derive GCF and LCM of X and Y
    Analyze {
        #[arg(value_parser = parse_operand, allow_negative_numbers = true, default_value = "9")]
        x: u64,

        #[arg(value_parser = parse_operand, allow_negative_numbers = true, default_value = "15")]
        y: u64,

        /// How shared primes are paired (greedy, by-count)
        #[arg(long, value_parser = MatchStrategy::from_str, default_value = "greedy")]
        strategy: MatchStrategy,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Include the step-by-step narration
        #[arg(long)]
        steps: bool,
    },

    /// Analyze every pair listed in a cofactor.toml
    Batch {
        /// Config file, or a directory containing cofactor.toml
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Override the configured output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Write a starter cofactor.toml
    Init {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Factor { n } => {
            let factors = factorize(n)?;
            println!("{}", report::factor_line(n, &factors));
        }
        Command::Analyze {
            x,
            y,
            strategy,
            format,
            steps,
        } => {
            let analysis = analyze_with(x, y, strategy)
                .with_context(|| format!("Failed to analyze {x} and {y}"))?;
            println!("{}", report::render(format, &analysis, steps)?);
        }
        Command::Batch { path, format } => {
            let config = CofactorConfig::load_from_dir(&path)?;
            info!(
                pairs = config.pairs.len(),
                strategy = %config.analysis.strategy,
                "running batch"
            );
            let analyses = config
                .pairs
                .iter()
                .map(|pair| {
                    analyze_with(pair.x, pair.y, config.analysis.strategy)
                        .with_context(|| format!("Failed to analyze {} and {}", pair.x, pair.y))
                })
                .collect::<Result<Vec<Analysis>>>()?;
            let format = format.unwrap_or(config.output.format);
            println!(
                "{}",
                report::render_all(format, &analyses, config.analysis.steps)?
            );
        }
        Command::Init { dir } => {
            let path = config::write_default(&dir)?;
            info!("Wrote {}", path.display());
            println!("Created {}", path.display());
        }
    }

    Ok(())
}
