//! ccrider - CC Rider curve tool
//!
//! Builds, inspects and simulates the curves that map one controller input
//! to shaped outputs.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::*;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "ccrider")]
#[command(about = "CC Rider - shape controller values with auto-tangent curves")]
#[command(version)]
#[command(long_about = "
ccrider maps one normalized controller input to outputs shaped by smooth
curves through 2-9 control points.

Control points are given in percent (0-100), inputs in [0,1].
Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Engine configuration file (.json, .yaml or .yml)
    #[arg(short, long, global = true, env = "CCRIDER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a curve at one or more inputs
    Eval(EvalArgs),

    /// Print the warmed lookup table of a curve
    Table(TableArgs),

    /// Print the cubic segments built through the points
    Segments(SegmentsArgs),

    /// Resample the points to a new count, keeping the curve's shape
    Resample(ResampleArgs),

    /// Feed inputs to a rider bank and print what each rider emits
    Simulate(SimulateArgs),

    /// Print the effective engine configuration
    Config,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("ccrider={log_level},ccrider_engine={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e
                .downcast_ref::<CliError>()
                .map(CliError::exit_code)
                .unwrap_or(1);

            std::process::exit(exit_code);
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = cli.config.as_ref();
    match &cli.command {
        Commands::Eval(args) => commands::eval::execute(args, cli.json),
        Commands::Table(args) => commands::table::execute(args, cli.json),
        Commands::Segments(args) => commands::segments::execute(args, cli.json),
        Commands::Resample(args) => commands::resample::execute(args, cli.json),
        Commands::Simulate(args) => commands::simulate::execute(args, config, cli.json),
        Commands::Config => commands::config::execute(config, cli.json),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}
