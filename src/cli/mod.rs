//! Command-line interface for pltform
//!
//! Provides `config`, `profiles`, `rank`, `argv` and `format` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod argv;
mod config;
mod format;
mod profiles;
mod rank;
mod utils;

/// Layered YAML config profiles and prediction helpers
#[derive(Parser)]
#[command(name = "pltform")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print effective parameters for a config section
    Config(config::ConfigArgs),

    /// List loaded profiles and their sections
    Profiles(profiles::ProfilesArgs),

    /// Rank numeric values (largest is rank 1 by default)
    Rank(rank::RankArgs),

    /// Split tokens into typecast args and kwargs, printed as JSON
    Argv(argv::ArgvArgs),

    /// Substitute <TOKEN> placeholders from key=value arguments
    Format(format::FormatArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Config(args) => config::run(args),
        Commands::Profiles(args) => profiles::run(args),
        Commands::Rank(args) => rank::run(args),
        Commands::Argv(args) => argv::run(args),
        Commands::Format(args) => format::run(args),
    }
}
