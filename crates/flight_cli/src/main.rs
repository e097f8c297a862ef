//! Flight CLI - Schedule Normalisation for Insertion Orders
//!
//! # Commands
//!
//! - `flight plan --input <file>` - Plan every line of an order
//! - `flight time <TEXT>` - Parse an air-time string
//! - `flight days <TEXT>` - Resolve a weekday descriptor
//! - `flight ros <LANGUAGE>` - Print a run-of-schedule block
//! - `flight check` - Print the effective configuration

use clap::{Parser, Subcommand};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use flight_cli::commands;
use flight_cli::config::FlightConfig;
use flight_cli::Result;

/// Flight schedule normalisation CLI
#[derive(Parser)]
#[command(name = "flight")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "flight.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan every line of a JSON order
    Plan {
        /// Path to order file (JSON)
        #[arg(short, long)]
        input: String,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Parse an air-time string
    Time {
        /// Time text, e.g. "11-130p"
        text: String,
    },

    /// Resolve a weekday descriptor
    Days {
        /// Day text, e.g. "MTuWThF"
        text: String,
    },

    /// Print the run-of-schedule block for a language ("all" for every block)
    Ros {
        /// Language name
        language: String,
    },

    /// Check the effective configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = FlightConfig::load_with_env_and_validate(Path::new(&cli.config))?;

    // Initialise tracing
    let default_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Plan { input, format } => commands::plan::run(&input, &format, &config),
        Commands::Time { text } => commands::time::run(&text),
        Commands::Days { text } => commands::days::run(&text),
        Commands::Ros { language } => commands::ros::run(&language),
        Commands::Check => commands::check::run(&config, &cli.config),
    }
}
