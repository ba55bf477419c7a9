//! # tarpack Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the tarpack CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Pack a folder under the "app" prefix
//! tarpack pack -o app.tar ./dist --prefix app
//!
//! # Inspect the result with debug logging
//! tarpack -vv list app.tar
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the command handler
//! 4. Display any error and exit with status 1
//!
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // `pack` and `list` handlers.

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "tarpack",
    about = "Build deterministic tar archives from folders, files and generated content",
    long_about = "Pack directory trees, single files and generated files into a tar archive\n\
                  with normalized paths and permission bits.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a new archive.
    #[command(alias = "p")]
    Pack(commands::pack::PackArgs),
    /// Print the entries of an archive.
    #[command(alias = "ls")]
    List(commands::list::ListArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Pack(args) => commands::pack::handle_pack(args),
        Commands::List(args) => commands::list::handle_list(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
