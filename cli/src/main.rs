//! # filecrud Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the filecrud CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! - Each subcommand (`create`, `read`, `update`, `delete`) is a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! filecrud --help
//!
//! # Prepend two words to a file with debug logging
//! filecrud -vv update notes.txt --position prepend update update2
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level (`RUST_LOG` takes precedence)
//! 3. Route to the command handler
//! 4. Print any error to stderr and exit with status 1
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Subcommand argument structs and handlers.

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "filecrud",
    about = "Create, read, update and delete a single text file",
    long_about = "Create, read, update and delete a single text file.\n\
                  Updates prepend, append or overwrite content using a configurable delimiter.",
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
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "c")]
    Create(commands::create::CreateArgs),
    #[command(alias = "r")]
    Read(commands::read::ReadArgs),
    #[command(alias = "u")]
    Update(commands::update::UpdateArgs),
    #[command(alias = "d")]
    Delete(commands::delete::DeleteArgs),
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
        Commands::Create(args) => commands::create::handle_create(args),
        Commands::Read(args) => commands::read::handle_read(args),
        Commands::Update(args) => commands::update::handle_update(args),
        Commands::Delete(args) => commands::delete::handle_delete(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_verbosity_and_subcommand() {
        let cli = Cli::try_parse_from(["filecrud", "-vv", "read", "notes.txt"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Read(_)));
    }

    #[test]
    fn test_subcommand_aliases() {
        let cli = Cli::try_parse_from(["filecrud", "u", "notes.txt", "x"]).unwrap();
        assert!(matches!(cli.command, Commands::Update(_)));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["filecrud"]).is_err());
    }
}
