//! Jade CLI - structural editing tools for the Jade language.

mod cli;
mod commands;
mod common;

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Command};

fn main() -> ExitCode {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap();

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Fmt(args) => commands::fmt::run(args, cli.no_color),
        Command::Symbols(args) => commands::symbols::run(args),
        Command::Highlight(args) => commands::highlight::run(args, cli.no_color),
        Command::Completions(args) => {
            commands::completions::run(args);
            ExitCode::SUCCESS
        }
    }
}
