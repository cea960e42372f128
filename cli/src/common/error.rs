//! Error handling utilities for the CLI.

use thiserror::Error;

/// Errors from the CLI's file plumbing.
///
/// The editing engine itself has no failure states; everything that can
/// go wrong here is reading, writing, or flag misuse.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("{path}: failed to write: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot use --write with stdin")]
    WriteToStdin,
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
