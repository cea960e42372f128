//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Jade - structural editing tools for the Jade language
#[derive(Parser, Debug)]
#[command(name = "jade", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Re-indent Jade files
    Fmt(FmtArgs),

    /// List the functions defined in Jade files
    Symbols(SymbolsArgs),

    /// Classify a file's tokens for highlighting
    Highlight(HighlightArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `fmt` command.
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Files to re-indent, or "-" for stdin
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Write results back instead of printing a diff
    #[arg(long, short = 'w')]
    pub write: bool,

    /// Exit non-zero if any file needs re-indenting, without writing
    #[arg(long)]
    pub check: bool,

    /// Suppress per-file messages
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Arguments for the `symbols` command.
#[derive(Args, Debug)]
pub struct SymbolsArgs {
    /// Files to index, or "-" for stdin
    #[arg(required = true)]
    pub files: Vec<String>,
}

/// Arguments for the `highlight` command.
#[derive(Args, Debug)]
pub struct HighlightArgs {
    /// File to classify, or "-" for stdin
    pub file: String,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
