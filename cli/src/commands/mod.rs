//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function.

pub mod completions;
pub mod fmt;
pub mod highlight;
pub mod symbols;
