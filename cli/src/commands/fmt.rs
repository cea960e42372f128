//! The `fmt` command - re-indent Jade files.

use std::process::ExitCode;

use nu_ansi_term::Color;
use similar::{ChangeTag, TextDiff};

use crate::cli::FmtArgs;
use crate::common::CliResult;
use crate::common::error::CliError;
use crate::common::input::{is_stdin, read_input, write_output};

/// Run the fmt command.
pub fn run(args: FmtArgs, no_color: bool) -> ExitCode {
    let mut has_errors = false;
    let mut needs_reindent = false;

    for file in &args.files {
        match reindent_file(file, &args, no_color) {
            Ok(changed) => {
                if changed {
                    needs_reindent = true;
                }
            }
            Err(e) => {
                if !args.quiet {
                    eprintln!("error: {}", e);
                }
                has_errors = true;
            }
        }
    }

    tracing::debug!(files = args.files.len(), "fmt pass finished");

    if has_errors {
        return ExitCode::FAILURE;
    }

    if args.check && needs_reindent {
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Re-indent a single file or stdin.
/// Returns Ok(true) if the input needed re-indenting, Ok(false) if it was
/// already consistent.
fn reindent_file(path: &str, args: &FmtArgs, no_color: bool) -> CliResult<bool> {
    let from_stdin = is_stdin(path);

    // --write is incompatible with stdin
    if args.write && from_stdin {
        return Err(CliError::WriteToStdin);
    }

    let (input, display_name) = read_input(path)?;
    let reindented = jade_fmt::reindent(&input);

    if input == reindented {
        return Ok(false);
    }

    if args.write {
        write_output(path, &reindented)?;
        if !args.quiet {
            println!("reindented {}", display_name);
        }
    } else if args.quiet {
        // quiet mode without write - no output
    } else if args.check {
        println!("{} needs reindenting", display_name);
    } else if from_stdin {
        // For stdin without --write or --check, just print the result
        print!("{}", reindented);
    } else {
        // Default for files: print diff
        print_diff(&display_name, &input, &reindented, no_color);
    }

    Ok(true)
}

/// Print a unified diff between the original and re-indented content.
fn print_diff(name: &str, original: &str, reindented: &str, no_color: bool) {
    let diff = TextDiff::from_lines(original, reindented);

    println!("--- {}", name);
    println!("+++ {}", name);

    for hunk in diff.unified_diff().iter_hunks() {
        println!("{}", hunk.header());
        for change in hunk.iter_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => "-",
                ChangeTag::Insert => "+",
                ChangeTag::Equal => " ",
            };
            let line = format!("{}{}", sign, change.value());
            let colored = if no_color {
                line
            } else {
                match change.tag() {
                    ChangeTag::Delete => Color::Red.paint(&line).to_string(),
                    ChangeTag::Insert => Color::Green.paint(&line).to_string(),
                    ChangeTag::Equal => line,
                }
            };
            print!("{}", colored);
            if !change.value().ends_with('\n') {
                println!();
            }
        }
    }
}
