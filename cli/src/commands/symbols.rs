//! The `symbols` command - list the functions defined in Jade files.

use std::process::ExitCode;

use jade_core::buffer::TextBuffer;
use jade_core::symbols::symbol_index;

use crate::cli::SymbolsArgs;
use crate::common::CliResult;
use crate::common::input::read_input;

/// Run the symbols command.
pub fn run(args: SymbolsArgs) -> ExitCode {
    let mut has_errors = false;
    let with_headers = args.files.len() > 1;

    for file in &args.files {
        if let Err(e) = list_file(file, with_headers) {
            eprintln!("error: {}", e);
            has_errors = true;
        }
    }

    if has_errors {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Print one `line:name` entry per definition, in buffer order.
/// Lines are 1-based on output, the way editors and grep count them.
fn list_file(path: &str, with_header: bool) -> CliResult<()> {
    let (input, display_name) = read_input(path)?;
    let buffer = TextBuffer::from_text(&input);

    if with_header {
        println!("{}:", display_name);
    }
    for symbol in symbol_index(&buffer) {
        println!("{}:{}", symbol.line + 1, symbol.name);
    }
    Ok(())
}
