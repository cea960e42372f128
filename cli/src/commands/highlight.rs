//! The `highlight` command - classify a file's tokens.

use std::process::ExitCode;

use jade_core::highlight::{TokenCategory, classify_line};
use nu_ansi_term::Color;

use crate::cli::HighlightArgs;
use crate::common::CliResult;
use crate::common::input::read_input;

/// Run the highlight command.
pub fn run(args: HighlightArgs, no_color: bool) -> ExitCode {
    match highlight_file(&args.file, no_color) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn highlight_file(path: &str, no_color: bool) -> CliResult<()> {
    let (input, _) = read_input(path)?;
    if no_color {
        print_spans(&input);
    } else {
        print_colored(&input);
    }
    Ok(())
}

/// One entry per classified span: `line:start..end category text`.
/// Lines are 1-based, span offsets are byte columns within the line.
fn print_spans(input: &str) {
    for (i, line) in input.lines().enumerate() {
        for span in classify_line(line) {
            println!(
                "{}:{}..{} {} {}",
                i + 1,
                span.range.start,
                span.range.end,
                span.category.label(),
                &line[span.range.clone()],
            );
        }
    }
}

/// The source itself with classified spans painted.
fn print_colored(input: &str) {
    for line in input.lines() {
        let mut painted = String::new();
        let mut cursor = 0;
        for span in classify_line(line) {
            painted.push_str(&line[cursor..span.range.start]);
            let color = color_for(span.category);
            painted.push_str(&color.paint(&line[span.range.clone()]).to_string());
            cursor = span.range.end;
        }
        painted.push_str(&line[cursor..]);
        println!("{}", painted);
    }
}

fn color_for(category: TokenCategory) -> Color {
    match category {
        TokenCategory::Comment => Color::DarkGray,
        TokenCategory::Keyword => Color::Magenta,
        TokenCategory::Type => Color::Yellow,
        TokenCategory::FunctionName => Color::Cyan,
    }
}
