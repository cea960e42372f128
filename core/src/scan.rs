//! Single-line structural predicates for Jade source.
//!
//! Every predicate looks at one line in isolation; nothing here carries
//! state between lines. The rest of the engine is built on these.

use once_cell::sync::Lazy;
use regex::Regex;

/// A function definition: `fn`, a name, and the empty parameter list,
/// anchored at the start of the line. Jade functions take no parameters.
static DEFUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^fn\s+([A-Za-z_]\w*)\s*\(\)").unwrap());

/// A line whose last non-whitespace character is an opening brace.
static OPENS_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\s*$").unwrap());

/// A line whose first non-whitespace character is a closing brace.
static CLOSES_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\}").unwrap());

/// The function name defined on `line`, if it is a definition line.
pub fn defun_name(line: &str) -> Option<&str> {
    DEFUN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str())
}

/// Whether `line` ends with an opening brace, trailing whitespace aside.
///
/// Also used against the part of a line before the cursor to decide
/// whether a newline keystroke sits just after an opening brace.
pub fn opens_block(line: &str) -> bool {
    OPENS_BLOCK.is_match(line)
}

/// Whether `line` starts with a closing brace, leading whitespace aside.
pub fn closes_block(line: &str) -> bool {
    CLOSES_BLOCK.is_match(line)
}

/// Whether `line` is empty or whitespace only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Width of the leading run of space characters.
///
/// Jade indentation is spaces only, so this is both a byte and a column
/// count.
pub fn leading_indent(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}
