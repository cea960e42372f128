//! Batch re-indentation of Jade source.

use jade_core::buffer::{Buffer, Position, TextBuffer};
use jade_core::indent::compute_indent;
use jade_core::scan;

/// Re-indent Jade source code.
///
/// Walks the buffer top to bottom and sets every line's indentation to its
/// computed level. The interactive calculator trusts the line above, so a
/// mis-indented line propagates its level to the lines typed below it;
/// this pass re-runs the calculation on every line in order, which makes
/// the corrections cascade instead. Whitespace-only lines come out empty.
///
/// Line endings are normalized to `\n`. Whether the input ends in a final
/// newline is preserved, so editor integrations don't pick up an extra
/// line.
///
/// # Examples
///
/// ```
/// use jade_fmt::reindent;
///
/// let source = "fn main() {\nreturn\n        }\n";
/// assert_eq!(reindent(source), "fn main() {\n    return\n}\n");
/// ```
pub fn reindent(input: &str) -> String {
    let mut buffer = TextBuffer::from_text(input);
    for i in 0..buffer.line_count() {
        let blank = buffer.line_text(i).map_or(true, scan::is_blank);
        let target = if blank { 0 } else { compute_indent(&buffer, i) };
        buffer.set_cursor(Position::new(i, 0));
        buffer.indent_line_to(target);
    }
    let output = buffer.to_text();
    if input.ends_with('\n') {
        output + "\n"
    } else {
        output
    }
}

/// Whether [`reindent`] would change `input`.
pub fn needs_reindent(input: &str) -> bool {
    reindent(input) != input
}
