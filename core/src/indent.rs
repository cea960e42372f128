//! Indentation: the line calculator and the newline handler.

use crate::buffer::Buffer;
use crate::scan;

/// One nesting level is four spaces. Jade has no tab indentation.
pub const INDENT_UNIT: usize = 4;

/// The indentation the line at `line_index` should have.
///
/// The decision looks back exactly one step: the nearest non-blank line
/// above is trusted to be correctly indented, and its level is adjusted by
/// one unit when it opens a block or when the target line closes one. No
/// nesting depth is derived from the rest of the buffer, so a manually
/// mis-indented line propagates its level to the lines typed below it
/// until a batch re-indent restores consistency.
///
/// Pure in the buffer contents; safe to call from change notifications.
pub fn compute_indent<B: Buffer + ?Sized>(buffer: &B, line_index: usize) -> usize {
    let mut level = 0;
    for i in (0..line_index).rev() {
        let Some(text) = buffer.line_text(i) else {
            break;
        };
        if scan::is_blank(text) {
            continue;
        }
        level = scan::leading_indent(text);
        if scan::opens_block(text) {
            level += INDENT_UNIT;
        }
        break;
    }
    if let Some(target) = buffer.line_text(line_index) {
        if scan::closes_block(target) {
            level = level.saturating_sub(INDENT_UNIT);
        }
    }
    level
}

/// Re-indent the cursor line to its computed level.
///
/// The cursor ends up at the end of the new indentation.
pub fn indent_current_line<B: Buffer + ?Sized>(buffer: &mut B) {
    let level = compute_indent(buffer, buffer.cursor().line);
    buffer.indent_line_to(level);
}

/// Handle a newline keystroke at the cursor.
///
/// Typed just after an opening brace, the keystroke materializes the whole
/// empty block: a body line one unit deeper than the opening line and a
/// closing brace lined up under it, with the cursor parked at the end of
/// the body line's indentation. Anywhere else it is a plain split whose
/// new line inherits the current line's indentation, one unit deeper when
/// that line ends with an opening brace.
///
/// All edits happen before this returns; a host sees the buffer only in
/// the final state.
pub fn handle_newline<B: Buffer + ?Sized>(buffer: &mut B) {
    let cur = buffer.cursor();
    let (after_open_brace, base, inherited) = {
        let line = buffer.line_text(cur.line).unwrap_or_default();
        let col = cur.col.min(line.len());
        let base = scan::leading_indent(line);
        let inherited = if scan::opens_block(line) {
            base + INDENT_UNIT
        } else {
            base
        };
        (scan::opens_block(&line[..col]), base, inherited)
    };

    if after_open_brace {
        tracing::debug!(line = cur.line, "expanding empty block after opening brace");
        buffer.insert_line_break();
        buffer.indent_line_to(base + INDENT_UNIT);
        let body = buffer.cursor();
        buffer.insert_line_break();
        buffer.indent_line_to(base);
        buffer.insert_text("}");
        buffer.set_cursor(body);
    } else {
        buffer.insert_line_break();
        buffer.indent_line_to(inherited);
    }
}

#[cfg(test)]
#[path = "indent_test.rs"]
mod indent_test;
