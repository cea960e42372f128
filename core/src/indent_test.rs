//! Tests for the indentation rules.

use pretty_assertions::assert_eq;

use super::{INDENT_UNIT, compute_indent, handle_newline, indent_current_line};
use crate::buffer::{Buffer, Position, TextBuffer};

// ============================================================================
// compute_indent
// ============================================================================

#[test]
fn first_line_is_flush() {
    let buffer = TextBuffer::from_text("fn main() {");
    assert_eq!(compute_indent(&buffer, 0), 0);
}

#[test]
fn line_after_open_brace_goes_one_unit_deeper() {
    let buffer = TextBuffer::from_text("fn main() {\nreturn");
    assert_eq!(compute_indent(&buffer, 1), INDENT_UNIT);
}

#[test]
fn line_after_plain_line_keeps_its_level() {
    let buffer = TextBuffer::from_text("fn main() {\n    return\nnext");
    assert_eq!(compute_indent(&buffer, 2), 4);
}

#[test]
fn closing_brace_dedents_from_previous_line() {
    let buffer = TextBuffer::from_text("fn main() {\n    return\n        }");
    assert_eq!(compute_indent(&buffer, 2), 0);
}

#[test]
fn closing_brace_steps_down_one_unit() {
    let buffer = TextBuffer::from_text("        value\n}");
    assert_eq!(compute_indent(&buffer, 1), 4);
}

#[test]
fn dedent_never_goes_negative() {
    let buffer = TextBuffer::from_text("return\n}");
    assert_eq!(compute_indent(&buffer, 1), 0);
}

#[test]
fn closing_brace_on_first_line_is_flush() {
    let buffer = TextBuffer::from_text("}");
    assert_eq!(compute_indent(&buffer, 0), 0);
}

#[test]
fn blank_lines_are_skipped_when_looking_back() {
    let buffer = TextBuffer::from_text("fn main() {\n\n   \nreturn");
    assert_eq!(compute_indent(&buffer, 3), INDENT_UNIT);
}

#[test]
fn only_blank_lines_above_means_flush() {
    let buffer = TextBuffer::from_text("\n  \nreturn");
    assert_eq!(compute_indent(&buffer, 2), 0);
}

#[test]
fn nested_open_brace_adds_to_its_own_level() {
    let buffer = TextBuffer::from_text("fn main() {\n    {\nbody");
    assert_eq!(compute_indent(&buffer, 2), 8);
}

#[test]
fn neighbor_level_is_trusted_verbatim() {
    // The lookback trusts whatever level the previous line has, even one
    // that is not a multiple of the unit.
    let buffer = TextBuffer::from_text("fn main() {\n      misplaced\nreturn");
    assert_eq!(compute_indent(&buffer, 2), 6);
}

#[test]
fn compute_indent_is_pure() {
    let buffer = TextBuffer::from_text("fn main() {\nreturn");
    let before = buffer.clone();
    let first = compute_indent(&buffer, 1);
    let second = compute_indent(&buffer, 1);
    assert_eq!(first, second);
    assert_eq!(buffer, before);
}

// ============================================================================
// indent_current_line
// ============================================================================

#[test]
fn reindents_the_cursor_line() {
    let mut buffer = TextBuffer::from_text("fn main() {\nreturn");
    buffer.set_cursor(Position::new(1, 0));
    indent_current_line(&mut buffer);
    assert_eq!(buffer.line_text(1), Some("    return"));
    assert_eq!(buffer.cursor(), Position::new(1, 4));
}

#[test]
fn reindents_a_closing_brace_line() {
    let mut buffer = TextBuffer::from_text("fn main() {\n    return\n        }");
    buffer.set_cursor(Position::new(2, 8));
    indent_current_line(&mut buffer);
    assert_eq!(buffer.line_text(2), Some("}"));
    assert_eq!(buffer.cursor(), Position::new(2, 0));
}

// ============================================================================
// handle_newline: block expansion
// ============================================================================

#[test]
fn newline_after_open_brace_materializes_the_block() {
    let mut buffer = TextBuffer::from_text("fn main() {");
    buffer.set_cursor(Position::new(0, 11));
    handle_newline(&mut buffer);
    assert_eq!(buffer.line_count(), 3);
    assert_eq!(buffer.line_text(0), Some("fn main() {"));
    assert_eq!(buffer.line_text(1), Some("    "));
    assert_eq!(buffer.line_text(2), Some("}"));
    assert_eq!(buffer.cursor(), Position::new(1, INDENT_UNIT));
}

#[test]
fn typing_after_expansion_lands_in_the_body() {
    let mut buffer = TextBuffer::from_text("fn main() {");
    buffer.set_cursor(Position::new(0, 11));
    handle_newline(&mut buffer);
    buffer.insert_text("return");
    assert_eq!(buffer.to_text(), "fn main() {\n    return\n}");
}

#[test]
fn expansion_uses_the_opening_line_level() {
    let mut buffer = TextBuffer::from_text("fn main() {\n    {");
    buffer.set_cursor(Position::new(1, 5));
    handle_newline(&mut buffer);
    assert_eq!(buffer.line_text(1), Some("    {"));
    assert_eq!(buffer.line_text(2), Some("        "));
    assert_eq!(buffer.line_text(3), Some("    }"));
    assert_eq!(buffer.cursor(), Position::new(2, 8));
}

#[test]
fn whitespace_between_brace_and_cursor_still_expands() {
    let mut buffer = TextBuffer::from_text("fn main() {  ");
    buffer.set_cursor(Position::new(0, 13));
    handle_newline(&mut buffer);
    assert_eq!(buffer.line_text(0), Some("fn main() {  "));
    assert_eq!(buffer.line_text(1), Some("    "));
    assert_eq!(buffer.line_text(2), Some("}"));
}

#[test]
fn comment_trailing_brace_also_expands() {
    // The lookback is purely textual. Only defun navigation consults
    // comment structure.
    let mut buffer = TextBuffer::from_text("// note {");
    buffer.set_cursor(Position::new(0, 9));
    handle_newline(&mut buffer);
    assert_eq!(buffer.line_text(1), Some("    "));
    assert_eq!(buffer.line_text(2), Some("}"));
}

// ============================================================================
// handle_newline: plain split
// ============================================================================

#[test]
fn plain_newline_inherits_indentation() {
    let mut buffer = TextBuffer::from_text("fn main() {\n    return");
    buffer.set_cursor(Position::new(1, 10));
    handle_newline(&mut buffer);
    assert_eq!(buffer.line_text(1), Some("    return"));
    assert_eq!(buffer.line_text(2), Some("    "));
    assert_eq!(buffer.cursor(), Position::new(2, 4));
}

#[test]
fn mid_line_split_carries_the_tail() {
    let mut buffer = TextBuffer::from_text("    return value");
    buffer.set_cursor(Position::new(0, 10));
    handle_newline(&mut buffer);
    assert_eq!(buffer.line_text(0), Some("    return"));
    assert_eq!(buffer.line_text(1), Some("    value"));
    assert_eq!(buffer.cursor(), Position::new(1, 4));
}

#[test]
fn split_before_the_brace_goes_one_deeper() {
    // The opening line still ends with a brace as it reads before the
    // split, so the new line lands one unit deeper.
    let mut buffer = TextBuffer::from_text("fn main() {");
    buffer.set_cursor(Position::new(0, 3));
    handle_newline(&mut buffer);
    assert_eq!(buffer.line_text(0), Some("fn "));
    assert_eq!(buffer.line_text(1), Some("    main() {"));
    assert_eq!(buffer.cursor(), Position::new(1, 4));
}

#[test]
fn newline_at_line_start_moves_the_text_down() {
    let mut buffer = TextBuffer::from_text("return");
    handle_newline(&mut buffer);
    assert_eq!(buffer.line_text(0), Some(""));
    assert_eq!(buffer.line_text(1), Some("return"));
    assert_eq!(buffer.cursor(), Position::new(1, 0));
}

#[test]
fn newline_in_an_empty_buffer_adds_a_line() {
    let mut buffer = TextBuffer::new();
    handle_newline(&mut buffer);
    assert_eq!(buffer.line_count(), 2);
    assert_eq!(buffer.line_text(0), Some(""));
    assert_eq!(buffer.line_text(1), Some(""));
}
