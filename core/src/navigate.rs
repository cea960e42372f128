//! Moving between function definitions and their body ends.

use crate::buffer::{Buffer, Position};
use crate::lex::{self, BraceEvent};
use crate::scan;

/// Move backward to the start of the `count`-th previous function
/// definition line.
///
/// Each step lands the cursor at column 0 of a definition line before the
/// cursor; a definition on the cursor line itself counts when the cursor
/// is past column 0. Returns whether every step found a definition. A step
/// that finds none leaves the cursor wherever the earlier steps put it.
pub fn beginning_of_defun<B: Buffer + ?Sized>(buffer: &mut B, count: usize) -> bool {
    for _ in 0..count {
        let cur = buffer.cursor();
        let from = if cur.col > 0 {
            cur.line
        } else if cur.line == 0 {
            return false;
        } else {
            cur.line - 1
        };
        let hit = (0..=from)
            .rev()
            .find(|&i| {
                buffer
                    .line_text(i)
                    .map_or(false, |text| scan::defun_name(text).is_some())
            });
        let Some(line) = hit else {
            return false;
        };
        buffer.set_cursor(Position::new(line, 0));
    }
    true
}

/// Move forward to the end of the `count`-th next function body.
///
/// Each step finds the next `{` at or after the cursor and walks forward
/// with brace depth accounting, skipping braces inside comments, until the
/// depth returns to zero; the cursor lands on the balancing `}`. Returns
/// whether every step landed. A step with no `{` ahead, or whose scan runs
/// out of buffer, leaves the cursor wherever the earlier steps put it.
pub fn end_of_defun<B: Buffer + ?Sized>(buffer: &mut B, count: usize) -> bool {
    for _ in 0..count {
        let cur = buffer.cursor();
        let Some(open) = next_open_brace(buffer, cur) else {
            return false;
        };
        let Some(close) = matching_close(buffer, open) else {
            tracing::debug!(
                line = open.line,
                col = open.col,
                "no matching close brace before end of buffer"
            );
            return false;
        };
        buffer.set_cursor(close);
    }
    true
}

/// The next `{` at or after `from`. This is a plain character search; the
/// comment-aware accounting only starts with the balancing scan.
fn next_open_brace<B: Buffer + ?Sized>(buffer: &B, from: Position) -> Option<Position> {
    let first = buffer.line_text(from.line)?;
    let col = from.col.min(first.len());
    if let Some(idx) = first[col..].find('{') {
        return Some(Position::new(from.line, col + idx));
    }
    for i in from.line + 1..buffer.line_count() {
        if let Some(idx) = buffer.line_text(i).and_then(|text| text.find('{')) {
            return Some(Position::new(i, idx));
        }
    }
    None
}

/// The `}` balancing the brace at `open`, or `None` if the buffer ends
/// first.
fn matching_close<B: Buffer + ?Sized>(buffer: &B, open: Position) -> Option<Position> {
    let mut depth: isize = 0;
    for i in open.line..buffer.line_count() {
        let text = buffer.line_text(i)?;
        let offset = if i == open.line { open.col } else { 0 };
        for event in lex::brace_events(&text[offset..]) {
            match event {
                BraceEvent::Open(_) => depth += 1,
                BraceEvent::Close(at) => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(Position::new(i, offset + at));
                    }
                }
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;
