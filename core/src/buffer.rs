//! Line-based text buffers and the host-facing buffer interface.

/// A cursor position: 0-based line index and byte column within that line.
///
/// Columns always lie on a character boundary of their line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// The buffer surface the editing operations work against.
///
/// A host editor implements this for its own text storage; [`TextBuffer`]
/// is the plain line-vector implementation used by the CLI and tests.
///
/// A buffer always contains at least one line, and its cursor is always a
/// valid position: `cursor().line < line_count()` and `cursor().col` is a
/// character boundary no further than the end of the cursor line.
pub trait Buffer {
    /// Number of lines. Never zero.
    fn line_count(&self) -> usize;

    /// Text of the line at `index`, without a trailing line break.
    fn line_text(&self, index: usize) -> Option<&str>;

    /// Current cursor position.
    fn cursor(&self) -> Position;

    /// Move the cursor, clamping out-of-range coordinates to the nearest
    /// valid position.
    fn set_cursor(&mut self, pos: Position);

    /// Insert `text` at the cursor and leave the cursor after it.
    ///
    /// A `\n` in `text` splits the line at the insertion point, the way
    /// [`insert_line_break`](Buffer::insert_line_break) does.
    fn insert_text(&mut self, text: &str);

    /// Split the cursor line at the cursor. The cursor moves to column 0 of
    /// the newly created line.
    fn insert_line_break(&mut self);

    /// Replace the cursor line's leading whitespace with `level` spaces and
    /// leave the cursor at the end of that indentation.
    fn indent_line_to(&mut self, level: usize);
}

/// In-memory buffer backed by a vector of lines.
///
/// # Examples
///
/// ```
/// use jade_core::buffer::{Buffer, Position, TextBuffer};
///
/// let mut buffer = TextBuffer::from_text("fn main()\n");
/// buffer.set_cursor(Position::new(0, 9));
/// buffer.insert_text(" {");
/// assert_eq!(buffer.to_text(), "fn main() {");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: Position,
}

impl TextBuffer {
    /// An empty buffer: one empty line, cursor at the start.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Position::new(0, 0),
        }
    }

    /// Build a buffer from source text. The final line break, if any, is
    /// not kept as a separate empty line.
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            cursor: Position::new(0, 0),
        }
    }

    /// The buffer contents joined with `\n`, without a trailing line break.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.lines.len() - 1);
        let text = &self.lines[line];
        let mut col = pos.col.min(text.len());
        while col > 0 && !text.is_char_boundary(col) {
            col -= 1;
        }
        Position::new(line, col)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer for TextBuffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.clamp(pos);
    }

    fn insert_text(&mut self, text: &str) {
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.insert_line_break();
            }
            let pos = self.cursor;
            self.lines[pos.line].insert_str(pos.col, part);
            self.cursor.col += part.len();
        }
    }

    fn insert_line_break(&mut self) {
        let pos = self.cursor;
        let rest = self.lines[pos.line].split_off(pos.col);
        self.lines.insert(pos.line + 1, rest);
        self.cursor = Position::new(pos.line + 1, 0);
    }

    fn indent_line_to(&mut self, level: usize) {
        let line = self.cursor.line;
        let text = &self.lines[line];
        let body = text.trim_start_matches(|c| c == ' ' || c == '\t');
        let mut replaced = " ".repeat(level);
        replaced.push_str(body);
        self.lines[line] = replaced;
        self.cursor = Position::new(line, level);
    }
}
