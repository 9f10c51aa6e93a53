//! Code-point cursor with line/column bookkeeping.
//!
//! The cursor walks a `&str` one code point at a time. Byte offsets are kept
//! alongside so that token text can be sliced straight out of the input;
//! line and column are maintained on every advance so each token's location
//! is known when it starts, without a second pass over the input.
//!
//! Every line feed consumed through the cursor moves to the next line,
//! whatever the scanner state (whitespace, comment or string body).

/// Snapshot of a cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Mark {
    /// Byte offset into the input.
    pub pos: usize,
    pub line: u32,
    pub column: u32,
}

/// Cursor over the code points of a source string.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'src> {
    src: &'src str,
    /// Byte offset of the current code point. Always on a char boundary.
    pos: usize,
    line: u32,
    column: u32,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(src: &'src str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// The code point under the cursor, or `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Unconsumed input.
    #[inline]
    pub(crate) fn rest(&self) -> &'src str {
        &self.src[self.pos..]
    }

    /// Current byte offset.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Consume one code point, updating line and column.
    ///
    /// No-op at end of input.
    #[inline]
    pub(crate) fn bump(&mut self) {
        let Some(c) = self.current() else {
            return;
        };
        self.pos += c.len_utf8();
        if c == '\n' {
            self.break_line();
        } else {
            self.column += 1;
        }
    }

    /// Move to the start of the next line without consuming anything.
    ///
    /// Used when a comment ends at end of input: the comment still counts as
    /// a line break even though there is no line feed to consume.
    #[inline]
    pub(crate) fn break_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Advance to the next `\n` (not consumed) or to end of input.
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        let rest = self.rest();
        let len = memchr::memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len());
        let skipped = &rest[..len];
        self.column += count_chars(skipped);
        self.pos += len;
    }

    /// Source text from `start` (a byte offset) up to the cursor.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'src str {
        &self.src[start..self.pos]
    }

    /// Source text between two byte offsets.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'src str {
        &self.src[start..end]
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "line lengths beyond u32::MAX code points are not supported"
)]
fn count_chars(s: &str) -> u32 {
    s.chars().count() as u32
}
