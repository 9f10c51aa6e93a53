//! Indentation stack for significant-whitespace block tracking.
//!
//! Only block closings are materialised as tokens. Opening a block is
//! implicit in the deeper indentation of the following line, so
//! [`IndentStack::enter_line`] reports how many blocks the new line closes.
//!
//! Widths are raw code-point counts: a tab counts as one, the same as a
//! space. Only the top of the stack is consulted, so a dedent to a width
//! that matches no enclosing block is accepted silently.

use smallvec::SmallVec;

/// Stack of open indentation widths, innermost last. Every entry is > 0 and
/// entries strictly increase from bottom to top.
#[derive(Clone, Debug, Default)]
pub(crate) struct IndentStack {
    widths: SmallVec<[u32; 8]>,
}

impl IndentStack {
    /// Record the indentation of a line's first token.
    ///
    /// Returns the number of blocks closed by this line. A width deeper than
    /// the innermost block opens a new block and closes none.
    pub(crate) fn enter_line(&mut self, width: u32) -> u32 {
        match self.widths.last() {
            Some(&top) if width > top => {
                self.widths.push(width);
                0
            }
            None if width > 0 => {
                self.widths.push(width);
                0
            }
            _ => {
                let mut closed = 0;
                while self.widths.last().is_some_and(|&top| width < top) {
                    self.widths.pop();
                    closed += 1;
                }
                closed
            }
        }
    }

    /// Close every open block, returning how many there were.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "one entry per indented line, bounded by the u32 line counter"
    )]
    pub(crate) fn close_all(&mut self) -> u32 {
        let open = self.widths.len() as u32;
        self.widths.clear();
        open
    }

    pub(crate) fn depth(&self) -> usize {
        self.widths.len()
    }
}
