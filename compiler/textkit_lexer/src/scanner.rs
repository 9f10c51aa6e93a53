//! Finite-state scanner turning text into [`Token`]s.
//!
//! # Design
//!
//! The scanner is an explicit state machine over code points:
//!
//! ```text
//!            letter               non-ident
//! Scanning ─────────► InWord ──────────────► Scanning (emit Word / tagged Number)
//!    │  digit               ▲ letter
//!    ├──────────────► InNumber ─────────────► Scanning (emit Number)
//!    │  delimiter                  other
//!    ├──────────────► InString ─────────────► Scanning (emit String, eat delimiter)
//!    │  other                  delimiter
//!    └──► emit Symbol
//! ```
//!
//! Each token-carrying state holds the [`Mark`] where its token started, so
//! token text is sliced from the input instead of accumulated. Whitespace and
//! comments are skipped only in `Scanning`, before each step; that pass is
//! also where line breaks and indentation are observed.
//!
//! Scanning is total: every input produces a well-formed sequence ending in
//! exactly one [`TokenKind::EndOfInput`].

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::mem;

use tracing::{debug, trace};

use crate::config::{is_digit, is_whitespace, TokenizerConfig};
use crate::cursor::{Cursor, Mark};
use crate::indent::IndentStack;
use crate::token::{Location, Token, TokenKind};

/// Configurable tokenizer. Holds only immutable configuration, so one
/// instance can serve any number of concurrent scans.
#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Scan `text` eagerly. `source` labels token locations and is never
    /// opened or read.
    #[tracing::instrument(level = "debug", skip_all, fields(source = %source, len = text.len()))]
    pub fn tokenize<'src>(&self, text: &'src str, source: &'src str) -> Vec<Token<'src>> {
        let tokens: Vec<Token<'src>> = self.tokens(text, source).collect();
        debug!(count = tokens.len(), "tokenized");
        tokens
    }

    /// Scan `text` lazily. Yields exactly the sequence
    /// [`tokenize`](Self::tokenize) would return.
    pub fn tokens<'t, 'src>(&'t self, text: &'src str, source: &'src str) -> Tokens<'t, 'src> {
        Tokens::new(&self.config, text, source)
    }
}

/// Scanner state. Token-carrying states remember where their token began.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    /// Between tokens.
    Scanning,
    /// Inside a word. `number` is set when the word is the alphabetic suffix
    /// of a digit run, and marks where those digits began.
    InWord { start: Mark, number: Option<Mark> },
    InNumber { start: Mark },
    /// Inside a string literal. `body` is the byte offset just past the
    /// opening delimiter.
    InString { start: Mark, body: usize },
}

/// Lazy token stream created by [`Tokenizer::tokens`].
#[derive(Debug)]
pub struct Tokens<'t, 'src> {
    config: &'t TokenizerConfig,
    source: &'src str,
    cursor: Cursor<'src>,
    state: ScanState,
    indents: IndentStack,
    /// Leading whitespace seen on the current line, or `None` once the
    /// line's first token has started.
    line_indent: Option<u32>,
    /// Tokens produced by the last step but not yet yielded.
    pending: VecDeque<Token<'src>>,
    finished: bool,
}

impl<'t, 'src> Tokens<'t, 'src> {
    fn new(config: &'t TokenizerConfig, text: &'src str, source: &'src str) -> Self {
        Self {
            config,
            source,
            cursor: Cursor::new(text),
            state: ScanState::Scanning,
            indents: IndentStack::default(),
            line_indent: Some(0),
            pending: VecDeque::new(),
            finished: false,
        }
    }

    #[inline]
    fn location(&self, mark: Mark) -> Location<'src> {
        Location::new(self.source, mark.line, mark.column)
    }

    #[inline]
    fn emit(&mut self, token: Token<'src>) {
        self.pending.push_back(token);
    }

    /// Advance the state machine by one code point (plus any whitespace and
    /// comments preceding it while between tokens).
    fn step(&mut self) {
        if self.state == ScanState::Scanning {
            self.skip_trivia();
        }
        let Some(c) = self.cursor.current() else {
            self.finish();
            return;
        };
        let config = self.config;
        match self.state {
            ScanState::Scanning => self.start_token(c),
            ScanState::InWord { start, number } => {
                if config.is_ident_continue(c) {
                    self.cursor.bump();
                } else {
                    self.end_word(start, number);
                }
            }
            ScanState::InNumber { start } => {
                if is_digit(c) {
                    self.cursor.bump();
                } else if config.is_ident_start(c) {
                    self.state = ScanState::InWord {
                        start: self.cursor.mark(),
                        number: Some(start),
                    };
                    self.cursor.bump();
                } else {
                    self.end_number(start);
                }
            }
            ScanState::InString { start, body } => {
                if config.is_string_delimiter(c) {
                    let text = self.cursor.slice_from(body);
                    self.cursor.bump();
                    self.emit(Token::new(TokenKind::String, text, self.location(start)));
                    self.state = ScanState::Scanning;
                } else {
                    self.cursor.bump();
                }
            }
        }
    }

    /// Skip whitespace and comments, observing line breaks.
    fn skip_trivia(&mut self) {
        let config = self.config;
        loop {
            if let Some(prefix) = config.comment() {
                if self.cursor.rest().starts_with(prefix) {
                    let at = self.cursor.mark();
                    self.cursor.eat_until_newline_or_eof();
                    // Comment and its line feed collapse into one line break.
                    if self.cursor.current() == Some('\n') {
                        self.cursor.bump();
                    } else {
                        self.cursor.break_line();
                    }
                    self.line_break(at);
                    continue;
                }
            }
            match self.cursor.current() {
                Some('\n') => {
                    let at = self.cursor.mark();
                    self.cursor.bump();
                    self.line_break(at);
                }
                Some(c) if is_whitespace(c) => {
                    self.cursor.bump();
                    if let Some(width) = &mut self.line_indent {
                        *width += 1;
                    }
                }
                _ => break,
            }
        }
    }

    fn line_break(&mut self, at: Mark) {
        if self.config.emit_line_breaks {
            self.emit(Token::synthetic(TokenKind::EndOfLine, self.location(at)));
        }
        self.line_indent = Some(0);
    }

    /// Dispatch on the first code point of a token.
    fn start_token(&mut self, c: char) {
        self.enter_line();
        let config = self.config;
        let start = self.cursor.mark();
        if config.is_ident_start(c) {
            self.state = ScanState::InWord {
                start,
                number: None,
            };
            self.cursor.bump();
        } else if is_digit(c) {
            self.state = ScanState::InNumber { start };
            self.cursor.bump();
        } else if config.is_string_delimiter(c) {
            self.cursor.bump();
            self.state = ScanState::InString {
                start,
                body: self.cursor.pos(),
            };
        } else {
            self.cursor.bump();
            let text = self.cursor.slice_from(start.pos);
            self.emit(Token::new(TokenKind::Symbol, text, self.location(start)));
        }
    }

    /// Compare the indentation of the line's first token against the stack.
    fn enter_line(&mut self) {
        let Some(width) = self.line_indent.take() else {
            return;
        };
        if !self.config.emit_indent_blocks {
            return;
        }
        let closed = self.indents.enter_line(width);
        if closed == 0 {
            return;
        }
        let at = self.cursor.mark();
        trace!(
            line = at.line,
            width,
            closed,
            depth = self.indents.depth(),
            "indent blocks closed"
        );
        let location = self.location(at);
        for _ in 0..closed {
            self.emit(Token::synthetic(TokenKind::EndOfIndentBlock, location));
        }
    }

    fn end_word(&mut self, start: Mark, number: Option<Mark>) {
        let token = match number {
            Some(digits) => Token::tagged_number(
                self.cursor.slice(digits.pos, start.pos),
                self.cursor.slice_from(start.pos),
                self.location(digits),
            ),
            None => Token::new(
                TokenKind::Word,
                self.cursor.slice_from(start.pos),
                self.location(start),
            ),
        };
        self.emit(token);
        self.state = ScanState::Scanning;
    }

    fn end_number(&mut self, start: Mark) {
        let text = self.cursor.slice_from(start.pos);
        self.emit(Token::new(TokenKind::Number, text, self.location(start)));
        self.state = ScanState::Scanning;
    }

    /// Flush the in-progress token, close open blocks, append the sentinel.
    fn finish(&mut self) {
        match mem::replace(&mut self.state, ScanState::Scanning) {
            ScanState::Scanning => {}
            ScanState::InWord { start, number } => self.end_word(start, number),
            ScanState::InNumber { start } => self.end_number(start),
            ScanState::InString { start, body } => {
                trace!(
                    line = start.line,
                    column = start.column,
                    "unterminated string literal"
                );
                let text = self.cursor.slice_from(body);
                self.emit(Token::new(TokenKind::String, text, self.location(start)));
            }
        }
        let end = self.location(self.cursor.mark());
        for _ in 0..self.indents.close_all() {
            self.emit(Token::synthetic(TokenKind::EndOfIndentBlock, end));
        }
        self.emit(Token::synthetic(TokenKind::EndOfInput, end));
        self.finished = true;
    }
}

impl<'src> Iterator for Tokens<'_, 'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.finished {
                return None;
            }
            self.step();
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}
