//! Tokenizer configuration.
//!
//! [`TokenizerConfig`] is a plain value: build it once with the `with_*`
//! methods and hand it to [`Tokenizer::new`](crate::Tokenizer::new). It is
//! never mutated while a scan is running.

use rustc_hash::FxHashSet;

/// Which code points count as alphabetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Alphabet {
    /// ASCII letters plus every code point at or above U+0080, which admits
    /// non-Latin scripts without consulting Unicode tables.
    #[default]
    Extended,
    /// ASCII letters only. Code points above U+007F scan as symbols.
    Ascii,
}

impl Alphabet {
    #[inline]
    pub fn is_alphabetic(self, c: char) -> bool {
        match self {
            Self::Extended => c.is_ascii_alphabetic() || u32::from(c) >= 0x80,
            Self::Ascii => c.is_ascii_alphabetic(),
        }
    }
}

/// Options recognised by the tokenizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TokenizerConfig {
    /// Starts a comment running to end of line. Empty disables comments.
    pub comment_prefix: String,
    /// Opens and closes string literals. `None` disables strings.
    pub string_delimiter: Option<char>,
    /// Code points beyond letters that may start or continue a word.
    pub extra_identifier_chars: FxHashSet<char>,
    pub alphabet: Alphabet,
    /// Emit [`TokenKind::EndOfLine`](crate::TokenKind::EndOfLine) tokens.
    pub emit_line_breaks: bool,
    /// Emit [`TokenKind::EndOfIndentBlock`](crate::TokenKind::EndOfIndentBlock) tokens.
    pub emit_indent_blocks: bool,
}

impl TokenizerConfig {
    /// Default configuration: no comments, no strings, extended alphabet,
    /// line breaks and indentation absorbed as whitespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_string_delimiter(mut self, delimiter: char) -> Self {
        self.string_delimiter = Some(delimiter);
        self
    }

    /// Add code points to the identifier set (e.g. `_` or `-`).
    #[must_use]
    pub fn with_identifier_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.extra_identifier_chars.extend(chars);
        self
    }

    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    #[must_use]
    pub fn with_line_breaks(mut self, emit: bool) -> Self {
        self.emit_line_breaks = emit;
        self
    }

    #[must_use]
    pub fn with_indent_blocks(mut self, emit: bool) -> Self {
        self.emit_indent_blocks = emit;
        self
    }

    /// Returns the comment prefix, or `None` when comments are disabled.
    #[inline]
    pub fn comment(&self) -> Option<&str> {
        if self.comment_prefix.is_empty() {
            None
        } else {
            Some(&self.comment_prefix)
        }
    }

    /// Can `c` start a word (and, by extension, a numeric suffix)?
    #[inline]
    pub fn is_ident_start(&self, c: char) -> bool {
        self.alphabet.is_alphabetic(c) || self.extra_identifier_chars.contains(&c)
    }

    /// Can `c` continue a word?
    #[inline]
    pub fn is_ident_continue(&self, c: char) -> bool {
        is_digit(c) || self.is_ident_start(c)
    }

    /// Is `c` the configured string delimiter?
    #[inline]
    pub fn is_string_delimiter(&self, c: char) -> bool {
        self.string_delimiter == Some(c)
    }
}

/// Whitespace recognised between tokens: space, tab, CR and LF.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Decimal digits `0`-`9`.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
