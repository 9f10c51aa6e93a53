//! Token types produced by the tokenizer.
//!
//! A [`Token`] borrows its text, numeric tag and source label from the input
//! passed to [`Tokenizer::tokenize`](crate::Tokenizer::tokenize). Every token
//! text is a contiguous slice of the input, so scanning never allocates per
//! token. Use [`Token::into_owned`] when tokens must outlive the input.

use std::fmt;

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Run of alphabetic and digit code points starting with an alphabetic one.
    Word,
    /// Run of decimal digits, optionally tagged with a fused alphabetic suffix.
    Number,
    /// Text between a pair of string delimiters (delimiters excluded).
    String,
    /// Any other single non-whitespace code point.
    Symbol,
    /// Line break outside a string literal. Only emitted when enabled.
    EndOfLine,
    /// Closing of an indentation block. Only emitted when enabled.
    EndOfIndentBlock,
    /// Sentinel terminating every token sequence.
    EndOfInput,
}

impl TokenKind {
    /// Returns `true` for kinds that never carry text.
    #[inline]
    pub fn is_synthetic(self) -> bool {
        matches!(
            self,
            Self::EndOfLine | Self::EndOfIndentBlock | Self::EndOfInput
        )
    }

    /// Short human-readable name, used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Number => "number",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::EndOfLine => "end of line",
            Self::EndOfIndentBlock => "end of indented block",
            Self::EndOfInput => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of a token's first character.
///
/// `line` and `column` are 1-based; columns count code points, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Location<'src> {
    /// Source label supplied by the caller (usually a file name).
    pub source: &'src str,
    pub line: u32,
    pub column: u32,
}

impl<'src> Location<'src> {
    #[inline]
    pub const fn new(source: &'src str, line: u32, column: u32) -> Self {
        Location {
            source,
            line,
            column,
        }
    }

    /// `(line, column)` pair, convenient for ordering checks.
    #[inline]
    pub fn line_col(&self) -> (u32, u32) {
        (self.line, self.column)
    }
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source, self.line, self.column)
    }
}

/// A classified, located fragment of source text.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Covered text. Empty for synthetic kinds.
    pub text: &'src str,
    pub location: Location<'src>,
    /// Alphabetic suffix fused onto a number (`10kg` has tag `kg`).
    pub tag: Option<&'src str>,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, location: Location<'src>) -> Self {
        Token {
            kind,
            text,
            location,
            tag: None,
        }
    }

    /// Create a token with no text (line ends, block ends, end of input).
    #[inline]
    pub fn synthetic(kind: TokenKind, location: Location<'src>) -> Self {
        debug_assert!(kind.is_synthetic(), "{kind:?} tokens carry text");
        Token::new(kind, "", location)
    }

    /// Create a number token carrying a fused suffix.
    #[inline]
    pub fn tagged_number(text: &'src str, tag: &'src str, location: Location<'src>) -> Self {
        Token {
            kind: TokenKind::Number,
            text,
            location,
            tag: Some(tag),
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Copy text, tag and source label into an owned token.
    pub fn into_owned(self) -> OwnedToken {
        OwnedToken {
            kind: self.kind,
            text: self.text.to_owned(),
            source: self.location.source.to_owned(),
            line: self.location.line,
            column: self.location.column,
            tag: self.tag.map(str::to_owned),
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.kind, self.text)?;
        if let Some(tag) = self.tag {
            write!(f, " [{tag}]")?;
        }
        write!(f, " @ {}", self.location)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_synthetic() {
            write!(f, "{} at {}", self.kind, self.location)
        } else {
            write!(f, "{} {:?} at {}", self.kind, self.text, self.location)
        }
    }
}

/// A [`Token`] detached from the input it was scanned from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnedToken {
    pub kind: TokenKind,
    pub text: String,
    pub source: String,
    pub line: u32,
    pub column: u32,
    pub tag: Option<String>,
}

impl OwnedToken {
    /// Borrow this token back as a [`Token`].
    pub fn as_token(&self) -> Token<'_> {
        Token {
            kind: self.kind,
            text: &self.text,
            location: Location::new(&self.source, self.line, self.column),
            tag: self.tag.as_deref(),
        }
    }
}
