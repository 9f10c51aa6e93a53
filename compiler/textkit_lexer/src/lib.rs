//! Configurable tokenizer for small languages and configuration formats.
//!
//! Converts text into a flat sequence of classified, located [`Token`]s:
//! words, numbers (optionally tagged with a fused suffix such as `10kg`),
//! string literals, single-character symbols, and, on request, explicit line
//! ends and indentation-block ends for significant-whitespace dialects.
//!
//! ```text
//! text + source label → Tokenizer::tokens() → Token... → EndOfInput
//! ```
//!
//! Scanning works on Unicode code points. It never fails: every input yields
//! a sequence terminated by exactly one [`TokenKind::EndOfInput`].
//!
//! # Example
//!
//! ```
//! use textkit_lexer::{TokenKind, Tokenizer, TokenizerConfig};
//!
//! let tokenizer = Tokenizer::new(TokenizerConfig::new().with_indent_blocks(true));
//! let kinds: Vec<TokenKind> = tokenizer
//!     .tokens("A\n  B\nC\n", "<file>")
//!     .map(|t| t.kind)
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Word,
//!         TokenKind::Word,
//!         TokenKind::EndOfIndentBlock,
//!         TokenKind::Word,
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! ```

mod config;
mod cursor;
mod indent;
mod scanner;
mod token;

pub use config::{is_digit, is_whitespace, Alphabet, TokenizerConfig};
pub use scanner::{Tokenizer, Tokens};
pub use token::{Location, OwnedToken, Token, TokenKind};

/// Tokenize `text` with the default configuration.
pub fn tokenize<'src>(text: &'src str, source: &'src str) -> Vec<Token<'src>> {
    Tokenizer::default().tokenize(text, source)
}
