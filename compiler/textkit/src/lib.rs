//! Lexical-analysis toolkit for small languages and configuration formats.
//!
//! Re-exports the tokenizer ([`textkit_lexer`]) and the morphological
//! lexicon ([`textkit_lexicon`]), and joins them: [`annotate`] pairs word
//! tokens with their lexicon analyses.
//!
//! ```
//! use textkit::{annotate, Lexicon, Tokenizer};
//!
//! let lexicon = Lexicon::parse("dogs\tdog\tNNS\nbark\tbark\tVBP\n").unwrap();
//! let tokens = Tokenizer::default().tokenize("Dogs bark!", "<doc>");
//! let annotated = annotate(tokens, &lexicon);
//! assert_eq!(annotated[0].analyses[0].lemma, "dog");
//! assert!(annotated[2].analyses.is_empty());
//! ```
//!
//! Logging goes through `tracing`; call [`init_tracing`] once at startup
//! and set `RUST_LOG` (e.g. `RUST_LOG=textkit_lexer=debug`) to see it.

mod annotate;
mod tracing_setup;

pub use annotate::{annotate, Annotated};
pub use tracing_setup::init_tracing;

pub use textkit_lexer::{
    is_digit, is_whitespace, tokenize, Alphabet, Location, OwnedToken, Token, TokenKind,
    Tokenizer, TokenizerConfig, Tokens,
};
pub use textkit_lexicon::{LexicalEntry, Lexicon, LexiconError};
