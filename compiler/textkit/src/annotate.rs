//! Lexicon annotation of token sequences.

use textkit_lexer::{Token, TokenKind};
use textkit_lexicon::{LexicalEntry, Lexicon};
use tracing::debug;

/// A token paired with its lexicon analyses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotated<'src, 'lex> {
    pub token: Token<'src>,
    /// Analyses of the lower-cased word; empty for unknown words and for
    /// every token that is not a [`TokenKind::Word`].
    pub analyses: &'lex [LexicalEntry],
}

impl Annotated<'_, '_> {
    /// `true` when the token is a word the lexicon knows.
    pub fn is_known(&self) -> bool {
        !self.analyses.is_empty()
    }
}

/// Look up every word token in `lexicon`.
///
/// Word text is lower-cased before lookup, matching how the lexicon stores
/// its forms. Token order and count are preserved.
pub fn annotate<'src, 'lex>(
    tokens: impl IntoIterator<Item = Token<'src>>,
    lexicon: &'lex Lexicon,
) -> Vec<Annotated<'src, 'lex>> {
    let annotated: Vec<Annotated<'src, 'lex>> = tokens
        .into_iter()
        .map(|token| {
            let analyses = if token.is(TokenKind::Word) {
                lexicon.lookup(&token.text.to_lowercase())
            } else {
                &[]
            };
            Annotated { token, analyses }
        })
        .collect();
    debug!(
        tokens = annotated.len(),
        known = annotated.iter().filter(|a| a.is_known()).count(),
        "annotated"
    );
    annotated
}

#[cfg(test)]
mod tests;
