//! Morphological lexicon for annotating word tokens.
//!
//! A [`Lexicon`] maps lower-cased surface forms to ordered lists of
//! `(lemma, tag)` analyses. It is loaded once from a tab-separated file (see
//! [`Lexicon::load`]) and read-only afterwards.
//!
//! ```
//! use textkit_lexicon::Lexicon;
//!
//! let lexicon = Lexicon::parse("Dogs\tdog\tNNS\n").unwrap();
//! assert_eq!(lexicon.lookup("dogs")[0].lemma, "dog");
//! assert!(lexicon.lookup("cats").is_empty());
//! ```

mod error;
mod lexicon;
mod load;

pub use error::LexiconError;
pub use lexicon::{LexicalEntry, Lexicon};
