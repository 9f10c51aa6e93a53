//! Lexicon loading errors.

use std::io;
use std::path::PathBuf;

/// Failure to build a [`Lexicon`](crate::Lexicon) from a resource.
///
/// Lookups never fail; these are the only errors the lexicon produces.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The lexicon file could not be opened or read.
    #[error("cannot read lexicon `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A reader supplied by the caller failed.
    #[error("cannot read lexicon: {source}")]
    Read {
        #[from]
        source: io::Error,
    },
    /// A non-blank line did not have three tab-separated fields.
    #[error("malformed lexicon line {line}: expected 3 tab-separated fields, found {fields}")]
    Malformed { line: usize, fields: usize },
}
