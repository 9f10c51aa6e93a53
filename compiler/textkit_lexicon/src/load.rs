//! Loading lexicons from tab-separated text.
//!
//! Format: UTF-8, one analysis per line, `form<TAB>lemma<TAB>tag`, no
//! header. Blank lines are skipped and `\r\n` endings are accepted. Fields
//! after the third are ignored; a line with fewer than three fields is
//! rejected as [`LexiconError::Malformed`].

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::{Lexicon, LexiconError};

impl Lexicon {
    /// Load a lexicon file.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Load a lexicon from any reader.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, LexiconError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Build a lexicon from tab-separated text already in memory.
    pub fn parse(text: &str) -> Result<Self, LexiconError> {
        let mut lexicon = Lexicon::new();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (form, lemma, tag) = split_record(line).ok_or_else(|| LexiconError::Malformed {
                line: index + 1,
                fields: line.split('\t').count(),
            })?;
            lexicon.add_entry(form, lemma, tag);
        }
        debug!(
            forms = lexicon.len(),
            entries = lexicon.entry_count(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }
}

/// Split a record into its first three tab-separated fields.
fn split_record(line: &str) -> Option<(&str, &str, &str)> {
    let mut fields = line.split('\t');
    Some((fields.next()?, fields.next()?, fields.next()?))
}
