//! In-memory lexicon: lower-cased word form → ordered analyses.

use rustc_hash::FxHashMap;

/// One analysis of a word form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LexicalEntry {
    pub lemma: String,
    /// Morphological tag, opaque to the lexicon.
    pub tag: String,
}

impl LexicalEntry {
    pub fn new(lemma: impl Into<String>, tag: impl Into<String>) -> Self {
        LexicalEntry {
            lemma: lemma.into(),
            tag: tag.into(),
        }
    }
}

/// Maps word forms to their candidate analyses.
///
/// Forms are lower-cased when added but looked up exactly as given, so
/// callers normalise before calling [`lookup`](Self::lookup). Analyses of a
/// form keep insertion order. Built once, then only read: a shared
/// `&Lexicon` can be queried from any number of threads.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    entries: FxHashMap<String, Vec<LexicalEntry>>,
    /// Total analyses across all forms.
    entry_count: usize,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an analysis for `form` (stored lower-cased).
    pub fn add_entry(&mut self, form: &str, lemma: impl Into<String>, tag: impl Into<String>) {
        self.entries
            .entry(form.to_lowercase())
            .or_default()
            .push(LexicalEntry::new(lemma, tag));
        self.entry_count += 1;
    }

    /// Analyses of `form`, in insertion order. Empty for unknown forms.
    ///
    /// The key is matched exactly; no case folding happens here.
    pub fn lookup(&self, form: &str) -> &[LexicalEntry] {
        match self.entries.get(form) {
            Some(entries) => entries,
            None => &[],
        }
    }

    pub fn contains(&self, form: &str) -> bool {
        self.entries.contains_key(form)
    }

    /// Number of distinct forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of analyses across all forms.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Stored (lower-cased) forms, in no particular order.
    pub fn forms(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
