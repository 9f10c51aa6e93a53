use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unknown_form_is_empty() {
    let lexicon = Lexicon::new();
    assert!(lexicon.lookup("anything").is_empty());
    assert!(lexicon.is_empty());
    assert_eq!(lexicon.len(), 0);
}

#[test]
fn entries_keep_insertion_order() {
    let mut lexicon = Lexicon::new();
    lexicon.add_entry("saw", "see", "VBD");
    lexicon.add_entry("saw", "saw", "NN");
    lexicon.add_entry("saw", "saw", "VB");
    assert_eq!(
        lexicon.lookup("saw"),
        [
            LexicalEntry::new("see", "VBD"),
            LexicalEntry::new("saw", "NN"),
            LexicalEntry::new("saw", "VB"),
        ]
    );
    assert_eq!(lexicon.len(), 1);
    assert_eq!(lexicon.entry_count(), 3);
}

#[test]
fn forms_are_lower_cased_on_insert() {
    let mut lexicon = Lexicon::new();
    lexicon.add_entry("Paris", "Paris", "NNP");
    assert!(lexicon.contains("paris"));
    assert_eq!(lexicon.lookup("paris").len(), 1);
}

#[test]
fn lookup_does_not_fold_case() {
    let mut lexicon = Lexicon::new();
    lexicon.add_entry("Paris", "Paris", "NNP");
    assert!(lexicon.lookup("Paris").is_empty());
    assert!(!lexicon.contains("PARIS"));
}

#[test]
fn lower_casing_is_unicode_aware() {
    let mut lexicon = Lexicon::new();
    lexicon.add_entry("ŽLUŤOUČKÝ", "žluťoučký", "AAMS1");
    assert_eq!(lexicon.lookup("žluťoučký")[0].tag, "AAMS1");
}

#[test]
fn forms_lists_each_form_once() {
    let mut lexicon = Lexicon::new();
    lexicon.add_entry("a", "a", "DT");
    lexicon.add_entry("A", "a", "NN");
    lexicon.add_entry("b", "b", "NN");
    let mut forms: Vec<&str> = lexicon.forms().collect();
    forms.sort_unstable();
    assert_eq!(forms, ["a", "b"]);
    assert_eq!(lexicon.entry_count(), 3);
}

#[test]
fn lexicon_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Lexicon>();
}
