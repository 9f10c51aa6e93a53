use super::*;
use pretty_assertions::assert_eq;
use textkit_lexer::{Tokenizer, TokenizerConfig};

fn lexicon() -> Lexicon {
    let mut lexicon = Lexicon::new();
    lexicon.add_entry("saw", "see", "VBD");
    lexicon.add_entry("saw", "saw", "NN");
    lexicon.add_entry("the", "the", "DT");
    lexicon.add_entry("kg", "kilogram", "NN");
    lexicon
}

#[test]
fn words_are_looked_up_case_insensitively() {
    let lexicon = lexicon();
    let tokens = Tokenizer::default().tokenize("The SAW", "<t>");
    let annotated = annotate(tokens, &lexicon);
    assert_eq!(annotated[0].analyses, [LexicalEntry::new("the", "DT")]);
    assert_eq!(
        annotated[1].analyses,
        [LexicalEntry::new("see", "VBD"), LexicalEntry::new("saw", "NN")]
    );
}

#[test]
fn order_and_count_are_preserved() {
    let lexicon = lexicon();
    let tokens = Tokenizer::default().tokenize("the cat, the saw.", "<t>");
    let count = tokens.len();
    let annotated = annotate(tokens.clone(), &lexicon);
    assert_eq!(annotated.len(), count);
    let back: Vec<_> = annotated.iter().map(|a| a.token).collect();
    assert_eq!(back, tokens);
    let known: Vec<bool> = annotated.iter().map(Annotated::is_known).collect();
    assert_eq!(known, [true, false, false, true, true, false, false]);
}

#[test]
fn only_words_are_annotated() {
    let lexicon = lexicon();
    let config = TokenizerConfig::new().with_string_delimiter('"');
    // `10kg` is a tagged number and `"the"` a string: neither is a word.
    let tokens = Tokenizer::new(config).tokenize("10kg \"the\"", "<t>");
    let annotated = annotate(tokens, &lexicon);
    assert_eq!(annotated.len(), 3);
    assert!(annotated.iter().all(|a| !a.is_known()));
}
