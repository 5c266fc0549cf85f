//! Tests for wordspin-model types.

use wordspin_model::{MAX_WORDS, OutputMode, ValidationError, WordList};

fn lines(count: usize) -> String {
    (1..=count)
        .map(|i| format!("word{i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn twelve_words_are_accepted() {
    let list = WordList::parse(&lines(MAX_WORDS)).expect("12 words are allowed");
    assert_eq!(list.len(), 12);
}

#[test]
fn thirteen_words_are_rejected() {
    let err = WordList::parse(&lines(13)).expect_err("13 words exceed the cap");
    assert_eq!(err, ValidationError::TooManyWords { count: 13, max: 12 });
}

#[test]
fn blank_lines_do_not_count_toward_cap() {
    let raw = format!("{}\n\n   \n\n", lines(12));
    assert!(WordList::parse(&raw).is_ok());
}

#[test]
fn mode_selectors_match_documented_names() {
    let names: Vec<&str> = OutputMode::ALL.iter().map(OutputMode::as_str).collect();
    assert_eq!(names, ["pairs", "triplets", "quads", "quints", "all"]);
}
