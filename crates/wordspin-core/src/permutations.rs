//! Ordered word combinations.
//!
//! A combination of arity `k` is a space-joined ordered selection of `k`
//! distinct positions from the word list. Positions are chosen by the usual
//! "pick one remaining element, recurse on the rest" walk, visiting remaining
//! elements in list order, so combinations come out in lexicographic order of
//! their index sequences (not alphabetical order of the words).

use std::collections::HashSet;
use std::ops::RangeInclusive;

use tracing::debug;
use wordspin_model::{OutputMode, Result, ValidationError, WordList};

/// Splits raw text into a [`WordList`], one word per non-blank line.
///
/// # Errors
///
/// Returns [`ValidationError::TooManyWords`] for more than
/// [`wordspin_model::MAX_WORDS`] words.
pub fn validate_input(raw: &str) -> Result<WordList> {
    WordList::parse(raw)
}

/// Validates `raw` and generates every combination for the `mode` selector.
///
/// Input is validated before the mode is parsed, so oversized input reports
/// too many words even when the mode is also bad. Unknown modes are an error
/// here; compare [`generate_combinations_array`], which falls back instead.
///
/// # Errors
///
/// - [`ValidationError::TooManyWords`] for oversized input.
/// - [`ValidationError::InvalidOutputType`] for an unknown mode.
/// - [`ValidationError::InsufficientWords`] when the mode needs more words.
pub fn generate_combinations(raw: &str, mode: &str) -> Result<Vec<String>> {
    let words = validate_input(raw)?;
    let mode: OutputMode = mode.parse()?;
    combinations_for(&words, mode)
}

/// Generates every combination for `mode`, arities in increasing order.
///
/// Repeated input words are not collapsed, so the result may contain equal
/// strings.
///
/// # Errors
///
/// Returns [`ValidationError::InsufficientWords`] when `words` is shorter than
/// [`OutputMode::min_words`].
pub fn combinations_for(words: &WordList, mode: OutputMode) -> Result<Vec<String>> {
    let required = mode.min_words();
    if words.len() < required {
        return Err(ValidationError::InsufficientWords {
            mode,
            required,
            actual: words.len(),
        });
    }

    let mut combinations = Vec::with_capacity(combination_count(words.len(), mode));
    for arity in mode.arities(words.len()) {
        visit_permutations(words.as_slice(), arity, &mut |combo| combinations.push(combo));
    }
    debug!(
        words = words.len(),
        %mode,
        combinations = combinations.len(),
        "generated combinations"
    );
    Ok(combinations)
}

/// Generates unique combinations, collapsing equal joined strings.
///
/// Only `pairs` and `triplets` select a single arity. Any other selector,
/// `quads`, `quints` and `all` included, silently falls back to every arity
/// from 1 up to the word count; this builder never fails. Strings keep the
/// position of their first occurrence.
pub fn generate_combinations_array(words: &WordList, mode: &str) -> Vec<String> {
    let arities = unique_arities(mode, words.len());

    let mut seen = HashSet::new();
    let mut combinations = Vec::new();
    for arity in arities {
        visit_permutations(words.as_slice(), arity, &mut |combo| {
            if seen.insert(combo.clone()) {
                combinations.push(combo);
            }
        });
    }
    debug!(
        words = words.len(),
        mode,
        combinations = combinations.len(),
        "generated unique combinations"
    );
    combinations
}

/// All ordered `size`-permutations of `words`, space-joined.
///
/// Empty when `size` is zero or larger than the word count.
pub fn permutations(words: &[String], size: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(permutation_count(words.len(), size));
    visit_permutations(words, size, &mut |combo| out.push(combo));
    out
}

/// Number of strings [`permutations`] yields for `n` words: n!/(n-k)!.
///
/// Zero when `k` is zero or exceeds `n`. Saturates instead of overflowing.
#[must_use]
pub fn permutation_count(n: usize, k: usize) -> usize {
    if k == 0 || k > n {
        return 0;
    }
    (n - k + 1..=n).fold(1usize, usize::saturating_mul)
}

/// Number of strings [`combinations_for`] yields for `n` words in `mode`,
/// ignoring the minimum-word check.
#[must_use]
pub fn combination_count(n: usize, mode: OutputMode) -> usize {
    count_for_arities(n, mode.arities(n))
}

/// Upper bound on what [`generate_combinations_array`] yields for `n` words;
/// exact when no joined strings repeat.
#[must_use]
pub fn unique_combination_bound(n: usize, mode: &str) -> usize {
    count_for_arities(n, unique_arities(mode, n))
}

fn unique_arities(mode: &str, word_count: usize) -> RangeInclusive<usize> {
    match mode {
        "pairs" => 2..=2,
        "triplets" => 3..=3,
        _ => 1..=word_count,
    }
}

fn count_for_arities(n: usize, arities: RangeInclusive<usize>) -> usize {
    arities
        .map(|arity| permutation_count(n, arity))
        .fold(0usize, usize::saturating_add)
}

fn visit_permutations(words: &[String], size: usize, emit: &mut dyn FnMut(String)) {
    if size == 0 || size > words.len() {
        return;
    }
    let mut used = vec![false; words.len()];
    let mut chosen: Vec<&str> = Vec::with_capacity(size);
    extend(words, size, &mut used, &mut chosen, emit);
}

fn extend<'a>(
    words: &'a [String],
    size: usize,
    used: &mut [bool],
    chosen: &mut Vec<&'a str>,
    emit: &mut dyn FnMut(String),
) {
    if chosen.len() == size {
        emit(chosen.join(" "));
        return;
    }
    for (index, word) in words.iter().enumerate() {
        if used[index] {
            continue;
        }
        used[index] = true;
        chosen.push(word);
        extend(words, size, used, chosen, emit);
        chosen.pop();
        used[index] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> WordList {
        WordList::from_words(items).expect("valid words")
    }

    #[test]
    fn pairs_of_two_words() {
        let combos = generate_combinations("A\nB", "pairs").expect("two words make pairs");
        assert_eq!(combos, ["A B", "B A"]);
    }

    #[test]
    fn triplets_follow_index_order_not_alphabetical() {
        let combos = generate_combinations("c\nb\na", "triplets").expect("three words");
        assert_eq!(
            combos,
            ["c b a", "c a b", "b c a", "b a c", "a c b", "a b c"]
        );
    }

    #[test]
    fn all_mode_concatenates_in_increasing_arity() {
        let combos = generate_combinations("A\nB\nC", "all").expect("three words");
        assert_eq!(combos.len(), 6 + 6);
        assert_eq!(&combos[..6], ["A B", "A C", "B A", "B C", "C A", "C B"]);
        assert_eq!(combos[6], "A B C");
        assert_eq!(combos[11], "C B A");
    }

    #[test]
    fn all_mode_stops_at_five_words() {
        let raw = "a\nb\nc\nd\ne\nf";
        let combos = generate_combinations(raw, "all").expect("six words");
        assert_eq!(combos.len(), 30 + 120 + 360 + 720);
        assert!(combos.iter().all(|combo| combo.split(' ').count() <= 5));
    }

    #[test]
    fn insufficient_words_per_mode() {
        let cases = [
            ("A", "pairs", 2),
            ("A\nB", "triplets", 3),
            ("A\nB\nC", "quads", 4),
            ("A\nB\nC\nD", "quints", 5),
            ("A", "all", 2),
        ];
        for (raw, mode, required) in cases {
            let err = generate_combinations(raw, mode).expect_err("too few words");
            match err {
                ValidationError::InsufficientWords {
                    required: got, ..
                } => assert_eq!(got, required, "mode {mode}"),
                other => panic!("unexpected error for {mode}: {other}"),
            }
        }
    }

    #[test]
    fn invalid_mode_is_an_error() {
        let err = generate_combinations("A\nB", "bogus").expect_err("unknown mode");
        assert_eq!(err, ValidationError::InvalidOutputType("bogus".to_string()));
    }

    #[test]
    fn too_many_words_reported_before_bad_mode() {
        let raw: String = (0..13).map(|i| format!("w{i}\n")).collect();
        let err = generate_combinations(&raw, "bogus").expect_err("oversized input");
        assert!(matches!(err, ValidationError::TooManyWords { count: 13, .. }));
    }

    #[test]
    fn repeated_words_are_not_collapsed_by_strict_builder() {
        let combos = combinations_for(&words(&["x", "x"]), OutputMode::Pairs).expect("pairs");
        assert_eq!(combos, ["x x", "x x"]);
    }

    #[test]
    fn array_builder_collapses_duplicates() {
        let combos = generate_combinations_array(&words(&["x", "x", "y"]), "pairs");
        assert_eq!(combos, ["x x", "x y", "y x"]);
    }

    #[test]
    fn array_builder_falls_back_to_every_arity() {
        let combos = generate_combinations_array(&words(&["a", "b"]), "bogus");
        assert_eq!(combos, ["a", "b", "a b", "b a"]);

        let all = generate_combinations_array(&words(&["a", "b"]), "all");
        assert_eq!(all, combos);
    }

    #[test]
    fn array_builder_sends_other_fixed_modes_to_fallback() {
        let list = words(&["a", "b", "c", "d"]);
        for mode in ["quads", "quints", "all"] {
            let combos = generate_combinations_array(&list, mode);
            assert_eq!(combos.len(), 4 + 12 + 24 + 24, "mode {mode}");
            assert_eq!(combos[0], "a");
            assert_eq!(combos[63], "d c b a");
        }
        assert_eq!(generate_combinations_array(&list, "triplets").len(), 24);
    }

    #[test]
    fn array_builder_matches_selectors_exactly() {
        let list = words(&["a", "b", "c"]);
        assert_eq!(generate_combinations_array(&list, "PAIRS").len(), 3 + 6 + 6);
        assert_eq!(generate_combinations_array(&list, "pairs").len(), 6);
    }

    #[test]
    fn strict_builder_rejects_non_canonical_modes() {
        for mode in ["PAIRS", " pairs ", "Triplets"] {
            let err = generate_combinations("A\nB\nC", mode).expect_err("non-canonical mode");
            assert_eq!(err, ValidationError::InvalidOutputType(mode.to_string()));
        }
    }

    #[test]
    fn unique_bound_follows_fallback_arities() {
        assert_eq!(unique_combination_bound(4, "quads"), 64);
        assert_eq!(unique_combination_bound(4, "pairs"), 12);
        assert_eq!(unique_combination_bound(12, "all"), 1_302_061_344);
        assert_eq!(unique_combination_bound(0, "bogus"), 0);
    }

    #[test]
    fn array_builder_never_fails_on_short_input() {
        assert!(generate_combinations_array(&words(&["a"]), "triplets").is_empty());
        assert!(generate_combinations_array(&words(&[]), "bogus").is_empty());
    }

    #[test]
    fn permutation_counts() {
        assert_eq!(permutation_count(4, 2), 12);
        assert_eq!(permutation_count(12, 5), 95_040);
        assert_eq!(permutation_count(3, 4), 0);
        assert_eq!(permutation_count(3, 0), 0);
        assert_eq!(combination_count(12, OutputMode::All), 132 + 1_320 + 11_880 + 95_040);
        assert_eq!(combination_count(3, OutputMode::Quads), 0);
    }

    #[test]
    fn permutations_of_zero_or_oversized_arity_are_empty() {
        let list = vec!["a".to_string(), "b".to_string()];
        assert!(permutations(&list, 0).is_empty());
        assert!(permutations(&list, 3).is_empty());
        assert_eq!(permutations(&list, 1), ["a", "b"]);
    }
}
