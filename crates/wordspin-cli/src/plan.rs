//! Sizing a combination request before running it.

use wordspin_core::{OutputMode, combination_count, unique_combination_bound};

/// Above this many combinations the user gets a heads-up before generation.
pub const LARGE_OUTPUT: usize = 10_000;

/// Lowercases and trims a mode typed on the command line.
///
/// The engines only accept the canonical names, so loose spellings are
/// settled here.
pub fn normalize_mode(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Number of strings the selected builder will produce, when known up front.
///
/// `None` for the strict builder with an unknown mode, which fails instead.
pub fn expected_output(word_count: usize, mode: &str, unique: bool) -> Option<usize> {
    if unique {
        return Some(unique_combination_bound(word_count, mode));
    }
    mode.parse::<OutputMode>()
        .ok()
        .map(|mode| combination_count(word_count, mode))
}

/// True when [`expected_output`] exceeds [`LARGE_OUTPUT`].
pub fn is_large(word_count: usize, mode: &str, unique: bool) -> bool {
    expected_output(word_count, mode, unique).is_some_and(|expected| expected > LARGE_OUTPUT)
}
