//! Data model shared by the word spinner crates.
//!
//! A [`WordList`] is the validated form of raw multi-line input, an
//! [`OutputMode`] selects which combination arities are produced from it, and
//! the error types describe every recoverable failure the engines report.

pub mod error;
pub mod mode;
pub mod words;

pub use error::{Result, SpinError, ValidationError};
pub use mode::OutputMode;
pub use words::WordList;

/// Hard cap on the number of input words; permutation counts grow factorially.
pub const MAX_WORDS: usize = 12;

/// Smallest arity produced by the strict combination builder.
pub const MIN_ARITY: usize = 2;

/// Largest arity produced by the strict combination builder.
pub const MAX_ARITY: usize = 5;
