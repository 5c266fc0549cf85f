//! Error types for word validation and spinning.

use thiserror::Error;

use crate::mode::OutputMode;

/// Recoverable input errors, raised before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// More non-blank lines than [`crate::MAX_WORDS`].
    #[error("too many words: got {count}, the limit is {max}")]
    TooManyWords {
        /// Number of words supplied.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The selected mode needs more words than were supplied.
    #[error("insufficient words for {mode}: need at least {required}, got {actual}")]
    InsufficientWords {
        /// Mode that was requested.
        mode: OutputMode,
        /// Minimum word count for the mode.
        required: usize,
        /// Number of words supplied.
        actual: usize,
    },

    /// The mode selector is not one of the known output types.
    #[error("invalid output type: {0:?}")]
    InvalidOutputType(String),
}

impl ValidationError {
    /// Returns a short message suitable for showing to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::TooManyWords { max, .. } => {
                format!("For best performance, please limit input to {max} words or fewer.")
            }
            Self::InsufficientWords { mode, required, .. } => {
                format!("At least {required} words are needed for {mode}")
            }
            Self::InvalidOutputType(_) => "Invalid output type".to_string(),
        }
    }
}

/// Errors reported by the spin engine.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SpinError {
    /// A spin was requested while another one is still animating.
    #[error("a spin is already in progress")]
    AlreadySpinning,

    /// The spin configuration cannot drive an animation.
    #[error("invalid spin configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = ValidationError::TooManyWords { count: 13, max: 12 };
        assert!(err.user_message().contains("12 words or fewer"));

        let err = ValidationError::InsufficientWords {
            mode: OutputMode::Triplets,
            required: 3,
            actual: 2,
        };
        assert_eq!(err.user_message(), "At least 3 words are needed for triplets");

        let err = ValidationError::InvalidOutputType("bogus".to_string());
        assert_eq!(err.user_message(), "Invalid output type");
    }

    #[test]
    fn test_display_names_the_failure() {
        let err = ValidationError::TooManyWords { count: 13, max: 12 };
        assert!(err.to_string().starts_with("too many words"));

        let err = ValidationError::InsufficientWords {
            mode: OutputMode::Pairs,
            required: 2,
            actual: 1,
        };
        assert!(err.to_string().starts_with("insufficient words for pairs"));

        let err = ValidationError::InvalidOutputType("bogus".to_string());
        assert_eq!(err.to_string(), "invalid output type: \"bogus\"");
    }
}
