//! Word combination generation and animated spin selection.
//!
//! Two engines cooperate:
//!
//! - [`permutations`] turns raw multi-line input and an [`OutputMode`] into an
//!   ordered list of space-joined word combinations.
//! - [`spin`] owns a rotating wheel of candidate labels and resolves an eased,
//!   time-driven spin to exactly one of them.
//!
//! # Example
//!
//! ```no_run
//! use wordspin_core::{SpinWheel, generate_combinations};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let combos = generate_combinations("red\ngreen\nblue", "pairs")?;
//! let wheel = SpinWheel::new();
//! wheel.set_candidates(combos);
//! let winner = wheel.spin().await?;
//! println!("{winner} at {:.1} degrees", wheel.current_rotation());
//! # Ok(())
//! # }
//! ```

pub mod permutations;
pub mod spin;

pub use permutations::{
    combination_count, combinations_for, generate_combinations, generate_combinations_array,
    permutation_count, permutations, unique_combination_bound, validate_input,
};
pub use spin::{
    FrameSource, IntervalFrames, ManualFrames, NO_SELECTION, PLACEHOLDER_LABELS, Segment,
    SpinConfig, SpinWheel,
};
pub use wordspin_model::{OutputMode, SpinError, ValidationError, WordList};
