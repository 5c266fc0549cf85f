//! Animated spin selection.
//!
//! A [`SpinWheel`] partitions the circle into equal segments, one per
//! candidate label. A spin rotates the wheel by ten full turns plus a random
//! extra, eased out over a fixed duration, and resolves to the label whose
//! segment contains the final angle.
//!
//! The animation is driven by a [`FrameSource`]: production code ticks a
//! [`tokio::time::Interval`], tests substitute [`ManualFrames`] to step a
//! virtual clock without sleeping.

mod config;
mod easing;
mod frames;
mod wheel;

pub use config::SpinConfig;
pub use easing::{ease_out_cubic, normalize_degrees, resolve_label, selected_index};
pub use frames::{FrameSource, IntervalFrames, ManualFrames};
pub use wheel::{Segment, SpinWheel};

/// Labels used whenever the wheel is given no candidates.
pub const PLACEHOLDER_LABELS: [&str; 3] = ["Spin", "the", "Wheel"];

/// Result of a spin that lands on no usable label.
pub const NO_SELECTION: &str = "No combination selected";
