//! Driving a spin while showing its progress.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::warn;
use wordspin_core::spin::resolve_label;
use wordspin_core::{SpinError, SpinWheel};

/// How often the progress display samples the wheel.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What a finished spin produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpinOutcome {
    pub winner: String,
    pub angle: f64,
    pub candidates: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// A bar sized to the spin duration in milliseconds, or a hidden one.
pub fn spin_progress_bar(duration: Duration, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(duration.as_millis().try_into().unwrap_or(u64::MAX));
    let style = ProgressStyle::with_template("{spinner:.cyan} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    bar.set_style(style);
    bar
}

/// Spins `wheel` and concurrently mirrors its angle onto `progress`.
///
/// The display only reads the wheel, so it never affects the outcome.
///
/// # Errors
///
/// Propagates the [`SpinError`] from [`SpinWheel::spin`].
pub async fn spin_with_progress(
    wheel: &SpinWheel,
    progress: &ProgressBar,
) -> Result<SpinOutcome, SpinError> {
    let candidates = wheel.candidates();
    let started = Instant::now();

    let watch = async {
        let mut poll = tokio::time::interval(POLL_INTERVAL);
        poll.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            poll.tick().await;
            if !wheel.is_spinning() {
                break;
            }
            let angle = wheel.current_rotation();
            progress.set_position(started.elapsed().as_millis().try_into().unwrap_or(u64::MAX));
            progress.set_message(format!("{angle:>5.1}°  {}", resolve_label(&candidates, angle)));
        }
    };
    let (result, ()) = tokio::join!(wheel.spin(), watch);

    match result {
        Ok(winner) => {
            progress.finish_with_message(winner.clone());
            Ok(SpinOutcome {
                winner,
                angle: wheel.current_rotation(),
                candidates: candidates.len(),
                seed: None,
            })
        }
        Err(error) => {
            warn!(%error, "spin did not run");
            progress.abandon();
            Err(error)
        }
    }
}
