//! The spinning wheel and its selection state.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, trace};
use wordspin_model::SpinError;

use super::config::SpinConfig;
use super::easing::{ease_out_cubic, normalize_degrees, resolve_label, selected_index};
use super::frames::{FrameSource, IntervalFrames};
use super::PLACEHOLDER_LABELS;

/// One candidate's slice of the wheel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub index: usize,
    pub label: String,
    pub start_degrees: f64,
    pub end_degrees: f64,
}

#[derive(Debug)]
struct WheelState<R> {
    angle: f64,
    spinning: bool,
    candidates: Vec<String>,
    rng: R,
}

/// A wheel of candidate labels that resolves an eased spin to one of them.
///
/// The angle persists across spins, so each spin starts where the previous
/// one stopped. State sits behind a mutex that is never held across an
/// `.await`; share the wheel through an `Arc` to poll
/// [`current_rotation`](Self::current_rotation) while a spin is pending.
///
/// Only one spin may run at a time: a second call fails with
/// [`SpinError::AlreadySpinning`] and leaves the running spin untouched.
#[derive(Debug)]
pub struct SpinWheel<R = StdRng> {
    config: SpinConfig,
    state: Mutex<WheelState<R>>,
}

impl SpinWheel<StdRng> {
    /// Creates a wheel seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a wheel whose rotation draws are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for SpinWheel<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send> SpinWheel<R> {
    /// Creates a wheel drawing its random extra rotation from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            config: SpinConfig::default(),
            state: Mutex::new(WheelState {
                angle: 0.0,
                spinning: false,
                candidates: placeholder(),
                rng,
            }),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SpinConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    /// Replaces the candidate labels.
    ///
    /// An empty list installs [`PLACEHOLDER_LABELS`]. The angle and spinning
    /// flag are left alone; a spin in flight resolves against the new labels.
    pub fn set_candidates<I, S>(&self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let labels = if labels.is_empty() { placeholder() } else { labels };
        debug!(candidates = labels.len(), "candidates replaced");
        self.lock().candidates = labels;
    }

    pub fn candidates(&self) -> Vec<String> {
        self.lock().candidates.clone()
    }

    /// Current wheel angle in degrees, always within `[0, 360)`.
    pub fn current_rotation(&self) -> f64 {
        self.lock().angle
    }

    pub fn is_spinning(&self) -> bool {
        self.lock().spinning
    }

    /// Equal-width segments in candidate order, starting at 0 degrees.
    pub fn segments(&self) -> Vec<Segment> {
        let state = self.lock();
        // Never empty: an empty candidate set is replaced by the placeholder.
        let width = 360.0 / state.candidates.len() as f64;
        state
            .candidates
            .iter()
            .enumerate()
            .map(|(index, label)| Segment {
                index,
                label: label.clone(),
                start_degrees: index as f64 * width,
                end_degrees: (index + 1) as f64 * width,
            })
            .collect()
    }

    /// Spins at the configured frame cadence and returns the winning label.
    ///
    /// # Errors
    ///
    /// Returns [`SpinError::AlreadySpinning`] if a spin is in flight and
    /// [`SpinError::InvalidConfig`] for an unusable [`SpinConfig`].
    pub async fn spin(&self) -> Result<String, SpinError> {
        self.config.validate()?;
        let mut frames = IntervalFrames::new(self.config.frame_interval);
        self.spin_with(&mut frames).await
    }

    /// Spins using `frames` as clock and scheduler.
    ///
    /// Each frame sets the angle to `start + total * ease_out_cubic(progress)`
    /// modulo 360. Once progress reaches 1 the spin ends and resolves to the
    /// label under the final angle. Dropping the returned future stops the
    /// wheel where it is.
    ///
    /// # Errors
    ///
    /// Same as [`SpinWheel::spin`].
    pub async fn spin_with<F: FrameSource>(&self, frames: &mut F) -> Result<String, SpinError> {
        self.config.validate()?;
        let (start_angle, total_rotation) = {
            let mut state = self.lock();
            if state.spinning {
                return Err(SpinError::AlreadySpinning);
            }
            let extra = if self.config.max_extra_degrees > 0.0 {
                state.rng.random_range(0.0..self.config.max_extra_degrees)
            } else {
                0.0
            };
            state.spinning = true;
            (state.angle, self.config.base_rotation_degrees + extra)
        };
        let _stop = StopOnDrop { wheel: self };

        let duration = self.config.duration.as_secs_f64();
        let started = frames.now();
        info!(start_angle, total_rotation, "spin started");

        loop {
            frames.next_frame().await;
            let elapsed = frames.now().saturating_duration_since(started);
            let progress = (elapsed.as_secs_f64() / duration).min(1.0);
            let angle = normalize_degrees(start_angle + total_rotation * ease_out_cubic(progress));

            let mut state = self.lock();
            state.angle = angle;
            trace!(progress, angle, "spin frame");
            if progress >= 1.0 {
                state.spinning = false;
                let index = selected_index(angle, state.candidates.len());
                let label = resolve_label(&state.candidates, angle);
                drop(state);
                info!(angle, ?index, label = %label, "spin resolved");
                return Ok(label);
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, WheelState<R>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct StopOnDrop<'a, R: Rng + Send> {
    wheel: &'a SpinWheel<R>,
}

impl<R: Rng + Send> Drop for StopOnDrop<'_, R> {
    fn drop(&mut self) {
        let mut state = self.wheel.lock();
        if state.spinning {
            state.spinning = false;
            debug!(angle = state.angle, "spin abandoned before completion");
        }
    }
}

fn placeholder() -> Vec<String> {
    PLACEHOLDER_LABELS.iter().map(|label| (*label).to_string()).collect()
}
