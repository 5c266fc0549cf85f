//! Animation frame scheduling.

use std::future::{self, Future};
use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior};

/// Clock plus "wait for the next frame" primitive that drives a spin.
pub trait FrameSource: Send {
    /// Current time on this source's clock.
    fn now(&self) -> Instant;

    /// Completes when the next animation frame is due.
    fn next_frame(&mut self) -> impl Future<Output = ()> + Send;
}

/// Fixed-cadence frames backed by [`tokio::time::interval`].
///
/// Late frames are skipped rather than replayed in a burst. Must be created
/// inside a Tokio runtime.
#[derive(Debug)]
pub struct IntervalFrames {
    interval: Interval,
}

impl IntervalFrames {
    /// # Panics
    ///
    /// Panics if `period` is zero or no Tokio runtime is active.
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }
}

impl FrameSource for IntervalFrames {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn next_frame(&mut self) {
        self.interval.tick().await;
    }
}

/// Virtual clock that advances by a fixed step per frame, without sleeping.
#[derive(Debug, Clone)]
pub struct ManualFrames {
    origin: Instant,
    elapsed: Duration,
    step: Duration,
    frames: usize,
}

impl ManualFrames {
    pub fn new(step: Duration) -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Duration::ZERO,
            step,
            frames: 0,
        }
    }

    /// Frames delivered so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Virtual time elapsed since creation.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl FrameSource for ManualFrames {
    fn now(&self) -> Instant {
        self.origin + self.elapsed
    }

    fn next_frame(&mut self) -> impl Future<Output = ()> + Send {
        self.elapsed += self.step;
        self.frames += 1;
        future::ready(())
    }
}
