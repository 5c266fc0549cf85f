//! Spin animation settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use wordspin_model::SpinError;

/// Timing and rotation parameters for a spin.
///
/// Defaults are a 5 second spin of 3600 degrees plus up to 360 random extra
/// degrees, ticking at roughly 60 frames per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    /// Total animation time.
    pub duration: Duration,
    /// Fixed rotation applied on every spin.
    pub base_rotation_degrees: f64,
    /// Upper bound (exclusive) of the random extra rotation.
    pub max_extra_degrees: f64,
    /// Delay between animation frames.
    pub frame_interval: Duration,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(5000),
            base_rotation_degrees: 3600.0,
            max_extra_degrees: 360.0,
            frame_interval: Duration::from_millis(16),
        }
    }
}

impl SpinConfig {
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_base_rotation(mut self, degrees: f64) -> Self {
        self.base_rotation_degrees = degrees;
        self
    }

    #[must_use]
    pub fn with_max_extra(mut self, degrees: f64) -> Self {
        self.max_extra_degrees = degrees;
        self
    }

    #[must_use]
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Checks that the settings can drive an animation to completion.
    ///
    /// # Errors
    ///
    /// Returns [`SpinError::InvalidConfig`] for a zero duration or frame
    /// interval, or a negative or non-finite rotation.
    pub fn validate(&self) -> Result<(), SpinError> {
        if self.duration.is_zero() {
            return Err(SpinError::InvalidConfig("duration must be positive".into()));
        }
        if self.frame_interval.is_zero() {
            return Err(SpinError::InvalidConfig(
                "frame interval must be positive".into(),
            ));
        }
        for (name, value) in [
            ("base rotation", self.base_rotation_degrees),
            ("max extra rotation", self.max_extra_degrees),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SpinError::InvalidConfig(format!(
                    "{name} must be a finite, non-negative angle, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SpinConfig::default();
        assert_eq!(config.duration, Duration::from_secs(5));
        assert_eq!(config.base_rotation_degrees, 3600.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_settings() {
        let zero = SpinConfig::default().with_duration(Duration::ZERO);
        assert!(matches!(zero.validate(), Err(SpinError::InvalidConfig(_))));

        let no_frames = SpinConfig::default().with_frame_interval(Duration::ZERO);
        assert!(no_frames.validate().is_err());

        let negative = SpinConfig::default().with_max_extra(-1.0);
        assert!(negative.validate().is_err());

        let nan = SpinConfig::default().with_base_rotation(f64::NAN);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: SpinConfig =
            serde_json::from_str(r#"{"max_extra_degrees": 0.0}"#).expect("parse config");
        assert_eq!(config.max_extra_degrees, 0.0);
        assert_eq!(config.duration, SpinConfig::default().duration);
    }
}
