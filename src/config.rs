//! Motion parameters for the walking routine.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Two points closer than this are the same location (metres).
pub const DEFAULT_EPSILON_DISTANCE: f64 = 0.001;

/// Distance covered by a single leg step (metres).
pub const DEFAULT_STEP_SIZE: f64 = 0.1;

/// Smallest allowed ratio of `epsilon_distance` to `step_size`.
///
/// The last step of a walk lands a few ulps off target along a fixed heading. A
/// tolerance below that error is never met and the walk overshoots forever.
pub const MIN_EPSILON_TO_STEP_RATIO: f64 = 1e-9;

/// Configuration for robot locomotion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Maximum distance a single leg step covers.
    pub step_size: f64,
    /// Arrival tolerance. Must be much smaller than `step_size`.
    pub epsilon_distance: f64,
    /// Re-aim at the destination before every step instead of once per walk.
    pub reorient_each_step: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_STEP_SIZE,
            epsilon_distance: DEFAULT_EPSILON_DISTANCE,
            reorient_each_step: false,
        }
    }
}

impl MotionConfig {
    /// Sets the maximum stride of a single leg step.
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// Sets the arrival tolerance.
    pub fn with_epsilon_distance(mut self, epsilon_distance: f64) -> Self {
        self.epsilon_distance = epsilon_distance;
        self
    }

    /// Enables or disables re-aiming before every step.
    pub fn with_reorient_each_step(mut self, reorient: bool) -> Self {
        self.reorient_each_step = reorient;
        self
    }

    /// Checks that a walk under this configuration terminates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step_size.is_finite() {
            return Err(ConfigError::NonFinite { field: "step_size" });
        }
        if !self.epsilon_distance.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "epsilon_distance",
            });
        }
        if self.step_size <= 0.0 {
            return Err(ConfigError::NonPositiveStepSize(self.step_size));
        }
        if self.epsilon_distance <= 0.0 {
            return Err(ConfigError::NonPositiveEpsilon(self.epsilon_distance));
        }
        if self.epsilon_distance < self.step_size * MIN_EPSILON_TO_STEP_RATIO {
            return Err(ConfigError::UnresolvableEpsilon {
                epsilon_distance: self.epsilon_distance,
                step_size: self.step_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = MotionConfig::default();
        assert_eq!(config.step_size, 0.1);
        assert_eq!(config.epsilon_distance, 0.001);
        assert!(!config.reorient_each_step);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_epsilon_is_rejected() {
        let config = MotionConfig::default().with_epsilon_distance(0.0);
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveEpsilon(0.0)));
    }

    #[test]
    fn negative_step_is_rejected() {
        let config = MotionConfig::default().with_step_size(-0.5);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveStepSize(-0.5))
        );
    }

    #[test]
    fn sub_resolution_epsilon_is_rejected() {
        let config = MotionConfig::default().with_epsilon_distance(1e-18);
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnresolvableEpsilon {
                epsilon_distance: 1e-18,
                step_size: 0.1,
            })
        );
    }

    #[test]
    fn epsilon_at_ratio_floor_is_accepted() {
        let config = MotionConfig::default()
            .with_step_size(1.0)
            .with_epsilon_distance(MIN_EPSILON_TO_STEP_RATIO);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn nan_step_is_rejected() {
        let config = MotionConfig::default().with_step_size(f64::NAN);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "step_size" })
        );
    }
}
