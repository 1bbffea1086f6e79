// Copyright 2025 the SwipeDeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck configuration: commit threshold and animation timing.

use core::time::Duration;

use swipedeck_decision::types::DEFAULT_DISTANCE_THRESHOLD;

use crate::error::ConfigError;

/// Default duration of the spring-back animation after a cancelled drag.
pub const DEFAULT_CANCEL_DURATION: Duration = Duration::from_millis(750);
/// Default damping ratio of the spring-back animation.
pub const DEFAULT_CANCEL_DAMPING: f64 = 0.6;
/// Default initial velocity of the spring-back animation, in animated distances per second.
pub const DEFAULT_CANCEL_INITIAL_VELOCITY: f64 = 0.1;
/// Default duration of the exit animation after a commit.
pub const DEFAULT_COMMIT_DURATION: Duration = Duration::from_millis(500);
/// Default horizontal offset a committed card travels to.
pub const DEFAULT_COMMIT_TRANSLATION: f64 = 700.0;
/// Default rotation, in degrees, a committed card ends at.
pub const DEFAULT_COMMIT_ROTATION_DEGREES: f64 = 15.0;

/// Tunables for a deck and the cards it builds.
///
/// Translations and rotations are magnitudes; the sign comes from the swipe direction.
/// Use [`SwipeConfig::validate`] (or build the deck through
/// [`DeckBuilder`](crate::deck::DeckBuilder)) to reject unusable values.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SwipeConfig {
    /// Horizontal distance a released drag must strictly exceed to commit.
    pub distance_threshold: f64,
    /// Duration of the spring-back after a cancel.
    #[cfg_attr(feature = "serde", serde(with = "duration_secs"))]
    pub cancel_duration: Duration,
    /// Damping ratio of the spring-back, in `(0, 1]`.
    pub cancel_damping: f64,
    /// Initial velocity of the spring-back.
    pub cancel_initial_velocity: f64,
    /// Duration of the exit animation after a commit.
    #[cfg_attr(feature = "serde", serde(with = "duration_secs"))]
    pub commit_duration: Duration,
    /// Horizontal offset a committed card travels to.
    pub commit_translation: f64,
    /// Rotation in degrees a committed card ends at.
    pub commit_rotation_degrees: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            cancel_duration: DEFAULT_CANCEL_DURATION,
            cancel_damping: DEFAULT_CANCEL_DAMPING,
            cancel_initial_velocity: DEFAULT_CANCEL_INITIAL_VELOCITY,
            commit_duration: DEFAULT_COMMIT_DURATION,
            commit_translation: DEFAULT_COMMIT_TRANSLATION,
            commit_rotation_degrees: DEFAULT_COMMIT_ROTATION_DEGREES,
        }
    }
}

impl SwipeConfig {
    /// Set the commit distance threshold.
    #[must_use]
    pub fn with_distance_threshold(mut self, threshold: f64) -> Self {
        self.distance_threshold = threshold;
        self
    }

    /// Set the spring-back duration, damping ratio and initial velocity.
    #[must_use]
    pub fn with_cancel_spring(mut self, duration: Duration, damping: f64, velocity: f64) -> Self {
        self.cancel_duration = duration;
        self.cancel_damping = damping;
        self.cancel_initial_velocity = velocity;
        self
    }

    /// Set the exit animation duration, travel and final rotation (degrees).
    #[must_use]
    pub fn with_commit_exit(mut self, duration: Duration, translation: f64, degrees: f64) -> Self {
        self.commit_duration = duration;
        self.commit_translation = translation;
        self.commit_rotation_degrees = degrees;
        self
    }

    /// Final rotation of a committed card, in radians.
    pub fn commit_rotation(&self) -> f64 {
        self.commit_rotation_degrees.to_radians()
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.distance_threshold.is_finite() && self.distance_threshold >= 0.0) {
            return Err(ConfigError::InvalidConfig(
                "distance threshold must be finite and non-negative",
            ));
        }
        if self.cancel_duration.is_zero() {
            return Err(ConfigError::InvalidConfig("cancel duration must be non-zero"));
        }
        if !(self.cancel_damping > 0.0 && self.cancel_damping <= 1.0) {
            return Err(ConfigError::InvalidConfig("cancel damping must be in (0, 1]"));
        }
        if !self.cancel_initial_velocity.is_finite() {
            return Err(ConfigError::InvalidConfig("cancel initial velocity must be finite"));
        }
        if self.commit_duration.is_zero() {
            return Err(ConfigError::InvalidConfig("commit duration must be non-zero"));
        }
        if !(self.commit_translation.is_finite() && self.commit_rotation_degrees.is_finite()) {
            return Err(ConfigError::InvalidConfig(
                "commit translation and rotation must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod duration_secs {
    use core::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
