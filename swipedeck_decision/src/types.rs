// Copyright 2025 the SwipeDeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the decision engine: directions, gesture phases, parameters, and decisions.
//!
//! ## Overview
//!
//! These types describe the inputs and outputs of [`classify`](crate::classify::classify).
//! They are shared with the card and deck controllers in `swipedeck`.

/// Default horizontal distance (device-independent units) a drag must exceed to commit.
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 120.0;

/// Fraction of the card width at which the direction icon reaches full opacity.
///
/// A drag of `card_width / ICON_FULL_OPACITY_DIVISOR` yields a magnitude of `1.0`.
pub const ICON_FULL_OPACITY_DIVISOR: f64 = 3.0;

/// Which way a card is being swiped.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Towards positive `x` (right).
    Like,
    /// Towards negative `x` (left). Also chosen for a zero offset.
    Dislike,
}

impl Direction {
    /// Direction for a horizontal offset.
    ///
    /// Only a strictly positive offset is [`Like`](Self::Like); zero and NaN map to
    /// [`Dislike`](Self::Dislike).
    #[inline]
    pub fn from_offset(x: f64) -> Self {
        if x > 0.0 { Self::Like } else { Self::Dislike }
    }

    /// `+1.0` for [`Like`](Self::Like), `-1.0` for [`Dislike`](Self::Dislike).
    #[inline]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Like => 1.0,
            Self::Dislike => -1.0,
        }
    }
}

/// Where in its lifetime a drag currently is.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GesturePhase {
    /// The pointer is still down; the drag may continue.
    Moving,
    /// The pointer was lifted; a final decision is required.
    Released,
}

/// Parameters consulted by [`classify`](crate::classify::classify).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DecisionParams {
    /// Horizontal distance that must be strictly exceeded on release to commit.
    pub distance_threshold: f64,
    /// Laid-out card width, used to scale the icon magnitude while moving.
    ///
    /// A non-positive or non-finite width saturates the magnitude.
    pub card_width: f64,
}

impl DecisionParams {
    /// Parameters with the given threshold and card width.
    pub const fn new(distance_threshold: f64, card_width: f64) -> Self {
        Self {
            distance_threshold,
            card_width,
        }
    }
}

impl Default for DecisionParams {
    fn default() -> Self {
        Self::new(DEFAULT_DISTANCE_THRESHOLD, 0.0)
    }
}

/// Outcome of classifying a drag vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Decision {
    /// The drag is in progress.
    Sliding {
        /// Direction implied by the sign of the horizontal offset.
        direction: Direction,
        /// Icon opacity in `[0, 1]`, proportional to the horizontal offset.
        magnitude: f64,
    },
    /// Released past the threshold towards positive `x`.
    CommitLike,
    /// Released past the threshold towards negative `x`.
    CommitDislike,
    /// Released within the threshold; the card springs back.
    Cancel,
}

impl Decision {
    /// True for [`CommitLike`](Self::CommitLike) and [`CommitDislike`](Self::CommitDislike).
    #[inline]
    pub const fn is_commit(&self) -> bool {
        matches!(self, Self::CommitLike | Self::CommitDislike)
    }

    /// The direction carried by this decision, if any.
    ///
    /// [`Cancel`](Self::Cancel) has no direction.
    pub const fn direction(&self) -> Option<Direction> {
        match *self {
            Self::Sliding { direction, .. } => Some(direction),
            Self::CommitLike => Some(Direction::Like),
            Self::CommitDislike => Some(Direction::Dislike),
            Self::Cancel => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_offset_prefers_dislike_at_zero() {
        assert_eq!(Direction::from_offset(0.5), Direction::Like);
        assert_eq!(Direction::from_offset(-0.5), Direction::Dislike);
        assert_eq!(Direction::from_offset(0.0), Direction::Dislike);
        assert_eq!(Direction::from_offset(-0.0), Direction::Dislike);
        assert_eq!(Direction::from_offset(f64::NAN), Direction::Dislike);
    }

    #[test]
    fn direction_sign() {
        assert_eq!(Direction::Like.sign(), 1.0);
        assert_eq!(Direction::Dislike.sign(), -1.0);
    }

    #[test]
    fn decision_direction_and_commit() {
        let sliding = Decision::Sliding {
            direction: Direction::Like,
            magnitude: 0.2,
        };
        assert!(!sliding.is_commit());
        assert_eq!(sliding.direction(), Some(Direction::Like));
        assert!(Decision::CommitLike.is_commit());
        assert_eq!(Decision::CommitDislike.direction(), Some(Direction::Dislike));
        assert!(!Decision::Cancel.is_commit());
        assert_eq!(Decision::Cancel.direction(), None);
    }

    #[test]
    fn default_params_use_default_threshold() {
        let p = DecisionParams::default();
        assert_eq!(p.distance_threshold, DEFAULT_DISTANCE_THRESHOLD);
        assert_eq!(p.card_width, 0.0);
    }
}
