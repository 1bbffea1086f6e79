// Copyright 2025 the SwipeDeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classification of drag vectors and the presentational values derived from them.
//!
//! ## Overview
//!
//! [`classify`] maps a cumulative drag vector to a [`Decision`]:
//! - While [`Moving`](GesturePhase::Moving), the answer is always
//!   [`Sliding`](Decision::Sliding), carrying a direction and an icon magnitude.
//! - Once [`Released`](GesturePhase::Released), the horizontal offset is compared against the
//!   distance threshold. Strictly exceeding it commits; anything else cancels.
//!
//! Only the horizontal component matters for decisions. The vertical component only feeds the
//! card transform ([`drag_transform`]).
//!
//! ## Tie-break
//!
//! A horizontal offset of exactly zero is a [`Dislike`](Direction::Dislike) slide. An offset
//! exactly equal to the threshold cancels.

use core::f64::consts::PI;

use kurbo::{Affine, Vec2};

use crate::types::{Decision, DecisionParams, Direction, GesturePhase, ICON_FULL_OPACITY_DIVISOR};

/// Horizontal units of drag per degree of card rotation.
pub const ROTATION_DIVISOR: f64 = 20.0;

/// Classify a drag vector for the given phase.
pub fn classify(drag: Vec2, phase: GesturePhase, params: &DecisionParams) -> Decision {
    match phase {
        GesturePhase::Moving => classify_moving(drag, params.card_width),
        GesturePhase::Released => classify_release(drag, params.distance_threshold),
    }
}

/// Classify an in-progress drag. Always returns [`Decision::Sliding`].
pub fn classify_moving(drag: Vec2, card_width: f64) -> Decision {
    Decision::Sliding {
        direction: Direction::from_offset(drag.x),
        magnitude: icon_magnitude(drag.x, card_width),
    }
}

/// Classify a released drag: commit past `distance_threshold`, cancel otherwise.
pub fn classify_release(drag: Vec2, distance_threshold: f64) -> Decision {
    // NaN never exceeds the threshold, so it cancels.
    if drag.x.abs() > distance_threshold {
        match Direction::from_offset(drag.x) {
            Direction::Like => Decision::CommitLike,
            Direction::Dislike => Decision::CommitDislike,
        }
    } else {
        Decision::Cancel
    }
}

/// Icon opacity for a horizontal offset: `min(1, |x| / (card_width / 3))`.
pub fn icon_magnitude(x: f64, card_width: f64) -> f64 {
    let offset = x.abs();
    if offset.is_nan() {
        return 0.0;
    }
    if !(card_width.is_finite() && card_width > 0.0) {
        return if offset > 0.0 { 1.0 } else { 0.0 };
    }
    (offset / (card_width / ICON_FULL_OPACITY_DIVISOR)).clamp(0.0, 1.0)
}

/// Card rotation in radians for a drag translation: `(x / 20)` degrees.
#[inline]
pub fn drag_rotation(translation: Vec2) -> f64 {
    let degrees = translation.x / ROTATION_DIVISOR;
    degrees * PI / 180.0
}

/// Center-relative card transform for a drag translation.
///
/// The card is rotated by [`drag_rotation`] and the translation is applied in the rotated frame,
/// i.e. `rotate(angle) * translate(translation)`.
pub fn drag_transform(translation: Vec2) -> Affine {
    Affine::rotate(drag_rotation(translation)) * Affine::translate(translation)
}
