// Copyright 2025 the SwipeDeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipedeck Decision: pure classification of card drags into swipe decisions.
//!
//! ## Overview
//!
//! This crate turns the cumulative drag vector of a card into a discrete decision.
//! It does not own any state and performs no animation.
//! The card and deck controllers in `swipedeck` call into it on every drag update and on release.
//!
//! ## Decisions
//!
//! - While the pointer is down, every drag is [`Sliding`](crate::types::Decision::Sliding):
//!   the sign of the horizontal offset picks the direction, and its size relative to a third of
//!   the card width gives the icon magnitude in `[0, 1]`.
//! - On release, a horizontal offset strictly beyond the distance threshold
//!   ([`DEFAULT_DISTANCE_THRESHOLD`](crate::types::DEFAULT_DISTANCE_THRESHOLD) is `120`)
//!   commits a like or a dislike. Anything else cancels.
//! - A zero offset counts as a dislike.
//!
//! ## Presentation
//!
//! [`drag_rotation`](crate::classify::drag_rotation) and
//! [`drag_transform`](crate::classify::drag_transform) derive the card's tilt from the same
//! vector: one degree per 20 units of horizontal travel, applied rotation-then-translation around
//! the card's center.
//!
//! ## Example
//!
//! ```
//! use kurbo::Vec2;
//! use swipedeck_decision::classify::classify;
//! use swipedeck_decision::types::{Decision, DecisionParams, Direction, GesturePhase};
//!
//! let params = DecisionParams::new(120.0, 300.0);
//!
//! let moving = classify(Vec2::new(50.0, 4.0), GesturePhase::Moving, &params);
//! assert_eq!(
//!     moving,
//!     Decision::Sliding { direction: Direction::Like, magnitude: 0.5 }
//! );
//!
//! let released = classify(Vec2::new(150.0, 10.0), GesturePhase::Released, &params);
//! assert_eq!(released, Decision::CommitLike);
//!
//! let short = classify(Vec2::new(-50.0, 5.0), GesturePhase::Released, &params);
//! assert_eq!(short, Decision::Cancel);
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod classify;
pub mod types;
