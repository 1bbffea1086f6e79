// Copyright 2025 the SwipeDeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use swipedeck_decision::types::Direction;
use thiserror::Error;

/// A deck could not be assembled.
///
/// Returned by [`DeckBuilder::try_build`](crate::deck::DeckBuilder::try_build);
/// [`DeckBuilder::build`](crate::deck::DeckBuilder::build) panics with the same message.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No data source was supplied, so no cards or icons can be produced.
    #[error("the deck has no data source; set one before building it")]
    MissingDataSource,
    /// A [`SwipeConfig`](crate::config::SwipeConfig) value is unusable.
    #[error("invalid swipe configuration: {0}")]
    InvalidConfig(&'static str),
}

/// A card received a gesture or command its current state does not accept.
///
/// The card's state is left untouched when this is returned.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// `update_drag`/`end_drag` without a preceding `begin_drag`.
    #[error("the card is not being dragged")]
    NotDragging,
    /// The card already committed; a commit happens once and cannot be undone.
    #[error("the card has already committed ({0:?})")]
    Committed(Direction),
}
