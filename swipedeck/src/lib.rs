// Copyright 2025 the SwipeDeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipedeck: controllers for a stack of swipeable cards.
//!
//! ## Overview
//!
//! A deck shows a stack of cards. The user drags the top card left or right; released far
//! enough, it is liked or disliked and flies off, otherwise it springs back. The host can also
//! like or dislike the top card without a gesture.
//!
//! This crate owns the interaction logic and the animation state. It does not draw anything:
//! the host reads each card's [`CardPresentation`](card::CardPresentation) and renders it however
//! it likes.
//!
//! - [`card`]: one card's drag state machine and presentation.
//! - [`deck`]: the ordered stack, drag routing and event relaying.
//! - [`animation`]: poses and the spring-back and exit animations.
//! - [`types`]: the data source and delegate traits a deck is built from.
//! - [`config`]: threshold and animation tunables.
//! - [`error`]: errors for building decks and for rejected gestures.
//!
//! Drag classification lives in `swipedeck_decision`.
//!
//! ## Frame loop
//!
//! Nothing animates on its own. Call [`Deck::advance`](deck::Deck::advance) from the host's
//! frame loop while [`Deck::is_animating`](deck::Deck::is_animating) holds. Exit completions are
//! reported from inside that call.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Size, Vec2};
//! use swipedeck::deck::DeckBuilder;
//! use swipedeck::types::{DeckDataSource, DeckEvent};
//!
//! struct Profiles;
//!
//! impl DeckDataSource for Profiles {
//!     type Model = u32;
//!     type Icon = &'static str;
//!     fn card_models(&mut self) -> Vec<u32> { vec![1, 2, 3] }
//!     fn like_icon(&self, _: &u32) -> &'static str { "heart" }
//!     fn dislike_icon(&self, _: &u32) -> &'static str { "cross" }
//! }
//!
//! let mut deck = DeckBuilder::new()
//!     .data_source(Profiles)
//!     .delegate(Vec::<DeckEvent<u32>>::new())
//!     .card_size(Size::new(300.0, 450.0))
//!     .build();
//! deck.rebuild();
//!
//! // Drag the top card well past the threshold and let go.
//! deck.begin_drag().unwrap();
//! deck.update_drag(Vec2::new(150.0, 10.0)).unwrap();
//! deck.end_drag(Vec2::new(150.0, 10.0)).unwrap();
//! assert_eq!(deck.len(), 2);
//!
//! while deck.is_animating() {
//!     deck.advance(Duration::from_millis(16));
//! }
//! assert_eq!(
//!     deck.delegate()[1..],
//!     [
//!         DeckEvent::Sliding(3, Vec2::new(150.0, 10.0)),
//!         DeckEvent::WillLike(3),
//!         DeckEvent::SlideFinished(3),
//!     ]
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std` (default) or the `libm`
//! feature for floating-point math.

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod animation;
pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod types;
