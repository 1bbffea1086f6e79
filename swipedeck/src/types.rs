// Copyright 2025 the SwipeDeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck collaborators: the data source it reads from and the delegate it reports to.
//!
//! ## Overview
//!
//! A [`Deck`](crate::deck::Deck) owns one value of each trait, injected when it is built.
//! - [`DeckDataSource`] supplies the ordered card models and the icons for each card.
//! - [`DeckDelegate`] receives deck events. Every method has a no-op default.
//!
//! `()` is a delegate that ignores everything; `Vec<DeckEvent<M>>` records every call as a
//! [`DeckEvent`], which is handy for hosts that prefer polling and for tests.

use alloc::vec::Vec;

use kurbo::Vec2;

/// Identity of a card within a deck.
///
/// Keys are handed out in increasing order and never reused by the same deck, even across
/// rebuilds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CardKey(pub(crate) u64);

impl CardKey {
    /// Raw key value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Supplies card models and icons.
pub trait DeckDataSource {
    /// Card content owned by the application. The deck only clones it into events.
    type Model: Clone;
    /// Icon image shown over a card while it slides.
    type Icon;

    /// All card models for the current session, bottom first; the last one ends up on top.
    fn card_models(&mut self) -> Vec<Self::Model>;

    /// Icon shown on `model`'s card while sliding towards like.
    fn like_icon(&self, model: &Self::Model) -> Self::Icon;

    /// Icon shown on `model`'s card while sliding towards dislike.
    fn dislike_icon(&self, model: &Self::Model) -> Self::Icon;

    /// Icon for the detail button on `model`'s card. `None` means the card shows no button.
    fn detail_icon(&self, model: &Self::Model) -> Option<Self::Icon> {
        let _ = model;
        None
    }
}

/// Receives deck events.
///
/// All calls happen synchronously from inside the deck method that caused them.
pub trait DeckDelegate<M> {
    /// The stack was rebuilt from these models (bottom first).
    fn deck_rebuilt(&mut self, models: &[M]) {
        let _ = models;
    }

    /// `model` was liked and already left the stack; its exit animation is starting.
    fn will_like(&mut self, model: &M) {
        let _ = model;
    }

    /// `model` was disliked and already left the stack; its exit animation is starting.
    fn will_dislike(&mut self, model: &M) {
        let _ = model;
    }

    /// The exit animation of `model` finished and its card was detached.
    fn slide_finished(&mut self, model: &M) {
        let _ = model;
    }

    /// The top card is being dragged; `translation` is the cumulative drag vector.
    fn sliding(&mut self, model: &M, translation: Vec2) {
        let _ = (model, translation);
    }

    /// A drag on `model` ended within the threshold; the card stays on the stack.
    fn cancelled(&mut self, model: &M) {
        let _ = model;
    }

    /// The detail button of `model`'s card was pressed.
    fn detail_pressed(&mut self, model: &M) {
        let _ = model;
    }
}

/// A delegate call, as recorded by `Vec<DeckEvent<M>>`.
#[derive(Clone, Debug, PartialEq)]
pub enum DeckEvent<M> {
    /// See [`DeckDelegate::deck_rebuilt`].
    Rebuilt(Vec<M>),
    /// See [`DeckDelegate::will_like`].
    WillLike(M),
    /// See [`DeckDelegate::will_dislike`].
    WillDislike(M),
    /// See [`DeckDelegate::slide_finished`].
    SlideFinished(M),
    /// See [`DeckDelegate::sliding`].
    Sliding(M, Vec2),
    /// See [`DeckDelegate::cancelled`].
    Cancelled(M),
    /// See [`DeckDelegate::detail_pressed`].
    DetailPressed(M),
}

impl<M> DeckDelegate<M> for () {}

impl<M: Clone> DeckDelegate<M> for Vec<DeckEvent<M>> {
    fn deck_rebuilt(&mut self, models: &[M]) {
        self.push(DeckEvent::Rebuilt(models.to_vec()));
    }

    fn will_like(&mut self, model: &M) {
        self.push(DeckEvent::WillLike(model.clone()));
    }

    fn will_dislike(&mut self, model: &M) {
        self.push(DeckEvent::WillDislike(model.clone()));
    }

    fn slide_finished(&mut self, model: &M) {
        self.push(DeckEvent::SlideFinished(model.clone()));
    }

    fn sliding(&mut self, model: &M, translation: Vec2) {
        self.push(DeckEvent::Sliding(model.clone(), translation));
    }

    fn cancelled(&mut self, model: &M) {
        self.push(DeckEvent::Cancelled(model.clone()));
    }

    fn detail_pressed(&mut self, model: &M) {
        self.push(DeckEvent::DetailPressed(model.clone()));
    }
}
