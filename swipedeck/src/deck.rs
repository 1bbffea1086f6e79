// Copyright 2025 the SwipeDeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck controller: the ordered stack of cards and the events relayed to its owner.
//!
//! ## Stack
//!
//! The stack is ordered bottom → top in data-source order; the last entry is the current card.
//! It grows only in [`Deck::rebuild`] and shrinks only when a card commits. A committing card
//! leaves the stack the moment it commits, before its exit animation runs, and waits in a
//! separate exiting list until the animation finishes.
//!
//! ## Relaying
//!
//! | Card event | Stack | Delegate call |
//! |---|---|---|
//! | `WillCommit(Like)` | card removed | [`will_like`](DeckDelegate::will_like) |
//! | `WillCommit(Dislike)` | card removed | [`will_dislike`](DeckDelegate::will_dislike) |
//! | `Cancelled` | unchanged | [`cancelled`](DeckDelegate::cancelled) |
//! | `Sliding(v)` | unchanged | [`sliding`](DeckDelegate::sliding) |
//! | `Committed(_)` | (already removed) | [`slide_finished`](DeckDelegate::slide_finished) |
//!
//! [`Deck::press_detail_top`] forwards a detail-button press on the current card to
//! [`detail_pressed`](DeckDelegate::detail_pressed) without touching the stack.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Size, Vec2};
use swipedeck_decision::types::Direction;

use crate::card::{CardController, CardEvent, CardPresentation};
use crate::config::SwipeConfig;
use crate::error::{ConfigError, TransitionError};
use crate::types::{CardKey, DeckDataSource, DeckDelegate};

/// One card of the deck: its model and its controller.
pub struct DeckEntry<M, I> {
    key: CardKey,
    model: M,
    card: CardController<I>,
}

impl<M: core::fmt::Debug, I> core::fmt::Debug for DeckEntry<M, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DeckEntry")
            .field("key", &self.key)
            .field("model", &self.model)
            .field("card", &self.card)
            .finish()
    }
}

impl<M, I> DeckEntry<M, I> {
    /// Identity of this card within its deck.
    pub fn key(&self) -> CardKey {
        self.key
    }

    /// The application's model for this card.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The card's controller.
    pub fn card(&self) -> &CardController<I> {
        &self.card
    }

    /// Shorthand for `card().presentation()`.
    pub fn presentation(&self) -> &CardPresentation {
        self.card.presentation()
    }
}

/// A swipeable stack of cards.
///
/// ## Usage
///
/// - Build with [`DeckBuilder`] (or [`Deck::new`]) from a [`DeckDataSource`] and a
///   [`DeckDelegate`].
/// - Call [`Deck::rebuild`] to load cards, and again whenever the data changes.
/// - Feed pointer input with [`Deck::begin_drag`], [`Deck::update_drag`], [`Deck::end_drag`], or
///   commit programmatically with [`Deck::like_top`] / [`Deck::dislike_top`].
/// - Call [`Deck::advance`] every frame while [`Deck::is_animating`] holds.
pub struct Deck<S: DeckDataSource, D> {
    source: S,
    delegate: D,
    config: SwipeConfig,
    card_size: Size,
    stack: Vec<DeckEntry<S::Model, S::Icon>>,
    exiting: Vec<DeckEntry<S::Model, S::Icon>>,
    next_key: u64,
}

impl<S: DeckDataSource, D> core::fmt::Debug for Deck<S, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Deck")
            .field("cards", &self.stack.len())
            .field("exiting", &self.exiting.len())
            .field("card_size", &self.card_size)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<S: DeckDataSource, D: DeckDelegate<S::Model>> Deck<S, D> {
    /// Create an empty deck with a zero card size.
    ///
    /// # Panics
    ///
    /// When `config` is rejected by [`SwipeConfig::validate`].
    /// [`DeckBuilder::try_build`] reports the same problem as an error.
    #[track_caller]
    pub fn new(source: S, delegate: D, config: SwipeConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("{err}");
        }
        Self::assemble(source, delegate, config, Size::ZERO)
    }

    /// Callers validate `config` first.
    fn assemble(source: S, delegate: D, config: SwipeConfig, card_size: Size) -> Self {
        Self {
            source,
            delegate,
            config,
            card_size,
            stack: Vec::new(),
            exiting: Vec::new(),
            next_key: 0,
        }
    }

    /// Replace every card with a fresh stack built from the data source.
    ///
    /// Cards still animating out are dropped as well; their completion is never reported.
    /// Returns the number of cards on the new stack.
    pub fn rebuild(&mut self) -> usize {
        let discarded = self.stack.len() + self.exiting.len();
        self.stack.clear();
        self.exiting.clear();

        let models = self.source.card_models();
        self.stack.reserve(models.len());
        for model in &models {
            let mut card = CardController::new(
                self.source.like_icon(model),
                self.source.dislike_icon(model),
                self.card_size,
                self.config,
            );
            if let Some(icon) = self.source.detail_icon(model) {
                card = card.with_detail_icon(icon);
            }
            let key = CardKey(self.next_key);
            self.next_key += 1;
            self.stack.push(DeckEntry {
                key,
                model: model.clone(),
                card,
            });
        }
        log::debug!(
            "Rebuilt deck with {} cards ({discarded} discarded)",
            self.stack.len()
        );
        self.delegate.deck_rebuilt(&models);
        self.stack.len()
    }

    /// Like the current card. Does nothing on an empty deck.
    pub fn like_top(&mut self) {
        self.commit_top(Direction::Like);
    }

    /// Dislike the current card. Does nothing on an empty deck.
    pub fn dislike_top(&mut self) {
        self.commit_top(Direction::Dislike);
    }

    /// Commit the current card towards `direction`. Does nothing on an empty deck.
    pub fn commit_top(&mut self, direction: Direction) {
        let Some(top) = self.stack.last_mut() else {
            log::debug!("Ignoring {direction:?} on an empty deck");
            return;
        };
        let key = top.key;
        // Committing cards never stay on the stack, so the top card always accepts.
        match top.card.commit(direction) {
            Ok(event) => self.relay(key, event),
            Err(err) => log::error!("Top card refused to commit: {err}"),
        }
    }

    /// Abandon the drag on the current card, if any, and spring it back.
    pub fn cancel_top(&mut self) {
        let Some(top) = self.stack.last_mut() else {
            return;
        };
        let key = top.key;
        if let Some(event) = top.card.cancel() {
            self.relay(key, event);
        }
    }

    /// Report a press on the current card's detail button. Does nothing on an empty deck.
    pub fn press_detail_top(&mut self) {
        let Some(top) = self.stack.last() else {
            log::debug!("Ignoring detail press on an empty deck");
            return;
        };
        log::debug!("Card {:?} detail pressed", top.key);
        self.delegate.detail_pressed(&top.model);
    }

    /// Start dragging the current card. Does nothing on an empty deck.
    pub fn begin_drag(&mut self) -> Result<(), TransitionError> {
        match self.stack.last_mut() {
            Some(top) => top.card.begin_drag(),
            None => {
                log::debug!("Ignoring drag on an empty deck");
                Ok(())
            }
        }
    }

    /// Move the current card's drag to `drag` (cumulative since the drag began).
    pub fn update_drag(&mut self, drag: Vec2) -> Result<(), TransitionError> {
        let Some(top) = self.stack.last_mut() else {
            return Ok(());
        };
        let key = top.key;
        let event = top.card.update_drag(drag)?;
        self.relay(key, event);
        Ok(())
    }

    /// Release the current card's drag at `drag`: commit past the threshold, cancel otherwise.
    pub fn end_drag(&mut self, drag: Vec2) -> Result<(), TransitionError> {
        let Some(top) = self.stack.last_mut() else {
            return Ok(());
        };
        let key = top.key;
        let event = top.card.end_drag(drag)?;
        self.relay(key, event);
        Ok(())
    }

    /// Advance every running animation by `dt` and report finished exits.
    pub fn advance(&mut self, dt: Duration) {
        for entry in &mut self.stack {
            let event = entry.card.advance(dt);
            debug_assert!(
                event.is_none(),
                "card {:?} on the stack reported {event:?}",
                entry.key
            );
        }
        for entry in &mut self.exiting {
            // Completion shows up as a detached card below.
            let _ = entry.card.advance(dt);
        }
        let (finished, running): (Vec<_>, Vec<_>) = core::mem::take(&mut self.exiting)
            .into_iter()
            .partition(|entry| !entry.card.presentation().attached);
        self.exiting = running;
        for entry in finished {
            log::trace!("Card {:?} finished sliding out", entry.key);
            self.delegate.slide_finished(&entry.model);
        }
    }

    /// True while any card, on the stack or exiting, is animating.
    pub fn is_animating(&self) -> bool {
        self.stack
            .iter()
            .chain(&self.exiting)
            .any(|entry| entry.card.is_animating())
    }

    /// The current (topmost) card.
    pub fn current_card(&self) -> Option<&DeckEntry<S::Model, S::Icon>> {
        self.stack.last()
    }

    /// The stack, bottom → top.
    pub fn entries(&self) -> &[DeckEntry<S::Model, S::Icon>] {
        &self.stack
    }

    /// Models on the stack, bottom → top.
    pub fn models(&self) -> impl Iterator<Item = &S::Model> + '_ {
        self.stack.iter().map(|entry| &entry.model)
    }

    /// Look up a card on the stack or still animating out.
    pub fn card(&self, key: CardKey) -> Option<&DeckEntry<S::Model, S::Icon>> {
        self.stack
            .iter()
            .chain(&self.exiting)
            .find(|entry| entry.key == key)
    }

    /// Number of cards on the stack.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// True when the stack holds no cards.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Number of committed cards whose exit animation has not finished.
    pub fn exiting_len(&self) -> usize {
        self.exiting.len()
    }

    /// Laid-out size applied to every card.
    pub fn card_size(&self) -> Size {
        self.card_size
    }

    /// Set the laid-out card size, for current and future cards.
    pub fn set_card_size(&mut self, size: Size) {
        self.card_size = size;
        for entry in self.stack.iter_mut().chain(&mut self.exiting) {
            entry.card.set_size(size);
        }
    }

    /// The configuration every card is built with.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// The data source.
    pub fn data_source(&self) -> &S {
        &self.source
    }

    /// The data source, mutably. Changes take effect on the next [`rebuild`](Self::rebuild).
    pub fn data_source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The delegate.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// The delegate, mutably.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    fn relay(&mut self, key: CardKey, event: CardEvent) {
        let Some(index) = self.stack.iter().position(|entry| entry.key == key) else {
            log::error!("Dropping {event:?} from card {key:?}, which is not on the stack");
            return;
        };
        match event {
            CardEvent::WillCommit(direction) => {
                let entry = self.stack.remove(index);
                log::debug!(
                    "Card {key:?} committed {direction:?}, {} left",
                    self.stack.len()
                );
                match direction {
                    Direction::Like => self.delegate.will_like(&entry.model),
                    Direction::Dislike => self.delegate.will_dislike(&entry.model),
                }
                self.exiting.push(entry);
            }
            CardEvent::Cancelled => {
                log::debug!("Card {key:?} slide cancelled");
                self.delegate.cancelled(&self.stack[index].model);
            }
            CardEvent::Sliding(translation) => {
                self.delegate.sliding(&self.stack[index].model, translation);
            }
            CardEvent::Committed(_) => {
                log::error!("Card {key:?} reported a finished exit while still on the stack");
            }
        }
    }
}

/// Assembles a [`Deck`], checking its configuration.
///
/// ```
/// use swipedeck::deck::DeckBuilder;
/// use swipedeck::types::{DeckDataSource, DeckEvent};
///
/// struct Names(Vec<&'static str>);
///
/// impl DeckDataSource for Names {
///     type Model = &'static str;
///     type Icon = char;
///     fn card_models(&mut self) -> Vec<&'static str> { self.0.clone() }
///     fn like_icon(&self, _: &&'static str) -> char { '+' }
///     fn dislike_icon(&self, _: &&'static str) -> char { '-' }
/// }
///
/// let mut deck = DeckBuilder::new()
///     .data_source(Names(vec!["A", "B", "C"]))
///     .delegate(Vec::<DeckEvent<&'static str>>::new())
///     .build();
/// deck.rebuild();
/// deck.like_top();
/// assert_eq!(deck.models().copied().collect::<Vec<_>>(), ["A", "B"]);
/// assert_eq!(deck.delegate().last(), Some(&DeckEvent::WillLike("C")));
/// ```
pub struct DeckBuilder<S, D = ()> {
    source: Option<S>,
    delegate: D,
    config: SwipeConfig,
    card_size: Size,
}

impl<S, D> core::fmt::Debug for DeckBuilder<S, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DeckBuilder")
            .field("has_data_source", &self.source.is_some())
            .field("config", &self.config)
            .field("card_size", &self.card_size)
            .finish_non_exhaustive()
    }
}

impl<S: DeckDataSource> Default for DeckBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DeckDataSource> DeckBuilder<S> {
    /// Start with no data source, a no-op delegate, default configuration and a zero card size.
    pub fn new() -> Self {
        Self {
            source: None,
            delegate: (),
            config: SwipeConfig::default(),
            card_size: Size::ZERO,
        }
    }
}

impl<S: DeckDataSource, D: DeckDelegate<S::Model>> DeckBuilder<S, D> {
    /// Set the data source. Required.
    #[must_use]
    pub fn data_source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the delegate.
    #[must_use]
    pub fn delegate<E: DeckDelegate<S::Model>>(self, delegate: E) -> DeckBuilder<S, E> {
        DeckBuilder {
            source: self.source,
            delegate,
            config: self.config,
            card_size: self.card_size,
        }
    }

    /// Set the configuration.
    #[must_use]
    pub fn config(mut self, config: SwipeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the initial card size.
    #[must_use]
    pub fn card_size(mut self, size: Size) -> Self {
        self.card_size = size;
        self
    }

    /// Build the deck, reporting a missing data source or an invalid configuration.
    pub fn try_build(self) -> Result<Deck<S, D>, ConfigError> {
        self.config.validate()?;
        let source = self.source.ok_or(ConfigError::MissingDataSource)?;
        Ok(Deck::assemble(
            source,
            self.delegate,
            self.config,
            self.card_size,
        ))
    }

    /// Build the deck.
    ///
    /// # Panics
    ///
    /// Without a data source, or with a configuration rejected by [`SwipeConfig::validate`].
    /// Both are integration mistakes, not runtime conditions.
    #[track_caller]
    pub fn build(self) -> Deck<S, D> {
        match self.try_build() {
            Ok(deck) => deck,
            Err(err) => panic!("{err}"),
        }
    }
}
