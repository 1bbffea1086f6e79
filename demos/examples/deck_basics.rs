// Copyright 2025 the SwipeDeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Programmatic likes and dislikes on a small deck.
//!
//! This example builds a deck of three profiles, opens the top one's details, likes it and
//! dislikes the next, then runs the frame loop until both cards have left. Every delegate
//! call is printed.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p swipedeck_demos --example deck_basics`

use core::time::Duration;

use kurbo::{Size, Vec2};
use swipedeck::deck::DeckBuilder;
use swipedeck::types::{DeckDataSource, DeckDelegate};

#[derive(Clone, Debug)]
struct Profile {
    name: &'static str,
}

struct Profiles;

impl DeckDataSource for Profiles {
    type Model = Profile;
    type Icon = char;

    fn card_models(&mut self) -> Vec<Profile> {
        ["Ada", "Grace", "Linus"]
            .into_iter()
            .map(|name| Profile { name })
            .collect()
    }

    fn like_icon(&self, _: &Profile) -> char {
        '♥'
    }

    fn dislike_icon(&self, _: &Profile) -> char {
        '✗'
    }

    fn detail_icon(&self, _: &Profile) -> Option<char> {
        Some('ⓘ')
    }
}

struct Printer;

impl DeckDelegate<Profile> for Printer {
    fn deck_rebuilt(&mut self, models: &[Profile]) {
        let names: Vec<_> = models.iter().map(|p| p.name).collect();
        println!("rebuilt: {names:?}");
    }

    fn will_like(&mut self, model: &Profile) {
        println!("will like {}", model.name);
    }

    fn will_dislike(&mut self, model: &Profile) {
        println!("will dislike {}", model.name);
    }

    fn slide_finished(&mut self, model: &Profile) {
        println!("{} is gone", model.name);
    }

    fn sliding(&mut self, model: &Profile, translation: Vec2) {
        println!("{} sliding by {translation:?}", model.name);
    }

    fn cancelled(&mut self, model: &Profile) {
        println!("{} stays", model.name);
    }

    fn detail_pressed(&mut self, model: &Profile) {
        println!("show details for {}", model.name);
    }
}

fn main() {
    env_logger::init();

    let mut deck = DeckBuilder::new()
        .data_source(Profiles)
        .delegate(Printer)
        .card_size(Size::new(320.0, 480.0))
        .build();
    deck.rebuild();

    deck.press_detail_top();
    deck.like_top();
    deck.dislike_top();
    println!("top card now: {:?}", deck.current_card().map(|e| e.model().name));

    let mut frames = 0;
    while deck.is_animating() {
        deck.advance(Duration::from_millis(16));
        frames += 1;
    }
    println!("settled after {frames} frames; {} card(s) left", deck.len());
}
