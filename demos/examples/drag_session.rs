// Copyright 2025 the SwipeDeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted drag session against one deck, printing each card's pose as it moves.
//!
//! The first drag stops short of the threshold and springs back; the second one is thrown to
//! the left and commits a dislike. The configuration is loaded from JSON to show the `serde`
//! feature.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p swipedeck_demos --example drag_session`

use core::time::Duration;

use kurbo::{Point, Size, Vec2};
use swipedeck::config::SwipeConfig;
use swipedeck::deck::{Deck, DeckBuilder};
use swipedeck::types::{DeckDataSource, DeckEvent};
use swipedeck_decision::classify::classify;
use swipedeck_decision::types::{DecisionParams, GesturePhase};

const FRAME: Duration = Duration::from_millis(16);

struct Cards(Vec<&'static str>);

impl DeckDataSource for Cards {
    type Model = &'static str;
    type Icon = &'static str;

    fn card_models(&mut self) -> Vec<&'static str> {
        self.0.clone()
    }

    fn like_icon(&self, _: &&'static str) -> &'static str {
        "LIKE"
    }

    fn dislike_icon(&self, _: &&'static str) -> &'static str {
        "NOPE"
    }
}

type DemoDeck = Deck<Cards, Vec<DeckEvent<&'static str>>>;

fn print_top(deck: &DemoDeck) {
    let Some(top) = deck.current_card() else {
        println!("  (empty)");
        return;
    };
    let p = top.presentation();
    let center = Point::new(p.size.width / 2.0, p.size.height / 2.0);
    let corner = p.transform_about(center) * Point::ORIGIN;
    println!(
        "  {} {:?}: offset ({:.1}, {:.1}) rot {:.2}° like {:.2} nope {:.2} corner ({:.1}, {:.1})",
        top.model(),
        top.card().state(),
        p.pose.offset.x,
        p.pose.offset.y,
        p.pose.rotation.to_degrees(),
        p.pose.like_opacity,
        p.pose.dislike_opacity,
        corner.x,
        corner.y,
    );
}

fn drag(deck: &mut DemoDeck, path: &[Vec2]) {
    let params = DecisionParams::new(deck.config().distance_threshold, deck.card_size().width);
    if let Err(err) = deck.begin_drag() {
        println!("drag refused: {err}");
        return;
    }
    for &v in path {
        if let Err(err) = deck.update_drag(v) {
            println!("update refused: {err}");
            return;
        }
        print_top(deck);
    }
    let Some(&last) = path.last() else {
        deck.cancel_top();
        return;
    };
    println!(
        "release at {last:?}: {:?}",
        classify(last, GesturePhase::Released, &params)
    );
    if let Err(err) = deck.end_drag(last) {
        println!("release refused: {err}");
    }
}

fn settle(deck: &mut DemoDeck) {
    let mut frame = 0;
    while deck.is_animating() {
        deck.advance(FRAME);
        frame += 1;
        if frame % 8 == 0 {
            print_top(deck);
        }
    }
}

fn main() {
    env_logger::init();

    let config: SwipeConfig =
        match serde_json::from_str(r#"{ "distance_threshold": 100.0, "commit_duration": 0.4 }"#) {
            Ok(config) => config,
            Err(err) => {
                log::error!("bad demo configuration: {err}");
                return;
            }
        };

    let mut deck = match DeckBuilder::new()
        .data_source(Cards(vec!["first", "second", "third"]))
        .delegate(Vec::new())
        .config(config)
        .card_size(Size::new(300.0, 450.0))
        .try_build()
    {
        Ok(deck) => deck,
        Err(err) => {
            log::error!("could not build the deck: {err}");
            return;
        }
    };
    deck.rebuild();

    println!("short drag to the right:");
    let short: Vec<Vec2> = (1..=8).map(|i| Vec2::new(f64::from(i) * 10.0, 2.0)).collect();
    drag(&mut deck, &short);
    settle(&mut deck);

    println!("long throw to the left:");
    let throw: Vec<Vec2> = (1..=6).map(|i| Vec2::new(f64::from(i) * -30.0, -4.0)).collect();
    drag(&mut deck, &throw);
    settle(&mut deck);

    println!("events:");
    for event in deck.delegate() {
        println!("  {event:?}");
    }
}
