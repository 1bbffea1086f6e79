// Copyright 2025 the SwipeDeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use swipedeck::deck::{Deck, DeckBuilder};
use swipedeck::types::DeckDataSource;
use swipedeck_decision::classify::classify;
use swipedeck_decision::types::{DecisionParams, GesturePhase};

const FRAME: Duration = Duration::from_millis(16);

struct Numbers(usize);

impl DeckDataSource for Numbers {
    type Model = usize;
    type Icon = ();

    fn card_models(&mut self) -> Vec<usize> {
        (0..self.0).collect()
    }

    fn like_icon(&self, _: &usize) {}

    fn dislike_icon(&self, _: &usize) {}
}

fn deck(n: usize) -> Deck<Numbers, ()> {
    let mut deck = DeckBuilder::new()
        .data_source(Numbers(n))
        .card_size(Size::new(300.0, 450.0))
        .build();
    deck.rebuild();
    deck
}

fn drag_path(len: usize) -> Vec<Vec2> {
    (0..len)
        .map(|i| {
            let t = i as f64 / len as f64;
            Vec2::new(400.0 * t - 200.0, 30.0 * (t * 6.0).sin())
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let path = drag_path(1024);
    let params = DecisionParams::new(120.0, 300.0);
    group.throughput(Throughput::Elements(path.len() as u64));
    for (name, phase) in [("moving", GesturePhase::Moving), ("released", GesturePhase::Released)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for &v in &path {
                    black_box(classify(black_box(v), phase, &params));
                }
            });
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    let path = drag_path(256);
    group.throughput(Throughput::Elements(path.len() as u64));
    group.bench_function("update_release", |b| {
        b.iter_batched(
            || deck(16),
            |mut deck| {
                let _ = deck.begin_drag();
                for &v in &path {
                    let _ = deck.update_drag(v);
                }
                let _ = deck.end_drag(Vec2::new(30.0, 0.0));
                black_box(deck.len());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_exits(c: &mut Criterion) {
    let mut group = c.benchmark_group("exits");
    for &n in &[16usize, 128, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("commit_all_and_settle_n{n}"), |b| {
            b.iter_batched(
                || deck(n),
                |mut deck| {
                    while !deck.is_empty() {
                        deck.like_top();
                        deck.advance(FRAME);
                    }
                    while deck.is_animating() {
                        deck.advance(FRAME);
                    }
                    black_box(deck.exiting_len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_drag, bench_exits);
criterion_main!(benches);
