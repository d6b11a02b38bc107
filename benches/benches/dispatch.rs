// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `canopy_dispatch`.

use std::cell::Cell;
use std::rc::Rc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use canopy_dispatch::adapters::forest::Forest;
use canopy_dispatch::dispatcher::EventDispatcher;
use canopy_dispatch::registry::{Listener, ListenerOptions};

/// Builds a single chain 0 ← 1 ← ... ← depth-1 and returns the dispatcher
/// plus the leaf key.
fn chain(depth: u32) -> (EventDispatcher<u32, (), Forest<u32>>, u32) {
    let mut forest = Forest::new();
    for child in 1..depth {
        forest.set_parent(child, child - 1);
    }
    (EventDispatcher::with_parent(forest), depth.saturating_sub(1))
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for depth in [1_u32, 8, 64] {
        // One bubble listener on every node plus a capture listener on the
        // root, all counting invocations.
        let (d, leaf) = chain(depth);
        let hits = Rc::new(Cell::new(0_u64));
        for node in 0..depth {
            let hits = Rc::clone(&hits);
            d.add_event_listener(
                node,
                "tick",
                Rc::new(move |_, _| hits.set(hits.get() + 1)),
            );
        }
        let hits2 = Rc::clone(&hits);
        d.add_event_listener_with(
            0,
            "tick",
            Rc::new(move |_, _| hits2.set(hits2.get() + 1)),
            ListenerOptions {
                capture: true,
                ..ListenerOptions::default()
            },
        );

        group.bench_with_input(BenchmarkId::new("chain", depth), &depth, |b, _| {
            b.iter(|| {
                d.dispatch_event(black_box(leaf), "tick");
            });
        });
    }

    group.bench_function("unlistened", |b| {
        let (d, leaf) = chain(64);
        b.iter(|| {
            d.dispatch_event(black_box(leaf), "tick");
        });
    });

    group.finish();
}

fn bench_registry_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    group.bench_function("add_remove", |b| {
        let (d, _) = chain(1);
        let l: Listener<u32, ()> = Rc::new(|_, _| {});
        b.iter(|| {
            d.add_event_listener(0, "tick", Rc::clone(&l));
            d.remove_event_listener(0, "tick", &l);
        });
    });

    group.bench_function("multi_type_add", |b| {
        let (d, _) = chain(1);
        let l: Listener<u32, ()> = Rc::new(|_, _| {});
        b.iter(|| {
            d.add_event_listener(0, "pointer-down pointer-up pointer-move", Rc::clone(&l));
            d.remove_first_listener(0, "pointer-down");
            d.remove_first_listener(0, "pointer-up");
            d.remove_first_listener(0, "pointer-move");
        });
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_registry_churn);
criterion_main!(benches);
