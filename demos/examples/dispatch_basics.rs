// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch basics.
//!
//! This minimal example forms a chain of three nodes, registers capture and
//! bubble listeners along it, and dispatches one event on the leaf to show
//! the capture → target → bubble walk and early cancellation.
//!
//! Run:
//! - `cargo run -p canopy_demos --example dispatch_basics`

use std::rc::Rc;

use canopy_dispatch::adapters::forest::Forest;
use canopy_dispatch::dispatcher::EventDispatcher;
use canopy_dispatch::registry::{Listener, ListenerOptions};

fn announce(tag: &'static str) -> Listener<u32, ()> {
    Rc::new(move |ctx, ev| {
        println!("  {:?}  node={ctx}  {tag}  (target={:?})", ev.phase, ev.target);
    })
}

fn main() {
    // A chain 1 → 2 → 3: 3's parent is 2, 2's parent is 1.
    let mut forest = Forest::new();
    forest.set_parent(2, 1);
    forest.set_parent(3, 2);

    let d: EventDispatcher<u32, (), Forest<u32>> = EventDispatcher::with_parent(forest);

    d.add_event_listener_with(
        1,
        "ping",
        announce("root capture listener"),
        ListenerOptions {
            capture: true,
            ..ListenerOptions::default()
        },
    );
    d.add_event_listener(2, "ping", announce("middle bubble listener"));
    d.add_event_listener(3, "ping", announce("target listener"));

    println!("== dispatch \"ping\" on node 3 ==");
    d.dispatch_event(3, "ping");

    // A capture listener that cancels suppresses everything below it.
    d.add_event_listener_with(
        1,
        "quiet",
        Rc::new(|ctx: u32, ev: &mut canopy_dispatch::event::Event<u32>| {
            println!("  {:?}  node={ctx}  cancelling", ev.phase);
            ev.stop_propagation();
        }),
        ListenerOptions {
            capture: true,
            ..ListenerOptions::default()
        },
    );
    d.add_event_listener(3, "quiet", announce("target listener (never fires)"));

    println!("== dispatch \"quiet\" on node 3 ==");
    d.dispatch_event(3, "quiet");
}
