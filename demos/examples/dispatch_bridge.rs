// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bridge mirroring.
//!
//! After propagation, the dispatcher mirrors the event onto the root-most
//! native element along the target's ancestor chain, with the event type
//! namespaced to keep it apart from the toolkit's own events. This example
//! wires a bridge that simply prints what it is handed.
//!
//! Run:
//! - `cargo run -p canopy_demos --example dispatch_bridge`

use std::rc::Rc;

use canopy_dispatch::adapters::forest::Forest;
use canopy_dispatch::dispatcher::EventDispatcher;
use canopy_dispatch::event::{Event, EventInit};
use canopy_dispatch::types::ElementBridge;

/// A toy widget tree: node 1 is backed by widget 100, node 3 by widget 300.
struct PrintBridge;

impl ElementBridge<u32, &'static str> for PrintBridge {
    type ElementId = u32;

    fn element_of(&self, node: &u32) -> Option<u32> {
        match node {
            1 => Some(100),
            3 => Some(300),
            _ => None,
        }
    }

    fn trigger(&self, element: u32, event: &Event<u32, &'static str>) {
        println!(
            "  native trigger: widget={element} type={:?} payload={:?}",
            event.event_type, event.payload
        );
    }
}

fn main() {
    let mut forest = Forest::new();
    forest.set_parent(2, 1);
    forest.set_parent(3, 2);

    let d: EventDispatcher<u32, &'static str, Forest<u32>, PrintBridge> =
        EventDispatcher::with_bridge(forest, PrintBridge);

    d.add_event_listener(
        3,
        "select",
        Rc::new(|_, ev| println!("  listener saw payload {:?}", ev.payload)),
    );

    // Node 1's widget (100) wins over node 3's own widget (300) because the
    // mirror prefers the element nearest the root.
    println!("== dispatch \"select\" on node 3 ==");
    d.dispatch_event(
        3,
        EventInit {
            event_type: "select".into(),
            payload: "row 7",
            ..EventInit::default()
        },
    );

    // A root node with no ancestors falls back to its own widget.
    println!("== dispatch \"select\" on node 1 ==");
    d.dispatch_event(1, "select");
}
