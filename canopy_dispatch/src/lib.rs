// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_dispatch --heading-base-level=0

//! Canopy Dispatch: DOM-style event dispatch over parent-linked node forests.
//!
//! ## Overview
//!
//! This crate gives application objects `add_event_listener` /
//! `remove_event_listener` / `dispatch_event` semantics modeled on the
//! browser event model. Objects are identified by copyable keys and related
//! by an injected parent lookup; dispatching an event on a node walks its
//! ancestor chain in three phases — capture (root → target), target, bubble
//! (target → root) — invoking matching listeners in registration order and
//! honoring early cancellation via
//! [`Event::stop_propagation`](event::Event::stop_propagation).
//!
//! ## Model
//!
//! - [`event::Event`] is the value object for one occurrence: type name,
//!   phase, target, advisory flags, cancellation state, and a typed payload.
//!   [`dispatch_event`](dispatcher::EventDispatcher::dispatch_event) accepts
//!   a type name, an [`event::EventInit`], or a prebuilt event.
//! - [`registry::Registry`] holds one node's bindings per event type; a
//!   binding is the (listener, context, capture-flag) triple and that exact
//!   triple identifies it for removal.
//! - [`dispatcher::EventDispatcher`] owns the per-node registries and the
//!   propagation algorithm, plus `on` / `off` / `trigger` / `emit` aliases
//!   for a fluent surface.
//! - [`types::ParentLookup`] and [`types::ElementBridge`] are the two
//!   injected collaborators: read-only ancestry, and an optional native
//!   widget tree onto which finished events are mirrored under a
//!   namespaced type (`"click"` → `"click.ed"` by default).
//!
//! ## Cancellation
//!
//! `stop_propagation` raised during capture suppresses the target and
//! bubble phases entirely (and the bridge mirror); raised at target or
//! while bubbling it stops the remaining bubble steps but the mirror still
//! runs. Listener panics are never caught here.
//!
//! ## Re-entrancy
//!
//! The dispatcher surface takes `&self`, so listeners holding an `Rc` of
//! the dispatcher may register, unregister, and dispatch from inside a
//! dispatch in progress. Each node's binding list is snapshotted before
//! iteration: mutation mid-walk affects later dispatches, never the walk in
//! flight. The model is single-actor and call-stack bound; there is no
//! threading in this crate.
//!
//! ## Minimal example
//!
//! ```
//! use std::rc::Rc;
//!
//! use canopy_dispatch::adapters::forest::Forest;
//! use canopy_dispatch::dispatcher::EventDispatcher;
//!
//! let mut forest = Forest::new();
//! forest.set_parent(2, 1);
//!
//! let d: EventDispatcher<u32, (), Forest<u32>> = EventDispatcher::with_parent(forest);
//! d.on(1, "ready", Rc::new(|_ctx, ev| assert_eq!(ev.target, Some(2))));
//! d.emit(2, "ready");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod dispatcher;
pub mod event;
pub mod registry;
pub mod types;
