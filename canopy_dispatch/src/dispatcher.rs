// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher: listener registration and the propagation algorithm.
//!
//! ## Overview
//!
//! [`EventDispatcher`] keeps a listener registry per node and propagates
//! dispatched events along the node's ancestor chain the way DOM events
//! propagate through a document:
//!
//! - **Capture**: root → nearest ancestor, capture bindings only.
//! - **Target**: the dispatched node, every binding.
//! - **Bubble**: nearest ancestor → root, every binding.
//!
//! [`Event::stop_propagation`] halts the walk: raised during capture it also
//! suppresses the target and bubble phases; raised later it stops the
//! remaining bubble steps. After propagation the event is optionally
//! mirrored onto a native toolkit element through an [`ElementBridge`].
//!
//! ## Re-entrancy
//!
//! The whole surface takes `&self`; listeners holding an `Rc` of the
//! dispatcher may register, unregister, and dispatch re-entrantly. Dispatch
//! iterates a snapshot of each node's binding list, so mid-dispatch registry
//! mutation affects later dispatches only, never the walk in flight.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use canopy_dispatch::adapters::forest::Forest;
//! use canopy_dispatch::dispatcher::EventDispatcher;
//! use canopy_dispatch::event::Phase;
//! use canopy_dispatch::registry::ListenerOptions;
//!
//! // A chain 1 → 2 → 3 (3's parent is 2, 2's parent is 1).
//! let mut forest = Forest::new();
//! forest.set_parent(2, 1);
//! forest.set_parent(3, 2);
//!
//! let d: EventDispatcher<u32, (), Forest<u32>> = EventDispatcher::with_parent(forest);
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let record = |tag: &'static str| {
//!     let log = Rc::clone(&log);
//!     Rc::new(move |_ctx: u32, ev: &mut canopy_dispatch::event::Event<u32>| {
//!         log.borrow_mut().push((ev.phase, tag));
//!     }) as canopy_dispatch::registry::Listener<u32, ()>
//! };
//!
//! d.add_event_listener_with(
//!     1,
//!     "ping",
//!     record("root"),
//!     ListenerOptions { capture: true, ..ListenerOptions::default() },
//! );
//! d.add_event_listener(3, "ping", record("target"));
//! d.dispatch_event(3, "ping");
//!
//! // The root capture binding fires ahead of the target, and again on the
//! // bubble walk (capture bindings are only filtered during capture).
//! assert_eq!(
//!     *log.borrow(),
//!     vec![
//!         (Phase::Capture, "root"),
//!         (Phase::Target, "target"),
//!         (Phase::Bubble, "root"),
//!     ]
//! );
//! ```

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::event::{Event, Phase};
use crate::registry::{Binding, Listener, ListenerOptions, Registry};
use crate::types::{ElementBridge, NoBridge, NoParent, ParentLookup};

/// Default namespace suffix appended to mirrored event types.
///
/// A mirrored `"click"` becomes `"click.ed"`, keeping it distinct from the
/// toolkit's own `"click"` events.
pub const DEFAULT_NAMESPACE_SUFFIX: &str = "ed";

/// Tree-shaped event dispatcher over parent-linked nodes.
///
/// Generic over the node key `K`, the event payload `M`, the parent
/// traversal collaborator `P`, and the native-element bridge `B`. Both
/// collaborators default to no-ops, so a dispatcher over free-standing
/// nodes needs no wiring at all.
///
/// All registration and dispatch methods return `&Self` to support
/// chaining, mirroring the fluent surface this model is known for.
pub struct EventDispatcher<K, M = (), P = NoParent, B = NoBridge> {
    nodes: RefCell<HashMap<K, Registry<K, M>>>,
    parent: P,
    bridge: B,
    suffix: String,
}

impl<K, M, P, B> core::fmt::Debug for EventDispatcher<K, M, P, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("suffix", &self.suffix)
            .finish_non_exhaustive()
    }
}

impl<K, M, P, B> Default for EventDispatcher<K, M, P, B>
where
    K: Copy + Eq + Hash,
    M: Clone,
    P: ParentLookup<K> + Default,
    B: ElementBridge<K, M> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, M, P, B> EventDispatcher<K, M, P, B>
where
    K: Copy + Eq + Hash,
    M: Clone,
    P: ParentLookup<K>,
    B: ElementBridge<K, M>,
{
    /// Creates a dispatcher with default collaborators.
    #[must_use]
    pub fn new() -> Self
    where
        P: Default,
        B: Default,
    {
        Self::with_bridge(P::default(), B::default())
    }

    /// Creates a dispatcher with an explicit parent lookup provider.
    #[must_use]
    pub fn with_parent(parent: P) -> Self
    where
        B: Default,
    {
        Self::with_bridge(parent, B::default())
    }

    /// Creates a dispatcher with explicit parent lookup and element bridge.
    #[must_use]
    pub fn with_bridge(parent: P, bridge: B) -> Self {
        Self {
            nodes: RefCell::new(HashMap::new()),
            parent,
            bridge,
            suffix: String::from(DEFAULT_NAMESPACE_SUFFIX),
        }
    }

    /// Sets the namespace suffix appended to mirrored event types.
    pub fn set_namespace_suffix(&mut self, suffix: impl Into<String>) {
        self.suffix = suffix.into();
    }

    /// Returns the namespace suffix appended to mirrored event types.
    #[must_use]
    pub fn namespace_suffix(&self) -> &str {
        &self.suffix
    }

    /// Registers a bubble-phase listener on `node` with the node itself as
    /// context.
    ///
    /// `event_type` may name several whitespace-separated types; one binding
    /// is registered per name with identical options.
    pub fn add_event_listener(&self, node: K, event_type: &str, listener: Listener<K, M>) -> &Self {
        self.add_event_listener_with(node, event_type, listener, ListenerOptions::default())
    }

    /// Registers a listener on `node` with explicit context and phase
    /// options.
    ///
    /// Duplicate registrations of the same (listener, context, capture)
    /// triple are kept and fire once per registration.
    pub fn add_event_listener_with(
        &self,
        node: K,
        event_type: &str,
        listener: Listener<K, M>,
        options: ListenerOptions<K>,
    ) -> &Self {
        let context = options.context.unwrap_or(node);
        let mut nodes = self.nodes.borrow_mut();
        let registry = nodes.entry(node).or_default();
        for name in event_type.split_whitespace() {
            registry.add(
                name,
                Binding {
                    listener: Rc::clone(&listener),
                    context,
                    capture: options.capture,
                },
            );
        }
        self
    }

    /// Removes the first binding on `node` matching the listener with
    /// default options (context = `node`, bubble phase).
    pub fn remove_event_listener(
        &self,
        node: K,
        event_type: &str,
        listener: &Listener<K, M>,
    ) -> &Self {
        self.remove_event_listener_with(node, event_type, listener, ListenerOptions::default())
    }

    /// Removes the first binding on `node` whose (listener, context,
    /// capture) triple matches exactly. Silent no-op when nothing matches.
    pub fn remove_event_listener_with(
        &self,
        node: K,
        event_type: &str,
        listener: &Listener<K, M>,
        options: ListenerOptions<K>,
    ) -> &Self {
        let context = options.context.unwrap_or(node);
        if let Some(registry) = self.nodes.borrow_mut().get_mut(&node) {
            registry.remove_matching(event_type, listener, context, options.capture);
        }
        self
    }

    /// Removes the positionally-first binding for the type on `node`,
    /// regardless of its listener, context, or phase. Exactly one binding
    /// is removed; silent no-op when the type has none.
    pub fn remove_first_listener(&self, node: K, event_type: &str) -> &Self {
        if let Some(registry) = self.nodes.borrow_mut().get_mut(&node) {
            registry.remove_first(event_type);
        }
        self
    }

    /// Returns `true` iff `node` has a registry entry for the type.
    ///
    /// An entry emptied by removals still counts as present; the registry
    /// never prunes type entries.
    #[must_use]
    pub fn has_event_listener(&self, node: K, event_type: &str) -> bool {
        self.nodes
            .borrow()
            .get(&node)
            .is_some_and(|r| r.contains_type(event_type))
    }

    /// Dispatches an event on `node` and propagates it along the node's
    /// ancestor chain.
    ///
    /// Accepts a type name, an [`EventInit`](crate::event::EventInit), or a
    /// prebuilt [`Event`]; the input is normalized, `target` is set to
    /// `node`, and the capture → target → bubble walk of the module docs
    /// runs to completion or early cancellation. Listener panics are not
    /// caught and unwind to the caller, aborting the remaining phases.
    pub fn dispatch_event(&self, node: K, event: impl Into<Event<K, M>>) -> &Self {
        let mut event = event.into();
        event.target = Some(node);

        let path = self.ancestor_path(node);

        event.phase = Phase::Capture;
        for &n in &path {
            if event.propagation_stopped() {
                break;
            }
            self.trigger_listeners(n, &mut event);
        }

        if event.propagation_stopped() {
            return self;
        }

        event.phase = Phase::Target;
        self.trigger_listeners(node, &mut event);

        event.phase = Phase::Bubble;
        for &n in path.iter().rev() {
            if event.propagation_stopped() {
                break;
            }
            self.trigger_listeners(n, &mut event);
        }

        self.mirror_to_element(node, &event);
        self
    }

    /// Alias for [`EventDispatcher::add_event_listener`].
    pub fn on(&self, node: K, event_type: &str, listener: Listener<K, M>) -> &Self {
        self.add_event_listener(node, event_type, listener)
    }

    /// Alias for [`EventDispatcher::remove_event_listener`].
    pub fn off(&self, node: K, event_type: &str, listener: &Listener<K, M>) -> &Self {
        self.remove_event_listener(node, event_type, listener)
    }

    /// Alias for [`EventDispatcher::dispatch_event`].
    pub fn trigger(&self, node: K, event: impl Into<Event<K, M>>) -> &Self {
        self.dispatch_event(node, event)
    }

    /// Alias for [`EventDispatcher::dispatch_event`].
    pub fn emit(&self, node: K, event: impl Into<Event<K, M>>) -> &Self {
        self.dispatch_event(node, event)
    }

    /// Ancestors of `node`, root-first, excluding `node` itself.
    fn ancestor_path(&self, node: K) -> Vec<K> {
        let mut out = Vec::new();
        let mut cur = self.parent.parent_of(&node);
        // Collect to root; caller ensures acyclic ancestry.
        while let Some(p) = cur {
            out.push(p);
            cur = self.parent.parent_of(&p);
        }
        out.reverse();
        out
    }

    /// Fires `node`'s bindings for the event's type under the current phase
    /// rules: capture filters out bubble bindings, target and bubble filter
    /// nothing.
    fn trigger_listeners(&self, node: K, event: &mut Event<K, M>) {
        // Snapshot before iterating so listeners may mutate the registry.
        let Some(snapshot) = self
            .nodes
            .borrow()
            .get(&node)
            .and_then(|r| r.snapshot(event.event_type.as_str()))
        else {
            return;
        };
        for binding in &snapshot {
            if event.phase == Phase::Capture && !binding.capture {
                continue;
            }
            (binding.listener)(binding.context, event);
        }
    }

    /// Mirrors the finished event onto the nearest-to-root native element
    /// along the ancestor chain, falling back to the target's own element.
    fn mirror_to_element(&self, node: K, event: &Event<K, M>) {
        let mut element = self.bridge.element_of(&node);
        let mut cur = self.parent.parent_of(&node);
        while let Some(p) = cur {
            if let Some(el) = self.bridge.element_of(&p) {
                element = Some(el);
            }
            cur = self.parent.parent_of(&p);
        }
        let Some(element) = element else {
            return;
        };
        let mut mirrored = event.clone();
        mirrored.event_type = format!("{}.{}", event.event_type, self.suffix);
        self.bridge.trigger(element, &mirrored);
    }
}
