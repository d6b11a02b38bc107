// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event value object: type name, phase, target, and cancellation state.
//!
//! ## Overview
//!
//! An [`Event`] describes one occurrence flowing through a dispatcher. The
//! dispatcher owns `phase` and `target` during propagation; callers own the
//! type name, the advisory `bubbles`/`cancelable` flags, and the `payload`.
//!
//! Events are normalized from three input forms, mirroring what callers
//! typically have at hand:
//!
//! - a bare type name (`&str` / `String`),
//! - an [`EventInit`] describing flags and payload,
//! - an already-built [`Event`].
//!
//! All three convert via `Into<Event<K, M>>` and are accepted directly by
//! [`EventDispatcher::dispatch_event`](crate::dispatcher::EventDispatcher::dispatch_event).

use alloc::string::String;

/// Phases of event propagation.
///
/// Set on the in-flight [`Event`] by the dispatcher as it walks the
/// ancestor path.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Root-to-target traversal over the target's ancestors.
    Capture,
    /// The target node itself.
    Target,
    /// Target-to-root traversal over the target's ancestors.
    Bubble,
}

/// A single event occurrence.
///
/// Generic over the node key `K` and an application payload `M`. The payload
/// is the typed rendition of ad-hoc event data: it is set at construction
/// time and carried to every listener, while the propagation bookkeeping
/// (`phase`, `target`, cancellation) stays under dispatcher control and can
/// never be overwritten by construction input.
///
/// `bubbles` and `cancelable` are stored as given but not consulted by the
/// propagation algorithm; they are advisory flags for listeners.
///
/// # Example
///
/// ```
/// use canopy_dispatch::event::{Event, Phase};
///
/// let ev: Event<u32, ()> = Event::new("pointer-down");
/// assert_eq!(ev.event_type, "pointer-down");
/// assert_eq!(ev.phase, Phase::Capture);
/// assert!(ev.bubbles);
/// assert!(!ev.propagation_stopped());
/// ```
#[derive(Clone, Debug)]
pub struct Event<K, M = ()> {
    /// Event type name.
    pub event_type: String,
    /// Current propagation phase. Placeholder until the dispatcher assigns
    /// the first phase.
    pub phase: Phase,
    /// The node `dispatch_event` was called on. Assigned once at dispatch
    /// time, overwriting any prior value.
    pub target: Option<K>,
    /// Advisory flag: whether the event is meant to bubble.
    pub bubbles: bool,
    /// Advisory flag: whether the event is meant to be cancelable.
    pub cancelable: bool,
    /// Set via [`Event::stop_propagation`]; halts further phase iteration.
    cancelled: bool,
    /// Application payload carried to every listener.
    pub payload: M,
}

impl<K, M> Event<K, M> {
    /// Creates an event of the given type with default flags and payload.
    #[must_use]
    pub fn new(event_type: impl Into<String>) -> Self
    where
        M: Default,
    {
        Self {
            event_type: event_type.into(),
            phase: Phase::Capture,
            target: None,
            bubbles: true,
            cancelable: true,
            cancelled: false,
            payload: M::default(),
        }
    }

    /// Prevents any further propagation of the event.
    ///
    /// The flag only takes effect through the dispatcher's propagation loop;
    /// the event itself does nothing beyond recording it.
    pub fn stop_propagation(&mut self) {
        self.cancelled = true;
    }

    /// Returns `true` once [`Event::stop_propagation`] has been called.
    #[must_use]
    pub fn propagation_stopped(&self) -> bool {
        self.cancelled
    }
}

/// Construction input for an [`Event`]: flags and payload alongside the type.
///
/// Defaults are applied first, then init fields overwrite them, so caller
/// data wins. Propagation state (`phase`, `target`, cancellation) is not
/// part of the init and stays dispatcher-owned.
///
/// # Example
///
/// ```
/// use canopy_dispatch::event::{Event, EventInit};
///
/// let ev: Event<u32, i64> = EventInit {
///     event_type: "score".into(),
///     payload: 42,
///     ..EventInit::default()
/// }
/// .into();
/// assert_eq!(ev.event_type, "score");
/// assert_eq!(ev.payload, 42);
/// assert!(ev.bubbles);
/// ```
#[derive(Clone, Debug)]
pub struct EventInit<M = ()> {
    /// Event type name.
    pub event_type: String,
    /// Whether the event is meant to bubble. Defaults to `true`.
    pub bubbles: bool,
    /// Whether the event is meant to be cancelable. Defaults to `true`.
    pub cancelable: bool,
    /// Application payload.
    pub payload: M,
}

impl<M: Default> Default for EventInit<M> {
    fn default() -> Self {
        Self {
            event_type: String::new(),
            bubbles: true,
            cancelable: true,
            payload: M::default(),
        }
    }
}

impl<K, M> From<EventInit<M>> for Event<K, M> {
    fn from(init: EventInit<M>) -> Self {
        Self {
            event_type: init.event_type,
            phase: Phase::Capture,
            target: None,
            bubbles: init.bubbles,
            cancelable: init.cancelable,
            cancelled: false,
            payload: init.payload,
        }
    }
}

impl<K, M: Default> From<&str> for Event<K, M> {
    fn from(event_type: &str) -> Self {
        Self::new(event_type)
    }
}

impl<K, M: Default> From<String> for Event<K, M> {
    fn from(event_type: String) -> Self {
        Self::new(event_type)
    }
}
