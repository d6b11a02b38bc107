// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener registry: ordered bindings per event type.
//!
//! ## Overview
//!
//! A [`Registry`] holds the listeners of a single node, keyed by event type.
//! Insertion order is preserved per type and is the firing order within a
//! node. A binding is identified for removal by the exact triple
//! (listener pointer, context key, capture flag), not by type alone.
//!
//! Registered type entries are never pruned: removing the last binding for a
//! type leaves an empty entry behind, and
//! [`Registry::contains_type`] keeps reporting it as present. The footprint
//! is one map entry per type ever registered, which is bounded and does not
//! retain listener references.

use alloc::rc::Rc;
use alloc::string::String;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::event::Event;

/// Listener callback: receives the binding's context key and the in-flight
/// event.
pub type ListenerFn<K, M> = dyn Fn(K, &mut Event<K, M>);

/// Shared handle to a listener callback.
///
/// Listener identity for removal is pointer identity ([`Rc::ptr_eq`]);
/// registering the same `Rc` twice creates two independent bindings that
/// both fire.
pub type Listener<K, M> = Rc<ListenerFn<K, M>>;

/// Options for registering or removing a listener binding.
#[derive(Copy, Clone, Debug)]
pub struct ListenerOptions<K> {
    /// Context key handed to the listener when it fires. Defaults to the
    /// node the binding is registered on.
    pub context: Option<K>,
    /// `true` binds to the capture phase; `false` (the default) binds to
    /// the bubble phase. Either way the binding also fires at target.
    pub capture: bool,
}

impl<K> Default for ListenerOptions<K> {
    fn default() -> Self {
        Self {
            context: None,
            capture: false,
        }
    }
}

/// A registered (listener, context, capture-flag) tuple for one event type.
pub struct Binding<K, M> {
    /// The callback to invoke.
    pub listener: Listener<K, M>,
    /// Key passed to the callback as its context argument.
    pub context: K,
    /// Whether this binding participates in the capture walk.
    pub capture: bool,
}

impl<K: Copy, M> Clone for Binding<K, M> {
    fn clone(&self) -> Self {
        Self {
            listener: Rc::clone(&self.listener),
            context: self.context,
            capture: self.capture,
        }
    }
}

impl<K: core::fmt::Debug, M> core::fmt::Debug for Binding<K, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Binding")
            .field("context", &self.context)
            .field("capture", &self.capture)
            .finish_non_exhaustive()
    }
}

/// Ordered binding list for one event type.
///
/// Most types carry one or two listeners; the inline capacity keeps those
/// off the heap.
pub type Bindings<K, M> = SmallVec<[Binding<K, M>; 2]>;

/// Per-node listener registry keyed by event type.
pub struct Registry<K, M> {
    by_type: HashMap<String, Bindings<K, M>>,
}

impl<K, M> Default for Registry<K, M> {
    fn default() -> Self {
        Self {
            by_type: HashMap::new(),
        }
    }
}

impl<K, M> core::fmt::Debug for Registry<K, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("types", &self.by_type.len())
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq, M> Registry<K, M> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_type: HashMap::new(),
        }
    }

    /// Appends a binding for a single event type, creating the entry if
    /// absent. Duplicate triples are allowed and fire once per registration.
    pub fn add(&mut self, event_type: &str, binding: Binding<K, M>) {
        self.by_type
            .entry_ref(event_type)
            .or_default()
            .push(binding);
    }

    /// Removes the positionally-first binding for the type, regardless of
    /// its triple. Returns `false` if the type has no bindings.
    ///
    /// This is deliberately single-removal, never bulk: callers removing a
    /// binding without naming it drop exactly one, in insertion order.
    pub fn remove_first(&mut self, event_type: &str) -> bool {
        match self.by_type.get_mut(event_type) {
            Some(bindings) if !bindings.is_empty() => {
                bindings.remove(0);
                true
            }
            _ => false,
        }
    }

    /// Removes the first binding whose (listener, context, capture) triple
    /// matches exactly. Returns `false` when the type has no entry or no
    /// binding matches.
    pub fn remove_matching(
        &mut self,
        event_type: &str,
        listener: &Listener<K, M>,
        context: K,
        capture: bool,
    ) -> bool {
        let Some(bindings) = self.by_type.get_mut(event_type) else {
            return false;
        };
        let Some(i) = bindings.iter().position(|b| {
            Rc::ptr_eq(&b.listener, listener) && b.context == context && b.capture == capture
        }) else {
            return false;
        };
        bindings.remove(i);
        true
    }

    /// Returns `true` iff an entry for the type exists.
    ///
    /// An entry emptied by removals still counts as present.
    #[must_use]
    pub fn contains_type(&self, event_type: &str) -> bool {
        self.by_type.contains_key(event_type)
    }

    /// Returns the bindings registered for the type, in insertion order.
    #[must_use]
    pub fn bindings(&self, event_type: &str) -> Option<&[Binding<K, M>]> {
        self.by_type.get(event_type).map(|b| b.as_slice())
    }

    /// Returns an owned copy of the type's binding list.
    ///
    /// Dispatch iterates this snapshot rather than the live list, so a
    /// listener that mutates the registry mid-dispatch cannot corrupt the
    /// iteration in flight. Cloning is cheap: each binding is an `Rc` bump
    /// plus two copies.
    #[must_use]
    pub fn snapshot(&self, event_type: &str) -> Option<Bindings<K, M>> {
        self.by_type.get(event_type).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;

    fn noop() -> Listener<u32, ()> {
        Rc::new(|_, _| {})
    }

    fn binding(listener: &Listener<u32, ()>, context: u32, capture: bool) -> Binding<u32, ()> {
        Binding {
            listener: Rc::clone(listener),
            context,
            capture,
        }
    }

    #[test]
    fn add_then_contains() {
        let mut reg: Registry<u32, ()> = Registry::new();
        assert!(!reg.contains_type("x"));
        reg.add("x", binding(&noop(), 1, false));
        assert!(reg.contains_type("x"));
        assert_eq!(reg.bindings("x").unwrap().len(), 1);
    }

    #[test]
    fn duplicate_bindings_are_kept() {
        let mut reg: Registry<u32, ()> = Registry::new();
        let l = noop();
        reg.add("x", binding(&l, 1, false));
        reg.add("x", binding(&l, 1, false));
        assert_eq!(reg.bindings("x").unwrap().len(), 2);
    }

    #[test]
    fn remove_first_is_positional_and_single() {
        let mut reg: Registry<u32, ()> = Registry::new();
        let a = noop();
        let b = noop();
        reg.add("x", binding(&a, 1, true));
        reg.add("x", binding(&b, 2, false));
        assert!(reg.remove_first("x"));
        let rest = reg.bindings("x").unwrap();
        assert_eq!(rest.len(), 1);
        assert!(Rc::ptr_eq(&rest[0].listener, &b));
        assert!(reg.remove_first("x"));
        assert!(!reg.remove_first("x"));
    }

    #[test]
    fn remove_matching_requires_exact_triple() {
        let mut reg: Registry<u32, ()> = Registry::new();
        let l = noop();
        reg.add("x", binding(&l, 1, false));
        // Wrong capture flag, wrong context, wrong listener: all no-ops.
        assert!(!reg.remove_matching("x", &l, 1, true));
        assert!(!reg.remove_matching("x", &l, 2, false));
        assert!(!reg.remove_matching("x", &noop(), 1, false));
        assert_eq!(reg.bindings("x").unwrap().len(), 1);
        assert!(reg.remove_matching("x", &l, 1, false));
        assert!(reg.bindings("x").unwrap().is_empty());
    }

    #[test]
    fn remove_matching_takes_first_of_duplicates() {
        let mut reg: Registry<u32, ()> = Registry::new();
        let l = noop();
        reg.add("x", binding(&l, 1, false));
        reg.add("x", binding(&l, 1, false));
        assert!(reg.remove_matching("x", &l, 1, false));
        assert_eq!(reg.bindings("x").unwrap().len(), 1);
    }

    #[test]
    fn removing_from_unknown_type_is_noop() {
        let mut reg: Registry<u32, ()> = Registry::new();
        assert!(!reg.remove_first("missing"));
        assert!(!reg.remove_matching("missing", &noop(), 1, false));
    }

    #[test]
    fn emptied_entry_still_counts_as_present() {
        let mut reg: Registry<u32, ()> = Registry::new();
        let l = noop();
        reg.add("x", binding(&l, 1, false));
        assert!(reg.remove_matching("x", &l, 1, false));
        // The entry persists with no bindings.
        assert!(reg.contains_type("x"));
        assert!(reg.bindings("x").unwrap().is_empty());
    }

    #[test]
    fn snapshot_is_detached_from_later_mutation() {
        let mut reg: Registry<u32, ()> = Registry::new();
        let l = noop();
        reg.add("x", binding(&l, 1, false));
        let snap = reg.snapshot("x").unwrap();
        reg.add("x", binding(&noop(), 2, false));
        assert_eq!(snap.len(), 1);
        assert_eq!(reg.bindings("x").unwrap().len(), 2);
    }
}
