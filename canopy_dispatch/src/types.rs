// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits: parent traversal and the native-element bridge.
//!
//! The dispatcher does not own the object tree or the toolkit widgets it
//! mirrors events onto. Both are injected behind narrow read-only traits,
//! with no-op defaults for callers that need neither.

use core::convert::Infallible;

use crate::event::Event;

/// Look up the parent of a node to build a root→target path for propagation.
///
/// The relation is read-only: the dispatcher never creates, mutates, or
/// frees parent links, it only walks them at dispatch time.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// A no-op parent provider used by default when nodes form no tree.
///
/// All calls to [`ParentLookup::parent_of`] return `None`, so every node is
/// its own root and dispatch degenerates to the target phase alone.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<K> ParentLookup<K> for NoParent {
    #[inline]
    fn parent_of(&self, _node: &K) -> Option<K> {
        None
    }
}

/// Bridge to an external widget tree onto which events are mirrored.
///
/// After propagation, the dispatcher locates the root-most element along the
/// target's ancestor chain and hands it a namespaced copy of the event. The
/// bridge's behavior is owned by the embedding toolkit: the dispatcher never
/// interprets a return value and `trigger` is fire-and-forget.
pub trait ElementBridge<K, M> {
    /// Toolkit element identifier associated with a node.
    type ElementId: Copy + core::fmt::Debug;

    /// Returns the native element attached to `node`, if any.
    fn element_of(&self, node: &K) -> Option<Self::ElementId>;

    /// Triggers a namespaced native event carrying the mirrored payload.
    fn trigger(&self, element: Self::ElementId, event: &Event<K, M>);
}

/// A no-op bridge used by default when no native widget tree exists.
///
/// [`ElementBridge::element_of`] always returns `None`, so the mirroring
/// step never runs and `trigger` is unreachable.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoBridge;

impl<K, M> ElementBridge<K, M> for NoBridge {
    type ElementId = Infallible;

    #[inline]
    fn element_of(&self, _node: &K) -> Option<Infallible> {
        None
    }

    #[inline]
    fn trigger(&self, _element: Infallible, _event: &Event<K, M>) {}
}
