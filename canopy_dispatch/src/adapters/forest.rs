// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory parent-link store implementing [`ParentLookup`].
//!
//! A [`Forest`] is the minimal object graph the dispatcher can walk: a map
//! from child key to parent key. Nodes without an entry are roots; nothing
//! is stored for them. The store holds plain key copies, never ownership of
//! application objects.

use core::hash::Hash;

use hashbrown::HashMap;

use crate::types::ParentLookup;

/// A forest of parent links over copyable node keys.
///
/// Linking is unchecked: a cycle created via [`Forest::set_parent`] makes
/// later dispatch walks non-terminating, as with any cyclic
/// [`ParentLookup`]. Keeping the ancestry acyclic is the caller's
/// responsibility.
///
/// # Example
///
/// ```
/// use canopy_dispatch::adapters::forest::Forest;
/// use canopy_dispatch::types::ParentLookup;
///
/// let mut forest = Forest::new();
/// forest.set_parent(2, 1);
/// forest.set_parent(3, 2);
/// assert_eq!(forest.parent_of(&3), Some(2));
/// assert_eq!(forest.parent_of(&1), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Forest<K> {
    parents: HashMap<K, K>,
}

impl<K: Copy + Eq + Hash> Forest<K> {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    /// Links `child` under `parent`, replacing any previous link.
    ///
    /// Returns the previous parent, if any.
    pub fn set_parent(&mut self, child: K, parent: K) -> Option<K> {
        self.parents.insert(child, parent)
    }

    /// Unlinks `child` from its parent, making it a root.
    ///
    /// Returns the removed parent, if any.
    pub fn clear_parent(&mut self, child: K) -> Option<K> {
        self.parents.remove(&child)
    }

    /// Returns `true` iff `node` has no parent link.
    #[must_use]
    pub fn is_root(&self, node: &K) -> bool {
        !self.parents.contains_key(node)
    }
}

impl<K: Copy + Eq + Hash> ParentLookup<K> for Forest<K> {
    fn parent_of(&self, node: &K) -> Option<K> {
        self.parents.get(node).copied()
    }
}
