//! Per-walk visited-set.

use std::hash::Hash;

use rustc_hash::FxHashSet;

/// Set of keys already visited by one walk.
///
/// The key is either the node handle itself (identity) or a value derived
/// from it, such as its label. A walk must use one keying throughout.
#[derive(Debug, Clone)]
pub struct VisitedSet<K> {
    seen: FxHashSet<K>,
}

impl<K> Default for VisitedSet<K> {
    fn default() -> Self {
        Self {
            seen: FxHashSet::default(),
        }
    }
}

impl<K: Eq + Hash> VisitedSet<K> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set sized for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns `true` iff `key` was not yet visited, marking it visited.
    #[inline]
    pub fn try_visit(&mut self, key: K) -> bool {
        self.seen.insert(key)
    }

    /// Returns true if `key` has been visited.
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.seen.contains(key)
    }

    /// Returns the number of visited keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns true if nothing has been visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Consumes the set, returning the visited keys.
    #[must_use]
    pub fn into_inner(self) -> FxHashSet<K> {
        self.seen
    }
}
