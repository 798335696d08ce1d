//! Union-find over arbitrary, possibly sparse node identifiers.
//!
//! Identifiers are interned into a dense arena on first reference, so a
//! domain such as `{-40, 7, 1_000_000}` behaves exactly like `0..3`. `find`
//! applies full path compression and `union` merges by rank, keeping both
//! operations amortised near-constant.

use std::collections::HashMap;
use std::hash::Hash;

/// Disjoint-set forest keyed by caller-supplied identifiers.
///
/// Unknown identifiers are created as singleton partitions the first time
/// they are referenced; no explicit insertion step exists.
///
/// # Examples
/// ```
/// use mstrace_core::IdentitySet;
///
/// let mut set = IdentitySet::new();
/// assert!(set.union(100_i64, -7));
/// assert!(!set.union(-7, 100));
/// assert_eq!(set.find(100), set.find(-7));
/// assert_eq!(set.component_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct IdentitySet<K> {
    slots: HashMap<K, usize>,
    keys: Vec<K>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl<K> Default for IdentitySet<K> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            keys: Vec::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            components: 0,
        }
    }
}

impl<K: Copy + Eq + Hash> IdentitySet<K> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with room for `capacity` identifiers.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity(capacity),
            keys: Vec::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            components: 0,
        }
    }

    /// Returns the number of identifiers referenced so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` when no identifier has been referenced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of disjoint partitions among referenced identifiers.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns `true` when `id` has been referenced before.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.slots.contains_key(id)
    }

    /// Returns the canonical representative of the partition holding `id`.
    ///
    /// The representative only changes when a later [`Self::union`] merges
    /// the partition; repeated calls without intervening unions agree.
    pub fn find(&mut self, id: K) -> K {
        let slot = self.intern(id);
        let root = self.find_slot(slot);
        self.keys[root]
    }

    /// Merges the partitions holding `left` and `right`.
    ///
    /// Returns `false` without mutating the structure when both identifiers
    /// already share a partition. Callers use this as the cycle signal.
    pub fn union(&mut self, left: K, right: K) -> bool {
        let left_slot = self.intern(left);
        let right_slot = self.intern(right);
        let mut parent = self.find_slot(left_slot);
        let mut child = self.find_slot(right_slot);
        if parent == child {
            return false;
        }

        let parent_rank = self.rank[parent];
        let child_rank = self.rank[child];
        if parent_rank < child_rank {
            std::mem::swap(&mut parent, &mut child);
        }
        self.parent[child] = parent;
        if parent_rank == child_rank {
            self.rank[parent] = parent_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }

    /// Returns `true` when both identifiers share a partition.
    pub fn connected(&mut self, left: K, right: K) -> bool {
        self.find(left) == self.find(right)
    }

    fn intern(&mut self, id: K) -> usize {
        if let Some(&slot) = self.slots.get(&id) {
            return slot;
        }
        let slot = self.keys.len();
        self.slots.insert(id, slot);
        self.keys.push(id);
        self.parent.push(slot);
        self.rank.push(0);
        self.components += 1;
        slot
    }

    fn find_slot(&mut self, mut slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[slot] != slot {
            let next = self.parent[slot];
            self.parent[slot] = root;
            slot = next;
        }

        root
    }
}
