use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use parking_lot::RwLock;
use rand::seq::SliceRandom;
use rand::thread_rng;
use tracing::debug;

use crate::clock::VectorClock;
use crate::config::MArrayConfig;
use crate::crdt::Crdt;
use crate::element::{Element, ElementId, VersionedValue};
use crate::snapshot::Snapshot;

/// A movable array CRDT — an ordered sequence supporting the full set of
/// array mutations under concurrent replication.
///
/// Every element carries a stable id and three independently versioned
/// facets (value, position, liveness), each stamped with a vector clock.
/// Positions are fractional indices: moves and inserts take midpoints, so
/// reordering never disturbs unrelated elements. Replicas exchange whole
/// state via [`merge`](MArray::merge); any two replicas that have seen the
/// same set of mutations materialize identical sequences.
///
/// # Example
///
/// ```
/// use marray::prelude::*;
///
/// let alice: MArray<&str> = MArray::new("alice");
/// alice.push("milk");
/// let eggs = alice.push("eggs");
/// let bread = alice.push("bread");
///
/// let bob = alice.clone();
///
/// // Concurrently: alice edits, bob reorders.
/// alice.set(&eggs, "eggs (2 dozen)");
/// bob.move_to(&bread, 0);
///
/// alice.merge(&bob);
/// bob.merge(&alice);
///
/// assert_eq!(alice.to_vec(), bob.to_vec());
/// assert_eq!(alice.to_vec(), vec!["bread", "milk", "eggs (2 dozen)"]);
/// ```
///
/// # Concurrency
///
/// A replica is internally consistent under concurrent callers: mutations
/// take an exclusive lock, view queries a shared lock. `merge` locks `self`
/// exclusively and `other` shared — do not merge the same pair of replicas
/// in both directions from two threads at once while either side is also
/// locked elsewhere; merge one direction per thread, or exchange
/// [snapshots](MArray::snapshot) instead.
pub struct MArray<T: Clone> {
    inner: RwLock<Inner<T>>,
}

#[derive(Clone)]
struct Inner<T: Clone> {
    replica: String,
    clock: VectorClock,
    items: BTreeMap<ElementId, Element<T>>,
    config: MArrayConfig,
    sort_fn: Option<fn(&T, &T) -> bool>,
    order_cache: Option<Vec<ElementId>>,
}

impl<T: Clone> MArray<T> {
    /// Create an empty replica with the default configuration.
    ///
    /// The replica id must be non-empty and unique among all replicas that
    /// will ever merge with each other; it is also the deterministic
    /// tiebreaker for concurrent updates.
    pub fn new(replica: impl Into<String>) -> Self {
        Self::with_config(replica, MArrayConfig::default())
    }

    /// Create an empty replica with an explicit configuration.
    pub fn with_config(replica: impl Into<String>, config: MArrayConfig) -> Self {
        let replica = replica.into();
        debug_assert!(!replica.is_empty(), "replica id must be non-empty");
        Self {
            inner: RwLock::new(Inner {
                replica,
                clock: VectorClock::new(),
                items: BTreeMap::new(),
                config,
                sort_fn: None,
                order_cache: None,
            }),
        }
    }

    /// Create a replica that keeps itself sorted by value.
    ///
    /// The array re-sorts after insertions and merges using `less`.
    pub fn with_sorting(replica: impl Into<String>, less: fn(&T, &T) -> bool) -> Self {
        let array = Self::with_config(
            replica,
            MArrayConfig {
                keep_sorted: true,
                ..MArrayConfig::default()
            },
        );
        array.inner.write().sort_fn = Some(less);
        array
    }

    /// This replica's id.
    #[must_use]
    pub fn replica_id(&self) -> String {
        self.inner.read().replica.clone()
    }

    /// This replica's configuration.
    #[must_use]
    pub fn config(&self) -> MArrayConfig {
        self.inner.read().config
    }

    // --- Queries (shared lock) ---

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        let inner = self.inner.read();
        inner.items.values().filter(|e| !e.deleted).count()
    }

    /// Whether the array has no live elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value at materialized index `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        let inner = self.inner.read();
        let order = inner.order();
        order.get(index).map(|id| inner.items[id].value.data.clone())
    }

    /// The live values in materialized order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        let inner = self.inner.read();
        inner
            .order()
            .iter()
            .map(|id| inner.items[id].value.data.clone())
            .collect()
    }

    /// The ids of live elements in materialized order.
    #[must_use]
    pub fn ids(&self) -> Vec<ElementId> {
        self.inner.read().order()
    }

    /// Inspect a live element by id.
    ///
    /// Returns a deep copy; `None` for unknown or deleted ids.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<Element<T>> {
        let inner = self.inner.read();
        inner.items.get(id).filter(|e| !e.deleted).cloned()
    }

    // --- Mutations (exclusive lock) ---

    /// Append a value; returns the new element's id.
    pub fn push(&self, value: T) -> ElementId {
        self.inner.write().push_locked(value)
    }

    /// Prepend a value; returns the new element's id.
    pub fn unshift(&self, value: T) -> ElementId {
        self.inner.write().unshift_locked(value)
    }

    /// Insert a value at `index` (clamped to `[0, len]`); returns the id.
    pub fn insert(&self, index: usize, value: T) -> ElementId {
        self.inner.write().insert_locked(index, value)
    }

    /// Update an element's value.
    ///
    /// Fails on unknown or deleted ids; `set` never resurrects.
    pub fn set(&self, id: &ElementId, value: T) -> bool {
        self.inner.write().set_locked(id, value)
    }

    /// Delete an element, leaving a tombstone.
    ///
    /// Fails on unknown or already-deleted ids.
    pub fn delete(&self, id: &ElementId) -> bool {
        self.inner.write().delete_locked(id)
    }

    /// Delete and return the last element, or `None` when empty.
    pub fn pop(&self) -> Option<T> {
        let mut inner = self.inner.write();
        let id = *inner.live_order().last()?;
        let value = inner.items[&id].value.data.clone();
        inner.delete_locked(&id);
        Some(value)
    }

    /// Delete and return the first element, or `None` when empty.
    pub fn shift(&self) -> Option<T> {
        let mut inner = self.inner.write();
        let id = *inner.live_order().first()?;
        let value = inner.items[&id].value.data.clone();
        inner.delete_locked(&id);
        Some(value)
    }

    /// Move an element to materialized index `index` (clamped).
    ///
    /// Fails only on unknown ids. A deleted element is resurrected: the move
    /// clears the tombstone locally and the freshly stamped position clock
    /// competes against the delete at merge time.
    pub fn move_to(&self, id: &ElementId, index: usize) -> bool {
        self.inner.write().move_to_locked(id, index)
    }

    /// Move an element directly after `anchor`.
    ///
    /// Resurrects the moved element; fails if the anchor is unknown or
    /// deleted, or the moved id unknown.
    pub fn move_after(&self, id: &ElementId, anchor: &ElementId) -> bool {
        self.inner.write().move_after_locked(id, anchor)
    }

    /// Move an element directly before `anchor`.
    ///
    /// Resurrects the moved element; fails if the anchor is unknown or
    /// deleted, or the moved id unknown.
    pub fn move_before(&self, id: &ElementId, anchor: &ElementId) -> bool {
        self.inner.write().move_before_locked(id, anchor)
    }

    /// Exchange the positions of two live elements.
    pub fn swap(&self, a: &ElementId, b: &ElementId) -> bool {
        self.inner.write().swap_locked(a, b)
    }

    /// Re-stamp all positions so the array is sorted by value under `less`.
    pub fn sort_by(&self, less: fn(&T, &T) -> bool) {
        self.inner.write().sort_by_locked(less);
    }

    /// Reverse the array.
    pub fn reverse(&self) {
        self.inner.write().reverse_locked();
    }

    /// Rotate the array by `n` positions (negative rotates left).
    pub fn rotate(&self, n: isize) {
        self.inner.write().rotate_locked(n);
    }

    /// Randomly permute the array.
    pub fn shuffle(&self) {
        self.inner.write().shuffle_locked();
    }

    /// Delete every live element in one logical step.
    pub fn clear(&self) {
        self.inner.write().clear_locked();
    }

    // --- Replication ---

    /// Merge another replica's state into this one.
    ///
    /// Each facet of each element resolves independently by
    /// last-writer-wins on its clock; concurrent writes fall back to a
    /// deterministic replica-id tiebreak. Delete-versus-move conflicts are
    /// arbitrated across both replicas' delete and position stamps, so a
    /// move that was concurrent with a delete can resurrect the element.
    /// Merging is commutative, associative and idempotent.
    ///
    /// Locks `self` exclusively and `other` shared; see the type-level
    /// concurrency notes for the bidirectional-merge convention.
    pub fn merge(&self, other: &MArray<T>) {
        if std::ptr::eq(self, other) {
            return;
        }
        let mut inner = self.inner.write();
        let other_inner = other.inner.read();
        inner.merge_remote(other_inner.items.values());
    }

    /// Capture this replica's full state as a transferable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<T> {
        let inner = self.inner.read();
        Snapshot {
            replica: inner.replica.clone(),
            clock: inner.clock.clone(),
            config: inner.config,
            elements: inner.items.clone(),
        }
    }

    /// Merge a snapshot of another replica's state into this one.
    ///
    /// Identical to [`merge`](MArray::merge) but takes no lock on the
    /// source, so it has no ordering constraints between replicas.
    pub fn merge_snapshot(&self, snapshot: &Snapshot<T>) {
        let mut inner = self.inner.write();
        inner.merge_remote(snapshot.elements.values());
    }

    /// Rehydrate a replica from a snapshot.
    ///
    /// The keep-sorted comparator is not part of a snapshot; replicas using
    /// one should re-attach it by constructing via
    /// [`with_sorting`](MArray::with_sorting) and merging instead.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot<T>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                replica: snapshot.replica,
                clock: snapshot.clock,
                items: snapshot.elements,
                config: snapshot.config,
                sort_fn: None,
                order_cache: None,
            }),
        }
    }
}

impl<T: Clone> Clone for MArray<T> {
    /// Deep copy with the same replica id and state.
    fn clone(&self) -> Self {
        Self {
            inner: RwLock::new(self.inner.read().clone()),
        }
    }
}

impl<T: Clone> Crdt for MArray<T> {
    fn merge(&mut self, other: &Self) {
        MArray::merge(self, other);
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for MArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        let order = inner.order();
        let values: Vec<&T> = order.iter().map(|id| &inner.items[id].value.data).collect();
        f.debug_struct("MArray")
            .field("replica", &inner.replica)
            .field("values", &values)
            .finish()
    }
}

impl<T: Clone> Inner<T> {
    /// Advance the replica clock and produce the stamp for one facet write:
    /// a fork of the advanced clock, incremented once more so it is strictly
    /// after everything this replica has seen.
    fn stamp(&mut self) -> VectorClock {
        self.clock.increment(&self.replica);
        let mut stamp = self.clock.fork();
        stamp.increment(&self.replica);
        stamp
    }

    fn invalidate(&mut self) {
        self.order_cache = None;
    }

    /// Live ids sorted by `(position, id)`, from the cache when valid.
    fn order(&self) -> Vec<ElementId> {
        match &self.order_cache {
            Some(cached) => cached.clone(),
            None => self.compute_order(),
        }
    }

    /// Like [`order`](Inner::order), but repopulates the cache.
    fn live_order(&mut self) -> Vec<ElementId> {
        if let Some(cached) = &self.order_cache {
            return cached.clone();
        }
        let order = self.compute_order();
        self.order_cache = Some(order.clone());
        order
    }

    fn compute_order(&self) -> Vec<ElementId> {
        let mut live: Vec<&Element<T>> = self.items.values().filter(|e| !e.deleted).collect();
        live.sort_by(|a, b| {
            a.position
                .pos
                .total_cmp(&b.position.pos)
                .then_with(|| a.id.cmp(&b.id))
        });
        live.into_iter().map(|e| e.id).collect()
    }

    fn max_live_position(&self) -> Option<f64> {
        self.items
            .values()
            .filter(|e| !e.deleted)
            .map(|e| e.position.pos)
            .max_by(|a, b| a.total_cmp(b))
    }

    fn min_live_position(&self) -> Option<f64> {
        self.items
            .values()
            .filter(|e| !e.deleted)
            .map(|e| e.position.pos)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Position for inserting at `index` into the given materialized order.
    fn insert_position(&self, order: &[ElementId], index: usize) -> f64 {
        let spacing = self.config.index_spacing;
        if order.is_empty() {
            return self.config.initial_index;
        }
        if index == 0 {
            return self.items[&order[0]].position.pos - spacing;
        }
        if index >= order.len() {
            return self.items[&order[order.len() - 1]].position.pos + spacing;
        }
        let before = self.items[&order[index - 1]].position.pos;
        let after = self.items[&order[index]].position.pos;
        (before + after) / 2.0
    }

    fn create(&mut self, value: T, pos: f64) -> ElementId {
        let stamp = self.stamp();
        let id = ElementId::generate();
        self.items.insert(id, Element::new(id, value, pos, stamp));
        self.invalidate();
        id
    }

    fn push_locked(&mut self, value: T) -> ElementId {
        let pos = match self.max_live_position() {
            Some(max) => max + self.config.index_spacing,
            None => self.config.initial_index,
        };
        let id = self.create(value, pos);
        self.maintain_sort();
        id
    }

    fn unshift_locked(&mut self, value: T) -> ElementId {
        let pos = match self.min_live_position() {
            Some(min) => min - self.config.index_spacing,
            None => self.config.initial_index,
        };
        let id = self.create(value, pos);
        self.maintain_sort();
        id
    }

    fn insert_locked(&mut self, index: usize, value: T) -> ElementId {
        let order = self.live_order();
        let pos = self.insert_position(&order, index.min(order.len()));
        let id = self.create(value, pos);
        if self.config.auto_reindex {
            self.check_reindex();
        }
        self.maintain_sort();
        id
    }

    fn set_locked(&mut self, id: &ElementId, value: T) -> bool {
        if !self.items.get(id).is_some_and(|e| !e.deleted) {
            return false;
        }
        let stamp = self.stamp();
        let Some(elem) = self.items.get_mut(id) else {
            return false;
        };
        debug_assert!(stamp.after(&elem.value.clock), "value stamp must advance");
        elem.value = VersionedValue {
            data: value,
            clock: stamp.clone(),
        };
        elem.summary_clock.merge(&stamp);
        true
    }

    fn delete_locked(&mut self, id: &ElementId) -> bool {
        if !self.items.get(id).is_some_and(|e| !e.deleted) {
            return false;
        }
        let stamp = self.stamp();
        let Some(elem) = self.items.get_mut(id) else {
            return false;
        };
        elem.deleted = true;
        elem.delete_clock = Some(stamp.clone());
        elem.summary_clock.merge(&stamp);
        self.invalidate();
        true
    }

    /// Clear a tombstone ahead of a move. The move's fresh position stamp is
    /// what argues against the delete at merge time.
    fn resurrect(&mut self, id: &ElementId) {
        let mut changed = false;
        if let Some(elem) = self.items.get_mut(id) {
            if elem.deleted {
                elem.deleted = false;
                elem.delete_clock = None;
                changed = true;
            }
        }
        if changed {
            self.invalidate();
        }
    }

    /// Write a new position to one element under a fresh stamp.
    fn place(&mut self, id: &ElementId, pos: f64) {
        let stamp = self.stamp();
        if let Some(elem) = self.items.get_mut(id) {
            debug_assert!(
                stamp.after(&elem.position.clock),
                "position stamp must advance"
            );
            elem.position.pos = pos;
            elem.position.clock = stamp.clone();
            elem.summary_clock.merge(&stamp);
        }
        self.invalidate();
    }

    fn move_to_locked(&mut self, id: &ElementId, index: usize) -> bool {
        if !self.items.contains_key(id) {
            return false;
        }
        self.resurrect(id);

        let targets: Vec<ElementId> = self
            .live_order()
            .into_iter()
            .filter(|live| live != id)
            .collect();
        let pos = self.insert_position(&targets, index.min(targets.len()));

        self.place(id, pos);
        if self.config.auto_reindex {
            self.check_reindex();
        }
        true
    }

    fn move_after_locked(&mut self, id: &ElementId, anchor: &ElementId) -> bool {
        if !self.items.contains_key(id) {
            return false;
        }
        if !self.items.get(anchor).is_some_and(|e| !e.deleted) {
            return false;
        }
        self.resurrect(id);

        let order = self.live_order();
        let Some(at) = order.iter().position(|e| e == anchor) else {
            return false;
        };
        let next = order[at + 1..].iter().find(|e| *e != id).copied();

        let anchor_pos = self.items[anchor].position.pos;
        let pos = match next {
            Some(next) => (anchor_pos + self.items[&next].position.pos) / 2.0,
            None => anchor_pos + self.config.index_spacing,
        };

        self.place(id, pos);
        if self.config.auto_reindex {
            self.check_reindex();
        }
        true
    }

    fn move_before_locked(&mut self, id: &ElementId, anchor: &ElementId) -> bool {
        if !self.items.contains_key(id) {
            return false;
        }
        if !self.items.get(anchor).is_some_and(|e| !e.deleted) {
            return false;
        }
        self.resurrect(id);

        let order = self.live_order();
        let Some(at) = order.iter().position(|e| e == anchor) else {
            return false;
        };
        let prev = order[..at].iter().rev().find(|e| *e != id).copied();

        let anchor_pos = self.items[anchor].position.pos;
        let pos = match prev {
            Some(prev) => (self.items[&prev].position.pos + anchor_pos) / 2.0,
            None => anchor_pos - self.config.index_spacing,
        };

        self.place(id, pos);
        if self.config.auto_reindex {
            self.check_reindex();
        }
        true
    }

    fn swap_locked(&mut self, a: &ElementId, b: &ElementId) -> bool {
        if !self.items.get(a).is_some_and(|e| !e.deleted)
            || !self.items.get(b).is_some_and(|e| !e.deleted)
        {
            return false;
        }
        let pos_a = self.items[a].position.pos;
        let pos_b = self.items[b].position.pos;
        // Two separate stamps: elements must never share a clock, or a
        // concurrent move of one of them could not win independently.
        self.place(a, pos_b);
        self.place(b, pos_a);
        true
    }

    /// Re-stamp each listed element's position under its own fresh stamp.
    fn restamp_positions(&mut self, placement: &[(ElementId, f64)]) {
        for &(id, pos) in placement {
            self.place(&id, pos);
        }
    }

    fn sort_by_locked(&mut self, less: fn(&T, &T) -> bool) {
        let mut order = self.live_order();
        if order.is_empty() {
            return;
        }
        order.sort_by(|a, b| {
            let va = &self.items[a].value.data;
            let vb = &self.items[b].value.data;
            if less(va, vb) {
                Ordering::Less
            } else if less(vb, va) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        let spacing = self.config.index_spacing;
        let placement: Vec<(ElementId, f64)> = order
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, (i as f64 + 1.0) * spacing))
            .collect();
        self.restamp_positions(&placement);
    }

    fn reverse_locked(&mut self) {
        let order = self.live_order();
        let n = order.len();
        if n == 0 {
            return;
        }
        let spacing = self.config.index_spacing;
        let placement: Vec<(ElementId, f64)> = order
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, (n - i) as f64 * spacing))
            .collect();
        self.restamp_positions(&placement);
    }

    fn rotate_locked(&mut self, n: isize) {
        let order = self.live_order();
        let len = order.len();
        if len == 0 {
            return;
        }
        let shift = n.rem_euclid(len as isize) as usize;
        let spacing = self.config.index_spacing;
        let placement: Vec<(ElementId, f64)> = order
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, (((i + shift) % len) as f64 + 1.0) * spacing))
            .collect();
        self.restamp_positions(&placement);
    }

    fn shuffle_locked(&mut self) {
        let order = self.live_order();
        if order.is_empty() {
            return;
        }
        let spacing = self.config.index_spacing;
        let mut positions: Vec<f64> = (0..order.len())
            .map(|i| (i as f64 + 1.0) * spacing)
            .collect();
        positions.shuffle(&mut thread_rng());
        let placement: Vec<(ElementId, f64)> = order.into_iter().zip(positions).collect();
        self.restamp_positions(&placement);
    }

    fn clear_locked(&mut self) {
        let stamp = self.stamp();
        for elem in self.items.values_mut() {
            if elem.deleted {
                continue;
            }
            elem.deleted = true;
            elem.delete_clock = Some(stamp.clone());
            elem.summary_clock.merge(&stamp);
        }
        self.invalidate();
    }

    fn maintain_sort(&mut self) {
        if !self.config.keep_sorted {
            return;
        }
        let Some(less) = self.sort_fn else { return };
        self.sort_by_locked(less);
    }

    fn check_reindex(&mut self) {
        if !self.config.auto_reindex {
            return;
        }
        let order = self.live_order();
        if order.len() < 2 {
            return;
        }
        let crowded = order.windows(2).any(|pair| {
            let gap = self.items[&pair[1]].position.pos - self.items[&pair[0]].position.pos;
            gap < self.config.reindex_threshold
        });
        if crowded {
            self.reindex();
        }
    }

    /// Renumber every live element to evenly spaced positions. Purely local:
    /// the fresh stamps make the renumbering win over the stale positions at
    /// every other replica.
    fn reindex(&mut self) {
        let order = self.live_order();
        debug!(
            replica = %self.replica,
            elements = order.len(),
            "renumbering crowded fractional positions"
        );
        let spacing = self.config.index_spacing;
        let placement: Vec<(ElementId, f64)> = order
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, (i as f64 + 1.0) * spacing))
            .collect();
        self.restamp_positions(&placement);
    }

    // --- Merge engine ---

    fn merge_remote<'a>(&mut self, elements: impl Iterator<Item = &'a Element<T>>)
    where
        T: 'a,
    {
        let mut count = 0usize;
        for remote in elements {
            self.merge_element(remote);
            count += 1;
        }
        if self.config.keep_sorted {
            self.maintain_sort();
        }
        debug!(replica = %self.replica, elements = count, "merged remote state");
    }

    fn merge_element(&mut self, remote: &Element<T>) {
        if !self.items.contains_key(&remote.id) {
            self.clock.merge(&remote.summary_clock);
            self.items.insert(remote.id, remote.clone());
            self.invalidate();
            return;
        }

        let mut order_changed = false;
        {
            let Some(local) = self.items.get_mut(&remote.id) else {
                return;
            };

            // Value and position resolve independently, so a concurrent
            // edit and move of the same element both survive.
            if remote_wins(&local.value.clock, &remote.value.clock) {
                local.value = remote.value.clone();
            }
            if remote_wins(&local.position.clock, &remote.position.clock) {
                local.position = remote.position.clone();
                order_changed = true;
            }

            let was_deleted = local.deleted;
            match resolve_liveness(local, remote) {
                Some(delete_clock) => {
                    local.deleted = true;
                    local.delete_clock = Some(delete_clock);
                }
                None => {
                    local.deleted = false;
                    local.delete_clock = None;
                }
            }
            if local.deleted != was_deleted {
                order_changed = true;
            }

            local.summary_clock.merge(&remote.summary_clock);
        }

        self.clock.merge(&remote.summary_clock);
        if order_changed {
            self.invalidate();
        }
    }
}

/// Per-facet last-writer-wins: strict clock domination decides when it can;
/// concurrent stamps fall back to the deterministic tiebreak order.
fn remote_wins(local: &VectorClock, remote: &VectorClock) -> bool {
    if remote.after(local) {
        return true;
    }
    if local.after(remote) {
        return false;
    }
    remote.tiebreak(local) == Ordering::Greater
}

/// Arbitrate delete-versus-move across both replicas.
///
/// Candidates are both sides' delete stamps (if any) and both sides'
/// position stamps (a move argues the element should be live). The winner is
/// a candidate no other candidate dominates, with mutual concurrency broken
/// by the tiebreak order. Returns the winning delete clock when the element
/// ends up deleted, `None` when it ends up live.
fn resolve_liveness<T>(local: &Element<T>, remote: &Element<T>) -> Option<VectorClock> {
    let mut candidates: Vec<(&VectorClock, bool)> = Vec::with_capacity(4);
    if let Some(clock) = &local.delete_clock {
        candidates.push((clock, true));
    }
    if let Some(clock) = &remote.delete_clock {
        candidates.push((clock, true));
    }
    candidates.push((&local.position.clock, false));
    candidates.push((&remote.position.clock, false));

    let mut winner: Option<(&VectorClock, bool)> = None;
    for &(clock, is_delete) in &candidates {
        if candidates.iter().any(|(other, _)| other.after(clock)) {
            continue;
        }
        winner = match winner {
            Some((best, _)) if clock.tiebreak(best) != Ordering::Greater => winner,
            _ => Some((clock, is_delete)),
        };
    }

    match winner {
        Some((clock, true)) => Some(clock.clone()),
        _ => None,
    }
}
