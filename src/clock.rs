use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A vector clock tracking causality across replicas.
///
/// Each replica that has performed an operation owns an entry mapping its id
/// to a monotonically increasing counter. Absent entries count as zero, so
/// clocks from replicas that have never heard of each other still compare.
///
/// Comparison is a partial order: one clock is [`after`](VectorClock::after)
/// another only when it dominates componentwise with at least one strict
/// increase. Clocks where neither dominates are
/// [`concurrent`](VectorClock::concurrent).
///
/// # Example
///
/// ```
/// use marray::prelude::*;
///
/// let mut a = VectorClock::new();
/// a.increment("replica-1");
///
/// let mut b = a.fork();
/// b.increment("replica-2");
///
/// assert!(b.after(&a));
/// assert!(!a.after(&b));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorClock {
    entries: BTreeMap<String, u64>,
}

impl VectorClock {
    /// Create an empty vector clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Get the counter for a replica. Absent entries are zero.
    #[must_use]
    pub fn get(&self, replica: &str) -> u64 {
        self.entries.get(replica).copied().unwrap_or(0)
    }

    /// Advance this replica's counter by one.
    pub fn increment(&mut self, replica: &str) {
        *self.entries.entry(replica.to_owned()).or_insert(0) += 1;
    }

    /// Merge another clock into this one, taking the pointwise maximum.
    pub fn merge(&mut self, other: &VectorClock) {
        for (replica, &count) in &other.entries {
            let entry = self.entries.entry(replica.clone()).or_insert(0);
            *entry = (*entry).max(count);
        }
    }

    /// Check whether this clock is causally after `other`.
    ///
    /// True iff every component of `self` is at least the corresponding
    /// component of `other`, at least one is strictly greater, and `other`
    /// has no nonzero component unknown to `self`.
    #[must_use]
    pub fn after(&self, other: &VectorClock) -> bool {
        let mut strictly_greater = false;
        for (replica, &count) in &self.entries {
            let theirs = other.get(replica);
            if count < theirs {
                return false;
            }
            if count > theirs {
                strictly_greater = true;
            }
        }

        for (replica, &count) in &other.entries {
            if count > 0 && !self.entries.contains_key(replica) {
                return false;
            }
        }

        strictly_greater
    }

    /// Check whether neither clock dominates the other.
    ///
    /// Note that equal clocks are not `after` each other and therefore count
    /// as concurrent here; callers that care distinguish via `==`.
    #[must_use]
    pub fn concurrent(&self, other: &VectorClock) -> bool {
        !self.after(other) && !other.after(self)
    }

    /// Snapshot this clock into an independent copy.
    ///
    /// Forks are handed out as facet stamps; each fork advances on its own
    /// without affecting the clock it came from.
    #[must_use]
    pub fn fork(&self) -> VectorClock {
        self.clone()
    }

    /// The lexicographically largest replica id with a nonzero counter.
    ///
    /// This is only a deterministic tiebreaker for concurrent clocks; it says
    /// nothing about which replica wrote last.
    #[must_use]
    pub fn dominant_replica(&self) -> Option<&str> {
        self.entries
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(replica, _)| replica.as_str())
            .next_back()
    }

    /// Deterministic total order used to arbitrate between concurrent clocks.
    ///
    /// Compares dominant replica ids first, then the ordered entry sequences.
    /// Every replica computes the same winner from the same pair regardless
    /// of which side is local, which is what makes concurrent-update
    /// resolution converge.
    #[must_use]
    pub fn tiebreak(&self, other: &VectorClock) -> Ordering {
        self.dominant_replica()
            .cmp(&other.dominant_replica())
            .then_with(|| self.entries.iter().cmp(other.entries.iter()))
    }

    /// Iterate over `(replica, counter)` entries in replica-id order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(replica, &count)| (replica.as_str(), count))
    }

    /// Check whether the clock has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
