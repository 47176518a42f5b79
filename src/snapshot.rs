use std::collections::BTreeMap;

use crate::clock::VectorClock;
use crate::config::MArrayConfig;
use crate::element::{Element, ElementId};

/// A transferable copy of a replica's full state.
///
/// Holds the element map (tombstones included), the replica's clock and its
/// configuration — everything another replica needs to merge, and everything
/// needed to rehydrate the replica later. A snapshot is plain data: with the
/// `serde` feature it derives `Serialize`/`Deserialize`, and the choice of
/// encoding is the embedder's.
///
/// # Example
///
/// ```
/// use marray::prelude::*;
///
/// let a: MArray<&str> = MArray::new("a");
/// a.push("x");
///
/// let b: MArray<&str> = MArray::new("b");
/// b.merge_snapshot(&a.snapshot());
/// assert_eq!(b.to_vec(), vec!["x"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot<T> {
    pub(crate) replica: String,
    pub(crate) clock: VectorClock,
    pub(crate) config: MArrayConfig,
    pub(crate) elements: BTreeMap<ElementId, Element<T>>,
}

impl<T> Snapshot<T> {
    /// Id of the replica the snapshot was taken from.
    #[must_use]
    pub fn replica_id(&self) -> &str {
        &self.replica
    }

    /// The replica's vector clock at snapshot time.
    #[must_use]
    pub fn clock(&self) -> &VectorClock {
        &self.clock
    }

    /// The replica's configuration.
    #[must_use]
    pub fn config(&self) -> MArrayConfig {
        self.config
    }

    /// All elements, tombstones included, keyed by id.
    #[must_use]
    pub fn elements(&self) -> &BTreeMap<ElementId, Element<T>> {
        &self.elements
    }
}
