use std::fmt;

use uuid::Uuid;

use crate::clock::VectorClock;

/// Stable identity of an array element.
///
/// A random 128-bit id minted when the element is created; it never changes
/// for the element's lifetime, across moves, edits, deletion and
/// resurrection. Ids order bytewise, which matches the order of their 32-char
/// hex rendering, so they double as the deterministic tiebreaker for elements
/// that land on exactly the same position.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(Uuid);

impl ElementId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({})", self.0.simple())
    }
}

/// The value facet: user data plus the clock of its last write.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionedValue<T> {
    pub(crate) data: T,
    pub(crate) clock: VectorClock,
}

impl<T> VersionedValue<T> {
    /// The user value.
    #[must_use]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The clock stamped by the last value write.
    #[must_use]
    pub fn clock(&self) -> &VectorClock {
        &self.clock
    }
}

/// The position facet: a fractional index plus the clock of its last move.
///
/// Only the relative order of positions matters; the absolute values are
/// implementation state and may be renumbered by a reindex at any time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionedIndex {
    pub(crate) pos: f64,
    pub(crate) clock: VectorClock,
}

impl VersionedIndex {
    /// The fractional position.
    #[must_use]
    pub fn pos(&self) -> f64 {
        self.pos
    }

    /// The clock stamped by the last position write.
    #[must_use]
    pub fn clock(&self) -> &VectorClock {
        &self.clock
    }
}

/// A single array element with three independently versioned facets.
///
/// The value, position and liveness facets each carry their own clock so that
/// concurrent edits to different facets of the same element all survive a
/// merge. The summary clock is the componentwise maximum of every facet clock
/// ever stamped on this element and serves as a coarse causality bound.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element<T> {
    pub(crate) id: ElementId,
    pub(crate) value: VersionedValue<T>,
    pub(crate) position: VersionedIndex,
    pub(crate) deleted: bool,
    pub(crate) delete_clock: Option<VectorClock>,
    pub(crate) summary_clock: VectorClock,
}

impl<T> Element<T> {
    pub(crate) fn new(id: ElementId, data: T, pos: f64, stamp: VectorClock) -> Self {
        Self {
            id,
            value: VersionedValue {
                data,
                clock: stamp.clone(),
            },
            position: VersionedIndex {
                pos,
                clock: stamp.clone(),
            },
            deleted: false,
            delete_clock: None,
            summary_clock: stamp,
        }
    }

    /// The element's stable id.
    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The value facet.
    #[must_use]
    pub fn value(&self) -> &VersionedValue<T> {
        &self.value
    }

    /// The position facet.
    #[must_use]
    pub fn position(&self) -> &VersionedIndex {
        &self.position
    }

    /// Whether the element is currently a tombstone.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// The clock of the delete that tombstoned this element, if any.
    #[must_use]
    pub fn delete_clock(&self) -> Option<&VectorClock> {
        self.delete_clock.as_ref()
    }

    /// Coarse causality summary covering every facet clock.
    #[must_use]
    pub fn summary_clock(&self) -> &VectorClock {
        &self.summary_clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp_for(replica: &str) -> VectorClock {
        let mut clock = VectorClock::new();
        clock.increment(replica);
        clock
    }

    #[test]
    fn ids_are_unique() {
        let a = ElementId::generate();
        let b = ElementId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn id_renders_as_32_hex_chars() {
        let id = ElementId::generate();
        let rendered = id.to_string();
        assert_eq!(rendered.len(), 32);
        assert!(rendered.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn new_element_is_live_with_uniform_stamps() {
        let stamp = stamp_for("a");
        let elem = Element::new(ElementId::generate(), "x", 1000.0, stamp.clone());

        assert!(!elem.is_deleted());
        assert!(elem.delete_clock().is_none());
        assert_eq!(elem.value().clock(), &stamp);
        assert_eq!(elem.position().clock(), &stamp);
        assert_eq!(elem.summary_clock(), &stamp);
    }

    #[test]
    fn facets_expose_their_data() {
        let elem = Element::new(ElementId::generate(), 7, 2000.0, stamp_for("a"));
        assert_eq!(*elem.value().data(), 7);
        assert_eq!(elem.position().pos(), 2000.0);
    }
}
