//! # marray
//!
//! A movable array CRDT for local-first applications.
//!
//! [`MArray`] is a replicated sequence that supports the full set of array
//! mutations — insert, delete, update, push/pop/shift/unshift, move,
//! move-before/after, swap, sort, reverse, rotate, shuffle — while
//! guaranteeing that replicas which have received the same set of mutations
//! materialize identical sequences, whatever the merge order or topology.
//!
//! Each element has a stable 128-bit id and three independently versioned
//! facets: its value, its fractional position, and its liveness. Every facet
//! carries a vector clock, and merging resolves each facet by
//! last-writer-wins with a deterministic replica-id tiebreak for concurrent
//! writes. A move concurrent with a delete is arbitrated explicitly, so
//! dragging an item somewhere can resurrect it — or lose to the delete —
//! identically on every replica.
//!
//! ## Quick Start
//!
//! ```
//! use marray::prelude::*;
//!
//! let todo: MArray<&str> = MArray::new("laptop");
//! todo.push("write docs");
//! let bug = todo.push("fix bug #123");
//!
//! let phone = todo.clone();
//!
//! // Concurrent edits on both devices.
//! todo.set(&bug, "fix bug #123 (urgent)");
//! phone.move_to(&bug, 0);
//!
//! // Gossip state in both directions.
//! todo.merge(&phone);
//! phone.merge(&todo);
//!
//! // Both edits survive: the item moved and was renamed.
//! assert_eq!(todo.to_vec(), phone.to_vec());
//! assert_eq!(todo.get(0), Some("fix bug #123 (urgent)"));
//! ```
//!
//! ## Replication model
//!
//! Merging is state-based: [`MArray::merge`] (or
//! [`MArray::merge_snapshot`] for serialized exchange) folds a whole remote
//! state in. Merge is commutative, associative and idempotent, so no
//! delivery ordering, deduplication or causal middleware is required.
//! Tombstones are kept forever; garbage collection is the embedder's
//! concern.
//!
//! ## Feature flags
//!
//! - `serde` — derive `Serialize`/`Deserialize` for [`Snapshot`] and the
//!   types it contains.

mod clock;
mod config;
mod crdt;
mod element;
mod marray;
mod snapshot;

pub mod prelude;

pub use clock::VectorClock;
pub use config::MArrayConfig;
pub use crdt::Crdt;
pub use element::{Element, ElementId, VersionedIndex, VersionedValue};
pub use marray::MArray;
pub use snapshot::Snapshot;
