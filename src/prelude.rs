//! Convenient re-exports for common usage.
//!
//! ```
//! use marray::prelude::*;
//! ```

pub use crate::Crdt;
pub use crate::Element;
pub use crate::ElementId;
pub use crate::MArray;
pub use crate::MArrayConfig;
pub use crate::Snapshot;
pub use crate::VectorClock;
