/// Tuning knobs for a movable array replica.
///
/// The defaults are safe for general use; all of this is local policy and
/// never needs to agree across replicas for convergence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MArrayConfig {
    /// Renumber fractional positions automatically when they crowd together.
    pub auto_reindex: bool,
    /// Minimum gap between adjacent positions before a reindex fires.
    pub reindex_threshold: f64,
    /// Position assigned to the first element of an empty array.
    pub initial_index: f64,
    /// Gap left between elements on append, prepend and reindex.
    pub index_spacing: f64,
    /// Re-sort the array by value after insertions and merges.
    ///
    /// Requires a comparator, supplied via [`MArray::with_sorting`].
    ///
    /// [`MArray::with_sorting`]: crate::MArray::with_sorting
    pub keep_sorted: bool,
}

impl Default for MArrayConfig {
    fn default() -> Self {
        Self {
            auto_reindex: true,
            reindex_threshold: 1e-4,
            initial_index: 1000.0,
            index_spacing: 1000.0,
            keep_sorted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MArrayConfig::default();
        assert!(config.auto_reindex);
        assert_eq!(config.reindex_threshold, 1e-4);
        assert_eq!(config.initial_index, 1000.0);
        assert_eq!(config.index_spacing, 1000.0);
        assert!(!config.keep_sorted);
    }
}
