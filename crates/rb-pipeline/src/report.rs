//! Run report: selected locations plus per-stage row counts.

use rb_core::GeoPoint;

/// Row counts observed at each stage, in pipeline order.
///
/// `inside_region + outside_region + failed_lookups == clusters` whenever
/// the boundary check runs; with the check bypassed every centroid counts
/// as inside.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StageCounts {
    /// Existing bin locations loaded for context (not used for gating).
    pub existing_bins: usize,
    /// Valid bus + subway rows before any deduplication.
    pub raw_candidates: usize,
    /// After dropping exact-duplicate coordinates.
    pub unique_candidates: usize,
    /// After minimum-input-distance deduplication.
    pub spaced_candidates: usize,
    /// Cluster count actually used (may be clamped below `n_clusters`).
    pub clusters: usize,
    pub inside_region: usize,
    pub outside_region: usize,
    pub failed_lookups: usize,
    /// Final output rows after the separation filter.
    pub selected: usize,
}

/// Result of a completed pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineReport {
    /// Selected new bin locations, ready to write out.
    pub selected: Vec<GeoPoint>,
    pub counts: StageCounts,
}
