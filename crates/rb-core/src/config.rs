//! Run configuration.
//!
//! One struct carries every knob the pipeline recognises.  Defaults mirror
//! the original deployment for Daejeon: 100 clusters, 50 m final separation,
//! 100 m input separation, Korean-language reverse geocoding at one request
//! per second.

use crate::error::{RbError, RbResult};

/// Top-level pipeline configuration.
///
/// Typically built from CLI arguments by the application crate and passed to
/// the pipeline runner.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Number of candidate new bin locations to generate (k-means k).
    /// Clamped down by the pipeline when fewer deduplicated candidates exist.
    pub n_clusters: usize,

    /// Minimum pairwise separation (metres) enforced on the final output.
    /// 0 disables the distance check.
    pub min_distance_m: f64,

    /// Minimum separation (metres) enforced on input candidates before
    /// clustering.  0 disables input deduplication.
    pub min_input_distance_m: f64,

    /// Allow exact-duplicate coordinate pairs in the output.  Only
    /// observable when `min_distance_m` is 0, since duplicates are 0 m apart.
    pub allow_same_coordinates: bool,

    /// Skip the reverse-geocoding boundary check entirely; every cluster
    /// centroid passes through unfiltered.
    pub skip_region_validation: bool,

    /// Region name that must appear in a candidate's reverse-geocoded
    /// address for it to be kept.  Case-sensitive substring match.
    pub target_region: String,

    /// Master RNG seed for clustering.  The same seed on identical input
    /// always produces identical output.
    pub seed: u64,

    /// Per-lookup timeout, seconds.  A timed-out lookup counts as
    /// "not in region" and never stalls the batch.
    pub lookup_timeout_secs: u64,

    /// Minimum spacing between consecutive geocoding requests, milliseconds.
    /// The public Nominatim instance requires at least 1000.
    pub min_lookup_interval_ms: u64,

    /// `Accept-Language` header sent with geocoding requests.
    pub accept_language: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            n_clusters:             100,
            min_distance_m:         50.0,
            min_input_distance_m:   100.0,
            allow_same_coordinates: false,
            skip_region_validation: false,
            target_region:          "Daejeon Metropolitan City".to_string(),
            seed:                   0,
            lookup_timeout_secs:    10,
            min_lookup_interval_ms: 1_000,
            accept_language:        "ko".to_string(),
        }
    }
}

impl SiteConfig {
    /// Reject configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> RbResult<()> {
        if self.n_clusters == 0 {
            return Err(RbError::Config("n_clusters must be at least 1".into()));
        }
        if !self.min_distance_m.is_finite() || self.min_distance_m < 0.0 {
            return Err(RbError::Config(format!(
                "min_distance_m must be finite and non-negative, got {}",
                self.min_distance_m
            )));
        }
        if !self.min_input_distance_m.is_finite() || self.min_input_distance_m < 0.0 {
            return Err(RbError::Config(format!(
                "min_input_distance_m must be finite and non-negative, got {}",
                self.min_input_distance_m
            )));
        }
        if !self.skip_region_validation && self.target_region.is_empty() {
            return Err(RbError::Config(
                "target_region must be non-empty unless region validation is skipped".into(),
            ));
        }
        Ok(())
    }
}
