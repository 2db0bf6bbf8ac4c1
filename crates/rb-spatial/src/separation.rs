//! Final minimum-separation filter.
//!
//! The last pipeline stage runs on at most `n_clusters` points, so the
//! greedy O(n·k) scan is the right tool here; the R-tree machinery in
//! [`dedup`](crate::dedup) earns its keep only on the raw input tables.
//!
//! Acceptance is sequential in input order, which makes the result depend on
//! input order: a rejected point could have been kept under a different
//! ordering.  The pipeline feeds this filter cluster centroids in their
//! deterministic k-means order, so runs are reproducible.

use rustc_hash::FxHashSet;

use rb_core::GeoPoint;

/// Greedily select a subset of `points` such that:
///
/// 1. unless `allow_same_coordinates`, no two selected points share
///    bit-identical coordinates;
/// 2. every selected pair is at least `min_distance_m` metres apart
///    (haversine).  A non-positive threshold disables the distance check.
///
/// Candidates are considered in input order; each is accepted iff it passes
/// both checks against the already-accepted set.  An empty result is valid.
pub fn enforce_separation(
    points: &[GeoPoint],
    min_distance_m: f64,
    allow_same_coordinates: bool,
) -> Vec<GeoPoint> {
    let mut seen: FxHashSet<(u64, u64)> = FxHashSet::default();
    let mut accepted: Vec<GeoPoint> = Vec::new();

    for &p in points {
        if !allow_same_coordinates && !seen.insert(coord_bits(p)) {
            continue;
        }
        if min_distance_m > 0.0
            && accepted.iter().any(|a| a.distance_m(p) < min_distance_m)
        {
            continue;
        }
        accepted.push(p);
    }
    accepted
}

/// Exact-identity key: f64 bit patterns, so `-0.0` and `0.0` stay distinct
/// and NaN never sneaks through equality (inputs are validated upstream
/// anyway).
#[inline]
fn coord_bits(p: GeoPoint) -> (u64, u64) {
    (p.lat.to_bits(), p.lon.to_bits())
}
