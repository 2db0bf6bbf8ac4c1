//! Proximity deduplication over an R-tree spatial index.
//!
//! # Algorithm
//!
//! A naive greedy scan accepts each point only if it is at least the minimum
//! distance from every previously accepted point — O(n·k) haversine calls,
//! degenerating to O(n²) on dense city-scale inputs.  This module instead:
//!
//! 1. bulk-loads all points into an `rstar::RTree` keyed by `[lat, lon]`;
//! 2. for each point, queries a bounding window covering the metre threshold
//!    and confirms candidate pairs with the exact haversine distance;
//! 3. union-finds the confirmed close pairs into connected groups;
//! 4. keeps exactly one representative per group — the member with the
//!    lowest original index — in input order.
//!
//! Two points in *different* groups are, by construction, farther apart than
//! the threshold, so the surviving set satisfies the pairwise-distance
//! invariant, and re-running on the output is a no-op (idempotent).
//!
//! Unlike the greedy scan, group collapse does not depend on which member is
//! visited first; "lowest input index wins" makes the choice reproducible.
//!
//! # Degree-window approximation
//!
//! The R-tree indexes raw degrees, which cannot represent geodesic distance
//! exactly.  The query window converts metres to degrees with a slightly
//! conservative metres-per-degree constant and scales longitude by
//! `cos(lat)`, so the window over-covers the true threshold and no close
//! pair is missed; the haversine confirmation discards the excess.  The
//! over-coverage (and hence query cost) grows near the poles and for very
//! large thresholds, where `cos(lat)` varies noticeably across the window —
//! irrelevant at city scale and thresholds of a few hundred metres.

use rstar::{AABB, RTree, RTreeObject};

use rb_core::GeoPoint;

/// Slightly below the true ~111.2 km per degree of latitude so the degree
/// window never under-covers the metre threshold.
const METERS_PER_DEG: f64 = 111_000.0;

/// Floor for cos(lat) when widening the longitude window — keeps the window
/// finite for inputs at the poles.
const MIN_LAT_COS: f64 = 1e-6;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[lat, lon]` point with its original
/// input index.
struct CandidateEntry {
    point: [f64; 2], // [lat, lon]
    idx: u32,
}

impl RTreeObject for CandidateEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

// ── Disjoint set ──────────────────────────────────────────────────────────────

/// Union-find over point indices.  Unions always keep the smaller index as
/// root, so each group's representative is its lowest original index.
struct DisjointSet {
    parent: Vec<u32>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self { parent: (0..n as u32).collect() }
    }

    fn find(&mut self, mut i: u32) -> u32 {
        // Path halving.
        while self.parent[i as usize] != i {
            let grandparent = self.parent[self.parent[i as usize] as usize];
            self.parent[i as usize] = grandparent;
            i = grandparent;
        }
        i
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        let (low, high) = if ra < rb { (ra, rb) } else { (rb, ra) };
        self.parent[high as usize] = low;
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Reduce `points` so that no two retained points are within
/// `min_distance_m` metres (haversine) of each other.
///
/// Each connected group of mutually-close points collapses to its
/// lowest-index member; output preserves input order.  A non-positive
/// threshold disables the filter and returns the input unchanged.
pub fn dedup_by_distance(points: &[GeoPoint], min_distance_m: f64) -> Vec<GeoPoint> {
    if points.len() < 2 || min_distance_m <= 0.0 {
        return points.to_vec();
    }

    let entries: Vec<CandidateEntry> = points
        .iter()
        .enumerate()
        .map(|(i, p)| CandidateEntry { point: [p.lat, p.lon], idx: i as u32 })
        .collect();
    // Bulk load for O(n log n) construction (faster than n inserts).
    let tree = RTree::bulk_load(entries);

    let mut groups = DisjointSet::new(points.len());
    let lat_eps = min_distance_m / METERS_PER_DEG;

    for (i, p) in points.iter().enumerate() {
        let lon_eps = lat_eps / p.lat.to_radians().cos().abs().max(MIN_LAT_COS);
        let window = AABB::from_corners(
            [p.lat - lat_eps, p.lon - lon_eps],
            [p.lat + lat_eps, p.lon + lon_eps],
        );
        for entry in tree.locate_in_envelope_intersecting(&window) {
            let j = entry.idx as usize;
            // Visit each pair once.
            if j <= i {
                continue;
            }
            if p.distance_m(points[j]) < min_distance_m {
                groups.union(i as u32, entry.idx);
            }
        }
    }

    let mut kept = Vec::new();
    for (i, &p) in points.iter().enumerate() {
        if groups.find(i as u32) == i as u32 {
            kept.push(p);
        }
    }
    kept
}
