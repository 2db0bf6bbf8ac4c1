//! Lloyd's k-means with k-means++ seeding.
//!
//! # Determinism
//!
//! All randomness comes from one `SmallRng` seeded with the configured run
//! seed, and every loop walks points in input-index order, so identical
//! input and seed always produce identical centroids.  Ties (equidistant
//! centers, equally-far points) resolve to the lowest index.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use rb_core::GeoPoint;

use crate::error::{ClusterError, ClusterResult};

/// Centroid movement (squared degrees) below which iteration stops.
/// 1e-12 deg² is roughly a tenth of a millimetre of latitude.
const CONVERGENCE_EPS: f64 = 1e-12;

/// k-means clusterer returning one centroid per cluster.
#[derive(Clone, Debug)]
pub struct KMeans {
    pub k: usize,
    pub seed: u64,
    pub max_iters: usize,
}

impl KMeans {
    /// 100 Lloyd iterations is far beyond convergence for city-scale inputs.
    pub fn new(k: usize, seed: u64) -> Self {
        Self { k, seed, max_iters: 100 }
    }

    /// Partition `points` into `k` clusters and return the `k` centroids,
    /// minimising within-cluster squared Euclidean distance in (lat, lon)
    /// degree space.
    ///
    /// Requires `1 <= k <= points.len()`.
    pub fn fit(&self, points: &[GeoPoint]) -> ClusterResult<Vec<GeoPoint>> {
        if self.k == 0 {
            return Err(ClusterError::ZeroClusters);
        }
        if points.len() < self.k {
            return Err(ClusterError::TooFewPoints {
                have: points.len(),
                requested: self.k,
            });
        }

        let coords: Vec<[f64; 2]> = points.iter().map(|p| [p.lat, p.lon]).collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut centers = seed_centers(&coords, self.k, &mut rng);
        let mut assignment = vec![0usize; coords.len()];

        for _ in 0..self.max_iters {
            // Assignment step.
            let mut changed = false;
            for (i, c) in coords.iter().enumerate() {
                let best = nearest_center(c, &centers);
                if assignment[i] != best {
                    assignment[i] = best;
                    changed = true;
                }
            }

            // Update step.
            let mut sums = vec![[0.0f64; 2]; self.k];
            let mut counts = vec![0usize; self.k];
            for (i, c) in coords.iter().enumerate() {
                let a = assignment[i];
                sums[a][0] += c[0];
                sums[a][1] += c[1];
                counts[a] += 1;
            }

            let mut next: Vec<[f64; 2]> = (0..self.k)
                .map(|c| {
                    if counts[c] > 0 {
                        [sums[c][0] / counts[c] as f64, sums[c][1] / counts[c] as f64]
                    } else {
                        centers[c] // reseeded below
                    }
                })
                .collect();

            // Reseed empty clusters to the point currently worst-served by
            // its own center; the next assignment step absorbs the change.
            let mut taken = vec![false; coords.len()];
            for c in 0..self.k {
                if counts[c] > 0 {
                    continue;
                }
                let mut far_idx = 0;
                let mut far_d2 = -1.0;
                for (i, p) in coords.iter().enumerate() {
                    if taken[i] {
                        continue;
                    }
                    let d2 = dist2(p, &centers[assignment[i]]);
                    if d2 > far_d2 {
                        far_d2 = d2;
                        far_idx = i;
                    }
                }
                taken[far_idx] = true;
                next[c] = coords[far_idx];
            }

            let shift = centers
                .iter()
                .zip(&next)
                .map(|(a, b)| dist2(a, b))
                .fold(0.0f64, f64::max);
            centers = next;

            if !changed || shift < CONVERGENCE_EPS {
                break;
            }
        }

        Ok(centers.into_iter().map(|[lat, lon]| GeoPoint::new(lat, lon)).collect())
    }
}

// ── Internals ─────────────────────────────────────────────────────────────────

#[inline]
fn dist2(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    let dlat = a[0] - b[0];
    let dlon = a[1] - b[1];
    dlat * dlat + dlon * dlon
}

fn nearest_center(p: &[f64; 2], centers: &[[f64; 2]]) -> usize {
    let mut best = 0;
    let mut best_d2 = f64::MAX;
    for (c, center) in centers.iter().enumerate() {
        let d2 = dist2(p, center);
        if d2 < best_d2 {
            best_d2 = d2;
            best = c;
        }
    }
    best
}

/// k-means++ seeding: the first center is uniform, each subsequent one is
/// drawn with probability proportional to its squared distance from the
/// nearest already-chosen center.
fn seed_centers(coords: &[[f64; 2]], k: usize, rng: &mut SmallRng) -> Vec<[f64; 2]> {
    let mut centers = Vec::with_capacity(k);
    centers.push(coords[rng.gen_range(0..coords.len())]);

    let mut d2 = vec![f64::MAX; coords.len()];
    while centers.len() < k {
        let last = centers[centers.len() - 1];
        for (i, c) in coords.iter().enumerate() {
            d2[i] = d2[i].min(dist2(c, &last));
        }
        let total: f64 = d2.iter().sum();
        let next = if total > 0.0 {
            let target = rng.gen_range(0.0..total);
            let mut acc = 0.0;
            let mut chosen = coords.len() - 1;
            for (i, &w) in d2.iter().enumerate() {
                acc += w;
                if acc > target {
                    chosen = i;
                    break;
                }
            }
            chosen
        } else {
            // All remaining points coincide with a chosen center; any pick
            // yields a duplicate centroid, which is the correct degenerate
            // answer for duplicate-heavy input.
            rng.gen_range(0..coords.len())
        };
        centers.push(coords[next]);
    }
    centers
}
