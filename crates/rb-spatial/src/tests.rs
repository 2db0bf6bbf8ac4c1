//! Unit tests for rb-spatial.

#[cfg(test)]
mod helpers {
    use rb_core::GeoPoint;

    /// Offset `base` north by roughly `meters` (pure latitude shift).
    pub fn north_of(base: GeoPoint, meters: f64) -> GeoPoint {
        GeoPoint::new(base.lat + meters / 111_195.0, base.lon)
    }

    pub fn pairwise_min_holds(points: &[GeoPoint], min_m: f64) -> bool {
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                if points[i].distance_m(points[j]) < min_m {
                    return false;
                }
            }
        }
        true
    }

    /// Deterministic pseudo-random point cloud in a box around `center`.
    pub fn random_cloud(center: GeoPoint, half_width_m: f64, n: usize, seed: u64) -> Vec<GeoPoint> {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};
        let mut rng = SmallRng::seed_from_u64(seed);
        let half_deg = half_width_m / 111_195.0;
        (0..n)
            .map(|_| {
                GeoPoint::new(
                    center.lat + rng.gen_range(-half_deg..half_deg),
                    center.lon + rng.gen_range(-half_deg..half_deg),
                )
            })
            .collect()
    }
}

// ── Proximity deduplication ───────────────────────────────────────────────────

#[cfg(test)]
mod dedup {
    use rb_core::GeoPoint;

    use super::helpers::{north_of, pairwise_min_holds, random_cloud};
    use crate::dedup_by_distance;

    const DAEJEON: GeoPoint = GeoPoint { lat: 36.35, lon: 127.38 };

    #[test]
    fn empty_and_singleton_pass_through() {
        assert!(dedup_by_distance(&[], 100.0).is_empty());
        assert_eq!(dedup_by_distance(&[DAEJEON], 100.0), vec![DAEJEON]);
    }

    #[test]
    fn zero_threshold_disables_filter() {
        let pts = vec![DAEJEON, DAEJEON, DAEJEON];
        assert_eq!(dedup_by_distance(&pts, 0.0).len(), 3);
    }

    #[test]
    fn far_points_all_survive() {
        let pts = vec![
            DAEJEON,
            north_of(DAEJEON, 500.0),
            north_of(DAEJEON, 1_000.0),
        ];
        assert_eq!(dedup_by_distance(&pts, 100.0), pts);
    }

    #[test]
    fn close_pair_collapses_to_lower_index() {
        let near = north_of(DAEJEON, 30.0);
        let far = north_of(DAEJEON, 5_000.0);
        // `near` sits between the duplicates in input order; the group
        // representative must still be index 0.
        let out = dedup_by_distance(&[DAEJEON, near, far], 100.0);
        assert_eq!(out, vec![DAEJEON, far]);
    }

    #[test]
    fn transitive_chain_collapses_to_one() {
        // a–b, b–c within 100 m but a–c beyond: one connected group.
        let a = DAEJEON;
        let b = north_of(DAEJEON, 80.0);
        let c = north_of(DAEJEON, 160.0);
        let out = dedup_by_distance(&[c, b, a], 100.0);
        assert_eq!(out, vec![c]);
    }

    #[test]
    fn output_preserves_input_order() {
        let pts: Vec<GeoPoint> = (0..10).map(|i| north_of(DAEJEON, i as f64 * 500.0)).collect();
        let out = dedup_by_distance(&pts, 100.0);
        assert_eq!(out, pts);
    }

    #[test]
    fn invariant_and_idempotence_on_random_cloud() {
        let pts = random_cloud(DAEJEON, 2_500.0, 300, 7);
        let min_m = 100.0;

        let once = dedup_by_distance(&pts, min_m);
        assert!(once.len() <= pts.len());
        assert!(pairwise_min_holds(&once, min_m));

        let twice = dedup_by_distance(&once, min_m);
        assert_eq!(once, twice);
    }

    #[test]
    fn threshold_just_below_spacing_keeps_all() {
        // Points exactly ~200 m apart; a 199 m threshold keeps them all,
        // a 201 m threshold collapses neighbours.
        let pts: Vec<GeoPoint> = (0..5).map(|i| north_of(DAEJEON, i as f64 * 200.0)).collect();
        assert_eq!(dedup_by_distance(&pts, 199.0).len(), 5);
        assert!(dedup_by_distance(&pts, 201.0).len() < 5);
    }
}

// ── Final separation filter ───────────────────────────────────────────────────

#[cfg(test)]
mod separation {
    use rb_core::GeoPoint;

    use super::helpers::{north_of, pairwise_min_holds, random_cloud};
    use crate::enforce_separation;

    const DAEJEON: GeoPoint = GeoPoint { lat: 36.35, lon: 127.38 };

    #[test]
    fn empty_input_empty_output() {
        assert!(enforce_separation(&[], 50.0, false).is_empty());
    }

    #[test]
    fn exact_duplicates_rejected_by_default() {
        let out = enforce_separation(&[DAEJEON, DAEJEON, DAEJEON], 0.0, false);
        assert_eq!(out, vec![DAEJEON]);
    }

    #[test]
    fn exact_duplicates_kept_when_allowed() {
        // Only observable with the distance check disabled: duplicates are
        // 0 m apart and would fail any positive threshold.
        let out = enforce_separation(&[DAEJEON, DAEJEON], 0.0, true);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn greedy_first_wins() {
        let near = north_of(DAEJEON, 20.0);
        let far = north_of(DAEJEON, 100.0);
        let out = enforce_separation(&[DAEJEON, near, far], 50.0, false);
        assert_eq!(out, vec![DAEJEON, far]);
    }

    #[test]
    fn order_dependence_is_real() {
        let near = north_of(DAEJEON, 20.0);
        // Reversing the input changes which of the close pair survives.
        let a = enforce_separation(&[DAEJEON, near], 50.0, false);
        let b = enforce_separation(&[near, DAEJEON], 50.0, false);
        assert_eq!(a, vec![DAEJEON]);
        assert_eq!(b, vec![near]);
    }

    #[test]
    fn invariant_holds_on_random_cloud() {
        let pts = random_cloud(DAEJEON, 1_000.0, 200, 42);
        for min_m in [25.0, 50.0, 250.0] {
            let out = enforce_separation(&pts, min_m, false);
            assert!(pairwise_min_holds(&out, min_m), "violated at {min_m} m");
        }
    }

    #[test]
    fn never_emits_duplicate_coordinates_when_disallowed() {
        let mut pts = random_cloud(DAEJEON, 1_000.0, 50, 3);
        let dupes = pts.clone();
        pts.extend(dupes);
        let out = enforce_separation(&pts, 0.0, false);
        for i in 0..out.len() {
            for j in (i + 1)..out.len() {
                assert!(
                    out[i].lat.to_bits() != out[j].lat.to_bits()
                        || out[i].lon.to_bits() != out[j].lon.to_bits()
                );
            }
        }
    }
}
