//! Unit tests for rb-core.

// ── GeoPoint ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance_to_self() {
        let p = GeoPoint::new(36.35, 127.38);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn one_degree_latitude_is_about_111_km() {
        let a = GeoPoint::new(36.0, 127.0);
        let b = GeoPoint::new(37.0, 127.0);
        let d = a.distance_m(b);
        // One degree of latitude ≈ 111.2 km on the spherical model.
        assert!((d - 111_195.0).abs() < 200.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(36.35, 127.38);
        let b = GeoPoint::new(36.45, 127.42);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn longitude_compresses_away_from_equator() {
        // One degree of longitude shrinks with cos(lat).
        let eq = GeoPoint::new(0.0, 0.0).distance_m(GeoPoint::new(0.0, 1.0));
        let mid = GeoPoint::new(60.0, 0.0).distance_m(GeoPoint::new(60.0, 1.0));
        assert!((mid / eq - 0.5).abs() < 0.01, "ratio {}", mid / eq);
    }

    #[test]
    fn validity_range_checks() {
        assert!(GeoPoint::new(36.35, 127.38).is_valid());
        assert!(GeoPoint::new(-90.0, 180.0).is_valid());
        assert!(!GeoPoint::new(90.1, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_valid());
    }
}

// ── SiteConfig ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use crate::SiteConfig;

    #[test]
    fn default_is_valid() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn default_mirrors_deployment_constants() {
        let c = SiteConfig::default();
        assert_eq!(c.n_clusters, 100);
        assert_eq!(c.min_distance_m, 50.0);
        assert_eq!(c.min_input_distance_m, 100.0);
        assert_eq!(c.min_lookup_interval_ms, 1_000);
        assert!(!c.allow_same_coordinates);
        assert!(!c.skip_region_validation);
    }

    #[test]
    fn zero_clusters_rejected() {
        let c = SiteConfig { n_clusters: 0, ..SiteConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn negative_distance_rejected() {
        let c = SiteConfig { min_distance_m: -1.0, ..SiteConfig::default() };
        assert!(c.validate().is_err());
        let c = SiteConfig { min_input_distance_m: f64::NAN, ..SiteConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_distances_allowed() {
        // 0 means "check disabled", not "invalid".
        let c = SiteConfig {
            min_distance_m: 0.0,
            min_input_distance_m: 0.0,
            ..SiteConfig::default()
        };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_region_only_valid_when_bypassed() {
        let c = SiteConfig { target_region: String::new(), ..SiteConfig::default() };
        assert!(c.validate().is_err());
        let c = SiteConfig { skip_region_validation: true, ..c };
        assert!(c.validate().is_ok());
    }
}
