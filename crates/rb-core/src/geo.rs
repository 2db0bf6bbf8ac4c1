//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` (double-precision) latitude/longitude.  The pipeline
//! holds at most a few thousand points and its *output* is a coordinate
//! table, so coordinates keep full precision end to end; there is no reason
//! to trade precision for memory at this scale.

/// A WGS-84 geographic coordinate.
///
/// Equality is exact-value: two points are equal iff both coordinate pairs
/// are bit-for-bit identical after f64 comparison.  Near-duplicate handling
/// is a distance question and lives in `rb-spatial`, not here.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Spherical Earth model (mean radius).  Accuracy vs. the WGS-84
    /// ellipsoid is ±0.5 % — far finer than any separation threshold this
    /// pipeline is configured with.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// `true` iff both coordinates are finite and within WGS-84 range
    /// (latitude in [-90, 90], longitude in [-180, 180]).
    ///
    /// Input rows failing this check are dropped by the loader; everything
    /// downstream may assume valid coordinates.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
