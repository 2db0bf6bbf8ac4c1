//! Reverse-geocoder abstraction for testability.
//!
//! The trait is the seam between the pipeline and the network: production
//! code injects a [`NominatimClient`](crate::NominatimClient), tests inject
//! mocks that answer instantly.

use std::future::Future;

use rb_core::GeoPoint;

use crate::error::GeocodeResult;

/// A reverse-geocoded address.
///
/// `display_name` is the full hierarchical description (street through
/// country); the optional fields are the administrative components a
/// boundary check most commonly matches against.
#[derive(Clone, Debug)]
pub struct Address {
    pub display_name: String,
    pub city: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
}

impl Address {
    /// Case-sensitive substring match of `region` against the full display
    /// name.
    pub fn matches_region(&self, region: &str) -> bool {
        self.display_name.contains(region)
    }
}

/// Trait for asynchronous reverse-geocoding lookups.
pub trait ReverseGeocoder: Send + Sync {
    /// Resolve `point` to an address.
    ///
    /// `Ok(None)` means the service answered but could not map the
    /// coordinate to any address (open water, unmapped area); errors cover
    /// transport failures and unparseable responses.
    fn reverse(
        &self,
        point: GeoPoint,
    ) -> impl Future<Output = GeocodeResult<Option<Address>>> + Send;
}
