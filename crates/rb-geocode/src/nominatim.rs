//! Nominatim reverse-geocoding client.
//!
//! Talks to the public OSM Nominatim instance by default (`with_base_url`
//! points it at a self-hosted one).  The public instance's usage policy
//! requires an identifying User-Agent and at most one request per second;
//! the latter is enforced upstream by [`RateGate`](crate::RateGate), not
//! here.

use std::time::Duration;

use rb_core::GeoPoint;

use crate::client::{Address, ReverseGeocoder};
use crate::error::{GeocodeError, GeocodeResult};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

const USER_AGENT: &str = concat!("rebin-siting/", env!("CARGO_PKG_VERSION"));

/// Reverse-geocoding client over the Nominatim HTTP API.
#[derive(Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
    accept_language: String,
}

impl NominatimClient {
    /// Build a client with the given response language and request timeout.
    pub fn new(accept_language: &str, timeout: Duration) -> GeocodeResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GeocodeError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            accept_language: accept_language.to_string(),
        })
    }

    /// Point the client at a different Nominatim instance.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl ReverseGeocoder for NominatimClient {
    async fn reverse(&self, point: GeoPoint) -> GeocodeResult<Option<Address>> {
        let url = format!("{}/reverse", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", point.lat.to_string()),
                ("lon", point.lon.to_string()),
            ])
            .header("Accept-Language", &self.accept_language)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeocodeError::Http(format!(
                "HTTP {} from {url}",
                response.status()
            )));
        }

        let body: serde_json::Value = response.json().await?;

        // Nominatim reports unmappable coordinates (open water etc.) as a
        // 200 with an "error" field.
        if body.get("error").is_some() {
            return Ok(None);
        }

        let display_name = body["display_name"]
            .as_str()
            .ok_or_else(|| GeocodeError::Malformed("missing display_name".into()))?
            .to_string();

        let addr = &body["address"];
        Ok(Some(Address {
            display_name,
            city: json_str(addr, "city"),
            county: json_str(addr, "county"),
            state: json_str(addr, "state"),
        }))
    }
}

fn json_str(value: &serde_json::Value, key: &str) -> Option<String> {
    value[key].as_str().map(str::to_owned)
}
