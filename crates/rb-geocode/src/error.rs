//! Geocoding error type.
//!
//! None of these are fatal to a pipeline run: the boundary filter absorbs
//! every per-point failure as a `Failed` verdict and keeps going.

use thiserror::Error;

/// Errors produced by a single reverse-geocoding lookup.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("request failed: {0}")]
    Http(String),

    #[error("lookup timed out")]
    Timeout,

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Shorthand result type for `rb-geocode`.
pub type GeocodeResult<T> = Result<T, GeocodeError>;

impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeocodeError::Timeout
        } else if e.is_decode() {
            GeocodeError::Malformed(e.to_string())
        } else {
            GeocodeError::Http(e.to_string())
        }
    }
}
