//! `rb-geocode` — reverse geocoding and region boundary filtering.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`client`]    | `ReverseGeocoder` trait, `Address`                       |
//! | [`nominatim`] | `NominatimClient` — reqwest-backed implementation        |
//! | [`rate`]      | `RateGate` — shared minimum inter-request interval       |
//! | [`filter`]    | `BoundaryFilter`, `RegionVerdict`                        |
//! | [`error`]     | `GeocodeError`, `GeocodeResult<T>`                       |
//!
//! The geocoder is an explicitly constructed object injected into the
//! filter — no process-global client state.

pub mod client;
pub mod error;
pub mod filter;
pub mod nominatim;
pub mod rate;


pub use client::{Address, ReverseGeocoder};
pub use error::{GeocodeError, GeocodeResult};
pub use filter::{BoundaryFilter, LookupProgress, RegionVerdict};
pub use nominatim::NominatimClient;
pub use rate::RateGate;
