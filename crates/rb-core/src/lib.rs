//! `rb-core` — foundational types for the `rebin` siting pipeline.
//!
//! This crate is a dependency of every other `rb-*` crate.  It intentionally
//! has no `rb-*` dependencies and only one external one (`thiserror`).
//!
//! # What lives here
//!
//! | Module     | Contents                                  |
//! |------------|-------------------------------------------|
//! | [`geo`]    | `GeoPoint`, haversine distance            |
//! | [`config`] | `SiteConfig` — the full run configuration |
//! | [`error`]  | `RbError`, `RbResult`                     |

pub mod config;
pub mod error;
pub mod geo;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SiteConfig;
pub use error::{RbError, RbResult};
pub use geo::GeoPoint;
