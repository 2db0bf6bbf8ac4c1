//! Base error type.
//!
//! Sub-crates define their own error enums (`TableError`, `ClusterError`,
//! `GeocodeError`) and the pipeline crate wraps them; `RbError` covers the
//! concerns that live in this crate.

use thiserror::Error;

/// Errors produced by `rb-core`.
#[derive(Debug, Error)]
pub enum RbError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rb-core`.
pub type RbResult<T> = Result<T, RbError>;
