//! Clustering error type.

use thiserror::Error;

/// Errors produced by `rb-cluster`.
///
/// The pipeline clamps its cluster count before calling `fit`, so these
/// fire only on misuse of the library API.
#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("cluster count must be at least 1")]
    ZeroClusters,

    #[error("cannot form {requested} clusters from {have} points")]
    TooFewPoints { have: usize, requested: usize },
}

/// Shorthand result type for `rb-cluster`.
pub type ClusterResult<T> = Result<T, ClusterError>;
