//! Pipeline error type.

use thiserror::Error;

use rb_cluster::ClusterError;
use rb_core::RbError;

/// Fatal pipeline failures.  Per-point lookup failures never appear here;
/// they are absorbed into the stage counts.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] RbError),

    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error("no candidate points remain after input filtering")]
    NoCandidates,
}

/// Shorthand result type for `rb-pipeline`.
pub type PipelineResult<T> = Result<T, PipelineError>;
