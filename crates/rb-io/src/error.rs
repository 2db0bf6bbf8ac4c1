//! Table I/O error type.
//!
//! These are the pipeline's *structural* failures: a missing file or a
//! table without coordinate columns aborts the run.  Bad individual rows
//! never surface here — the reader drops and counts them.

use thiserror::Error;

/// Errors produced by `rb-io`.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column {0:?}")]
    MissingColumn(&'static str),
}

/// Shorthand result type for `rb-io`.
pub type TableResult<T> = Result<T, TableError>;
