//! `rb-pipeline` — the batch run from raw tables to selected locations.
//!
//! Data flow:
//!
//! ```text
//! bus + subway tables ──► exact-duplicate drop ──► proximity dedup
//!     ──► k-means ──► boundary filter ──► separation filter ──► output
//! ```
//!
//! Everything before the boundary filter is pure and synchronous; the
//! boundary filter is the only stage that suspends (network lookups).  A
//! run is fatal only on structural problems (bad config, empty candidate
//! set, clustering misuse); per-point lookup failures are absorbed and
//! reported in the stage counts.

pub mod error;
pub mod report;
pub mod run;


pub use error::{PipelineError, PipelineResult};
pub use report::{PipelineReport, StageCounts};
pub use run::{PipelineInput, run_pipeline};
