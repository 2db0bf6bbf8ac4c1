//! Shared rate-limiting gate for external lookups.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};

/// Enforces a minimum interval between consecutive `acquire` returns,
/// regardless of how many tasks call it concurrently.
///
/// The gate holds its mutex across the pacing sleep, so request *starts*
/// are serialised at the configured interval while responses may still
/// overlap in flight.  This is the single piece of shared mutable state in
/// the pipeline.
pub struct RateGate {
    min_interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl RateGate {
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval, last: Mutex::new(None) }
    }

    /// Wait until at least `min_interval` has passed since the previous
    /// acquisition, then claim the current instant.
    pub async fn acquire(&self) {
        let mut last = self.last.lock().await;
        if let Some(prev) = *last {
            let earliest = prev + self.min_interval;
            if earliest > Instant::now() {
                sleep_until(earliest).await;
            }
        }
        *last = Some(Instant::now());
    }
}
