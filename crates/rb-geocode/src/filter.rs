//! Region boundary filter over concurrent, rate-gated lookups.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;

use rb_core::GeoPoint;

use crate::client::ReverseGeocoder;
use crate::rate::RateGate;

/// Outcome of one candidate's region check.
///
/// `Failed` (timeout, transport error, malformed response, aborted task) is
/// deliberately distinct from `Outside`: the pipeline excludes both from the
/// output but reports them separately.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegionVerdict {
    Inside,
    Outside,
    Failed,
}

/// Callback invoked once per completed lookup, from the collecting task.
pub type LookupProgress = Arc<dyn Fn() + Send + Sync>;

/// Decides, for each candidate point, whether it lies inside the target
/// region.
///
/// Lookups run concurrently but every request passes through one shared
/// [`RateGate`], so the aggregate rate seen by the external service never
/// exceeds its limit.  A failed lookup affects only its own candidate.
/// Verdicts are re-associated with input positions, so results are ordered
/// by input regardless of completion order.
pub struct BoundaryFilter<G> {
    geocoder: Arc<G>,
    gate: Arc<RateGate>,
    region: String,
    bypass: bool,
    lookup_timeout: Duration,
    progress: Option<LookupProgress>,
}

impl<G: ReverseGeocoder + 'static> BoundaryFilter<G> {
    pub fn new(
        geocoder: Arc<G>,
        region: impl Into<String>,
        min_lookup_interval: Duration,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            geocoder,
            gate: Arc::new(RateGate::new(min_lookup_interval)),
            region: region.into(),
            bypass: false,
            lookup_timeout,
            progress: None,
        }
    }

    /// When set, skip the external check entirely; every candidate is
    /// treated as inside the region.
    pub fn bypassed(mut self, bypass: bool) -> Self {
        self.bypass = bypass;
        self
    }

    /// Register a per-lookup completion callback (progress reporting).
    pub fn with_progress(mut self, progress: LookupProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Check every candidate and return one verdict per input position.
    pub async fn verdicts(&self, candidates: &[GeoPoint]) -> Vec<RegionVerdict> {
        if self.bypass {
            return vec![RegionVerdict::Inside; candidates.len()];
        }

        let mut lookups = JoinSet::new();
        for (i, &point) in candidates.iter().enumerate() {
            let geocoder = Arc::clone(&self.geocoder);
            let gate = Arc::clone(&self.gate);
            let region = self.region.clone();
            let timeout = self.lookup_timeout;

            lookups.spawn(async move {
                gate.acquire().await;
                let verdict = match tokio::time::timeout(timeout, geocoder.reverse(point)).await {
                    Err(_) => {
                        log::warn!("lookup for {point} timed out");
                        RegionVerdict::Failed
                    }
                    Ok(Err(e)) => {
                        log::warn!("lookup for {point} failed: {e}");
                        RegionVerdict::Failed
                    }
                    Ok(Ok(None)) => RegionVerdict::Outside,
                    Ok(Ok(Some(address))) => {
                        if address.matches_region(&region) {
                            RegionVerdict::Inside
                        } else {
                            RegionVerdict::Outside
                        }
                    }
                };
                (i, verdict)
            });
        }

        let mut verdicts = vec![RegionVerdict::Failed; candidates.len()];
        while let Some(joined) = lookups.join_next().await {
            match joined {
                Ok((i, verdict)) => verdicts[i] = verdict,
                // A panicked lookup task loses only its own candidate; the
                // slot keeps its Failed default.
                Err(e) => log::warn!("lookup task aborted: {e}"),
            }
            if let Some(progress) = &self.progress {
                progress();
            }
        }
        verdicts
    }

    /// Keep the candidates judged inside the region, preserving their
    /// relative input order.
    pub async fn filter(&self, candidates: &[GeoPoint]) -> Vec<GeoPoint> {
        let verdicts = self.verdicts(candidates).await;
        candidates
            .iter()
            .zip(&verdicts)
            .filter(|(_, v)| **v == RegionVerdict::Inside)
            .map(|(p, _)| *p)
            .collect()
    }
}
