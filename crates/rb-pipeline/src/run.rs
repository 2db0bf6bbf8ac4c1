//! Pipeline runner.

use std::sync::Arc;
use std::time::Duration;

use rustc_hash::FxHashSet;

use rb_cluster::KMeans;
use rb_core::{GeoPoint, SiteConfig};
use rb_geocode::{BoundaryFilter, LookupProgress, RegionVerdict, ReverseGeocoder};
use rb_spatial::{dedup_by_distance, enforce_separation};

use crate::error::{PipelineError, PipelineResult};
use crate::report::{PipelineReport, StageCounts};

/// The three validated input tables.
///
/// Existing bins are carried through to the report for context but do not
/// gate candidate selection; candidate points are bus stops followed by
/// subway stops, in load order.
#[derive(Clone, Debug, Default)]
pub struct PipelineInput {
    pub existing_bins: Vec<GeoPoint>,
    pub bus_stops: Vec<GeoPoint>,
    pub subway_stops: Vec<GeoPoint>,
}

/// Execute one full batch run.
///
/// `progress`, when given, is invoked once per completed boundary lookup.
/// See the crate docs for the stage order; the returned report carries the
/// selected locations and the row count observed at every stage.
pub async fn run_pipeline<G: ReverseGeocoder + 'static>(
    config: &SiteConfig,
    input: PipelineInput,
    geocoder: Arc<G>,
    progress: Option<LookupProgress>,
) -> PipelineResult<PipelineReport> {
    config.validate()?;

    let mut counts = StageCounts {
        existing_bins: input.existing_bins.len(),
        ..StageCounts::default()
    };
    log::info!(
        "{} existing bin locations loaded (context only; candidates are not filtered against them)",
        counts.existing_bins
    );

    // Concatenate candidate tables and drop exact duplicates, first
    // occurrence wins.
    let mut candidates = input.bus_stops;
    candidates.extend(input.subway_stops);
    counts.raw_candidates = candidates.len();

    let mut seen: FxHashSet<(u64, u64)> = FxHashSet::default();
    candidates.retain(|p| seen.insert((p.lat.to_bits(), p.lon.to_bits())));
    counts.unique_candidates = candidates.len();

    // Minimum-input-distance deduplication.
    let spaced = if config.min_input_distance_m > 0.0 {
        dedup_by_distance(&candidates, config.min_input_distance_m)
    } else {
        candidates
    };
    counts.spaced_candidates = spaced.len();
    log::info!(
        "candidates: {} raw, {} unique, {} after {} m spacing",
        counts.raw_candidates,
        counts.unique_candidates,
        counts.spaced_candidates,
        config.min_input_distance_m
    );

    if spaced.is_empty() {
        return Err(PipelineError::NoCandidates);
    }

    // Clamp the cluster count to the surviving candidates.
    let k = config.n_clusters.min(spaced.len());
    if k < config.n_clusters {
        log::warn!(
            "only {} candidates remain after deduplication; clamping cluster count from {} to {}",
            spaced.len(),
            config.n_clusters,
            k
        );
    }
    counts.clusters = k;

    let centroids = KMeans::new(k, config.seed).fit(&spaced)?;

    // Region boundary check.
    let mut filter = BoundaryFilter::new(
        geocoder,
        config.target_region.clone(),
        Duration::from_millis(config.min_lookup_interval_ms),
        Duration::from_secs(config.lookup_timeout_secs),
    )
    .bypassed(config.skip_region_validation);
    if let Some(progress) = progress {
        filter = filter.with_progress(progress);
    }

    let verdicts = filter.verdicts(&centroids).await;
    for verdict in &verdicts {
        match verdict {
            RegionVerdict::Inside => counts.inside_region += 1,
            RegionVerdict::Outside => counts.outside_region += 1,
            RegionVerdict::Failed => counts.failed_lookups += 1,
        }
    }
    let in_region: Vec<GeoPoint> = centroids
        .iter()
        .zip(&verdicts)
        .filter(|(_, v)| **v == RegionVerdict::Inside)
        .map(|(p, _)| *p)
        .collect();
    log::info!(
        "boundary check: {} inside, {} outside, {} failed",
        counts.inside_region,
        counts.outside_region,
        counts.failed_lookups
    );

    // Final separation filter.
    let selected = enforce_separation(
        &in_region,
        config.min_distance_m,
        config.allow_same_coordinates,
    );
    counts.selected = selected.len();
    log::info!("selected {} locations", counts.selected);

    Ok(PipelineReport { selected, counts })
}
