//! `rebin` — select new public recycling-bin locations for a target city.
//!
//! Reads three CSV tables (existing bins, bus stops, subway stops), runs the
//! dedup → cluster → boundary-check → separation pipeline, and writes the
//! selected locations as a `latitude,longitude` CSV.
//!
//! Defaults reproduce the original Daejeon deployment; every knob is
//! exposed as a flag.  Set `RUST_LOG=info` (or `debug`) for stage logging.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use rb_core::SiteConfig;
use rb_geocode::NominatimClient;
use rb_io::{load_points_csv, write_points_csv};
use rb_pipeline::{PipelineInput, run_pipeline};

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "rebin", version, about = "Recycling-bin siting pipeline")]
struct Args {
    /// Existing recycling-bin locations (CSV with latitude/longitude columns).
    #[arg(long, default_value = "recyclebin.csv")]
    bins: PathBuf,

    /// Bus-stop locations.
    #[arg(long, default_value = "bus.csv")]
    bus: PathBuf,

    /// Subway-stop locations.
    #[arg(long, default_value = "subway.csv")]
    subway: PathBuf,

    /// Output table, overwritten on every run.
    #[arg(long, default_value = "improve_recyclebin.csv")]
    output: PathBuf,

    /// Number of candidate new locations to generate.
    #[arg(long, default_value_t = 100)]
    clusters: usize,

    /// Minimum pairwise separation in the final output, metres (0 disables).
    #[arg(long, default_value_t = 50.0)]
    min_distance_m: f64,

    /// Minimum separation among input candidates before clustering, metres
    /// (0 disables).
    #[arg(long, default_value_t = 100.0)]
    min_input_distance_m: f64,

    /// Permit exact-duplicate coordinates in the output.
    #[arg(long)]
    allow_same_coordinates: bool,

    /// Skip the reverse-geocoding region check entirely.
    #[arg(long)]
    skip_region_check: bool,

    /// Region name that reverse-geocoded addresses must contain.
    #[arg(long, default_value = "Daejeon Metropolitan City")]
    region: String,

    /// Clustering RNG seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Accept-Language header for geocoding requests.
    #[arg(long, default_value = "ko")]
    accept_language: String,

    /// Per-lookup timeout, seconds.
    #[arg(long, default_value_t = 10)]
    lookup_timeout_secs: u64,

    /// Minimum spacing between geocoding requests, milliseconds.
    #[arg(long, default_value_t = 1000)]
    min_lookup_interval_ms: u64,
}

impl Args {
    fn to_config(&self) -> SiteConfig {
        SiteConfig {
            n_clusters:             self.clusters,
            min_distance_m:         self.min_distance_m,
            min_input_distance_m:   self.min_input_distance_m,
            allow_same_coordinates: self.allow_same_coordinates,
            skip_region_validation: self.skip_region_check,
            target_region:          self.region.clone(),
            seed:                   self.seed,
            lookup_timeout_secs:    self.lookup_timeout_secs,
            min_lookup_interval_ms: self.min_lookup_interval_ms,
            accept_language:        self.accept_language.clone(),
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.to_config();

    // 1. Load input tables.
    let existing_bins = load_points_csv(&args.bins)
        .with_context(|| format!("loading {}", args.bins.display()))?;
    let bus_stops = load_points_csv(&args.bus)
        .with_context(|| format!("loading {}", args.bus.display()))?;
    let subway_stops = load_points_csv(&args.subway)
        .with_context(|| format!("loading {}", args.subway.display()))?;
    println!(
        "Inputs: {} existing bins, {} bus stops, {} subway stops",
        existing_bins.len(),
        bus_stops.len(),
        subway_stops.len()
    );

    // 2. Geocoding client.
    let geocoder = Arc::new(NominatimClient::new(
        &config.accept_language,
        Duration::from_secs(config.lookup_timeout_secs),
    )?);

    // 3. Progress over boundary lookups (hidden when the check is skipped).
    let bar = if config.skip_region_validation {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(config.n_clusters as u64).with_style(ProgressStyle::with_template(
            "{bar:40} {pos}/{len} region lookups",
        )?)
    };
    let progress = {
        let bar = bar.clone();
        Arc::new(move || bar.inc(1)) as Arc<dyn Fn() + Send + Sync>
    };

    // 4. Run the pipeline.
    let input = PipelineInput { existing_bins, bus_stops, subway_stops };
    let report = run_pipeline(&config, input, geocoder, Some(progress)).await?;
    bar.finish_and_clear();

    // 5. Write the output table.
    write_points_csv(&args.output, &report.selected)
        .with_context(|| format!("writing {}", args.output.display()))?;

    // 6. Summary.
    let c = &report.counts;
    println!("{:<28} {:>8}", "Stage", "Rows");
    println!("{}", "-".repeat(37));
    println!("{:<28} {:>8}", "raw candidates", c.raw_candidates);
    println!("{:<28} {:>8}", "unique coordinates", c.unique_candidates);
    println!("{:<28} {:>8}", "after input spacing", c.spaced_candidates);
    println!("{:<28} {:>8}", "clusters", c.clusters);
    println!("{:<28} {:>8}", "inside region", c.inside_region);
    println!("{:<28} {:>8}", "outside region", c.outside_region);
    println!("{:<28} {:>8}", "failed lookups", c.failed_lookups);
    println!("{:<28} {:>8}", "selected", c.selected);
    println!();
    println!("Wrote {} locations to {}", c.selected, args.output.display());

    Ok(())
}
