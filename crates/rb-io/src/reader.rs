//! CSV point-table loader.
//!
//! # CSV format
//!
//! One row per location.  `latitude` and `longitude` columns are required;
//! any other columns (stop names, route ids, ...) are ignored.
//!
//! ```csv
//! latitude,longitude,stop_name
//! 36.3504,127.3845,City Hall
//! 36.3621,127.3568,Government Complex
//! ```
//!
//! A table without both coordinate columns is a structural error.  Rows
//! whose coordinates are missing, unparseable, non-finite, or outside
//! WGS-84 range are dropped and counted; insertion order of the surviving
//! rows is preserved (downstream deduplication tie-breaks depend on it).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rb_core::GeoPoint;

use crate::error::{TableError, TableResult};

const REQUIRED_COLUMNS: [&str; 2] = ["latitude", "longitude"];

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PointRecord {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a point table from a CSV file, dropping invalid rows.
pub fn load_points_csv(path: &Path) -> TableResult<Vec<GeoPoint>> {
    let file = std::fs::File::open(path)?;
    load_points_reader(file)
}

/// Like [`load_points_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_points_reader<R: Read>(reader: R) -> TableResult<Vec<GeoPoint>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(TableError::MissingColumn(column));
        }
    }

    let mut points = Vec::new();
    let mut dropped = 0usize;
    for result in csv_reader.deserialize::<PointRecord>() {
        match result {
            Ok(PointRecord { latitude: Some(lat), longitude: Some(lon) }) => {
                let point = GeoPoint::new(lat, lon);
                if point.is_valid() {
                    points.push(point);
                } else {
                    dropped += 1;
                }
            }
            // Missing coordinate cell, or a row that failed to parse at all.
            Ok(_) | Err(_) => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!("dropped {dropped} rows with missing or invalid coordinates");
    }
    Ok(points)
}
