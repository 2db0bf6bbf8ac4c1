//! Output table writer.

use std::path::Path;

use rb_core::GeoPoint;

use crate::error::TableResult;

/// Write the selected locations to `path` as CSV with `latitude,longitude`
/// columns, replacing any previous contents.
///
/// Coordinates are written with f64 round-trip precision; a run with no
/// selected locations still produces the file with just the header row.
pub fn write_points_csv(path: &Path, points: &[GeoPoint]) -> TableResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["latitude", "longitude"])?;
    for point in points {
        writer.write_record(&[point.lat.to_string(), point.lon.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
