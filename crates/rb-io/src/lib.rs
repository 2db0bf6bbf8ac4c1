//! `rb-io` — tabular input and output for the siting pipeline.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`reader`] | `load_points_csv` / `load_points_reader` — validated load |
//! | [`writer`] | `write_points_csv` — final output table                   |
//! | [`error`]  | `TableError`, `TableResult<T>`                            |
//!
//! The loader is the pipeline's row validator: rows with missing,
//! unparseable, or out-of-range coordinates are dropped here so every
//! downstream stage can assume clean points.

pub mod error;
pub mod reader;
pub mod writer;


pub use error::{TableError, TableResult};
pub use reader::{load_points_csv, load_points_reader};
pub use writer::write_points_csv;
