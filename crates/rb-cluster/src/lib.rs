//! `rb-cluster` — partition candidate points into k representative locations.
//!
//! One algorithm lives here: Lloyd's k-means with k-means++ seeding,
//! deterministic for a fixed seed.  Distances are squared Euclidean in raw
//! (lat, lon) degree space — an accepted approximation at city scale, where
//! longitude compression across the input extent is well under a percent.

pub mod error;
pub mod kmeans;


pub use error::{ClusterError, ClusterResult};
pub use kmeans::KMeans;
