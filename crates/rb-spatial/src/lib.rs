//! `rb-spatial` — proximity deduplication and separation filtering.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`dedup`]      | `dedup_by_distance` — R-tree near-duplicate collapse    |
//! | [`separation`] | `enforce_separation` — greedy final output filter       |
//!
//! Both operations are pure functions over point slices; neither has a
//! failure mode.  Their results depend only on the input and its order.

pub mod dedup;
pub mod separation;

#[cfg(test)]
mod tests;

pub use dedup::dedup_by_distance;
pub use separation::enforce_separation;
