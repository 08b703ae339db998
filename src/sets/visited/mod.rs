//! Finalized positions of a running search.
//!
//! Obstacles are seeded into the same set, so a blocked cell and an already
//! expanded cell are skipped by one lookup.

mod point_set;

pub use point_set::*;
