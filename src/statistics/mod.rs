//! Work counters for obstacle-aware searches.
//!
//! This module provides the structure used to collect how many searches,
//! expansions, detour relaxations and cutoffs a tour computation performed.

mod stats;
pub use stats::*;
