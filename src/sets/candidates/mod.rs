//! Expansion frontier for obstacle-aware searches.
//!
//! This module provides the heuristic scoring of grid positions and the
//! min-ordered queue that decides which position a search expands next.

mod frontier;
mod frontier_entry;
mod weights;

pub use frontier::*;
pub use frontier_entry::*;
pub use weights::*;
