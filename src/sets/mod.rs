//! Specialized data structures for obstacle-aware grid searches.
//!
//! # Submodules
//!
//! - [`candidates`]: Heuristic-ordered frontier of positions awaiting expansion
//! - [`obstacles`]: Immutable per-axis index of obstacle points
//! - [`visited`]: Finalized-position tracking for a single search

pub mod candidates;
pub mod obstacles;
pub mod visited;
