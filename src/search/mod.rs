//! Obstacle-aware point-to-point search and the cyclic tour built on it.
//!
//! The heuristic [`SearchEngine`] is the default solver. [`VisibilityGraph`]
//! computes exact leg lengths and serves as a reference for it.

mod collision_probe;
mod config;
mod engine;
mod exact;
mod outcome;
mod relaxed_cache;
mod tour;

pub use collision_probe::*;
pub use config::*;
pub use engine::*;
pub use exact::*;
pub use outcome::*;
pub use relaxed_cache::*;
pub use tour::*;
