//! Tour input: loaders for tour descriptions and a seeded instance generator.
//!
//! This module reads the cyclic point sequence a tour visits, either from the
//! plain text format (`N` then `N` coordinate pairs) or from JSON, and can
//! generate random instances for experiments.

mod point_load;
mod random_points;

pub use point_load::*;
pub use random_points::*;
