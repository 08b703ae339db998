//! Read-only obstacle index for one tour.
//!
//! This module provides the per-axis ordered sets used to find the nearest
//! obstacle sharing a row or a column with a grid position.

mod axis_set;
mod obstacle_index;

pub use axis_set::*;
pub use obstacle_index::*;
