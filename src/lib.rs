pub mod fs;
pub mod grid;
pub mod logging;
pub mod search;
pub mod sets;
pub mod statistics;

mod error;

pub use error::*;
