//! Integer grid primitives shared by the obstacle index and the search engine.

mod point;

pub use point::*;
