//! Terminal plots of sampled progressions.

pub mod ascii;

pub use ascii::*;
