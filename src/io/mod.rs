//! Output helpers.
//!
//! - sampled series to CSV (`export`)
//! - reports to JSON files or stdout (`json`)

pub mod export;
pub mod json;

pub use export::*;
pub use json::*;
