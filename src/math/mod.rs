//! Numeric helpers: sampling grids and presentation rounding.

pub mod grid;

pub use grid::*;
