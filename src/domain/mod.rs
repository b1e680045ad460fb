//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the model selector tag (`ModelKind`)
//! - validated parameters and sparse overrides (`ModelParameters`, `ParameterOverrides`)
//! - the inverse-solve outcome (`WeekOutcome`)

pub mod types;

pub use types::*;
