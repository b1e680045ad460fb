//! `training-curves` library crate.
//!
//! Closed-form weekly mileage progression models (exponential and capped linear),
//! their inverses and derivatives, and the selector that binds a parameter set to
//! a model kind.
//!
//! The binary (`tc`) is a thin wrapper around this library so that:
//!
//! - the model core is testable without spawning processes
//! - the core stays free of I/O, configuration and logging
//! - presentation (text, JSON, plots, exports) is layered on top

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;

pub use domain::{ModelKind, ModelParameters, ParameterOverrides, WeekOutcome};
pub use error::{DomainError, ParameterError, SelectorError};
pub use models::{TrainingModel, available_models, create_model, create_model_by_name, resolve_parameters};
