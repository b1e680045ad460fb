//! Training progression models.
//!
//! Each model is a small, pure value bound to one `ModelParameters`. The selector
//! is the only place that knows which concrete type backs a `ModelKind`.

pub mod exponential;
pub mod linear;
pub mod model;
pub mod selector;

pub use exponential::ExponentialModel;
pub use linear::LinearModel;
pub use model::TrainingModel;
pub use selector::*;
