//! Model selection: merge parameters, validate, and bind them to a model kind.
//!
//! This is the single dispatch point. Everything downstream works with
//! `Box<dyn TrainingModel>` and never inspects the kind again.

use crate::domain::{ModelKind, ModelParameters, ParameterOverrides};
use crate::error::{ParameterError, SelectorError};
use crate::models::exponential::ExponentialModel;
use crate::models::linear::LinearModel;
use crate::models::model::TrainingModel;

/// Merge sparse overrides onto a complete default set and validate the result.
///
/// A missing override falls back to the default value; an explicit `0.0` is kept.
pub fn resolve_parameters(
    defaults: &ModelParameters,
    overrides: &ParameterOverrides,
) -> Result<ModelParameters, ParameterError> {
    ModelParameters::new(
        overrides.target_mileage.unwrap_or(defaults.target_mileage()),
        overrides.starting_mileage.unwrap_or(defaults.starting_mileage()),
        overrides.a_parameter.unwrap_or(defaults.a_parameter()),
        overrides.b_parameter.unwrap_or(defaults.b_parameter()),
    )
}

/// Build a model of `kind` bound to `params`.
pub fn create_model(
    kind: ModelKind,
    params: ModelParameters,
) -> Result<Box<dyn TrainingModel>, SelectorError> {
    let model: Box<dyn TrainingModel> = match kind {
        ModelKind::Exponential => Box::new(ExponentialModel::new(params)?),
        ModelKind::Linear => Box::new(LinearModel::new(params)?),
    };
    Ok(model)
}

/// Like [`create_model`], but from a textual kind tag (case-insensitive).
pub fn create_model_by_name(
    name: &str,
    params: ModelParameters,
) -> Result<Box<dyn TrainingModel>, SelectorError> {
    create_model(name.parse()?, params)
}

/// All model kinds the selector can build.
pub fn available_models() -> &'static [ModelKind] {
    &ModelKind::ALL
}
