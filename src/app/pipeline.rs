//! Shared request pipeline used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! settings defaults -> merge overrides -> select model -> evaluate
//!
//! The subcommand handlers can then focus on presentation (text vs JSON, plots,
//! exports).

use tracing::debug;

use crate::config::{MAX_PLOT_WEEKS, Settings};
use crate::domain::{ModelKind, ParameterOverrides};
use crate::error::AppError;
use crate::math::whole_weeks;
use crate::models::{TrainingModel, create_model, resolve_parameters};

/// Build the model for one request: the requested kind (or the configured default)
/// bound to the defaults merged with `overrides`.
pub fn build_model(
    settings: &Settings,
    kind: Option<ModelKind>,
    overrides: &ParameterOverrides,
) -> Result<Box<dyn TrainingModel>, AppError> {
    let kind = kind.unwrap_or(settings.equation_choice);
    let defaults = settings.default_parameters()?;
    let params = resolve_parameters(&defaults, overrides)?;
    debug!(
        model = %kind,
        target = params.target_mileage(),
        start = params.starting_mileage(),
        a = params.a_parameter(),
        b = params.b_parameter(),
        overridden = !overrides.is_empty(),
        "resolved model parameters"
    );
    Ok(create_model(kind, params)?)
}

/// Whole weeks `0..n` for the visualisation window.
///
/// `requested` falls back to the configured `plot_weeks`; the window must hold
/// between 1 and 52 weeks.
pub fn week_window(settings: &Settings, requested: Option<usize>) -> Result<Vec<f64>, AppError> {
    let weeks = requested.unwrap_or(settings.plot_weeks);
    if weeks == 0 || weeks > MAX_PLOT_WEEKS {
        return Err(AppError::new(
            2,
            format!("Weeks to plot must be in 1..={MAX_PLOT_WEEKS}, got {weeks}."),
        ));
    }
    Ok(whole_weeks(weeks))
}

/// The model pair used by `compare`: exponential on the configured shape
/// parameters and linear on `(linear_a, linear_b)`, sharing the same T and S.
pub fn build_comparison_models(
    settings: &Settings,
    target_mileage: Option<f64>,
    starting_mileage: Option<f64>,
    linear_a: f64,
    linear_b: f64,
) -> Result<Vec<Box<dyn TrainingModel>>, AppError> {
    let shared = ParameterOverrides {
        target_mileage,
        starting_mileage,
        ..Default::default()
    };
    let linear = ParameterOverrides {
        a_parameter: Some(linear_a),
        b_parameter: Some(linear_b),
        ..shared
    };

    Ok(vec![
        build_model(settings, Some(ModelKind::Exponential), &shared)?,
        build_model(settings, Some(ModelKind::Linear), &linear)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_configured_kind_when_none_requested() {
        let settings = Settings::default();
        let model = build_model(&settings, None, &ParameterOverrides::default()).unwrap();
        assert_eq!(model.kind(), ModelKind::Exponential);
        assert_eq!(model.parameters().target_mileage(), 50.0);
    }

    #[test]
    fn requested_kind_and_overrides_win() {
        let settings = Settings::default();
        let overrides = ParameterOverrides {
            a_parameter: Some(2.0),
            b_parameter: Some(1.0),
            ..Default::default()
        };
        let model = build_model(&settings, Some(ModelKind::Linear), &overrides).unwrap();
        assert_eq!(model.kind(), ModelKind::Linear);
        assert_eq!(model.mileage_at_week(20.0).unwrap(), 50.0);
    }

    #[test]
    fn invalid_override_is_a_usage_error() {
        let settings = Settings::default();
        let overrides = ParameterOverrides {
            a_parameter: Some(1.5),
            ..Default::default()
        };
        let err = build_model(&settings, None, &overrides).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("a_parameter"));
    }

    #[test]
    fn week_window_bounds() {
        let settings = Settings::default();
        assert_eq!(week_window(&settings, None).unwrap().len(), 20);
        assert_eq!(week_window(&settings, Some(52)).unwrap().len(), 52);
        assert!(week_window(&settings, Some(0)).is_err());
        assert!(week_window(&settings, Some(53)).is_err());
    }

    #[test]
    fn comparison_models_share_target_and_start() {
        let settings = Settings::default();
        let models = build_comparison_models(&settings, Some(60.0), None, 2.0, 1.0).unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].kind(), ModelKind::Exponential);
        assert_eq!(models[1].kind(), ModelKind::Linear);
        for m in &models {
            assert_eq!(m.parameters().target_mileage(), 60.0);
            assert_eq!(m.parameters().starting_mileage(), 10.0);
        }
        assert_eq!(models[0].parameters().a_parameter(), 0.8);
        assert_eq!(models[1].parameters().a_parameter(), 2.0);
    }
}
