//! Reports: what each subcommand prints, in a serializable shape.
//!
//! Builders here call the model and apply presentation policy (rounding, rate
//! interpretation, out-of-range messages). Text rendering lives in `format`;
//! sampled series live in `series`.

use serde::Serialize;

use crate::config::Settings;
use crate::domain::{ModelKind, ModelParameters, WeekOutcome};
use crate::error::{AppError, DomainError};
use crate::math::round_to;
use crate::models::TrainingModel;

pub mod format;
pub mod series;

pub use format::*;
pub use series::*;

/// Below this absolute rate the progression is described as a plateau.
const PLATEAU_RATE: f64 = 0.01;

#[derive(Debug, Clone, Serialize)]
pub struct MileageReport {
    pub equation_type: ModelKind,
    pub parameters: ModelParameters,
    pub week_number: f64,
    pub weekly_mileage: f64,
    pub percentage_of_target: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekReport {
    pub equation_type: ModelKind,
    pub parameters: ModelParameters,
    pub weekly_mileage: f64,
    pub week_number: Option<f64>,
    pub is_achievable: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RateReport {
    pub equation_type: ModelKind,
    pub parameters: ModelParameters,
    pub week_number: f64,
    pub rate_of_change: f64,
    pub interpretation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VisualisationReport {
    pub equation_type: ModelKind,
    pub parameters: ModelParameters,
    pub weeks: Vec<f64>,
    pub mileages: Vec<f64>,
    pub rates: Option<Vec<f64>>,
    pub equation_latex: String,
    pub plateau_week: Option<f64>,
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub equation_type: ModelKind,
    pub default_parameters: ModelParameters,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub weeks: Vec<f64>,
    pub models: Vec<VisualisationReport>,
}

pub fn mileage_report(model: &dyn TrainingModel, week: f64) -> Result<MileageReport, DomainError> {
    let mileage = model.mileage_at_week(week)?;
    let params = *model.parameters();
    Ok(MileageReport {
        equation_type: model.kind(),
        parameters: params,
        week_number: week,
        weekly_mileage: round_to(mileage, 2),
        percentage_of_target: round_to(mileage / params.target_mileage() * 100.0, 1),
    })
}

/// Solve for the week reaching `mileage`.
///
/// A mileage outside `[S, T]` is reported as not achievable instead of failing;
/// other domain errors (non-finite input) are returned.
pub fn week_report(model: &dyn TrainingModel, mileage: f64) -> Result<WeekReport, DomainError> {
    let params = *model.parameters();
    let (week_number, is_achievable, message) = match model.week_at_mileage(mileage) {
        Ok(WeekOutcome::Reached { week }) => (Some(round_to(week, 2)), true, None),
        Ok(WeekOutcome::Unreachable { message }) => (None, false, Some(message)),
        Err(err) if err.is_mileage_out_of_range() => (
            None,
            false,
            Some(format!(
                "Mileage {mileage} is outside valid range [{}, {}]",
                params.starting_mileage(),
                params.target_mileage()
            )),
        ),
        Err(err) => return Err(err),
    };

    Ok(WeekReport {
        equation_type: model.kind(),
        parameters: params,
        weekly_mileage: mileage,
        week_number,
        is_achievable,
        message,
    })
}

pub fn rate_report(model: &dyn TrainingModel, week: f64) -> Result<RateReport, DomainError> {
    let rate = model.rate_of_change(week)?;
    Ok(RateReport {
        equation_type: model.kind(),
        parameters: *model.parameters(),
        week_number: week,
        rate_of_change: round_to(rate, 4),
        interpretation: interpret_rate(week, rate),
    })
}

/// Human-readable description of a rate of change.
pub fn interpret_rate(week: f64, rate: f64) -> String {
    let mut out = format!("At week {week}, mileage ");
    if rate.abs() < PLATEAU_RATE {
        out.push_str("is stable (plateau reached)");
    } else if rate > 0.0 {
        out.push_str(&format!("increases by {:.3} miles per week", rate.abs()));
    } else {
        out.push_str(&format!("decreases by {:.3} miles per week", rate.abs()));
    }
    out
}

pub fn visualisation_report(
    model: &dyn TrainingModel,
    weeks: &[f64],
    include_rate: bool,
) -> Result<VisualisationReport, DomainError> {
    let series = sample_progression(model, weeks, include_rate)?;
    let horizon = weeks.iter().copied().fold(0.0, f64::max) + 1.0;
    Ok(visualisation_from_series(model, series, horizon))
}

fn visualisation_from_series(
    model: &dyn TrainingModel,
    series: ProgressionSeries,
    horizon: f64,
) -> VisualisationReport {
    VisualisationReport {
        equation_type: series.equation_type,
        parameters: series.parameters,
        mileages: series.mileages.iter().map(|&m| round_to(m, 2)).collect(),
        rates: series
            .rates
            .map(|rates| rates.iter().map(|&r| round_to(r, 4)).collect()),
        weeks: series.weeks,
        equation_latex: model.equation_latex().to_string(),
        plateau_week: model.plateau_week().map(|w| round_to(w, 2)),
        milestones: milestones(model, horizon),
    }
}

/// Sample every model over the same weeks (in parallel) and report them together.
pub fn comparison_report(
    models: &[Box<dyn TrainingModel>],
    weeks: &[f64],
) -> Result<ComparisonReport, DomainError> {
    let series = compare_progressions(models, weeks)?;
    let horizon = weeks.iter().copied().fold(0.0, f64::max) + 1.0;
    let reports = models
        .iter()
        .zip(series)
        .map(|(model, s)| visualisation_from_series(model.as_ref(), s, horizon))
        .collect();
    Ok(ComparisonReport {
        weeks: weeks.to_vec(),
        models: reports,
    })
}

pub fn health_report(settings: &Settings) -> Result<HealthReport, AppError> {
    Ok(HealthReport {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        equation_type: settings.equation_choice,
        default_parameters: settings.default_parameters()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::whole_weeks;
    use crate::models::create_model;

    fn exponential() -> Box<dyn TrainingModel> {
        create_model(
            ModelKind::Exponential,
            ModelParameters::new(50.0, 10.0, 0.8, 4.0).unwrap(),
        )
        .unwrap()
    }

    fn linear() -> Box<dyn TrainingModel> {
        create_model(ModelKind::Linear, ModelParameters::new(50.0, 10.0, 2.0, 1.0).unwrap()).unwrap()
    }

    #[test]
    fn mileage_report_rounds_for_presentation() {
        let r = mileage_report(exponential().as_ref(), 4.0).unwrap();
        assert_eq!(r.week_number, 4.0);
        assert_eq!(r.weekly_mileage, 18.0);
        assert_eq!(r.percentage_of_target, 36.0);
        assert_eq!(r.equation_type, ModelKind::Exponential);
    }

    #[test]
    fn mileage_report_rejects_negative_week() {
        assert!(mileage_report(exponential().as_ref(), -1.0).is_err());
    }

    #[test]
    fn week_report_achievable() {
        let r = week_report(exponential().as_ref(), 30.0).unwrap();
        assert!(r.is_achievable);
        assert_eq!(r.week_number, Some(12.43));
        assert!(r.message.is_none());
    }

    #[test]
    fn week_report_out_of_range_is_not_achievable() {
        let r = week_report(exponential().as_ref(), 5.0).unwrap();
        assert!(!r.is_achievable);
        assert!(r.week_number.is_none());
        assert!(r.message.unwrap().contains("outside valid range"));

        let r = week_report(linear().as_ref(), 100.0).unwrap();
        assert!(!r.is_achievable);
        assert!(r.message.unwrap().contains("outside valid range"));
    }

    #[test]
    fn week_report_asymptote_vs_linear_cap() {
        let r = week_report(exponential().as_ref(), 50.0).unwrap();
        assert!(!r.is_achievable);
        assert!(r.week_number.is_none());
        assert!(r.message.unwrap().contains("asymptotically"));

        let r = week_report(linear().as_ref(), 50.0).unwrap();
        assert!(r.is_achievable);
        assert_eq!(r.week_number, Some(20.0));
    }

    #[test]
    fn week_report_propagates_non_finite_input() {
        assert!(week_report(linear().as_ref(), f64::NAN).is_err());
    }

    #[test]
    fn rate_interpretation() {
        assert_eq!(
            interpret_rate(6.0, 1.596_685),
            "At week 6, mileage increases by 1.597 miles per week"
        );
        assert_eq!(interpret_rate(25.0, 0.0), "At week 25, mileage is stable (plateau reached)");
        assert_eq!(
            interpret_rate(1.5, -0.5),
            "At week 1.5, mileage decreases by 0.500 miles per week"
        );
    }

    #[test]
    fn rate_report_values() {
        let r = rate_report(exponential().as_ref(), 6.0).unwrap();
        assert_eq!(r.rate_of_change, 1.5967);
        let r = rate_report(linear().as_ref(), 20.0).unwrap();
        assert_eq!(r.rate_of_change, 0.0);
        assert!(r.interpretation.contains("plateau"));
    }

    #[test]
    fn visualisation_report_shapes() {
        let r = visualisation_report(exponential().as_ref(), &whole_weeks(10), true).unwrap();
        assert_eq!(r.weeks.len(), 10);
        assert_eq!(r.mileages.len(), 10);
        assert_eq!(r.rates.as_ref().unwrap().len(), 10);
        assert!(r.equation_latex.contains("M(n)"));
        assert!(r.plateau_week.is_none());

        let r = visualisation_report(linear().as_ref(), &whole_weeks(10), false).unwrap();
        assert!(r.rates.is_none());
        assert_eq!(r.plateau_week, Some(20.0));
    }

    #[test]
    fn comparison_report_lists_models_in_order() {
        let r = comparison_report(&[exponential(), linear()], &whole_weeks(20)).unwrap();
        assert_eq!(r.models.len(), 2);
        assert_eq!(r.models[0].equation_type, ModelKind::Exponential);
        assert_eq!(r.models[1].equation_type, ModelKind::Linear);
        assert!(r.models.iter().all(|m| m.rates.is_none()));
    }

    #[test]
    fn health_report_echoes_defaults() {
        let r = health_report(&Settings::default()).unwrap();
        assert_eq!(r.status, "healthy");
        assert_eq!(r.equation_type, ModelKind::Exponential);
        assert_eq!(r.default_parameters.target_mileage(), 50.0);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["default_parameters"]["a_parameter"], 0.8);
        assert_eq!(json["equation_type"], "exponential");
    }
}
