//! Sampled progressions for plotting, export and comparison.

use rayon::prelude::*;
use serde::Serialize;

use crate::domain::{ModelKind, ModelParameters};
use crate::error::DomainError;
use crate::models::TrainingModel;

/// Fractions of the way from `S` to `T` that are highlighted as milestones.
pub const MILESTONE_FRACTIONS: [f64; 4] = [0.25, 0.5, 0.75, 0.9];

/// A model evaluated over a set of weeks.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressionSeries {
    pub equation_type: ModelKind,
    pub parameters: ModelParameters,
    pub weeks: Vec<f64>,
    pub mileages: Vec<f64>,
    pub rates: Option<Vec<f64>>,
}

impl ProgressionSeries {
    /// `(week, mileage)` pairs.
    pub fn mileage_points(&self) -> Vec<(f64, f64)> {
        self.weeks.iter().copied().zip(self.mileages.iter().copied()).collect()
    }

    /// `(week, rate)` pairs, if rates were sampled.
    pub fn rate_points(&self) -> Option<Vec<(f64, f64)>> {
        self.rates
            .as_ref()
            .map(|rates| self.weeks.iter().copied().zip(rates.iter().copied()).collect())
    }
}

/// A point where the progression crosses a fixed share of the `S → T` span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Milestone {
    pub fraction: f64,
    pub mileage: f64,
    pub week: f64,
}

/// Evaluate `model` at each of `weeks`.
pub fn sample_progression(
    model: &dyn TrainingModel,
    weeks: &[f64],
    include_rate: bool,
) -> Result<ProgressionSeries, DomainError> {
    let mileages = weeks
        .iter()
        .map(|&w| model.mileage_at_week(w))
        .collect::<Result<Vec<_>, _>>()?;

    let rates = if include_rate {
        Some(
            weeks
                .iter()
                .map(|&w| model.rate_of_change(w))
                .collect::<Result<Vec<_>, _>>()?,
        )
    } else {
        None
    };

    Ok(ProgressionSeries {
        equation_type: model.kind(),
        parameters: *model.parameters(),
        weeks: weeks.to_vec(),
        mileages,
        rates,
    })
}

/// Milestones reached strictly before `horizon` weeks.
///
/// Unreachable or out-of-window milestones are skipped.
pub fn milestones(model: &dyn TrainingModel, horizon: f64) -> Vec<Milestone> {
    let params = model.parameters();
    MILESTONE_FRACTIONS
        .iter()
        .filter_map(|&fraction| {
            let mileage = params.starting_mileage() + fraction * params.span();
            let week = model.week_at_mileage(mileage).ok()?.week()?;
            (week < horizon).then_some(Milestone {
                fraction,
                mileage,
                week,
            })
        })
        .collect()
}

/// Sample several models over the same weeks in parallel.
///
/// Output order matches `models`.
pub fn compare_progressions(
    models: &[Box<dyn TrainingModel>],
    weeks: &[f64],
) -> Result<Vec<ProgressionSeries>, DomainError> {
    models
        .par_iter()
        .map(|model| sample_progression(model.as_ref(), weeks, false))
        .collect()
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
    fn samples_each_week() {
        let series = sample_progression(linear().as_ref(), &whole_weeks(10), true).unwrap();
        assert_eq!(series.weeks.len(), 10);
        assert_eq!(series.mileages[3], 16.0);
        assert_eq!(series.rates.as_ref().unwrap().len(), 10);
        assert_eq!(series.equation_type, ModelKind::Linear);
    }

    #[test]
    fn rates_are_optional() {
        let series = sample_progression(exponential().as_ref(), &whole_weeks(5), false).unwrap();
        assert!(series.rates.is_none());
        assert!(series.rate_points().is_none());
        assert_eq!(series.mileage_points().len(), 5);
    }

    #[test]
    fn negative_week_in_grid_fails() {
        let err = sample_progression(linear().as_ref(), &[0.0, -1.0], false).unwrap_err();
        assert_eq!(err, DomainError::NegativeWeek(-1.0));
    }

    #[test]
    fn milestones_inside_window() {
        // Exponential defaults: 25% at ~5.16, 50% at ~12.43, 75% at ~24.85, 90% at ~41.3.
        let ms = milestones(exponential().as_ref(), 20.0);
        let fractions: Vec<f64> = ms.iter().map(|m| m.fraction).collect();
        assert_eq!(fractions, vec![0.25, 0.5]);
        assert_eq!(ms[0].mileage, 20.0);
        assert!((ms[0].week - 5.156_896_9).abs() < 1e-6);
    }

    #[test]
    fn linear_milestones_are_exact() {
        let ms = milestones(linear().as_ref(), 52.0);
        let weeks: Vec<f64> = ms.iter().map(|m| m.week).collect();
        assert_eq!(weeks, vec![5.0, 10.0, 15.0, 18.0]);
    }

    #[test]
    fn compare_preserves_model_order() {
        let models = vec![exponential(), linear()];
        let out = compare_progressions(&models, &whole_weeks(21)).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].equation_type, ModelKind::Exponential);
        assert_eq!(out[1].equation_type, ModelKind::Linear);
        assert_eq!(out[1].mileages[20], 50.0);
    }
}
