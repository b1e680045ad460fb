//! The capability set shared by every progression model.
//!
//! Callers obtain a `Box<dyn TrainingModel>` from the selector and never branch on
//! the model kind afterwards. Implementations are pure: every method is a function
//! of its argument and the bound parameters.

use crate::domain::{ModelKind, ModelParameters, WeekOutcome};
use crate::error::DomainError;

pub trait TrainingModel: std::fmt::Debug + Send + Sync {
    /// Which formula family this model evaluates.
    fn kind(&self) -> ModelKind;

    /// The parameter set the model is bound to.
    fn parameters(&self) -> &ModelParameters;

    /// Recommended weekly mileage at `week` (0-indexed, real-valued).
    fn mileage_at_week(&self, week: f64) -> Result<f64, DomainError>;

    /// Week at which `mileage` is first reached.
    fn week_at_mileage(&self, mileage: f64) -> Result<WeekOutcome, DomainError>;

    /// Instantaneous rate of change `dM/dn` (miles per week, per week).
    fn rate_of_change(&self, week: f64) -> Result<f64, DomainError>;

    /// LaTeX rendering of the model equation.
    fn equation_latex(&self) -> &'static str;

    /// Week at which mileage stops increasing, if the model plateaus in finite time.
    fn plateau_week(&self) -> Option<f64> {
        None
    }
}

/// Reject weeks outside the models' domain (`n >= 0`, finite).
pub(crate) fn check_week(week: f64) -> Result<f64, DomainError> {
    if !week.is_finite() {
        return Err(DomainError::NonFiniteWeek(week));
    }
    if week < 0.0 {
        return Err(DomainError::NegativeWeek(week));
    }
    Ok(week)
}

/// Reject non-finite mileages before any boundary comparison.
pub(crate) fn check_mileage(mileage: f64) -> Result<f64, DomainError> {
    if mileage.is_finite() {
        Ok(mileage)
    } else {
        Err(DomainError::NonFiniteMileage(mileage))
    }
}
