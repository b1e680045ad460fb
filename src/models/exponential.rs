//! Exponential (saturating) progression.
//!
//! ```text
//! M(n)  = T - (T - S) * a^(n/b)
//! n(M)  = b * ln((T - M) / (T - S)) / ln(a)
//! M'(n) = -(T - S) * ln(a) * a^(n/b) / b
//! ```
//!
//! With `0 < a < 1` the curve starts at `S`, increases monotonically and approaches
//! `T` asymptotically. The derivative is positive and strictly decreasing
//! (diminishing returns).

use crate::domain::{ModelKind, ModelParameters, ParameterField, WeekOutcome};
use crate::error::{DomainError, ParameterError};
use crate::models::model::{TrainingModel, check_mileage, check_week};

const UNREACHABLE_MESSAGE: &str = "Target mileage is approached asymptotically (never fully reached)";

#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialModel {
    params: ModelParameters,
}

impl ExponentialModel {
    /// Bind parameters, enforcing `0 < a < 1`.
    pub fn new(params: ModelParameters) -> Result<Self, ParameterError> {
        let a = params.a_parameter();
        if !(a > 0.0 && a < 1.0) {
            return Err(ParameterError::invalid(ParameterField::AParameter, "in (0, 1)", a));
        }
        Ok(Self { params })
    }

    fn decay(&self, week: f64) -> f64 {
        self.params
            .a_parameter()
            .powf(week / self.params.b_parameter())
    }
}

/// The largest `f64` strictly below a positive finite `x`.
fn largest_below(x: f64) -> f64 {
    f64::from_bits(x.to_bits() - 1)
}

impl TrainingModel for ExponentialModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Exponential
    }

    fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    fn mileage_at_week(&self, week: f64) -> Result<f64, DomainError> {
        let week = check_week(week)?;
        let s = self.params.starting_mileage();
        let t = self.params.target_mileage();
        // Anchored at S so week 0 is exact; clamped so large weeks stay below T.
        let mileage = s + self.params.span() * (1.0 - self.decay(week));
        Ok(mileage.clamp(s, largest_below(t)))
    }

    fn week_at_mileage(&self, mileage: f64) -> Result<WeekOutcome, DomainError> {
        let mileage = check_mileage(mileage)?;
        let s = self.params.starting_mileage();
        let t = self.params.target_mileage();

        if mileage < s {
            return Err(DomainError::MileageBelowStart { mileage, start: s });
        }
        if mileage >= t {
            return Ok(WeekOutcome::Unreachable {
                message: UNREACHABLE_MESSAGE.to_string(),
            });
        }

        // ratio is in (0, 1] here, so the log is defined and non-positive.
        let ratio = (t - mileage) / self.params.span();
        let week = self.params.b_parameter() * ratio.ln() / self.params.a_parameter().ln();
        Ok(WeekOutcome::Reached { week: week.max(0.0) })
    }

    fn rate_of_change(&self, week: f64) -> Result<f64, DomainError> {
        let week = check_week(week)?;
        let ln_a = self.params.a_parameter().ln();
        Ok(-self.params.span() * ln_a * self.decay(week) / self.params.b_parameter())
    }

    fn equation_latex(&self) -> &'static str {
        r"M(n) = T - (T - S) \cdot a^{n/b}"
    }
}
