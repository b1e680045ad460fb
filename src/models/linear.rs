//! Capped linear progression.
//!
//! ```text
//! M(n)  = min(S + a*n/b, T)
//! n_cap = b * (T - S) / a
//! ```
//!
//! Unlike the exponential model the target is reached at a finite week (`n_cap`),
//! after which mileage stays at `T` and the rate of change is exactly zero.

use crate::domain::{ModelKind, ModelParameters, ParameterField, WeekOutcome};
use crate::error::{DomainError, ParameterError};
use crate::models::model::{TrainingModel, check_mileage, check_week};

#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    params: ModelParameters,
}

impl LinearModel {
    /// Bind parameters, enforcing `a > 0`.
    pub fn new(params: ModelParameters) -> Result<Self, ParameterError> {
        let a = params.a_parameter();
        if a <= 0.0 {
            return Err(ParameterError::invalid(ParameterField::AParameter, "positive", a));
        }
        Ok(Self { params })
    }

    /// Weekly increase while below the cap (`a / b`).
    pub fn weekly_increase(&self) -> f64 {
        self.params.a_parameter() / self.params.b_parameter()
    }

    /// First week at which mileage equals the target.
    pub fn cap_week(&self) -> f64 {
        self.params.b_parameter() * self.params.span() / self.params.a_parameter()
    }
}

impl TrainingModel for LinearModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Linear
    }

    fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    fn mileage_at_week(&self, week: f64) -> Result<f64, DomainError> {
        let week = check_week(week)?;
        let t = self.params.target_mileage();
        if week >= self.cap_week() {
            return Ok(t);
        }
        let linear = self.params.starting_mileage()
            + self.params.a_parameter() * week / self.params.b_parameter();
        Ok(linear.min(t))
    }

    fn week_at_mileage(&self, mileage: f64) -> Result<WeekOutcome, DomainError> {
        let mileage = check_mileage(mileage)?;
        let s = self.params.starting_mileage();
        let t = self.params.target_mileage();

        if mileage < s {
            return Err(DomainError::MileageBelowStart { mileage, start: s });
        }
        if mileage > t {
            return Err(DomainError::MileageAboveTarget { mileage, target: t });
        }
        if mileage == t {
            return Ok(WeekOutcome::Reached { week: self.cap_week() });
        }

        let week = self.params.b_parameter() * (mileage - s) / self.params.a_parameter();
        Ok(WeekOutcome::Reached { week })
    }

    fn rate_of_change(&self, week: f64) -> Result<f64, DomainError> {
        let week = check_week(week)?;
        if week < self.cap_week() {
            Ok(self.weekly_increase())
        } else {
            Ok(0.0)
        }
    }

    fn equation_latex(&self) -> &'static str {
        r"M(n) = \min(S + \frac{a \cdot n}{b}, T)"
    }

    fn plateau_week(&self) -> Option<f64> {
        Some(self.cap_week())
    }
}
