//! Shared domain types.
//!
//! These types are intentionally kept small and serializable so they can be:
//!
//! - bound to a model for evaluation
//! - echoed back in reports (JSON and terminal)
//! - merged from defaults and per-invocation overrides

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, SelectorError};

/// Which progression formula family to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// `M(n) = T - (T - S) * a^(n/b)`, saturating towards `T`.
    Exponential,
    /// `M(n) = min(S + a*n/b, T)`, capped at `T`.
    Linear,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [ModelKind::Exponential, ModelKind::Linear];

    /// Stable lowercase tag (used in reports and configuration).
    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::Exponential => "exponential",
            ModelKind::Linear => "linear",
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Exponential => "Exponential",
            ModelKind::Linear => "Linear",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = SelectorError;

    /// Tags are matched case-insensitively, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| SelectorError::UnsupportedKind(tag.to_string()))
    }
}

/// Names of the four model parameters (for error reporting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterField {
    TargetMileage,
    StartingMileage,
    AParameter,
    BParameter,
}

impl ParameterField {
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterField::TargetMileage => "target_mileage",
            ParameterField::StartingMileage => "starting_mileage",
            ParameterField::AParameter => "a_parameter",
            ParameterField::BParameter => "b_parameter",
        }
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated parameter set.
///
/// Construction checks the kind-independent invariants:
///
/// - every field is finite
/// - `target_mileage > starting_mileage >= 0`
/// - `b_parameter > 0`
///
/// The kind-specific constraint on `a_parameter` is checked when the parameters are
/// bound to a model (see [`crate::models::create_model`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelParameters {
    target_mileage: f64,
    starting_mileage: f64,
    a_parameter: f64,
    b_parameter: f64,
}

impl ModelParameters {
    pub fn new(
        target_mileage: f64,
        starting_mileage: f64,
        a_parameter: f64,
        b_parameter: f64,
    ) -> Result<Self, ParameterError> {
        use ParameterField::*;

        if !(target_mileage.is_finite() && target_mileage > 0.0) {
            return Err(ParameterError::invalid(TargetMileage, "a positive finite number", target_mileage));
        }
        if !(starting_mileage.is_finite() && starting_mileage >= 0.0) {
            return Err(ParameterError::invalid(
                StartingMileage,
                "a non-negative finite number",
                starting_mileage,
            ));
        }
        if starting_mileage >= target_mileage {
            return Err(ParameterError::invalid(
                StartingMileage,
                "less than target_mileage",
                starting_mileage,
            ));
        }
        if !a_parameter.is_finite() {
            return Err(ParameterError::invalid(AParameter, "a finite number", a_parameter));
        }
        if !(b_parameter.is_finite() && b_parameter > 0.0) {
            return Err(ParameterError::invalid(BParameter, "a positive finite number", b_parameter));
        }

        Ok(Self {
            target_mileage,
            starting_mileage,
            a_parameter,
            b_parameter,
        })
    }

    pub fn target_mileage(&self) -> f64 {
        self.target_mileage
    }

    pub fn starting_mileage(&self) -> f64 {
        self.starting_mileage
    }

    pub fn a_parameter(&self) -> f64 {
        self.a_parameter
    }

    pub fn b_parameter(&self) -> f64 {
        self.b_parameter
    }

    /// `T - S`, always positive for a validated set.
    pub fn span(&self) -> f64 {
        self.target_mileage - self.starting_mileage
    }
}

/// Sparse per-invocation overrides. `None` means "use the default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterOverrides {
    pub target_mileage: Option<f64>,
    pub starting_mileage: Option<f64>,
    pub a_parameter: Option<f64>,
    pub b_parameter: Option<f64>,
}

impl ParameterOverrides {
    pub fn is_empty(&self) -> bool {
        self.target_mileage.is_none()
            && self.starting_mileage.is_none()
            && self.a_parameter.is_none()
            && self.b_parameter.is_none()
    }
}

/// Outcome of solving for the week that reaches a given mileage.
#[derive(Debug, Clone, PartialEq)]
pub enum WeekOutcome {
    /// The mileage is reached at this (real-valued) week.
    Reached { week: f64 },
    /// The mileage is never reached in finite time (exponential asymptote).
    Unreachable { message: String },
}

impl WeekOutcome {
    pub fn week(&self) -> Option<f64> {
        match self {
            WeekOutcome::Reached { week } => Some(*week),
            WeekOutcome::Unreachable { .. } => None,
        }
    }

    pub fn is_achievable(&self) -> bool {
        matches!(self, WeekOutcome::Reached { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            WeekOutcome::Reached { .. } => None,
            WeekOutcome::Unreachable { message } => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_kind_parses_case_insensitively() {
        assert_eq!("EXPONENTIAL".parse::<ModelKind>().unwrap(), ModelKind::Exponential);
        assert_eq!(" Linear ".parse::<ModelKind>().unwrap(), ModelKind::Linear);
    }

    #[test]
    fn unknown_model_kind_is_unsupported() {
        let err = "quadratic".parse::<ModelKind>().unwrap_err();
        assert_eq!(err, SelectorError::UnsupportedKind("quadratic".to_string()));
    }

    #[test]
    fn starting_at_or_above_target_is_rejected() {
        for start in [50.0, 60.0] {
            let err = ModelParameters::new(50.0, start, 0.8, 4.0).unwrap_err();
            assert_eq!(err.field(), ParameterField::StartingMileage);
        }
    }

    #[test]
    fn non_positive_b_is_rejected() {
        for b in [0.0, -1.0, f64::NAN] {
            let err = ModelParameters::new(50.0, 10.0, 0.8, b).unwrap_err();
            assert_eq!(err.field(), ParameterField::BParameter);
        }
    }

    #[test]
    fn negative_start_and_non_positive_target_are_rejected() {
        let err = ModelParameters::new(50.0, -1.0, 0.8, 4.0).unwrap_err();
        assert_eq!(err.field(), ParameterField::StartingMileage);
        let err = ModelParameters::new(0.0, 0.0, 0.8, 4.0).unwrap_err();
        assert_eq!(err.field(), ParameterField::TargetMileage);
    }

    #[test]
    fn zero_start_is_allowed() {
        let p = ModelParameters::new(50.0, 0.0, 0.8, 4.0).unwrap();
        assert_eq!(p.starting_mileage(), 0.0);
        assert_eq!(p.span(), 50.0);
    }

    #[test]
    fn week_outcome_accessors() {
        let reached = WeekOutcome::Reached { week: 3.5 };
        assert_eq!(reached.week(), Some(3.5));
        assert!(reached.is_achievable());
        assert!(reached.message().is_none());

        let never = WeekOutcome::Unreachable { message: "never".into() };
        assert_eq!(never.week(), None);
        assert!(!never.is_achievable());
        assert_eq!(never.message(), Some("never"));
    }
}
