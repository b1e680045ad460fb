//! Default settings loaded from the environment.
//!
//! Values come from the process environment, with a `.env` file in the working
//! directory loaded first via `dotenvy`. Every variable is optional:
//!
//! | Variable           | Default       |
//! |--------------------|---------------|
//! | `TARGET_MILEAGE`   | `50.0`        |
//! | `STARTING_MILEAGE` | `10.0`        |
//! | `A_PARAMETER`      | `0.8`         |
//! | `B_PARAMETER`      | `4.0`         |
//! | `EQUATION_CHOICE`  | `exponential` |
//! | `PLOT_WEEKS`       | `20`          |
//! | `LOG_LEVEL`        | `info`        |
//!
//! Settings are passed explicitly to whatever needs them; there is no global.

use std::str::FromStr;

use serde::Serialize;

use crate::domain::{ModelKind, ModelParameters};
use crate::error::AppError;
use crate::models::create_model;

/// Upper bound on the visualisation window, in weeks.
pub const MAX_PLOT_WEEKS: usize = 52;

#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub target_mileage: f64,
    pub starting_mileage: f64,
    pub a_parameter: f64,
    pub b_parameter: f64,
    pub equation_choice: ModelKind,
    pub plot_weeks: usize,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_mileage: 50.0,
            starting_mileage: 10.0,
            a_parameter: 0.8,
            b_parameter: 4.0,
            equation_choice: ModelKind::Exponential,
            plot_weeks: 20,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `.env` + process environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = Settings::default();
        let settings = Settings {
            target_mileage: parse_var(&lookup, "TARGET_MILEAGE", base.target_mileage)?,
            starting_mileage: parse_var(&lookup, "STARTING_MILEAGE", base.starting_mileage)?,
            a_parameter: parse_var(&lookup, "A_PARAMETER", base.a_parameter)?,
            b_parameter: parse_var(&lookup, "B_PARAMETER", base.b_parameter)?,
            equation_choice: match lookup("EQUATION_CHOICE") {
                Some(raw) => raw
                    .parse()
                    .map_err(|e| AppError::new(2, format!("Invalid EQUATION_CHOICE: {e}")))?,
                None => base.equation_choice,
            },
            plot_weeks: parse_var(&lookup, "PLOT_WEEKS", base.plot_weeks)?,
            log_level: lookup("LOG_LEVEL")
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty())
                .unwrap_or(base.log_level),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// The default parameter set, validated for the default model kind.
    pub fn default_parameters(&self) -> Result<ModelParameters, AppError> {
        let params = ModelParameters::new(
            self.target_mileage,
            self.starting_mileage,
            self.a_parameter,
            self.b_parameter,
        )
        .map_err(|e| AppError::new(2, format!("Invalid default parameters: {e}")))?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let params = self.default_parameters()?;
        create_model(self.equation_choice, params).map_err(|e| {
            AppError::new(
                2,
                format!("Default parameters are invalid for the {} model: {e}", self.equation_choice),
            )
        })?;
        if self.plot_weeks == 0 || self.plot_weeks > MAX_PLOT_WEEKS {
            return Err(AppError::new(
                2,
                format!("PLOT_WEEKS must be in 1..={MAX_PLOT_WEEKS}, got {}.", self.plot_weeks),
            ));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::new(2, format!("Invalid {key}='{raw}': {e}"))),
        None => Ok(default),
    }
}
