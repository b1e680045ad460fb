//! Error types.
//!
//! The model core reports failures through small `thiserror` enums so callers can
//! match on them. The binary converts everything into [`AppError`], which carries
//! the process exit code.

use thiserror::Error;

use crate::domain::{ModelKind, ParameterField};

/// A `ModelParameters` invariant was violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("invalid {field}: must be {constraint}, got {value}")]
    Invalid {
        field: ParameterField,
        constraint: &'static str,
        value: f64,
    },
}

impl ParameterError {
    pub fn invalid(field: ParameterField, constraint: &'static str, value: f64) -> Self {
        Self::Invalid {
            field,
            constraint,
            value,
        }
    }

    /// The parameter that failed validation.
    pub fn field(&self) -> ParameterField {
        match self {
            Self::Invalid { field, .. } => *field,
        }
    }
}

/// Failure to build a model from a kind tag and a parameter set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectorError {
    #[error("unsupported model kind '{0}' (available: {})", available_kinds())]
    UnsupportedKind(String),
    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

fn available_kinds() -> String {
    ModelKind::ALL
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Input outside the valid domain of a model operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("week must be non-negative, got {0}")]
    NegativeWeek(f64),
    #[error("week must be a finite number, got {0}")]
    NonFiniteWeek(f64),
    #[error("mileage must be a finite number, got {0}")]
    NonFiniteMileage(f64),
    #[error("mileage {mileage} is below the starting mileage {start}; not achievable going backward")]
    MileageBelowStart { mileage: f64, start: f64 },
    #[error("mileage {mileage} exceeds the target mileage {target}")]
    MileageAboveTarget { mileage: f64, target: f64 },
}

impl DomainError {
    /// True when the failing input was a mileage outside `[S, T]`.
    pub fn is_mileage_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::MileageBelowStart { .. } | Self::MileageAboveTarget { .. }
        )
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> Self {
        AppError::new(2, format!("Invalid parameters: {err}"))
    }
}

impl From<SelectorError> for AppError {
    fn from(err: SelectorError) -> Self {
        match err {
            SelectorError::Parameter(inner) => inner.into(),
            other => AppError::new(2, other.to_string()),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::new(3, format!("Out of range: {err}"))
    }
}
