//! Command-line parsing for the training progression calculator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! model math. Every subcommand carries the same model-selection and override
//! flags; anything not given on the command line falls back to the settings
//! loaded from the environment.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{ModelKind, ParameterOverrides};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "tc", version, about = "Weekly training mileage progression calculator")]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Recommended weekly mileage at a given week.
    Mileage(MileageArgs),
    /// Week at which a given weekly mileage is reached.
    Week(WeekArgs),
    /// Rate of change of weekly mileage at a given week.
    Rate(RateArgs),
    /// Sample the progression over whole weeks, with optional plot and exports.
    Visualise(VisualiseArgs),
    /// Compare the exponential and linear models over the same weeks.
    Compare(CompareArgs),
    /// Print the configured defaults.
    Health(OutputArgs),
}

/// Model selection and parameter overrides shared by all calculations.
#[derive(Debug, Args, Clone, Default)]
pub struct ModelArgs {
    /// Model to use (defaults to EQUATION_CHOICE).
    #[arg(long, value_enum, ignore_case = true)]
    pub model: Option<ModelKind>,

    /// Override the target weekly mileage (T).
    #[arg(long, allow_negative_numbers = true)]
    pub target_mileage: Option<f64>,

    /// Override the starting weekly mileage (S).
    #[arg(long, allow_negative_numbers = true)]
    pub starting_mileage: Option<f64>,

    /// Override model parameter a.
    #[arg(long = "a-parameter", short = 'a', allow_negative_numbers = true)]
    pub a_parameter: Option<f64>,

    /// Override model parameter b.
    #[arg(long = "b-parameter", short = 'b', allow_negative_numbers = true)]
    pub b_parameter: Option<f64>,
}

impl ModelArgs {
    pub fn overrides(&self) -> ParameterOverrides {
        ParameterOverrides {
            target_mileage: self.target_mileage,
            starting_mileage: self.starting_mileage,
            a_parameter: self.a_parameter,
            b_parameter: self.b_parameter,
        }
    }
}

#[derive(Debug, Args, Clone, Default)]
pub struct OutputArgs {
    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct MileageArgs {
    /// Week number (0-indexed, fractional weeks allowed).
    #[arg(short, long, allow_negative_numbers = true)]
    pub week: f64,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct WeekArgs {
    /// Desired weekly mileage.
    #[arg(short, long, allow_negative_numbers = true)]
    pub mileage: f64,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct RateArgs {
    /// Week number (0-indexed, fractional weeks allowed).
    #[arg(short, long, allow_negative_numbers = true)]
    pub week: f64,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct VisualiseArgs {
    /// Number of whole weeks to sample (1-52; defaults to PLOT_WEEKS).
    #[arg(long)]
    pub weeks: Option<usize>,

    /// Skip the rate of change series.
    #[arg(long)]
    pub no_rate: bool,

    /// Render ASCII plots in the terminal.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the sampled series to CSV.
    #[arg(long, value_name = "CSV")]
    pub export_csv: Option<PathBuf>,

    /// Export the full report to JSON.
    #[arg(long, value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    /// Number of whole weeks to sample (1-52; defaults to PLOT_WEEKS).
    #[arg(long)]
    pub weeks: Option<usize>,

    /// Parameter a used for the linear model.
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub linear_a: f64,

    /// Parameter b used for the linear model.
    #[arg(long, default_value_t = 1.0)]
    pub linear_b: f64,

    /// Override the target weekly mileage (T) for both models.
    #[arg(long, allow_negative_numbers = true)]
    pub target_mileage: Option<f64>,

    /// Override the starting weekly mileage (S) for both models.
    #[arg(long, allow_negative_numbers = true)]
    pub starting_mileage: Option<f64>,

    /// Render an ASCII overlay of both curves.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}
