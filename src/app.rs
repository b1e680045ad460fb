//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - initialises logging
//! - loads default settings from the environment
//! - runs the requested calculation
//! - prints reports/plots and writes optional exports

use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, CompareArgs, MileageArgs, OutputArgs, RateArgs, VisualiseArgs, WeekArgs};
use crate::config::Settings;
use crate::error::AppError;
use crate::math::linspace;
use crate::report::{
    comparison_report, format_comparison_report, format_health_report, format_mileage_report,
    format_rate_report, format_visualisation_report, format_week_report, health_report, mileage_report,
    rate_report, sample_progression, visualisation_report, week_report,
};

pub mod pipeline;

/// Entry point for the `tc` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    init_logging(&settings, cli.verbose);
    debug!(?settings, "loaded settings");

    match cli.command {
        Command::Mileage(args) => handle_mileage(&settings, args),
        Command::Week(args) => handle_week(&settings, args),
        Command::Rate(args) => handle_rate(&settings, args),
        Command::Visualise(args) => handle_visualise(&settings, args),
        Command::Compare(args) => handle_compare(&settings, args),
        Command::Health(args) => handle_health(&settings, args),
    }
}

/// `RUST_LOG` wins; otherwise `LOG_LEVEL` (or `debug` with `--verbose`).
fn init_logging(settings: &Settings, verbose: bool) {
    let default_level = if verbose { "debug" } else { settings.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn emit<T: Serialize>(report: &T, output: &OutputArgs, text: impl FnOnce(&T) -> String) -> Result<(), AppError> {
    if output.json {
        println!("{}", crate::io::to_json_string(report)?);
    } else {
        println!("{}", text(report));
    }
    Ok(())
}

fn handle_mileage(settings: &Settings, args: MileageArgs) -> Result<(), AppError> {
    let model = pipeline::build_model(settings, args.model.model, &args.model.overrides())?;
    let report = mileage_report(model.as_ref(), args.week)?;
    emit(&report, &args.output, format_mileage_report)
}

fn handle_week(settings: &Settings, args: WeekArgs) -> Result<(), AppError> {
    let model = pipeline::build_model(settings, args.model.model, &args.model.overrides())?;
    let report = week_report(model.as_ref(), args.mileage)?;
    if !report.is_achievable {
        debug!(mileage = args.mileage, message = ?report.message, "mileage not achievable");
    }
    emit(&report, &args.output, format_week_report)
}

fn handle_rate(settings: &Settings, args: RateArgs) -> Result<(), AppError> {
    let model = pipeline::build_model(settings, args.model.model, &args.model.overrides())?;
    let report = rate_report(model.as_ref(), args.week)?;
    emit(&report, &args.output, format_rate_report)
}

fn handle_visualise(settings: &Settings, args: VisualiseArgs) -> Result<(), AppError> {
    let model = pipeline::build_model(settings, args.model.model, &args.model.overrides())?;
    let weeks = pipeline::week_window(settings, args.weeks)?;
    let include_rate = !args.no_rate;

    let report = visualisation_report(model.as_ref(), &weeks, include_rate)?;
    emit(&report, &args.output, format_visualisation_report)?;

    if args.plot {
        // Sample densely for the plot, like a continuous curve.
        let last_week = weeks.last().copied().unwrap_or(0.0).max(1.0);
        let dense = linspace(0.0, last_week, args.width.max(2));
        let series = sample_progression(model.as_ref(), &dense, include_rate)?;
        println!(
            "{}",
            crate::plot::render_progression_plot(&series, &report.milestones, args.width, args.height)
        );
        if let Some(rate_plot) = crate::plot::render_rate_plot(&series, args.width, args.height / 2) {
            println!("{rate_plot}");
        }
    }

    if let Some(path) = &args.export_csv {
        let series = sample_progression(model.as_ref(), &weeks, include_rate)?;
        crate::io::write_series_csv(path, &series)?;
        info!("Wrote series CSV: {}", path.display());
    }

    if let Some(path) = &args.export_json {
        crate::io::write_json(path, &report)?;
        info!("Wrote visualisation JSON: {}", path.display());
    }

    Ok(())
}

fn handle_compare(settings: &Settings, args: CompareArgs) -> Result<(), AppError> {
    let models = pipeline::build_comparison_models(
        settings,
        args.target_mileage,
        args.starting_mileage,
        args.linear_a,
        args.linear_b,
    )?;
    let weeks = pipeline::week_window(settings, args.weeks)?;

    let report = comparison_report(&models, &weeks)?;
    emit(&report, &args.output, format_comparison_report)?;

    if args.plot {
        let series = crate::report::compare_progressions(&models, &weeks)?;
        println!("{}", crate::plot::render_comparison_plot(&series, args.width, args.height));
    }
    Ok(())
}

fn handle_health(settings: &Settings, args: OutputArgs) -> Result<(), AppError> {
    let report = health_report(settings)?;
    emit(&report, &args, format_health_report)
}
