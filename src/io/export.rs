//! Export sampled progressions to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.
//! One row per sampled week; the `rate` column is empty when rates were not sampled.

use std::path::Path;

use serde::Serialize;

use crate::error::AppError;
use crate::report::ProgressionSeries;

#[derive(Debug, Serialize)]
struct SeriesRow {
    equation_type: &'static str,
    week: f64,
    mileage: f64,
    rate: Option<f64>,
}

/// Write a sampled series to a CSV file.
pub fn write_series_csv(path: &Path, series: &ProgressionSeries) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    for (i, (&week, &mileage)) in series.weeks.iter().zip(series.mileages.iter()).enumerate() {
        let row = SeriesRow {
            equation_type: series.equation_type.as_str(),
            week,
            mileage,
            rate: series.rates.as_ref().and_then(|r| r.get(i).copied()),
        };
        writer
            .serialize(&row)
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModelKind, ModelParameters};
    use crate::math::whole_weeks;
    use crate::models::create_model;
    use crate::report::sample_progression;

    #[test]
    fn writes_header_and_rows() {
        let model = create_model(ModelKind::Linear, ModelParameters::new(50.0, 10.0, 2.0, 1.0).unwrap())
            .unwrap();
        let series = sample_progression(model.as_ref(), &whole_weeks(3), true).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.csv");
        write_series_csv(&path, &series).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "equation_type,week,mileage,rate");
        assert_eq!(lines[1], "linear,0.0,10.0,2.0");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn missing_rates_leave_the_column_empty() {
        let model = create_model(ModelKind::Linear, ModelParameters::new(50.0, 10.0, 2.0, 1.0).unwrap())
            .unwrap();
        let series = sample_progression(model.as_ref(), &whole_weeks(2), false).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.csv");
        write_series_csv(&path, &series).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().nth(2), Some("linear,1.0,12.0,"));
    }

    #[test]
    fn unwritable_path_is_an_app_error() {
        let model = create_model(ModelKind::Linear, ModelParameters::new(50.0, 10.0, 2.0, 1.0).unwrap())
            .unwrap();
        let series = sample_progression(model.as_ref(), &whole_weeks(2), false).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let err = write_series_csv(&dir.path().join("missing/series.csv"), &series).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
