//! Terminal formatting for reports.
//!
//! We keep formatting code in one place so the model code stays free of
//! presentation concerns and output changes are localized.

use crate::domain::ModelParameters;
use crate::report::{
    ComparisonReport, HealthReport, MileageReport, RateReport, VisualisationReport, WeekReport,
};

/// One-line parameter summary, e.g. `T=50.0, S=10.0, a=0.80, b=4.00`.
pub fn format_parameters(params: &ModelParameters) -> String {
    format!(
        "T={:.1}, S={:.1}, a={:.2}, b={:.2}",
        params.target_mileage(),
        params.starting_mileage(),
        params.a_parameter(),
        params.b_parameter()
    )
}

pub fn format_mileage_report(r: &MileageReport) -> String {
    format!(
        "{} model ({})\nWeek {}: {:.2} miles ({:.1}% of target)",
        r.equation_type.display_name(),
        format_parameters(&r.parameters),
        r.week_number,
        r.weekly_mileage,
        r.percentage_of_target
    )
}

pub fn format_week_report(r: &WeekReport) -> String {
    let mut out = format!(
        "{} model ({})\n",
        r.equation_type.display_name(),
        format_parameters(&r.parameters)
    );
    match r.week_number {
        Some(week) => out.push_str(&format!("{} miles reached at week {week:.2}", r.weekly_mileage)),
        None => out.push_str(&format!("{} miles is not achievable", r.weekly_mileage)),
    }
    if let Some(msg) = &r.message {
        out.push_str(&format!("\n{msg}"));
    }
    out
}

pub fn format_rate_report(r: &RateReport) -> String {
    format!(
        "{} model ({})\nRate of change: {:.4} miles/week\n{}",
        r.equation_type.display_name(),
        format_parameters(&r.parameters),
        r.rate_of_change,
        r.interpretation
    )
}

pub fn format_visualisation_report(r: &VisualisationReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== {} Training Progression ===\n",
        r.equation_type.display_name()
    ));
    out.push_str(&format!("Equation: {}\n", r.equation_latex));
    out.push_str(&format!("Parameters: {}\n", format_parameters(&r.parameters)));
    if let Some(week) = r.plateau_week {
        out.push_str(&format!("Plateau reached at week {week:.2}\n"));
    }

    out.push('\n');
    match &r.rates {
        Some(_) => out.push_str(&format!("{:>6}  {:>10}  {:>10}\n", "week", "mileage", "rate")),
        None => out.push_str(&format!("{:>6}  {:>10}\n", "week", "mileage")),
    }
    for (i, (week, mileage)) in r.weeks.iter().zip(r.mileages.iter()).enumerate() {
        match r.rates.as_ref().and_then(|rates| rates.get(i)) {
            Some(rate) => out.push_str(&format!("{week:>6}  {mileage:>10.2}  {rate:>10.4}\n")),
            None => out.push_str(&format!("{week:>6}  {mileage:>10.2}\n")),
        }
    }

    if !r.milestones.is_empty() {
        out.push_str("\nMilestones:\n");
        for m in &r.milestones {
            out.push_str(&format!(
                "  {:>3.0}%  {:>7.2} miles at week {:.2}\n",
                m.fraction * 100.0,
                m.mileage,
                m.week
            ));
        }
    }

    out
}

pub fn format_comparison_report(r: &ComparisonReport) -> String {
    let mut out = String::from("=== Model Comparison ===\n");
    for m in &r.models {
        out.push_str(&format!(
            "  {:<12} {}\n",
            m.equation_type.display_name(),
            format_parameters(&m.parameters)
        ));
    }

    out.push('\n');
    out.push_str(&format!("{:>6}", "week"));
    for m in &r.models {
        out.push_str(&format!("  {:>12}", m.equation_type.display_name()));
    }
    out.push('\n');

    for (i, week) in r.weeks.iter().enumerate() {
        out.push_str(&format!("{week:>6}"));
        for m in &r.models {
            let mileage = m.mileages.get(i).copied().unwrap_or(f64::NAN);
            out.push_str(&format!("  {mileage:>12.2}"));
        }
        out.push('\n');
    }
    out
}

pub fn format_health_report(r: &HealthReport) -> String {
    format!(
        "status: {}\nversion: {}\nmodel: {}\ndefaults: {}",
        r.status,
        r.version,
        r.equation_type,
        format_parameters(&r.default_parameters)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelKind;
    use crate::math::whole_weeks;
    use crate::models::create_model;
    use crate::report::{mileage_report, visualisation_report, week_report};

    fn linear() -> Box<dyn crate::models::TrainingModel> {
        create_model(ModelKind::Linear, ModelParameters::new(50.0, 10.0, 2.0, 1.0).unwrap()).unwrap()
    }

    #[test]
    fn parameter_summary() {
        let p = ModelParameters::new(50.0, 10.0, 0.8, 4.0).unwrap();
        assert_eq!(format_parameters(&p), "T=50.0, S=10.0, a=0.80, b=4.00");
    }

    #[test]
    fn mileage_text() {
        let r = mileage_report(linear().as_ref(), 4.0).unwrap();
        assert_eq!(
            format_mileage_report(&r),
            "Linear model (T=50.0, S=10.0, a=2.00, b=1.00)\nWeek 4: 18.00 miles (36.0% of target)"
        );
    }

    #[test]
    fn unachievable_week_text_includes_message() {
        let r = week_report(linear().as_ref(), 70.0).unwrap();
        let txt = format_week_report(&r);
        assert!(txt.contains("70 miles is not achievable"));
        assert!(txt.contains("outside valid range [10, 50]"));
    }

    #[test]
    fn visualisation_table_has_one_row_per_week() {
        let r = visualisation_report(linear().as_ref(), &whole_weeks(3), true).unwrap();
        let txt = format_visualisation_report(&r);
        assert!(txt.contains("Plateau reached at week 20.00"));
        assert!(txt.contains("     0       10.00      2.0000\n"));
        assert!(txt.contains("     2       14.00      2.0000\n"));
        assert!(!txt.contains("Milestones"));
    }
}
