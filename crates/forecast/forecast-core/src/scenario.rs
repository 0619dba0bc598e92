//! Scenario projection
//!
//! Applies a growth bias that ramps linearly over the forecast, rescales the
//! confidence gaps and adds a small sinusoidal wiggle proportional to the
//! bias.

use std::f64::consts::PI;

use forecast_api::Scenario;
use forecast_spi::{ForecastPoint, ScenarioPoint, ScenarioReport, ScenarioSummary};

const WIGGLE_AMPLITUDE: f64 = 0.02;

/// Project `baseline` under `scenario`.
pub fn project(baseline: &[ForecastPoint], scenario: &Scenario) -> Vec<ScenarioPoint> {
    let len = baseline.len();
    let max_magnitude = baseline
        .iter()
        .map(|point| point.value.abs())
        .fold(1.0, f64::max);

    baseline
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let progress = if len > 1 {
                index as f64 / (len - 1) as f64
            } else {
                0.0
            };
            let adjusted = point.value + point.value * scenario.growth_bias * progress;
            let lower_gap = (point.value - point.lower).abs() * scenario.volatility_factor;
            let upper_gap = (point.upper - point.value).abs() * scenario.volatility_factor;
            let wiggle = (progress * PI * 2.0).sin()
                * max_magnitude
                * WIGGLE_AMPLITUDE
                * scenario.growth_bias;

            ScenarioPoint {
                date: point.date,
                value: adjusted + wiggle,
                lower: adjusted - lower_gap,
                upper: adjusted + upper_gap,
                baseline: point.value,
            }
        })
        .collect()
}

/// Totals and endpoint change of a projected series.
pub fn summarize(series: &[ScenarioPoint]) -> ScenarioSummary {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return ScenarioSummary::default();
    };
    let total: f64 = series.iter().map(|point| point.value).sum();

    ScenarioSummary {
        total,
        average_daily: total / series.len() as f64,
        change: last.value - first.value,
        last_value: last.value,
    }
}

/// Projection and summary packaged under the scenario's name.
pub fn report(baseline: &[ForecastPoint], scenario: &Scenario) -> ScenarioReport {
    let series = project(baseline, scenario);
    let summary = summarize(&series);
    ScenarioReport {
        name: scenario.name.clone(),
        label: scenario.label.clone(),
        series,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn baseline(values: &[f64], interval: f64) -> Vec<ForecastPoint> {
        let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| ForecastPoint::symmetric(start + Days::new(i as u64), v, interval))
            .collect()
    }

    #[test]
    fn test_empty_baseline() {
        assert!(project(&[], &Scenario::optimistic()).is_empty());
        assert_eq!(summarize(&[]), ScenarioSummary::default());
    }

    #[test]
    fn test_first_point_is_unchanged_except_band() {
        let points = project(&baseline(&[100.0, 100.0, 100.0], 10.0), &Scenario::optimistic());

        assert!((points[0].value - 100.0).abs() < 1e-9);
        assert!((points[0].lower - 92.5).abs() < 1e-9);
        assert!((points[0].upper - 107.5).abs() < 1e-9);
        assert_eq!(points[0].baseline, 100.0);
    }

    #[test]
    fn test_last_point_reaches_full_bias() {
        let points = project(&baseline(&[100.0, 100.0, 100.0], 10.0), &Scenario::pessimistic());
        let last = points.last().unwrap();

        // sin(2π) is zero up to rounding, so the wiggle vanishes at the end
        assert!((last.value - 92.0).abs() < 1e-9);
        assert!((last.lower - (92.0 - 13.5)).abs() < 1e-9);
        assert!((last.upper - (92.0 + 13.5)).abs() < 1e-9);
    }

    #[test]
    fn test_midpoint_wiggle_is_zero_and_quarter_is_not() {
        let points = project(&baseline(&[50.0; 5], 1.0), &Scenario::optimistic());
        // progress 0.5 → sin(π) ≈ 0
        assert!((points[2].value - 53.0).abs() < 1e-9);
        // progress 0.25 → sin(π/2) = 1, wiggle = 50 * 0.02 * 0.12
        assert!((points[1].value - (51.5 + 0.12)).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_has_no_progress() {
        let points = project(&baseline(&[10.0], 1.0), &Scenario::optimistic());
        assert_eq!(points.len(), 1);
        assert!((points[0].value - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_summary() {
        let points = project(&baseline(&[10.0, 20.0], 1.0), &Scenario::new("flat", "Flat", 0.0, 1.0));
        let summary = summarize(&points);

        assert!((summary.total - 30.0).abs() < 1e-12);
        assert!((summary.average_daily - 15.0).abs() < 1e-12);
        assert!((summary.change - 10.0).abs() < 1e-12);
        assert!((summary.last_value - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_report_carries_name_and_label() {
        let report = report(&baseline(&[1.0, 2.0], 0.5), &Scenario::pessimistic());
        assert_eq!(report.name, "pessimistic");
        assert_eq!(report.label, "Pessimistic");
        assert_eq!(report.series.len(), 2);
    }
}
