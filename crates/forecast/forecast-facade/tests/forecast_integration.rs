//! Integration tests for the forecast engine
//!
//! Checks the invariants every output document must hold, plus the input
//! coercion rules.

use chrono::{Days, NaiveDate};
use forecast_facade::{
    forecast, ledger_to_document, trend::fit_linear_trend, AdviceSeverity, ForecastConfig,
    ForecastEngine, LedgerConfig, Locale,
};
use serde_json::{json, Value};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn engine() -> ForecastEngine {
    ForecastEngine::default().with_today(today())
}

fn series_from(start: NaiveDate, values: &[f64]) -> Value {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| json!({ "date": (start + Days::new(i as u64)).to_string(), "value": v }))
        .collect()
}

fn sample_values() -> Vec<f64> {
    vec![
        120.0, 135.0, 128.0, 160.0, 90.0, 110.0, 142.0, 131.0, 126.0, 400.0, 118.0, 121.0, 99.0,
        140.0, 133.0, -50.0, 127.0, 129.0, 138.0, 125.0,
    ]
}

fn sample_document(horizon: Value) -> Value {
    let start = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
    json!({ "series": series_from(start, &sample_values()), "horizon": horizon })
}

#[test]
fn test_forecast_length_matches_horizon() {
    for horizon in [1, 2, 7, 14, 30, 90] {
        let output = engine().run_value(&sample_document(json!(horizon)));
        assert_eq!(output.baseline.len(), horizon);
    }
}

#[test]
fn test_falsy_and_negative_horizon_use_default() {
    for horizon in [json!(0), json!(null), json!(false), json!(""), json!(-3), json!("soon")] {
        let output = engine().run_value(&sample_document(horizon.clone()));
        assert_eq!(output.baseline.len(), 14, "horizon {:?}", horizon);
    }
}

#[test]
fn test_horizon_beyond_a_century_is_not_cut() {
    let output = engine().run_value(&json!({
        "series": [{ "date": "2024-01-01", "value": 3 }],
        "horizon": 40_000
    }));
    let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(output.baseline.len(), 40_000);
    assert_eq!(output.baseline[39_999].date, first + Days::new(40_000));
}

#[test]
fn test_negative_seasonality_blends_with_period_one() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let values = [4.0, 9.0, 6.0, 11.0, 8.0];
    let output = engine().run_value(&json!({
        "series": series_from(start, &values),
        "seasonality": -3,
        "horizon": 4
    }));

    let trend = fit_linear_trend(&values);
    for (step, point) in output.baseline.iter().enumerate() {
        let linear = trend.at((values.len() + step) as f64);
        let expected = 0.6 * linear + 0.4 * 8.0;
        assert!(
            (point.value - expected).abs() < 1e-9,
            "step {}: {} vs {}",
            step + 1,
            point.value,
            expected
        );
    }
}

#[test]
fn test_loose_dates_are_dropped() {
    let output = engine().run_value(&json!({
        "series": [
            { "date": "2024-1-5", "value": 1 },
            { "date": " 2024-01-05", "value": 2 },
            { "date": "+2024-01-05", "value": 3 },
            { "date": "2024-01-06", "value": 4 }
        ]
    }));
    assert_eq!(output.history.len(), 1);
    assert_eq!(output.history.values(), vec![4.0]);
}

#[test]
fn test_zero_horizon_through_config_gives_empty_forecast() {
    let config = ForecastConfig::builder().horizon(0).build().unwrap();
    let output = ForecastEngine::new(config)
        .unwrap()
        .with_today(today())
        .run_value(&json!({ "series": [{ "date": "2024-01-01", "value": 4 }] }));
    assert!(output.baseline.is_empty());
}

#[test]
fn test_band_containment_and_dates() {
    let output = engine().run_value(&sample_document(json!(30)));
    let last = output.history.last().unwrap().date;

    for (i, point) in output.baseline.iter().enumerate() {
        assert!(point.lower <= point.value && point.value <= point.upper);
        assert_eq!(point.date, last + Days::new(i as u64 + 1));
    }
}

#[test]
fn test_history_is_sorted_and_cleaned() {
    let document = json!({
        "series": [
            { "date": "2024-03-05", "value": 5 },
            { "date": "2024-03-01", "value": "1" },
            { "date": "not a date", "value": 100 },
            { "date": "2024-03-03T10:00:00", "value": "three" },
            { "value": 7 },
            "2024-03-02",
            { "date": "2024-03-04", "value": null }
        ]
    });
    let output = engine().run_value(&document);
    let dates: Vec<String> = output.history.iter().map(|o| o.date.to_string()).collect();

    assert_eq!(dates, vec!["2024-03-01", "2024-03-03", "2024-03-04", "2024-03-05"]);
    assert_eq!(output.history.values(), vec![1.0, 0.0, 0.0, 5.0]);
    for pair in output.history.observations().windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}

#[test]
fn test_anomaly_thresholds_hold() {
    let output = engine().run_value(&sample_document(json!(7)));

    assert!(!output.anomalies.is_empty());
    for anomaly in &output.anomalies {
        assert!(anomaly.score.abs() > 1.5);
        let high = anomaly.score.abs() > 2.5;
        assert_eq!(anomaly.severity == forecast_facade::AnomalySeverity::High, high);
    }
    for pair in output.anomalies.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}

#[test]
fn test_short_series_never_has_anomalies() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for values in [vec![], vec![1.0], vec![1.0, 1000.0], vec![-500.0, 0.0]] {
        let output = engine().run_value(&json!({ "series": series_from(start, &values) }));
        assert!(output.anomalies.is_empty());
    }
}

#[test]
fn test_single_observation() {
    let output = engine().run_value(&json!({
        "series": [{ "date": "2024-12-31", "value": 40 }],
        "horizon": 3
    }));

    assert!((output.stats.std_deviation - 4.0).abs() < 1e-12);
    assert_eq!(output.stats.trend_slope, 0.0);
    assert!((output.stats.volatility_index - 0.1).abs() < 1e-12);
    assert_eq!(output.baseline[0].date.to_string(), "2025-01-01");
    // seasonality 7 exceeds one observation, so the value is the flat trend
    for point in &output.baseline {
        assert!((point.value - 40.0).abs() < 1e-12);
    }
}

#[test]
fn test_convenience_entry_point() {
    let output = forecast(br#"{"series": [{"date": "2024-01-01", "value": 2}], "horizon": 2}"#);
    assert_eq!(output.baseline.len(), 2);
    assert_eq!(output.baseline[0].date.to_string(), "2024-01-02");
}

#[test]
fn test_scenario_analysis() {
    let bytes = serde_json::to_vec(&sample_document(json!(10))).unwrap();
    let document = engine().with_locale(Locale::En).run_scenario(&bytes, Some("optimistic"));

    assert_eq!(document.scenario.name, "optimistic");
    assert_eq!(document.scenario.series.len(), 10);
    assert_eq!(document.forecast.baseline.len(), 10);
    for (point, base) in document.scenario.series.iter().zip(&document.forecast.baseline) {
        assert_eq!(point.baseline, base.value);
        assert_eq!(point.date, base.date);
    }
    // the sample series holds a high-severity spike
    assert!(document
        .recommendations
        .iter()
        .any(|card| card.title == "Anomaly Alarm" && card.severity == AdviceSeverity::Critical));

    let json = serde_json::to_value(&document).unwrap();
    assert!(json["baseline"].is_array());
    assert!(json["scenarios"]["pessimistic"]["summary"]["averageDaily"].is_number());
}

#[test]
fn test_ledger_to_forecast_pipeline() {
    let ledger = json!([
        { "date": "2024-05-01", "amount": 100, "type": "Incoming" },
        { "date": "2024-05-01", "amount": 30, "type": "Outgoing" },
        { "dueDate": "2024-05-03", "amount": "55.5" },
        { "date": "garbage", "amount": 1 }
    ]);
    let input = ledger_to_document(&ledger, &LedgerConfig { lookback_days: 3 });

    let series = input["series"].as_array().unwrap();
    assert_eq!(series.len(), 6);
    assert_eq!(series[0]["date"], "2024-04-28");
    assert_eq!(series[3], json!({ "date": "2024-05-01", "value": 70.0 }));
    assert_eq!(series[5], json!({ "date": "2024-05-03", "value": 55.5 }));

    let output = engine().run_value(&input);
    assert_eq!(output.history.len(), 6);
    assert_eq!(output.baseline[0].date.to_string(), "2024-05-04");
}
