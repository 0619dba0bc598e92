//! Forecast a short daily series and print the result.
//!
//! Run with: cargo run -p forecast-facade --example basic

use forecast_facade::{ForecastEngine, Locale};
use serde_json::json;

fn main() {
    let input = json!({
        "series": [
            { "date": "2024-09-01", "value": 120.0 },
            { "date": "2024-09-02", "value": 132.5 },
            { "date": "2024-09-03", "value": 118.0 },
            { "date": "2024-09-04", "value": 141.0 },
            { "date": "2024-09-05", "value": 127.0 },
            { "date": "2024-09-06", "value": 310.0 },
            { "date": "2024-09-07", "value": 125.0 },
            { "date": "2024-09-08", "value": 129.5 }
        ],
        "horizon": 5,
        "seasonality": 7
    });

    let engine = ForecastEngine::default().with_locale(Locale::En);
    let output = engine.run_value(&input);

    println!("Forecast");
    for point in &output.baseline {
        println!(
            "  {}  {:>8.2}  [{:>8.2}, {:>8.2}]",
            point.date, point.value, point.lower, point.upper
        );
    }

    println!(
        "\nmean {:.2}  std {:.2}  slope {:.3}",
        output.stats.mean, output.stats.std_deviation, output.stats.trend_slope
    );

    for anomaly in &output.anomalies {
        println!(
            "anomaly {} value {:.1} score {:.2} ({})",
            anomaly.date, anomaly.value, anomaly.score, anomaly.severity
        );
    }
}
