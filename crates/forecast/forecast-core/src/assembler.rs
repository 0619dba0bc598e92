//! Response assembly.

use forecast_spi::{AnomalyRecord, ForecastDocument, History, Localizer, Stats};

use crate::descriptive::mean;
use crate::generator::ForecastOutcome;

/// Summary statistics for a history and the reported noise level and slope.
pub fn compute_stats(history: &History, noise_level: f64, slope: f64) -> Stats {
    let values = history.values();
    let latest_value = history.last().map(|o| o.value).unwrap_or(0.0);
    let volatility_index = if latest_value != 0.0 {
        noise_level / latest_value.abs()
    } else {
        0.0
    };

    Stats {
        mean: mean(&values).unwrap_or(0.0),
        std_deviation: noise_level,
        trend_slope: slope,
        volatility_index,
        latest_value,
    }
}

/// Combine forecast, history and anomalies into the output document.
pub fn assemble(
    history: History,
    outcome: ForecastOutcome,
    anomalies: Vec<AnomalyRecord>,
    localizer: &dyn Localizer,
) -> ForecastDocument {
    let stats = compute_stats(&history, outcome.noise_level, outcome.slope);
    let anomalies = anomalies
        .into_iter()
        .map(|record| {
            let description = localizer.anomaly_description(record.kind);
            record.with_description(description)
        })
        .collect();

    ForecastDocument {
        baseline: outcome.points,
        history,
        stats,
        anomalies,
    }
}
