//! Recommendation cards derived from a scenario and the forecast stats.

use forecast_spi::{
    Advice, Anomaly, AnomalySeverity, Localizer, Recommendation, ScenarioSummary, Stats,
};

/// Volatility index above which the volatility card is added.
pub const VOLATILITY_ALERT_LEVEL: f64 = 1.2;

/// Structured advice for the given inputs, in display order.
pub fn advise(summary: &ScenarioSummary, stats: &Stats, anomalies: &[Anomaly]) -> Vec<Advice> {
    let mut advice = Vec::new();

    if summary.change > 0.0 {
        advice.push(Advice::PositiveTrend {
            change: summary.change,
        });
    } else if summary.change < 0.0 {
        advice.push(Advice::NegativeTrendRisk {
            change: summary.change,
        });
    }

    if stats.volatility_index > VOLATILITY_ALERT_LEVEL {
        advice.push(Advice::RisingVolatility);
    }

    if stats.trend_slope < 0.0 {
        advice.push(Advice::DownwardTrend);
    }

    if !anomalies.is_empty() {
        let severe = anomalies
            .iter()
            .find(|anomaly| anomaly.severity == AnomalySeverity::High);
        advice.push(match severe {
            Some(anomaly) => Advice::AnomalyAlarm {
                date: anomaly.date,
                value: anomaly.value,
            },
            None => Advice::SensitiveDays,
        });
    }

    if advice.is_empty() {
        advice.push(Advice::StableOutlook);
    }
    advice
}

/// Render advice into cards.
pub fn recommend(
    summary: &ScenarioSummary,
    stats: &Stats,
    anomalies: &[Anomaly],
    localizer: &dyn Localizer,
) -> Vec<Recommendation> {
    advise(summary, stats, anomalies)
        .into_iter()
        .map(|advice| {
            let (title, description) = localizer.advice(&advice);
            Recommendation {
                title,
                severity: advice.severity(),
                description,
            }
        })
        .collect()
}
