//! Rolling-window anomaly detection.
//!
//! Each point is compared with the mean of a short trailing window ending at
//! that point, so the detector follows local level shifts instead of
//! measuring everything against one global mean.

use forecast_api::AnomalyConfig;
use forecast_spi::{AnomalyDetector, AnomalyKind, AnomalyRecord, AnomalySeverity, History};
use tracing::debug;

/// Trailing-window detector scoring deviations in noise-level units.
#[derive(Debug, Clone, Copy)]
pub struct RollingWindowDetector {
    config: AnomalyConfig,
}

impl RollingWindowDetector {
    pub fn new(config: AnomalyConfig) -> Self {
        Self { config }
    }

    /// Severity tier for a score, `None` at or below the warning threshold.
    pub fn classify(&self, score: f64) -> Option<AnomalySeverity> {
        let magnitude = score.abs();
        if magnitude > self.config.high_threshold {
            Some(AnomalySeverity::High)
        } else if magnitude > self.config.warning_threshold {
            Some(AnomalySeverity::Warning)
        } else {
            None
        }
    }
}

impl Default for RollingWindowDetector {
    fn default() -> Self {
        Self::new(AnomalyConfig::default())
    }
}

impl AnomalyDetector for RollingWindowDetector {
    fn detect(&self, history: &History, noise_level: f64) -> Vec<AnomalyRecord> {
        let n = history.len();
        let window = self.config.window_for(n);
        if n < window || noise_level == 0.0 || !noise_level.is_finite() {
            debug!(n, window, noise_level, "anomaly scan skipped");
            return Vec::new();
        }

        let values = history.values();
        let records: Vec<AnomalyRecord> = history
            .iter()
            .enumerate()
            .filter_map(|(i, observation)| {
                let start = (i + 1).saturating_sub(window);
                let trailing = &values[start..=i];
                let baseline = trailing.iter().sum::<f64>() / trailing.len() as f64;
                let score = (observation.value - baseline) / noise_level;

                self.classify(score).map(|severity| AnomalyRecord {
                    date: observation.date,
                    value: observation.value,
                    score,
                    severity,
                    kind: AnomalyKind::UnexpectedTrendMovement,
                })
            })
            .collect();

        debug!(n, window, flagged = records.len(), "anomaly scan complete");
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use forecast_spi::Observation;

    fn daily(values: &[f64]) -> History {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        History::from_unsorted(
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| Observation::new(start + Days::new(i as u64), v))
                .collect(),
        )
    }

    #[test]
    fn test_classify_thresholds() {
        let detector = RollingWindowDetector::default();
        assert_eq!(detector.classify(1.5), None);
        assert_eq!(detector.classify(-1.2), None);
        assert_eq!(detector.classify(1.6), Some(AnomalySeverity::Warning));
        assert_eq!(detector.classify(-2.5), Some(AnomalySeverity::Warning));
        assert_eq!(detector.classify(2.51), Some(AnomalySeverity::High));
        assert_eq!(detector.classify(-4.0), Some(AnomalySeverity::High));
    }

    #[test]
    fn test_short_history_yields_nothing() {
        let detector = RollingWindowDetector::default();
        assert!(detector.detect(&daily(&[]), 1.0).is_empty());
        assert!(detector.detect(&daily(&[1.0]), 0.01).is_empty());
        assert!(detector.detect(&daily(&[1.0, 100.0]), 0.01).is_empty());
    }

    #[test]
    fn test_zero_noise_skips_detection() {
        let detector = RollingWindowDetector::default();
        assert!(detector.detect(&daily(&[1.0, 50.0, 1.0, 1.0]), 0.0).is_empty());
    }

    #[test]
    fn test_spike_is_flagged_high() {
        let mut values = vec![10.0; 10];
        values.push(100.0);
        let history = daily(&values);
        let noise = crate::descriptive::population_std_dev(&values).unwrap();

        let records = RollingWindowDetector::default().detect(&history, noise);

        assert_eq!(records.len(), 1);
        let spike = &records[0];
        assert_eq!(spike.date, NaiveDate::from_ymd_opt(2024, 1, 11).unwrap());
        assert_eq!(spike.value, 100.0);
        assert_eq!(spike.severity, AnomalySeverity::High);
        assert!(spike.score > 2.5);
        assert_eq!(spike.kind, AnomalyKind::UnexpectedTrendMovement);
    }

    #[test]
    fn test_drop_scores_negative() {
        let values = [10.0, 10.0, 10.0, 10.0, -20.0];
        let records = RollingWindowDetector::default().detect(&daily(&values), 5.0);

        assert_eq!(records.len(), 1);
        assert!(records[0].score < -2.5);
        assert_eq!(records[0].severity, AnomalySeverity::High);
    }

    #[test]
    fn test_warning_tier() {
        // window of 3 over [0, 0, 3]: baseline 1, deviation 2, score 2 / 1 = 2
        let records = RollingWindowDetector::default().detect(&daily(&[0.0, 0.0, 3.0]), 1.0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity, AnomalySeverity::Warning);
        assert!((records[0].score - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_flat_series_has_no_anomalies() {
        let records = RollingWindowDetector::default().detect(&daily(&[5.0; 12]), 0.75);
        assert!(records.is_empty());
    }

    #[test]
    fn test_records_follow_history_order() {
        let values = [0.0, 0.0, 0.0, 9.0, 0.0, 0.0, 0.0, 0.0, -9.0, 0.0];
        let records = RollingWindowDetector::default().detect(&daily(&values), 1.0);

        assert!(records.len() >= 2);
        for pair in records.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        for record in &records {
            assert!(record.score.abs() > 1.5);
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let detector = RollingWindowDetector::new(AnomalyConfig {
            warning_threshold: 0.5,
            high_threshold: 10.0,
            ..AnomalyConfig::default()
        });
        let records = detector.detect(&daily(&[0.0, 0.0, 3.0]), 1.0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity, AnomalySeverity::Warning);
    }
}
