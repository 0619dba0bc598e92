//! Anomaly detector trait definition.

use crate::model::{AnomalyRecord, History};

/// Flags historical points that deviate from their expected level.
pub trait AnomalyDetector: Send + Sync {
    /// Scan `history`, scoring deviations in units of `noise_level`.
    ///
    /// Returns records in history order; an empty list when the detector's
    /// preconditions are not met.
    fn detect(&self, history: &History, noise_level: f64) -> Vec<AnomalyRecord>;
}
