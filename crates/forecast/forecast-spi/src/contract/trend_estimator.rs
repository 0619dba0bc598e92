//! Trait for trend estimation

use crate::model::Trend;

/// Fits a trend over values indexed `0..n`
pub trait TrendEstimator: Send + Sync {
    /// Estimate the trend of `values`
    fn estimate(&self, values: &[f64]) -> Trend;
}
