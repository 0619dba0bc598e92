//! Trait for noise estimation

/// One candidate estimate of a series' dispersion.
///
/// Returning `None` means the estimator does not apply to this series; a
/// caller chaining estimators also skips zero results.
pub trait NoiseEstimator: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Estimate the noise level of `values`
    fn estimate(&self, values: &[f64]) -> Option<f64>;
}
