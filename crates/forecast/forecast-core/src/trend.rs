//! Linear trend estimation
//!
//! Ordinary least squares of the values against their index.

use forecast_spi::{Trend, TrendEstimator};

/// Closed-form OLS fit over indices `0..n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSquaresTrend;

impl LeastSquaresTrend {
    pub fn new() -> Self {
        Self
    }
}

impl TrendEstimator for LeastSquaresTrend {
    fn estimate(&self, values: &[f64]) -> Trend {
        fit_linear_trend(values)
    }
}

/// Fit `value = intercept + slope * index`.
///
/// An empty series gives a zero trend and a single value gives a flat line
/// through it.
pub fn fit_linear_trend(values: &[f64]) -> Trend {
    match values {
        [] => Trend::default(),
        [only] => Trend::new(0.0, *only),
        _ => {
            let n = values.len() as f64;
            let x_mean = (n - 1.0) / 2.0;
            let y_mean = values.iter().sum::<f64>() / n;

            let mut covariance = 0.0;
            let mut x_variance = 0.0;
            for (i, &y) in values.iter().enumerate() {
                let dx = i as f64 - x_mean;
                covariance += dx * (y - y_mean);
                x_variance += dx * dx;
            }
            if x_variance == 0.0 {
                x_variance = 1.0;
            }

            let slope = covariance / x_variance;
            Trend::new(slope, y_mean - slope * x_mean)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series() {
        let trend = fit_linear_trend(&[]);
        assert_eq!(trend.slope, 0.0);
        assert_eq!(trend.intercept, 0.0);
    }

    #[test]
    fn test_single_value() {
        let trend = fit_linear_trend(&[42.0]);
        assert_eq!(trend.slope, 0.0);
        assert_eq!(trend.intercept, 42.0);
    }

    #[test]
    fn test_perfect_line() {
        let values: Vec<f64> = (0..10).map(|i| 3.0 + 2.0 * i as f64).collect();
        let trend = LeastSquaresTrend::new().estimate(&values);

        assert!((trend.slope - 2.0).abs() < 1e-10);
        assert!((trend.intercept - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_constant_series_is_flat() {
        let trend = fit_linear_trend(&[5.0; 10]);
        assert!(trend.slope.abs() < 1e-12);
        assert!((trend.intercept - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_points() {
        let trend = fit_linear_trend(&[1.0, 4.0]);
        assert!((trend.slope - 3.0).abs() < 1e-12);
        assert!((trend.intercept - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_noisy_downward_series() {
        let values = [10.0, 9.5, 8.0, 8.2, 6.9, 6.0];
        let trend = fit_linear_trend(&values);
        assert!(trend.slope < 0.0);
        // line passes through the centroid
        let centroid = trend.at(2.5);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        assert!((centroid - mean).abs() < 1e-10);
    }
}
