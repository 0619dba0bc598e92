//! Confidence band construction
//!
//! Bands are symmetric around the baseline with a half-width proportional to
//! the noise level. The default multiplier of 1.28 is roughly the 80%
//! one-sided normal quantile.

use chrono::NaiveDate;
use forecast_spi::ForecastPoint;

/// Symmetric band of half-width `multiplier * noise_level`.
#[derive(Debug, Clone, Copy)]
pub struct SymmetricBand {
    multiplier: f64,
}

impl SymmetricBand {
    pub fn new(multiplier: f64) -> Self {
        Self {
            multiplier: multiplier.abs(),
        }
    }

    /// Half-width of the band for the given noise level.
    pub fn half_width(&self, noise_level: f64) -> f64 {
        self.multiplier * noise_level.abs()
    }

    pub fn point(&self, date: NaiveDate, baseline: f64, noise_level: f64) -> ForecastPoint {
        ForecastPoint::symmetric(date, baseline, self.half_width(noise_level))
    }
}

impl Default for SymmetricBand {
    fn default() -> Self {
        Self::new(1.28)
    }
}
