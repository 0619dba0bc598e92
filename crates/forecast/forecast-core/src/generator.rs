//! Forecast generation
//!
//! Extends the fitted trend past the end of the history, blends it with the
//! seasonal reference and wraps each value in a confidence band.

use chrono::{Days, NaiveDate};
use forecast_api::ForecastConfig;
use forecast_spi::{ForecastPoint, History, Trend};
use tracing::{debug, warn};

use crate::confidence::SymmetricBand;
use crate::seasonality::SeasonalBlender;

/// Noise level reported when there is no history.
pub const EMPTY_HISTORY_NOISE_LEVEL: f64 = 500.0;
/// Band bound used for every point when there is no history.
pub const EMPTY_HISTORY_BOUND: f64 = 1000.0;

/// Forecast points with the noise level and slope they were built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastOutcome {
    pub points: Vec<ForecastPoint>,
    /// Noise level to report; overridden for an empty history
    pub noise_level: f64,
    /// Trend slope to report; zero for an empty history
    pub slope: f64,
}

/// Produces `horizon` dated forecast points.
#[derive(Debug, Clone, Copy)]
pub struct ForecastGenerator {
    horizon: usize,
    blender: SeasonalBlender,
    band: SymmetricBand,
}

impl ForecastGenerator {
    pub fn new(horizon: usize, blender: SeasonalBlender, band: SymmetricBand) -> Self {
        Self {
            horizon,
            blender,
            band,
        }
    }

    /// Generator for a run with the given horizon and seasonality.
    pub fn from_config(config: &ForecastConfig, horizon: usize, seasonality: usize) -> Self {
        Self::new(
            horizon,
            SeasonalBlender::new(seasonality, config.seasonal_weight),
            SymmetricBand::new(config.interval_multiplier),
        )
    }

    /// Generate the forecast. `today` anchors the dates when `history` is
    /// empty and is otherwise unused.
    pub fn generate(
        &self,
        history: &History,
        trend: Trend,
        noise_level: f64,
        today: NaiveDate,
    ) -> ForecastOutcome {
        let last = match history.last() {
            Some(last) => last,
            None => return self.empty_history_fallback(today),
        };

        let values = history.values();
        let n = values.len();
        let points: Vec<ForecastPoint> = (1..=self.horizon)
            .map_while(|step| {
                let Some(date) = last.date.checked_add_days(Days::new(step as u64)) else {
                    warn!(step, "forecast date out of calendar range, truncating");
                    return None;
                };
                let x = (n + step - 1) as f64;
                let baseline = self.blender.blend(&values, step, trend.at(x));
                Some(self.band.point(date, baseline, noise_level))
            })
            .collect();

        debug!(
            points = points.len(),
            seasonal = self.blender.applies_to(&values),
            "forecast generated"
        );

        ForecastOutcome {
            points,
            noise_level,
            slope: trend.slope,
        }
    }

    fn empty_history_fallback(&self, today: NaiveDate) -> ForecastOutcome {
        let points = (1..=self.horizon)
            .map_while(|step| today.checked_add_days(Days::new(step as u64)))
            .map(|date| ForecastPoint {
                date,
                value: 0.0,
                lower: -EMPTY_HISTORY_BOUND,
                upper: EMPTY_HISTORY_BOUND,
            })
            .collect();

        debug!(horizon = self.horizon, "empty history, using fallback forecast");

        ForecastOutcome {
            points,
            noise_level: EMPTY_HISTORY_NOISE_LEVEL,
            slope: 0.0,
        }
    }
}
