//! Summary statistics reported with every forecast.

use serde::{Deserialize, Serialize};

/// Summary statistics of the history and the fitted model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub mean: f64,
    /// Noise level used for the confidence band
    pub std_deviation: f64,
    pub trend_slope: f64,
    /// Noise level relative to the latest value
    pub volatility_index: f64,
    pub latest_value: f64,
}
