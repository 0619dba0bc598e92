//! Parsed forecast request.

use super::History;

/// A forecast request after parsing and default resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub history: History,
    /// Number of future periods to produce
    pub horizon: usize,
    /// Cycle length used for seasonal blending, at least 1
    pub seasonality: usize,
}

impl ForecastRequest {
    pub fn new(history: History, horizon: usize, seasonality: usize) -> Self {
        Self {
            history,
            horizon,
            seasonality: seasonality.max(1),
        }
    }
}
