//! Built-in what-if scenarios.

use forecast_spi::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Deterministic adjustment applied on top of a forecast baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub label: String,
    /// Relative growth reached by the last forecast period
    pub growth_bias: f64,
    /// Multiplier applied to the confidence band gaps
    pub volatility_factor: f64,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        growth_bias: f64,
        volatility_factor: f64,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            growth_bias,
            volatility_factor,
        }
    }

    pub fn optimistic() -> Self {
        Self::new("optimistic", "Optimistic", 0.12, 0.75)
    }

    pub fn pessimistic() -> Self {
        Self::new("pessimistic", "Pessimistic", -0.08, 1.35)
    }

    /// All built-in scenarios, the default one first.
    pub fn builtin() -> Vec<Scenario> {
        vec![Self::optimistic(), Self::pessimistic()]
    }

    /// Look up a built-in scenario by name.
    pub fn find(name: &str) -> Result<Scenario> {
        let wanted = name.trim().to_ascii_lowercase();
        Self::builtin()
            .into_iter()
            .find(|scenario| scenario.name == wanted)
            .ok_or_else(|| ForecastError::UnknownScenario(name.to_string()))
    }

    /// Look up a built-in scenario, falling back to the optimistic one.
    pub fn resolve(name: Option<&str>) -> Scenario {
        name.and_then(|name| Self::find(name).ok())
            .unwrap_or_else(Self::optimistic)
    }
}
