//! Noise level estimation
//!
//! The noise level is the first usable result of an ordered list of
//! estimators. A result is usable when it exists, is finite and is non-zero,
//! so short or perfectly flat series still get a positive dispersion.

use forecast_spi::NoiseEstimator;
use tracing::debug;

use crate::descriptive::{mean, population_std_dev};

/// Returned when every estimator in the chain declines.
pub const DEFAULT_NOISE_LEVEL: f64 = 1.0;

/// Population standard deviation, for series of two or more values.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopulationStdDev;

impl NoiseEstimator for PopulationStdDev {
    fn name(&self) -> &'static str {
        "population_std_dev"
    }

    fn estimate(&self, values: &[f64]) -> Option<f64> {
        if values.len() > 1 {
            population_std_dev(values)
        } else {
            None
        }
    }
}

/// A fraction of the magnitude of a lone observation.
#[derive(Debug, Clone, Copy)]
pub struct LastValueFraction {
    pub fraction: f64,
}

impl Default for LastValueFraction {
    fn default() -> Self {
        Self { fraction: 0.1 }
    }
}

impl NoiseEstimator for LastValueFraction {
    fn name(&self) -> &'static str {
        "last_value_fraction"
    }

    fn estimate(&self, values: &[f64]) -> Option<f64> {
        match values {
            [only] => Some(self.fraction * only.abs()),
            _ => None,
        }
    }
}

/// A fraction of the magnitude of the series mean.
#[derive(Debug, Clone, Copy)]
pub struct MeanFraction {
    pub fraction: f64,
}

impl Default for MeanFraction {
    fn default() -> Self {
        Self { fraction: 0.15 }
    }
}

impl NoiseEstimator for MeanFraction {
    fn name(&self) -> &'static str {
        "mean_fraction"
    }

    fn estimate(&self, values: &[f64]) -> Option<f64> {
        mean(values).map(|m| self.fraction * m.abs())
    }
}

/// A fixed level, independent of the data.
#[derive(Debug, Clone, Copy)]
pub struct ConstantNoise {
    pub level: f64,
}

impl Default for ConstantNoise {
    fn default() -> Self {
        Self {
            level: DEFAULT_NOISE_LEVEL,
        }
    }
}

impl NoiseEstimator for ConstantNoise {
    fn name(&self) -> &'static str {
        "constant"
    }

    fn estimate(&self, _values: &[f64]) -> Option<f64> {
        Some(self.level)
    }
}

/// Noise level together with the estimator that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseEstimate {
    pub level: f64,
    pub source: &'static str,
}

/// Ordered chain of estimators; the first usable result wins.
pub struct NoiseCascade {
    tiers: Vec<Box<dyn NoiseEstimator>>,
}

impl NoiseCascade {
    /// Empty chain. Every series falls through to [`DEFAULT_NOISE_LEVEL`].
    pub fn new() -> Self {
        Self { tiers: Vec::new() }
    }

    /// Standard deviation, then lone-value fraction, then mean fraction,
    /// then the constant 1.0.
    pub fn standard() -> Self {
        Self::new()
            .with(PopulationStdDev)
            .with(LastValueFraction::default())
            .with(MeanFraction::default())
            .with(ConstantNoise::default())
    }

    pub fn with(mut self, estimator: impl NoiseEstimator + 'static) -> Self {
        self.tiers.push(Box::new(estimator));
        self
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn estimate(&self, values: &[f64]) -> NoiseEstimate {
        let chosen = self.tiers.iter().find_map(|tier| {
            tier.estimate(values)
                .filter(|level| level.is_finite() && *level != 0.0)
                .map(|level| NoiseEstimate {
                    level,
                    source: tier.name(),
                })
        });

        let estimate = chosen.unwrap_or(NoiseEstimate {
            level: DEFAULT_NOISE_LEVEL,
            source: "default",
        });
        debug!(level = estimate.level, source = estimate.source, "noise level estimated");
        estimate
    }
}

impl Default for NoiseCascade {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for NoiseCascade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.tiers.iter().map(|tier| tier.name()))
            .finish()
    }
}
