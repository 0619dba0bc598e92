//! Seasonal blending
//!
//! Pulls the linear baseline toward the value observed at the same phase of
//! the most recent full cycle.

/// Blends a linear baseline with same-phase history.
#[derive(Debug, Clone, Copy)]
pub struct SeasonalBlender {
    period: usize,
    weight: f64,
}

impl SeasonalBlender {
    /// `period` is floored at 1; `weight` is the share of the historical value.
    pub fn new(period: usize, weight: f64) -> Self {
        Self {
            period: period.max(1),
            weight,
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Whether `values` hold at least one full cycle.
    pub fn applies_to(&self, values: &[f64]) -> bool {
        values.len() >= self.period
    }

    /// Value at the same phase as forecast step `step` (1-based) in the last
    /// full cycle of `values`.
    pub fn historical_reference(&self, values: &[f64], step: usize) -> Option<f64> {
        if !self.applies_to(values) || step == 0 {
            return None;
        }
        let start = values.len() - self.period;
        values.get(start + (step - 1) % self.period).copied()
    }

    /// Blended baseline for forecast step `step`; the linear value unchanged
    /// when history is shorter than one cycle.
    pub fn blend(&self, values: &[f64], step: usize, linear: f64) -> f64 {
        match self.historical_reference(values, step) {
            Some(reference) => (1.0 - self.weight) * linear + self.weight * reference,
            None => linear,
        }
    }
}
