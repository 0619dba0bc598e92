//! Ledger records used to build daily series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Incoming,
    Outgoing,
}

/// A dated, signed amount from a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub date: NaiveDate,
    pub amount: f64,
    pub direction: Direction,
}

impl LedgerRecord {
    pub fn new(date: NaiveDate, amount: f64, direction: Direction) -> Self {
        Self {
            date,
            amount,
            direction,
        }
    }

    /// Amount with outgoing movements counted as negative.
    pub fn signed_amount(&self) -> f64 {
        if !self.amount.is_finite() {
            return 0.0;
        }
        match self.direction {
            Direction::Outgoing if self.amount > 0.0 => -self.amount,
            _ => self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(LedgerRecord::new(date(), 50.0, Direction::Incoming).signed_amount(), 50.0);
        assert_eq!(LedgerRecord::new(date(), 50.0, Direction::Outgoing).signed_amount(), -50.0);
        // already negative outgoing amounts stay as they are
        assert_eq!(LedgerRecord::new(date(), -20.0, Direction::Outgoing).signed_amount(), -20.0);
    }

    #[test]
    fn test_non_finite_amount_counts_as_zero() {
        let record = LedgerRecord::new(date(), f64::NAN, Direction::Incoming);
        assert_eq!(record.signed_amount(), 0.0);
    }
}
