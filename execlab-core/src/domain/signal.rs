//! Directional signal — the classified output of an external forecaster.

use serde::{Deserialize, Serialize};

/// Desired direction for one bar: buy (+1), sell (-1), or hold (0).
///
/// Signals express what the forecaster wants, not what the portfolio holds.
/// The strategy state machine decides whether a signal actually changes the
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// Conventional integer encoding: +1 buy, -1 sell, 0 hold.
    pub fn as_i8(&self) -> i8 {
        match self {
            Signal::Buy => 1,
            Signal::Sell => -1,
            Signal::Hold => 0,
        }
    }

    pub fn is_hold(&self) -> bool {
        matches!(self, Signal::Hold)
    }

    pub fn is_directional(&self) -> bool {
        !self.is_hold()
    }
}

impl From<i8> for Signal {
    fn from(v: i8) -> Self {
        match v.signum() {
            1 => Signal::Buy,
            -1 => Signal::Sell,
            _ => Signal::Hold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_roundtrip() {
        assert_eq!(Signal::from(1), Signal::Buy);
        assert_eq!(Signal::from(-1), Signal::Sell);
        assert_eq!(Signal::from(0), Signal::Hold);
        assert_eq!(Signal::Buy.as_i8(), 1);
        assert_eq!(Signal::Sell.as_i8(), -1);
        assert_eq!(Signal::Hold.as_i8(), 0);
    }

    #[test]
    fn signum_collapses_magnitudes() {
        assert_eq!(Signal::from(7), Signal::Buy);
        assert_eq!(Signal::from(-3), Signal::Sell);
    }

    #[test]
    fn directionality() {
        assert!(Signal::Buy.is_directional());
        assert!(Signal::Sell.is_directional());
        assert!(Signal::Hold.is_hold());
    }
}
