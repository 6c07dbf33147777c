//! Fill record produced by the router.

use serde::{Deserialize, Serialize};

/// Result of matching a requested quantity against a liquidity book.
///
/// Invariants: `filled_qty <= requested_qty`, and `avg_price` is the
/// quantity-weighted mean of only the levels actually consumed. A partial
/// fill is data, not an error — callers decide how to react.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub avg_price: f64,
    pub filled_qty: f64,
    pub requested_qty: f64,
}

impl Fill {
    /// True when the book lacked depth to fill the full request.
    pub fn is_partial(&self) -> bool {
        self.filled_qty < self.requested_qty
    }

    /// Notional value of the fill.
    pub fn notional(&self) -> f64 {
        self.avg_price * self.filled_qty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_fill_detected() {
        let fill = Fill {
            avg_price: 100.0,
            filled_qty: 800.0,
            requested_qty: 1000.0,
        };
        assert!(fill.is_partial());
        assert_eq!(fill.notional(), 80_000.0);
    }

    #[test]
    fn full_fill_is_not_partial() {
        let fill = Fill {
            avg_price: 100.0,
            filled_qty: 1000.0,
            requested_qty: 1000.0,
        };
        assert!(!fill.is_partial());
    }
}
