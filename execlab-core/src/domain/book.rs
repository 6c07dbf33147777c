//! Liquidity book — the priced depth snapshot the router matches against.

use serde::{Deserialize, Serialize};

/// One quoted liquidity tranche. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: f64,
    pub size: f64,
}

impl PriceLevel {
    pub fn new(price: f64, size: f64) -> Self {
        Self { price, size }
    }
}

/// Side of the incoming order being routed.
///
/// A buy consumes ask-side liquidity (cheapest first); a sell consumes
/// bid-side liquidity (highest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookSide {
    Buy,
    Sell,
}

/// Snapshot of resting liquidity, as supplied by the market-data collaborator.
///
/// Levels are not assumed merged: duplicate prices are legal and are summed
/// implicitly by traversal. Sizes must be non-negative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiquidityBook {
    pub levels: Vec<PriceLevel>,
}

impl LiquidityBook {
    pub fn new(levels: Vec<PriceLevel>) -> Self {
        Self { levels }
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Total resting size across all levels.
    pub fn total_size(&self) -> f64 {
        self.levels.iter().map(|l| l.size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_size_sums_levels() {
        let book = LiquidityBook::new(vec![
            PriceLevel::new(100.0, 500.0),
            PriceLevel::new(100.1, 700.0),
        ]);
        assert_eq!(book.total_size(), 1200.0);
        assert!(!book.is_empty());
    }

    #[test]
    fn empty_book() {
        let book = LiquidityBook::default();
        assert!(book.is_empty());
        assert_eq!(book.total_size(), 0.0);
    }

    #[test]
    fn book_serialization_roundtrip() {
        let book = LiquidityBook::new(vec![PriceLevel::new(99.5, 100.0)]);
        let json = serde_json::to_string(&book).unwrap();
        let deser: LiquidityBook = serde_json::from_str(&json).unwrap();
        assert_eq!(deser.levels, book.levels);
    }
}
