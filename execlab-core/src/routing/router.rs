//! Order book routing: match a requested quantity against priced liquidity.

use crate::domain::{BookSide, Fill, LiquidityBook, PriceLevel};

/// Result of an impact-capped walk over pre-ordered levels.
///
/// The executed quantity is exposed alongside the price so callers can detect
/// under-fill themselves; stopping at the cap is not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CappedFill {
    pub avg_price: f64,
    pub executed_qty: f64,
}

impl CappedFill {
    pub fn is_under_filled(&self, target_qty: f64) -> bool {
        self.executed_qty < target_qty
    }
}

/// Match `qty` against the book, consuming best-priced liquidity first.
///
/// Buys walk levels ascending by price (cheapest ask first); sells walk
/// descending (highest bid first). Levels are consumed up to their size until
/// the request is filled or the book is exhausted. Returns `None` only when
/// nothing could be filled — a partial fill is returned as a `Fill` with
/// `filled_qty < requested_qty`.
pub fn route(book: &LiquidityBook, qty: f64, side: BookSide) -> Option<Fill> {
    if qty <= 0.0 {
        return None;
    }

    let mut levels = book.levels.clone();
    match side {
        BookSide::Buy => levels.sort_by(|a, b| {
            a.price
                .partial_cmp(&b.price)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        BookSide::Sell => levels.sort_by(|a, b| {
            b.price
                .partial_cmp(&a.price)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }

    let mut filled_qty = 0.0;
    let mut value = 0.0;
    for level in &levels {
        let consumed = (qty - filled_qty).min(level.size);
        value += consumed * level.price;
        filled_qty += consumed;
        if filled_qty >= qty {
            break;
        }
    }

    if filled_qty == 0.0 {
        return None;
    }
    Some(Fill {
        avg_price: value / filled_qty,
        filled_qty,
        requested_qty: qty,
    })
}

/// Walk levels in their quoted order, stopping once the relative price
/// deviation from the first level exceeds `max_impact`.
///
/// Unlike [`route`], the book is not re-sorted: the caller controls execution
/// priority. A level beyond the cap is never consumed, even partially.
/// Returns `None` only when zero quantity executed.
pub fn route_with_impact_cap(
    levels: &[PriceLevel],
    target_qty: f64,
    max_impact: f64,
) -> Option<CappedFill> {
    if target_qty <= 0.0 || levels.is_empty() {
        return None;
    }

    let reference_price = levels[0].price;
    let mut executed_qty = 0.0;
    let mut executed_value = 0.0;

    for level in levels {
        let deviation = ((level.price - reference_price) / reference_price).abs();
        if deviation > max_impact {
            break;
        }
        let consumed = (target_qty - executed_qty).min(level.size);
        executed_value += consumed * level.price;
        executed_qty += consumed;
        if executed_qty >= target_qty {
            break;
        }
    }

    if executed_qty == 0.0 {
        return None;
    }
    Some(CappedFill {
        avg_price: executed_value / executed_qty,
        executed_qty,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask_book() -> LiquidityBook {
        LiquidityBook::new(vec![
            PriceLevel::new(100.2, 700.0),
            PriceLevel::new(100.0, 500.0),
            PriceLevel::new(100.1, 600.0),
        ])
    }

    #[test]
    fn buy_consumes_cheapest_first() {
        let fill = route(&ask_book(), 500.0, BookSide::Buy).unwrap();
        assert_eq!(fill.filled_qty, 500.0);
        assert_eq!(fill.avg_price, 100.0);
        assert!(!fill.is_partial());
    }

    #[test]
    fn buy_walks_up_the_book() {
        let fill = route(&ask_book(), 800.0, BookSide::Buy).unwrap();
        assert_eq!(fill.filled_qty, 800.0);
        // 500 @ 100.0 + 300 @ 100.1
        let expected = (500.0 * 100.0 + 300.0 * 100.1) / 800.0;
        assert!((fill.avg_price - expected).abs() < 1e-12);
    }

    #[test]
    fn sell_consumes_highest_bid_first() {
        let fill = route(&ask_book(), 700.0, BookSide::Sell).unwrap();
        assert_eq!(fill.filled_qty, 700.0);
        assert_eq!(fill.avg_price, 100.2);
    }

    #[test]
    fn partial_fill_when_book_lacks_depth() {
        let fill = route(&ask_book(), 5000.0, BookSide::Buy).unwrap();
        assert_eq!(fill.filled_qty, 1800.0);
        assert!(fill.is_partial());
        assert_eq!(fill.requested_qty, 5000.0);
    }

    #[test]
    fn empty_book_yields_none() {
        assert_eq!(route(&LiquidityBook::default(), 100.0, BookSide::Buy), None);
    }

    #[test]
    fn non_positive_qty_yields_none() {
        assert_eq!(route(&ask_book(), 0.0, BookSide::Buy), None);
        assert_eq!(route(&ask_book(), -10.0, BookSide::Sell), None);
    }

    #[test]
    fn duplicate_price_levels_are_summed_by_traversal() {
        let book = LiquidityBook::new(vec![
            PriceLevel::new(100.0, 300.0),
            PriceLevel::new(100.0, 300.0),
        ]);
        let fill = route(&book, 600.0, BookSide::Buy).unwrap();
        assert_eq!(fill.filled_qty, 600.0);
        assert_eq!(fill.avg_price, 100.0);
    }

    #[test]
    fn impact_cap_halts_the_walk() {
        // Third level is 0.2% away from the first — beyond a 0.1% cap.
        let levels = [
            PriceLevel::new(100.0, 500.0),
            PriceLevel::new(100.05, 400.0),
            PriceLevel::new(100.2, 900.0),
        ];
        let fill = route_with_impact_cap(&levels, 1500.0, 0.001).unwrap();
        assert_eq!(fill.executed_qty, 900.0);
        assert!(fill.is_under_filled(1500.0));
        let expected = (500.0 * 100.0 + 400.0 * 100.05) / 900.0;
        assert!((fill.avg_price - expected).abs() < 1e-12);
    }

    #[test]
    fn impact_cap_does_not_resort_levels() {
        // Quoted order starts at the expensive level; deviation is measured
        // from it, not from the best price.
        let levels = [
            PriceLevel::new(100.2, 200.0),
            PriceLevel::new(100.1, 200.0),
            PriceLevel::new(100.0, 200.0),
        ];
        let fill = route_with_impact_cap(&levels, 600.0, 0.005).unwrap();
        assert_eq!(fill.executed_qty, 600.0);
    }

    #[test]
    fn impact_cap_full_fill_within_cap() {
        let levels = [
            PriceLevel::new(100.1, 500.0),
            PriceLevel::new(100.2, 700.0),
        ];
        let fill = route_with_impact_cap(&levels, 1000.0, 0.01).unwrap();
        assert_eq!(fill.executed_qty, 1000.0);
        assert!(!fill.is_under_filled(1000.0));
    }

    #[test]
    fn first_level_beyond_cap_yields_none_only_if_nothing_executes() {
        // The first level is its own reference, so it always executes;
        // None requires an empty book or non-positive target.
        assert_eq!(route_with_impact_cap(&[], 100.0, 0.001), None);
        let levels = [PriceLevel::new(100.0, 50.0)];
        assert_eq!(route_with_impact_cap(&levels, 0.0, 0.001), None);
    }
}
