//! Volatility-aware stop levels and position sizing.

use super::{RiskError, EPSILON};

/// Stop price below entry: the wider of the base stop fraction and realized
/// volatility, applied to the entry price.
pub fn stop_loss_price(entry_price: f64, volatility: f64, base_stop: f64) -> f64 {
    entry_price * (1.0 - base_stop.max(volatility))
}

/// Evaluate the dynamic stop against the current price.
///
/// Returns `(stop_price, triggered)` where `triggered` means the current
/// price is at or below the stop.
pub fn check_stop(
    entry_price: f64,
    current_price: f64,
    volatility: f64,
    base_stop: f64,
) -> (f64, bool) {
    let stop_price = stop_loss_price(entry_price, volatility, base_stop);
    (stop_price, current_price <= stop_price)
}

/// Risk-budgeted position size.
///
/// The dollar risk budget (`balance * risk_per_trade`) is divided by the
/// effective stop fraction: `max(stop_loss_pct, volatility)` when volatility
/// is supplied, otherwise `stop_loss_pct` alone. Wider stops mean smaller
/// positions for the same risk budget.
pub fn position_size(
    balance: f64,
    risk_per_trade: f64,
    stop_loss_pct: f64,
    volatility: Option<f64>,
) -> Result<f64, RiskError> {
    if risk_per_trade <= 0.0 {
        return Err(RiskError::invalid(format!(
            "risk_per_trade must be positive, got {risk_per_trade}"
        )));
    }

    let effective_stop = match volatility {
        Some(vol) => stop_loss_pct.max(vol),
        None => stop_loss_pct,
    };
    if effective_stop <= EPSILON {
        return Err(RiskError::invalid(format!(
            "effective stop fraction must be positive, got {effective_stop}"
        )));
    }

    Ok(balance * risk_per_trade / effective_stop)
}
