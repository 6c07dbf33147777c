//! Long/flat strategy state machine.
//!
//! Strictly sequential: bar *i*'s state depends on bar *i-1*'s state and,
//! while long, on the entry price recorded at the transition into long. The
//! entry-price carry makes the traversal inherently ordered — it is expressed
//! as a fold with an explicit accumulator, never a vectorized batch
//! transform.

use serde::{Deserialize, Serialize};

use crate::config::RiskLimits;
use crate::domain::{PositionState, Signal};
use crate::risk::{position_size, RiskError};

/// Why a long position was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitReason {
    /// A sell signal closed the position.
    Signal,
    /// The open return fell to or below the stop-loss fraction.
    StopLoss,
    /// The open return rose to or above the take-profit fraction.
    TakeProfit,
}

/// One bar's outcome in a sized run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarState {
    pub position: PositionState,
    /// Position size computed at entry; set only on the entry bar.
    pub entered_qty: Option<f64>,
    /// Exit cause; set only on the exit bar.
    pub exit: Option<ExitReason>,
}

/// Transition rules for one bar, evaluated in priority order:
/// entry on buy, exit on sell, exit on stop/take-profit, else carry.
fn evaluate(
    prev: PositionState,
    price: f64,
    signal: Signal,
    stop_loss_pct: f64,
    take_profit_pct: f64,
) -> (PositionState, Option<ExitReason>) {
    match prev {
        PositionState::Flat => {
            if signal == Signal::Buy {
                (PositionState::Long { entry_price: price }, None)
            } else {
                (PositionState::Flat, None)
            }
        }
        PositionState::Long { entry_price } => {
            if signal == Signal::Sell {
                return (PositionState::Flat, Some(ExitReason::Signal));
            }
            let open_return = (price - entry_price) / entry_price;
            if open_return <= -stop_loss_pct {
                (PositionState::Flat, Some(ExitReason::StopLoss))
            } else if open_return >= take_profit_pct {
                (PositionState::Flat, Some(ExitReason::TakeProfit))
            } else {
                (prev, None)
            }
        }
    }
}

/// Pure single-bar transition.
pub fn step(
    prev: PositionState,
    price: f64,
    signal: Signal,
    stop_loss_pct: f64,
    take_profit_pct: f64,
) -> PositionState {
    evaluate(prev, price, signal, stop_loss_pct, take_profit_pct).0
}

/// Derive the position-state sequence for a price/signal series.
///
/// Bar 0 is always flat — there is no prior state to transition from. The
/// series are walked in lockstep; output length equals the shorter input.
pub fn run(
    prices: &[f64],
    signals: &[Signal],
    stop_loss_pct: f64,
    take_profit_pct: f64,
) -> Vec<PositionState> {
    let mut states = Vec::with_capacity(prices.len().min(signals.len()));
    let mut prev = PositionState::Flat;

    for (i, (&price, &signal)) in prices.iter().zip(signals.iter()).enumerate() {
        let state = if i == 0 {
            PositionState::Flat
        } else {
            step(prev, price, signal, stop_loss_pct, take_profit_pct)
        };
        states.push(state);
        prev = state;
    }

    states
}

/// Like [`run`], but invokes the risk controller at each entry to size the
/// position from the account balance, and records exit causes.
pub fn run_with_sizing(
    prices: &[f64],
    signals: &[Signal],
    limits: &RiskLimits,
    balance: f64,
) -> Result<Vec<BarState>, RiskError> {
    limits
        .validate()
        .map_err(|e| RiskError::invalid(e.to_string()))?;

    let mut bars = Vec::with_capacity(prices.len().min(signals.len()));
    let mut prev = PositionState::Flat;

    for (i, (&price, &signal)) in prices.iter().zip(signals.iter()).enumerate() {
        let (position, exit) = if i == 0 {
            (PositionState::Flat, None)
        } else {
            evaluate(
                prev,
                price,
                signal,
                limits.stop_loss_pct,
                limits.take_profit_pct,
            )
        };

        let entered_qty = if position.is_long() && !prev.is_long() {
            Some(position_size(
                balance,
                limits.risk_per_trade,
                limits.stop_loss_pct,
                None,
            )?)
        } else {
            None
        };

        bars.push(BarState {
            position,
            entered_qty,
            exit,
        });
        prev = position;
    }

    Ok(bars)
}
