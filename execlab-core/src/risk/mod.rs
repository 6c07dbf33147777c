//! Risk controller — stateless pure functions for stop levels, position
//! sizing, historical VaR, and Monte Carlo equity-path simulation.
//!
//! Nothing here holds state between calls; everything takes its inputs
//! (returns, balances, limits, seeds) explicitly so results are reproducible
//! and trivially testable.

pub mod monte_carlo;
pub mod sizing;
pub mod var;

pub use monte_carlo::{monte_carlo, SimulationMatrix};
pub use sizing::{check_stop, position_size, stop_loss_price};
pub use var::historical_var;

use thiserror::Error;

/// Numerical floor for degenerate ratios (zero stop fraction, zero return
/// variance). Guarded here once rather than scattered per call site.
pub const EPSILON: f64 = 1e-8;

#[derive(Debug, Error)]
pub enum RiskError {
    #[error("invalid risk configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("return series must not be empty")]
    EmptyReturns,

    #[error("confidence level must be in (0, 1), got {value}")]
    BadConfidence { value: f64 },
}

impl RiskError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        RiskError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
