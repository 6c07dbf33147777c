//! Run configuration — risk limits, simulation settings, backtest inputs.
//!
//! All configuration is validated at the boundary: a bad stop fraction or a
//! zero simulation count fails here with a `ConfigError`, never downstream as
//! a NaN.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("stop_loss_pct must be positive, got {value}")]
    NonPositiveStopLoss { value: f64 },

    #[error("take_profit_pct must be positive, got {value}")]
    NonPositiveTakeProfit { value: f64 },

    #[error("risk_per_trade must be positive, got {value}")]
    NonPositiveRiskPerTrade { value: f64 },

    #[error("base_stop must be positive, got {value}")]
    NonPositiveBaseStop { value: f64 },

    #[error("{field} must be positive, got {value}")]
    NonPositiveCount { field: &'static str, value: i64 },

    #[error("initial_value must be positive, got {value}")]
    NonPositiveInitialValue { value: f64 },

    #[error("prices ({prices}) and predictions ({predictions}) must have equal length")]
    SeriesLengthMismatch { prices: usize, predictions: usize },

    #[error("price series must not be empty")]
    EmptySeries,

    #[error("account balance must be positive, got {value}")]
    NonPositiveBalance { value: f64 },

    #[error("classification threshold must be non-negative, got {value}")]
    NegativeThreshold { value: f64 },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Risk limits for a run. Externally supplied, immutable once validated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskLimits {
    /// Loss fraction from entry that forces an exit (e.g., 0.02 = 2%).
    pub stop_loss_pct: f64,
    /// Gain fraction from entry that locks in profit (e.g., 0.04 = 4%).
    pub take_profit_pct: f64,
    /// Fraction of account balance risked per trade.
    pub risk_per_trade: f64,
    /// Floor stop fraction used when realized volatility is lower.
    pub base_stop: f64,
}

impl Default for RiskLimits {
    fn default() -> Self {
        Self {
            stop_loss_pct: 0.02,
            take_profit_pct: 0.04,
            risk_per_trade: 0.01,
            base_stop: 0.02,
        }
    }
}

impl RiskLimits {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stop_loss_pct <= 0.0 {
            return Err(ConfigError::NonPositiveStopLoss {
                value: self.stop_loss_pct,
            });
        }
        if self.take_profit_pct <= 0.0 {
            return Err(ConfigError::NonPositiveTakeProfit {
                value: self.take_profit_pct,
            });
        }
        if self.risk_per_trade <= 0.0 {
            return Err(ConfigError::NonPositiveRiskPerTrade {
                value: self.risk_per_trade,
            });
        }
        if self.base_stop <= 0.0 {
            return Err(ConfigError::NonPositiveBaseStop {
                value: self.base_stop,
            });
        }
        Ok(())
    }
}

/// Configuration for Monte Carlo equity-path simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    /// Number of independent equity paths (default 1000).
    pub n_simulations: usize,
    /// Forward horizon in trading days (default 252).
    pub n_days: usize,
    /// Starting equity for every path.
    pub initial_value: f64,
    /// Master RNG seed. Explicit so runs are reproducible; never wall-clock.
    pub seed: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_simulations: 1000,
            n_days: 252,
            initial_value: 1.0,
            seed: 42,
        }
    }
}

impl MonteCarloConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_simulations == 0 {
            return Err(ConfigError::NonPositiveCount {
                field: "n_simulations",
                value: 0,
            });
        }
        if self.n_days == 0 {
            return Err(ConfigError::NonPositiveCount {
                field: "n_days",
                value: 0,
            });
        }
        if self.initial_value <= 0.0 {
            return Err(ConfigError::NonPositiveInitialValue {
                value: self.initial_value,
            });
        }
        Ok(())
    }
}

/// Full backtest input: price/prediction series plus risk configuration.
///
/// Prices and raw model predictions come from external collaborators; this
/// struct is the synchronous hand-off point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestConfig {
    pub prices: Vec<f64>,
    pub predictions: Vec<f64>,
    /// Classification threshold: predictions above it buy, below its negation sell.
    #[serde(default)]
    pub threshold: f64,
    /// Account balance used for position sizing.
    pub balance: f64,
    #[serde(default)]
    pub risk: RiskLimits,
}

impl BacktestConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prices.is_empty() {
            return Err(ConfigError::EmptySeries);
        }
        if self.prices.len() != self.predictions.len() {
            return Err(ConfigError::SeriesLengthMismatch {
                prices: self.prices.len(),
                predictions: self.predictions.len(),
            });
        }
        if self.balance <= 0.0 {
            return Err(ConfigError::NonPositiveBalance {
                value: self.balance,
            });
        }
        if self.threshold < 0.0 {
            return Err(ConfigError::NegativeThreshold {
                value: self.threshold,
            });
        }
        self.risk.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_validate() {
        assert!(RiskLimits::default().validate().is_ok());
    }

    #[test]
    fn zero_stop_loss_rejected() {
        let limits = RiskLimits {
            stop_loss_pct: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            limits.validate(),
            Err(ConfigError::NonPositiveStopLoss { .. })
        ));
    }

    #[test]
    fn negative_risk_per_trade_rejected() {
        let limits = RiskLimits {
            risk_per_trade: -0.01,
            ..Default::default()
        };
        assert!(matches!(
            limits.validate(),
            Err(ConfigError::NonPositiveRiskPerTrade { .. })
        ));
    }

    #[test]
    fn zero_simulations_rejected() {
        let config = MonteCarloConfig {
            n_simulations: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveCount {
                field: "n_simulations",
                ..
            })
        ));
    }

    #[test]
    fn backtest_config_from_toml() {
        let text = r#"
            prices = [100.0, 101.0, 99.0]
            predictions = [0.0, 0.5, -0.5]
            threshold = 0.1
            balance = 100000.0

            [risk]
            stop_loss_pct = 0.02
            take_profit_pct = 0.04
            risk_per_trade = 0.01
            base_stop = 0.02
        "#;
        let config = BacktestConfig::from_toml_str(text).unwrap();
        assert_eq!(config.prices.len(), 3);
        assert_eq!(config.threshold, 0.1);
    }

    #[test]
    fn mismatched_series_rejected() {
        let config = BacktestConfig {
            prices: vec![100.0, 101.0],
            predictions: vec![0.5],
            threshold: 0.0,
            balance: 1000.0,
            risk: RiskLimits::default(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SeriesLengthMismatch { .. })
        ));
    }
}
