//! Monte Carlo simulation of forward equity paths.
//!
//! Mean and standard deviation are estimated once from the historical return
//! sample; each path then draws i.i.d. normal returns and compounds them from
//! the initial value. Paths are statistically independent and write into
//! disjoint matrix rows, so the row loop runs on the rayon pool. Each row's
//! generator is seeded from a hash-derived sub-seed of the master seed, which
//! keeps output bit-identical across thread counts.

use rand_distr::{Distribution, Normal};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{RiskError, EPSILON};
use crate::config::MonteCarloConfig;
use crate::rng::PathSeeds;

/// Row-major matrix of simulated cumulative equity values.
///
/// Each row is one independent path of length `n_days`; rows share nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationMatrix {
    values: Vec<f64>,
    n_simulations: usize,
    n_days: usize,
}

impl SimulationMatrix {
    pub fn n_simulations(&self) -> usize {
        self.n_simulations
    }

    pub fn n_days(&self) -> usize {
        self.n_days
    }

    /// One equity path.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.n_days;
        &self.values[start..start + self.n_days]
    }

    /// Final equity value of every path, in row order.
    pub fn terminal_values(&self) -> Vec<f64> {
        (0..self.n_simulations)
            .map(|i| self.row(i)[self.n_days - 1])
            .collect()
    }
}

/// Simulate `config.n_simulations` forward equity paths from a historical
/// return sample.
///
/// Identical `config.seed` and inputs reproduce identical output bit-for-bit.
pub fn monte_carlo(
    returns: &[f64],
    config: &MonteCarloConfig,
) -> Result<SimulationMatrix, RiskError> {
    config
        .validate()
        .map_err(|e| RiskError::invalid(e.to_string()))?;
    if returns.is_empty() {
        return Err(RiskError::EmptyReturns);
    }

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|&r| (r - mean).powi(2)).sum::<f64>() / n;
    // Floor the spread so a constant return sample degenerates gracefully
    // instead of producing a zero-variance distribution.
    let std = variance.sqrt().max(EPSILON);

    if !mean.is_finite() || !std.is_finite() {
        return Err(RiskError::invalid(format!(
            "return sample yields non-finite moments (mean {mean}, std {std})"
        )));
    }

    let normal =
        Normal::new(mean, std).map_err(|e| RiskError::invalid(format!("bad distribution: {e}")))?;
    let seeds = PathSeeds::new(config.seed);
    let initial_value = config.initial_value;

    let mut values = vec![0.0; config.n_simulations * config.n_days];
    values
        .par_chunks_mut(config.n_days)
        .enumerate()
        .for_each(|(path, row)| {
            let mut rng = seeds.rng_for_path(path as u64);
            let mut equity = initial_value;
            for slot in row.iter_mut() {
                equity *= 1.0 + normal.sample(&mut rng);
                *slot = equity;
            }
        });

    Ok(SimulationMatrix {
        values,
        n_simulations: config.n_simulations,
        n_days: config.n_days,
    })
}
