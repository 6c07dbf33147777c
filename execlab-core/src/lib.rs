//! execlab core — trade execution simulation and position risk management.
//!
//! This crate contains the heart of the execution simulator:
//! - Domain types (liquidity books, fills, signals, position states)
//! - Order book router with slippage-capped matching
//! - Execution throttle for rate-limiting signal streams
//! - Long/flat strategy state machine with stop-loss/take-profit
//! - Risk controller: stop levels, position sizing, historical VaR,
//!   Monte Carlo equity paths
//! - Deterministic per-path RNG derivation
//!
//! Forecasting, data ingestion, and live broker connectivity are external
//! collaborators; this crate consumes their outputs synchronously and hands
//! results back.

pub mod config;
pub mod domain;
pub mod risk;
pub mod rng;
pub mod routing;
pub mod strategy;
pub mod throttle;
