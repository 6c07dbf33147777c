//! Prediction-to-signal classification.

use crate::domain::Signal;

/// Classify raw model predictions into directional signals.
///
/// Elementwise and order-preserving: values above `threshold` buy, below
/// `-threshold` sell, everything else holds. With a zero threshold any
/// positive prediction buys and any negative one sells.
pub fn classify(predictions: &[f64], threshold: f64) -> Vec<Signal> {
    predictions
        .iter()
        .map(|&value| {
            if value > threshold {
                Signal::Buy
            } else if value < -threshold {
                Signal::Sell
            } else {
                Signal::Hold
            }
        })
        .collect()
}
