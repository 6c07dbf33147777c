//! Execution throttle — rate-limit a signal stream.
//!
//! One left-to-right pass over a timestamp-ordered stream. The only state is
//! the timestamp of the last emitted signal; it lives in a local, so repeated
//! calls are independent.

use chrono::{DateTime, Duration, Utc};

use crate::domain::Signal;

/// Keep at most one directional signal per `min_interval`.
///
/// A signal is emitted iff it is nonzero and either nothing has been emitted
/// yet or at least `min_interval` has elapsed since the last emission. Hold
/// signals are never emitted and never reset the timer. Timestamps are taken
/// from the input, never from the wall clock.
pub fn throttle(
    series: &[(DateTime<Utc>, Signal)],
    min_interval: Duration,
) -> Vec<(DateTime<Utc>, Signal)> {
    let mut emitted = Vec::new();
    let mut last_emitted: Option<DateTime<Utc>> = None;

    for &(timestamp, signal) in series {
        if signal.is_hold() {
            continue;
        }
        let due = match last_emitted {
            None => true,
            Some(last) => timestamp - last >= min_interval,
        };
        if due {
            emitted.push((timestamp, signal));
            last_emitted = Some(timestamp);
        }
    }

    emitted
}

/// Achieved execution price after a fixed latency of `latency_bars`.
///
/// Index `i` of the result is the price `latency_bars` bars after bar `i`,
/// or `None` where the series has ended before the delayed execution.
pub fn delayed_prices(prices: &[f64], latency_bars: usize) -> Vec<Option<f64>> {
    (0..prices.len())
        .map(|i| prices.get(i + latency_bars).copied())
        .collect()
}
