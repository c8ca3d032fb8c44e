//! Half-life recency weighting: w(t) = exp(-ln2 / h · t)

use chrono::{DateTime, Utc};

pub const DEFAULT_HALF_LIFE_DAYS: f64 = 21.0;

const MS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// `half_life_days` must be positive and `days_ago` non-negative; both are
/// guaranteed by a validated [`DecayParams`](crate::scoring::config::DecayParams)
/// and [`elapsed_days`].
pub fn time_decay_weight(days_ago: f64, half_life_days: f64) -> f64 {
    debug_assert!(half_life_days > 0.0, "half-life must be positive");
    let lambda = std::f64::consts::LN_2 / half_life_days;
    (-lambda * days_ago).exp()
}

/// Fractional days from `timestamp` to `now`; future timestamps count as 0.
pub fn elapsed_days(now: DateTime<Utc>, timestamp: DateTime<Utc>) -> f64 {
    let ms = (now - timestamp).num_milliseconds() as f64;
    (ms / MS_PER_DAY).max(0.0)
}
