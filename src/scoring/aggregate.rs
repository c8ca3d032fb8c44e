//! Decayed history aggregation
//!
//! Weighted mean of entry values using half-life weights. Alongside the mean it
//! reports the evidence mass (sum of weights) and the raw entry count.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::scoring::config::DecayParams;
use crate::scoring::decay::{elapsed_days, time_decay_weight};
use crate::scoring::types::{Aggregate, DifficultyEntry};

pub fn aggregate_internal(entries: &[DifficultyEntry], now: DateTime<Utc>) -> Aggregate {
    aggregate_validated(entries, now, &DecayParams::default())
}

/// Rejects a non-positive or non-finite half-life before aggregating.
pub fn aggregate_internal_with(
    entries: &[DifficultyEntry],
    now: DateTime<Utc>,
    params: &DecayParams,
) -> Result<Aggregate> {
    params.validate()?;
    Ok(aggregate_validated(entries, now, params))
}

/// `params` must already have passed [`DecayParams::validate`].
pub(crate) fn aggregate_validated(
    entries: &[DifficultyEntry],
    now: DateTime<Utc>,
    params: &DecayParams,
) -> Aggregate {
    if entries.is_empty() {
        return Aggregate::EMPTY;
    }

    let (num, den) = entries.iter().fold((0.0, 0.0), |(num, den), entry| {
        let days = elapsed_days(now, entry.timestamp);
        let w = time_decay_weight(days, params.half_life_days);
        (num + entry.value * w, den + w)
    });

    let mean = if den > 0.0 { num / den } else { 0.0 };

    Aggregate {
        mean,
        weight_sum: den,
        count: entries.len(),
    }
}
