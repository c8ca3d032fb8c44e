//! Confidence blending
//!
//! trust = clamp(min + weight_sum·scale, min, max)
//! blended = trust·mean + (1 - trust)·baseline
//!
//! Trust grows with recency-weighted evidence but never reaches zero (history is
//! never ignored) nor one (the declared baseline is never fully overridden).
//! At weight_sum = 0 trust is still `min_trust`, so a cold start pulls the
//! blend below the baseline.

use crate::error::Result;
use crate::scoring::config::TrustParams;
use crate::scoring::types::{clamp_unit, Aggregate};

/// Rejects inverted or out-of-range bounds and a negative scale.
pub fn internal_trust(weight_sum: f64, params: &TrustParams) -> Result<f64> {
    params.validate()?;
    Ok(trust_validated(weight_sum, params))
}

pub fn blend_with_user_set(aggregated: &Aggregate, user_set_difficulty: f64) -> f64 {
    blend_validated(aggregated, user_set_difficulty, &TrustParams::default())
}

pub fn blend_with_user_set_with(
    aggregated: &Aggregate,
    user_set_difficulty: f64,
    params: &TrustParams,
) -> Result<f64> {
    params.validate()?;
    Ok(blend_validated(aggregated, user_set_difficulty, params))
}

/// `params` must already have passed [`TrustParams::validate`].
pub(crate) fn trust_validated(weight_sum: f64, params: &TrustParams) -> f64 {
    (params.min_trust + weight_sum * params.scale).clamp(params.min_trust, params.max_trust)
}

/// `params` must already have passed [`TrustParams::validate`].
pub(crate) fn blend_validated(
    aggregated: &Aggregate,
    user_set_difficulty: f64,
    params: &TrustParams,
) -> f64 {
    let trust = trust_validated(aggregated.weight_sum, params);
    let internal = clamp_unit(aggregated.mean);
    let user = clamp_unit(user_set_difficulty);
    clamp_unit(trust * internal + (1.0 - trust) * user)
}
