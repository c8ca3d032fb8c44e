//! Per-exposure internal difficulty
//!
//! base = α·cd + (1-α)·ur, plus a convexity boost for very hard concepts:
//! boost = (cd - 0.8)·0.2 when cd > 0.8. Inputs and result live in [0, 1].

use crate::scoring::config::DifficultyParams;
use crate::scoring::types::clamp_unit;

pub fn compute_internal_difficulty(concept_difficulty: f64, user_rated_difficulty: f64) -> f64 {
    compute_internal_difficulty_with(
        concept_difficulty,
        user_rated_difficulty,
        &DifficultyParams::default(),
    )
}

pub fn compute_internal_difficulty_with(
    concept_difficulty: f64,
    user_rated_difficulty: f64,
    params: &DifficultyParams,
) -> f64 {
    let cd = clamp_unit(concept_difficulty);
    let ur = clamp_unit(user_rated_difficulty);
    let alpha = params.alpha;

    let base = alpha * cd + (1.0 - alpha) * ur;
    let boost = if cd > params.boost_threshold {
        (cd - params.boost_threshold) * params.boost_factor
    } else {
        0.0
    };

    clamp_unit(base + boost)
}
