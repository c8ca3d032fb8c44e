//! Level mapping
//!
//! Converts a blended difficulty into the next content level:
//! delta = blended - level/15, shift = tanh(delta·k)·M, level = round(anchor + shift).
//! The tanh keeps small mismatches small and lets large ones saturate near ±M.

use crate::scoring::config::LevelParams;
use crate::scoring::types::{clamp_unit, Level};

/// Baseline difficulty used when a learner profile has no declared level.
pub const UNSET_BASELINE: f64 = 0.5;

pub fn normalize_level(level: f64) -> f64 {
    level / Level::SCALE
}

/// Declared level as a [0, 1] difficulty.
pub fn baseline_difficulty(declared: Option<Level>) -> f64 {
    declared
        .map(|level| normalize_level(level.as_f64()))
        .unwrap_or(UNSET_BASELINE)
}

pub fn level_adjustment(performance_delta: f64, params: &LevelParams) -> f64 {
    (performance_delta * params.steepness).tanh() * params.max_shift
}

pub fn map_to_level(blended_difficulty: f64, user_set_level: f64) -> Level {
    map_to_level_with(blended_difficulty, user_set_level, &LevelParams::default())
}

pub fn map_to_level_with(blended_difficulty: f64, user_set_level: f64, params: &LevelParams) -> Level {
    let delta = clamp_unit(blended_difficulty) - normalize_level(user_set_level);
    Level::from_f64(user_set_level + level_adjustment(delta, params))
}
