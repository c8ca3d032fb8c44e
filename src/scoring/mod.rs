//! Scoring Layer - adaptive difficulty estimation
//!
//! Contains:
//! - Difficulty - per-exposure internal difficulty
//! - Decay - half-life recency weighting
//! - Aggregate - decayed weighted mean over a learner's history
//! - Blend - confidence-weighted merge with the declared baseline
//! - Level - saturating mapping onto the 1-15 content scale
//! - History - conceptId-keyed history with upsert semantics
//! - DifficultyEngine - unified entry point chaining the above

pub mod aggregate;
pub mod blend;
pub mod config;
pub mod decay;
pub mod difficulty;
pub mod engine;
pub mod history;
pub mod level;
pub mod types;

pub use aggregate::{aggregate_internal, aggregate_internal_with};
pub use blend::{blend_with_user_set, blend_with_user_set_with, internal_trust};
pub use decay::{elapsed_days, time_decay_weight, DEFAULT_HALF_LIFE_DAYS};
pub use difficulty::{compute_internal_difficulty, compute_internal_difficulty_with};
pub use level::{baseline_difficulty, level_adjustment, map_to_level, map_to_level_with, normalize_level};
