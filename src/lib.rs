//! # adaptive-difficulty
//!
//! Adaptive difficulty scoring for learner-facing content generation.
//!
//! Given a learner's history of rated concept exposures, the crate produces a
//! time-decayed, confidence-weighted estimate of the learner's performance and
//! maps it onto the next content level (1-15).
//!
//! ## Pipeline
//!
//! 1. [`scoring::difficulty`] - per-exposure internal difficulty
//! 2. [`scoring::decay`] - exponential recency weights
//! 3. [`scoring::aggregate`] - decayed weighted mean plus evidence mass
//! 4. [`scoring::blend`] - confidence-weighted blend with the declared baseline
//! 5. [`scoring::level`] - saturating mapping onto a discrete level
//!
//! [`scoring::history`] owns the conceptId-keyed history and its JSON snapshot,
//! and [`DifficultyEngine`] chains the whole pipeline behind a validated config.
//!
//! ## Example
//!
//! ```rust
//! use adaptive_difficulty::{DifficultyEngine, DifficultyHistory, Level};
//! use chrono::Utc;
//!
//! let engine = DifficultyEngine::with_defaults();
//! let now = Utc::now();
//!
//! let (history, outcome) = engine.record(DifficultyHistory::new(), "limits", 0.7, 0.4, now);
//! assert!(!outcome.updated);
//!
//! let decision = engine.next_level(&history, Some(Level::new(7)), now);
//! assert!((1..=15).contains(&decision.level.get()));
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod logging;
pub mod scoring;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::Config;
pub use error::{Result, ScoringError};
pub use scoring::config::{DecayParams, DifficultyParams, LevelParams, ScoringConfig, TrustParams};
pub use scoring::engine::{DifficultyEngine, LevelDecision};
pub use scoring::history::DifficultyHistory;
pub use scoring::types::{Aggregate, ConceptRating, DifficultyEntry, Level, RecordOutcome};
