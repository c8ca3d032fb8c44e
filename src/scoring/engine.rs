use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scoring::aggregate::aggregate_validated;
use crate::scoring::blend::{blend_validated, trust_validated};
use crate::scoring::config::ScoringConfig;
use crate::scoring::history::DifficultyHistory;
use crate::scoring::level::{baseline_difficulty, level_adjustment, UNSET_BASELINE};
use crate::scoring::types::{Aggregate, Level, RecordOutcome};

/// Full trace of one level decision, handed to content generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDecision {
    pub aggregate: Aggregate,
    pub trust: f64,
    /// Declared baseline as a [0, 1] difficulty.
    pub baseline: f64,
    pub blended: f64,
    pub delta: f64,
    pub adjustment: f64,
    pub level: Level,
}

/// Stateless scoring pipeline over a validated [`ScoringConfig`].
///
/// Histories go in by value and come back updated; persisting the returned
/// snapshot (and serializing concurrent writers) is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct DifficultyEngine {
    config: ScoringConfig,
}

impl DifficultyEngine {
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn record(
        &self,
        mut history: DifficultyHistory,
        concept_id: &str,
        concept_difficulty: f64,
        user_rated_difficulty: f64,
        now: DateTime<Utc>,
    ) -> (DifficultyHistory, RecordOutcome) {
        let outcome = history.record(
            concept_id,
            concept_difficulty,
            user_rated_difficulty,
            now,
            &self.config.difficulty,
        );
        tracing::debug!(
            concept_id = %concept_id,
            internal = outcome.internal,
            updated = outcome.updated,
            entries = history.len(),
            "recorded concept difficulty"
        );
        (history, outcome)
    }

    pub fn aggregate(&self, history: &DifficultyHistory, now: DateTime<Utc>) -> Aggregate {
        aggregate_validated(history.entries(), now, &self.config.decay)
    }

    pub fn blend(&self, aggregated: &Aggregate, user_set_difficulty: f64) -> f64 {
        blend_validated(aggregated, user_set_difficulty, &self.config.trust)
    }

    /// Without a declared level the baseline is 0.5 and the mapper anchors at 7.5.
    pub fn next_level(
        &self,
        history: &DifficultyHistory,
        declared: Option<Level>,
        now: DateTime<Utc>,
    ) -> LevelDecision {
        let aggregate = self.aggregate(history, now);
        let trust = trust_validated(aggregate.weight_sum, &self.config.trust);
        let baseline = baseline_difficulty(declared);
        let blended = self.blend(&aggregate, baseline);

        let anchor = declared
            .map(Level::as_f64)
            .unwrap_or(UNSET_BASELINE * Level::SCALE);
        let delta = blended - baseline;
        let adjustment = level_adjustment(delta, &self.config.level);
        let level = Level::from_f64(anchor + adjustment);

        tracing::debug!(
            declared = ?declared.map(Level::get),
            mean = aggregate.mean,
            weight_sum = aggregate.weight_sum,
            count = aggregate.count,
            trust,
            blended,
            level = level.get(),
            "computed next content level"
        );

        LevelDecision {
            aggregate,
            trust,
            baseline,
            blended,
            delta,
            adjustment,
            level,
        }
    }
}
