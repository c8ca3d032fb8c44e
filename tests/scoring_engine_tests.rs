//! Integration tests for DifficultyEngine.
//!
//! Covers the documented cold-start and single-entry scenarios, redo semantics,
//! and the persisted snapshot round trip between record and level decisions.

use adaptive_difficulty::scoring::{aggregate_internal, blend_with_user_set, map_to_level};
use adaptive_difficulty::{
    Aggregate, DecayParams, DifficultyEngine, DifficultyEntry, DifficultyHistory, Level,
    ScoringConfig, ScoringError, TrustParams,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_cold_start_scenario() {
    let engine = DifficultyEngine::with_defaults();
    let decision = engine.next_level(&DifficultyHistory::new(), Some(Level::new(7)), fixed_now());

    assert_eq!(decision.aggregate, Aggregate::EMPTY);
    assert!((decision.trust - 0.20).abs() < 1e-12);
    assert!((decision.baseline - 7.0 / 15.0).abs() < 1e-12);
    assert!((decision.blended - 0.8 * 7.0 / 15.0).abs() < 1e-12);
    assert!((decision.adjustment - (-1.364)).abs() < 1e-3);
    assert_eq!(decision.level.get(), 6);
}

#[test]
fn test_single_hard_entry_scenario() {
    let engine = DifficultyEngine::with_defaults();
    let history = DifficultyHistory::from_entries(vec![DifficultyEntry::new(
        "integration-by-parts",
        0.9,
        None,
        fixed_now(),
    )]);

    let decision = engine.next_level(&history, Some(Level::new(7)), fixed_now());

    assert!((decision.aggregate.mean - 0.9).abs() < 1e-12);
    assert!((decision.aggregate.weight_sum - 1.0).abs() < 1e-12);
    assert_eq!(decision.aggregate.count, 1);
    assert!((decision.trust - 0.32).abs() < 1e-12);
    assert!((decision.blended - 0.6053).abs() < 1e-3);
    assert!((decision.adjustment - 1.97).abs() < 1e-2);
    assert_eq!(decision.level.get(), 9);
}

#[test]
fn test_free_functions_agree_with_engine() {
    let engine = DifficultyEngine::with_defaults();
    let now = fixed_now();
    let history: DifficultyHistory = (0..5)
        .map(|i| {
            DifficultyEntry::new(
                format!("concept-{i}"),
                0.15 * i as f64,
                Some(0.5),
                now - Duration::days(7 * i),
            )
        })
        .collect();

    let agg = aggregate_internal(history.entries(), now);
    let blended = blend_with_user_set(&agg, 11.0 / 15.0);
    let level = map_to_level(blended, 11.0);

    let decision = engine.next_level(&history, Some(Level::new(11)), now);
    assert_eq!(decision.aggregate, agg);
    assert!((decision.blended - blended).abs() < 1e-12);
    assert_eq!(decision.level, level);
}

#[test]
fn test_redo_overwrites_and_aggregate_sees_latest() {
    let engine = DifficultyEngine::with_defaults();
    let now = fixed_now();

    let (history, first) = engine.record(DifficultyHistory::new(), "matrices", 0.2, 0.1, now);
    let (history, _) = engine.record(history, "eigenvalues", 0.5, 0.5, now);
    assert!(!first.updated);
    assert_eq!(history.len(), 2);

    let (history, redo) = engine.record(history, "matrices", 0.95, 1.0, now);
    assert!(redo.updated);
    assert_eq!(history.len(), 2);
    assert!(redo.internal > first.internal);

    let agg = engine.aggregate(&history, now);
    let expected_mean = (redo.internal + history.get("eigenvalues").unwrap().value) / 2.0;
    assert_eq!(agg.count, 2);
    assert!((agg.mean - expected_mean).abs() < 1e-12);
}

#[test]
fn test_snapshot_persist_and_reload() {
    let engine = DifficultyEngine::with_defaults();
    let now = fixed_now();

    let (history, _) = engine.record(DifficultyHistory::new(), "kinematics", 0.4, 0.7, now);
    let (history, _) = engine.record(history, "forces", 0.85, 0.6, now - Duration::days(3));
    let stored = history.to_json().unwrap();

    let reloaded = DifficultyHistory::from_json(&stored).unwrap();
    let before = engine.next_level(&history, Some(Level::new(5)), now);
    let after = engine.next_level(&reloaded, Some(Level::new(5)), now);
    assert_eq!(before, after);

    let rating = reloaded.rating_for("forces");
    assert!(rating.exists);
    assert_eq!(rating.rating, Some(0.6));
    assert_eq!(rating.timestamp, Some(now - Duration::days(3)));
}

#[test]
fn test_snapshot_with_duplicate_keys_keeps_latest() {
    let raw = r#"[
        {"conceptId":"a","value":0.2,"timestamp":"2025-09-01T00:00:00Z"},
        {"conceptId":"b","value":0.4,"user":0.5,"timestamp":"2025-09-02T00:00:00Z"},
        {"conceptId":"a","value":0.9,"timestamp":"2025-09-03T00:00:00Z"}
    ]"#;
    let history = DifficultyHistory::from_json(raw).unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history.get("a").unwrap().value, 0.9);
    assert_eq!(history.entries()[0].concept_id, "a");
}

#[test]
fn test_stale_history_drifts_back_to_baseline() {
    let engine = DifficultyEngine::with_defaults();
    let now = fixed_now();
    let history: DifficultyHistory = (0..8)
        .map(|i| DifficultyEntry::new(format!("c{i}"), 1.0, Some(1.0), now))
        .collect();

    let fresh = engine.next_level(&history, Some(Level::new(5)), now);
    let stale = engine.next_level(&history, Some(Level::new(5)), now + Duration::days(365));

    assert!(fresh.trust > stale.trust);
    assert!(fresh.level > stale.level);
    assert!((stale.trust - 0.20).abs() < 1e-3);
}

#[test]
fn test_custom_config_changes_decisions() {
    let config = ScoringConfig {
        decay: DecayParams {
            half_life_days: 7.0,
        },
        trust: TrustParams {
            max_trust: 0.5,
            ..Default::default()
        },
        ..Default::default()
    };
    let engine = DifficultyEngine::new(config).unwrap();
    let now = fixed_now();
    let history: DifficultyHistory = (0..50)
        .map(|i| DifficultyEntry::new(format!("c{i}"), 1.0, None, now))
        .collect();

    let decision = engine.next_level(&history, Some(Level::new(1)), now);
    assert_eq!(decision.trust, 0.5);
}

#[test]
fn test_invalid_trust_bounds_rejected() {
    let config = ScoringConfig {
        trust: TrustParams {
            min_trust: 0.9,
            max_trust: 0.3,
            scale: 0.12,
        },
        ..Default::default()
    };
    let err = DifficultyEngine::new(config).unwrap_err();
    assert!(matches!(err, ScoringError::InvalidTrustBounds { .. }));
    assert!(err.to_string().contains("trust bounds"));
}

#[test]
fn test_configurable_free_functions_reject_invalid_params() {
    use adaptive_difficulty::scoring::{aggregate_internal_with, blend_with_user_set_with};

    let now = fixed_now();
    let history = vec![
        DifficultyEntry::new("fresh", 0.5, None, now),
        DifficultyEntry::new("older", 0.9, None, now - Duration::days(3)),
    ];
    let negative_half_life = DecayParams {
        half_life_days: -21.0,
    };
    assert!(matches!(
        aggregate_internal_with(&history, now, &negative_half_life),
        Err(ScoringError::InvalidHalfLife(_))
    ));

    let inverted = TrustParams {
        min_trust: 0.9,
        max_trust: 0.3,
        scale: 0.12,
    };
    let agg = aggregate_internal(&history, now);
    assert!(matches!(
        blend_with_user_set_with(&agg, 0.5, &inverted),
        Err(ScoringError::InvalidTrustBounds { .. })
    ));
}

#[test]
fn test_persisted_decision_level_stays_in_range() {
    let engine = DifficultyEngine::with_defaults();
    let decision = engine.next_level(&DifficultyHistory::new(), Some(Level::new(7)), fixed_now());

    let mut raw = serde_json::to_value(&decision).unwrap();
    raw["level"] = serde_json::json!(40);
    let restored: adaptive_difficulty::LevelDecision = serde_json::from_value(raw).unwrap();
    assert_eq!(restored.level, Level::MAX);
}
