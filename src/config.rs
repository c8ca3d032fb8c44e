use crate::scoring::config::ScoringConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub scoring: ScoringConfig,
}

impl Config {
    /// Reads overrides from the environment; unparsable values keep their defaults.
    /// Call [`ScoringConfig::validate`] (or build an engine) before trusting the result.
    pub fn from_env() -> Self {
        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let mut scoring = ScoringConfig::default();
        if let Some(alpha) = env_f64("DIFFICULTY_ALPHA") {
            scoring.difficulty.alpha = alpha;
        }
        if let Some(half_life_days) = env_f64("DIFFICULTY_HALF_LIFE_DAYS") {
            scoring.decay.half_life_days = half_life_days;
        }
        if let Some(min_trust) = env_f64("DIFFICULTY_MIN_TRUST") {
            scoring.trust.min_trust = min_trust;
        }
        if let Some(max_trust) = env_f64("DIFFICULTY_MAX_TRUST") {
            scoring.trust.max_trust = max_trust;
        }
        if let Some(scale) = env_f64("DIFFICULTY_TRUST_SCALE") {
            scoring.trust.scale = scale;
        }

        Self { log_level, scoring }
    }
}

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<f64>().ok())
}
