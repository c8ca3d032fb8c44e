#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("half-life must be a positive number of days, got {0}")]
    InvalidHalfLife(f64),
    #[error("trust bounds must satisfy 0 <= min ({min}) <= max ({max}) <= 1")]
    InvalidTrustBounds { min: f64, max: f64 },
    #[error("trust scale must be finite and non-negative, got {0}")]
    InvalidTrustScale(f64),
    #[error("alpha must lie in [0, 1], got {0}")]
    InvalidAlpha(f64),
    #[error("boost threshold must lie in [0, 1] and factor be finite and non-negative (threshold {threshold}, factor {factor})")]
    InvalidBoost { threshold: f64, factor: f64 },
    #[error("level shaping must be positive and finite (steepness {steepness}, max shift {max_shift})")]
    InvalidLevelShape { steepness: f64, max_shift: f64 },
    #[error("history snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoringError>;
