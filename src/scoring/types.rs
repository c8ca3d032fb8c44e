use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Clamps into [0, 1]. NaN collapses to 0 so it never leaks into a history.
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

fn deserialize_unit<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_unit)
}

fn deserialize_unit_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(|v| v.map(clamp_unit))
}

/// One rated exposure of a concept by a learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyEntry {
    pub concept_id: String,
    /// Internal difficulty in [0, 1].
    #[serde(deserialize_with = "deserialize_unit")]
    pub value: f64,
    /// Raw self-rating in [0, 1]; `None` when the learner never rated it.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_unit_opt"
    )]
    pub user: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl DifficultyEntry {
    pub fn new(
        concept_id: impl Into<String>,
        value: f64,
        user: Option<f64>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            concept_id: concept_id.into(),
            value: clamp_unit(value),
            user: user.map(clamp_unit),
            timestamp,
        }
    }
}

/// Decayed summary of a history.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate {
    pub mean: f64,
    /// Evidence mass: sum of decay weights, mixing recency and volume.
    pub weight_sum: f64,
    /// Raw, undecayed entry count.
    pub count: usize,
}

impl Aggregate {
    pub const EMPTY: Aggregate = Aggregate {
        mean: 0.0,
        weight_sum: 0.0,
        count: 0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordOutcome {
    pub internal: f64,
    /// `true` when an existing entry for the concept was overwritten.
    pub updated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptRating {
    pub exists: bool,
    pub rating: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Content difficulty level on the 1-15 scale.
///
/// Deserializes through [`Level::new`], so persisted values saturate into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(15);
    pub const SCALE: f64 = 15.0;

    /// Saturates into [1, 15].
    pub fn new(level: u8) -> Self {
        Self(level.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Rounds half away from zero, then saturates into [1, 15].
    pub fn from_f64(level: f64) -> Self {
        if level.is_nan() {
            return Self::MIN;
        }
        let rounded = level.round().clamp(Self::MIN.0 as f64, Self::MAX.0 as f64);
        Self(rounded as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<u8> for Level {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
