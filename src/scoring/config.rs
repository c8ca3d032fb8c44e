use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyParams {
    /// Weight of concept difficulty against the learner's self-rating.
    pub alpha: f64,
    /// Concept difficulty above which the convexity boost kicks in.
    pub boost_threshold: f64,
    pub boost_factor: f64,
}

impl Default for DifficultyParams {
    fn default() -> Self {
        Self {
            alpha: 0.6,
            boost_threshold: 0.8,
            boost_factor: 0.2,
        }
    }
}

impl DifficultyParams {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ScoringError::InvalidAlpha(self.alpha));
        }
        let boost_ok = (0.0..=1.0).contains(&self.boost_threshold)
            && self.boost_factor.is_finite()
            && self.boost_factor >= 0.0;
        if !boost_ok {
            return Err(ScoringError::InvalidBoost {
                threshold: self.boost_threshold,
                factor: self.boost_factor,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecayParams {
    pub half_life_days: f64,
}

impl Default for DecayParams {
    fn default() -> Self {
        Self {
            half_life_days: 21.0,
        }
    }
}

impl DecayParams {
    pub fn validate(&self) -> Result<()> {
        if !self.half_life_days.is_finite() || self.half_life_days <= 0.0 {
            return Err(ScoringError::InvalidHalfLife(self.half_life_days));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustParams {
    /// Cap on how much history can dominate the declared baseline.
    pub max_trust: f64,
    /// Floor applied even with zero evidence.
    pub min_trust: f64,
    /// Converts evidence mass into trust.
    pub scale: f64,
}

impl Default for TrustParams {
    fn default() -> Self {
        Self {
            max_trust: 0.85,
            min_trust: 0.20,
            scale: 0.12,
        }
    }
}

impl TrustParams {
    pub fn validate(&self) -> Result<()> {
        let bounds_ok = (0.0..=1.0).contains(&self.min_trust)
            && (0.0..=1.0).contains(&self.max_trust)
            && self.min_trust <= self.max_trust;
        if !bounds_ok {
            return Err(ScoringError::InvalidTrustBounds {
                min: self.min_trust,
                max: self.max_trust,
            });
        }
        if !self.scale.is_finite() || self.scale < 0.0 {
            return Err(ScoringError::InvalidTrustScale(self.scale));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelParams {
    /// Slope of the tanh curve around a zero delta.
    pub steepness: f64,
    /// Asymptotic level shift in either direction.
    pub max_shift: f64,
}

impl Default for LevelParams {
    fn default() -> Self {
        Self {
            steepness: 3.0,
            max_shift: 5.0,
        }
    }
}

impl LevelParams {
    pub fn validate(&self) -> Result<()> {
        let ok = self.steepness.is_finite()
            && self.steepness > 0.0
            && self.max_shift.is_finite()
            && self.max_shift > 0.0;
        if !ok {
            return Err(ScoringError::InvalidLevelShape {
                steepness: self.steepness,
                max_shift: self.max_shift,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringConfig {
    pub difficulty: DifficultyParams,
    pub decay: DecayParams,
    pub trust: TrustParams,
    pub level: LevelParams,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        self.difficulty.validate()?;
        self.decay.validate()?;
        self.trust.validate()?;
        self.level.validate()?;
        Ok(())
    }
}
