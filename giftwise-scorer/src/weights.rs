//! Tunable adjustments applied by the personalisation scorer.
#![forbid(unsafe_code)]

use crate::ScorerConfigError;

/// Prior assumed when a candidate carries no usable base score.
pub const DEFAULT_PRIOR: i64 = 75;
/// Points added for each matched interest.
pub const DEFAULT_INTEREST_BOOST: i64 = 15;
/// Points removed when the recipient already received the gift.
pub const DEFAULT_REPEAT_PENALTY: i64 = 30;

const PRIOR_RANGE: std::ops::RangeInclusive<i64> = 0..=100;

/// Point adjustments applied on top of a candidate's prior.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Added once per interest the gift matches.
    pub interest_boost: i64,
    /// Subtracted when the gift title appears in the recipient's history.
    pub repeat_penalty: i64,
    /// Prior used when the base score is missing or outside `0..=100`.
    pub default_prior: i64,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError::InvalidWeights`] when the boost or penalty
    /// is negative, or the default prior lies outside `0..=100`.
    pub fn validate(self) -> Result<Self, ScorerConfigError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ScorerConfigError::InvalidWeights)
        }
    }

    fn is_valid(self) -> bool {
        self.interest_boost >= 0
            && self.repeat_penalty >= 0
            && PRIOR_RANGE.contains(&self.default_prior)
    }

    /// Resolve the prior for a candidate's base score.
    ///
    /// Scores outside `0..=100` are treated as missing.
    #[must_use]
    pub fn prior(self, base_match_score: Option<i64>) -> i64 {
        resolve_prior(base_match_score, self.default_prior)
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            interest_boost: DEFAULT_INTEREST_BOOST,
            repeat_penalty: DEFAULT_REPEAT_PENALTY,
            default_prior: DEFAULT_PRIOR,
        }
    }
}

/// Return `base_match_score` when it lies within `0..=100`, else `fallback`.
#[must_use]
pub fn resolve_prior(base_match_score: Option<i64>, fallback: i64) -> i64 {
    match base_match_score {
        Some(score) if PRIOR_RANGE.contains(&score) => score,
        Some(score) => {
            log::debug!("base match score {score} outside 0..=100; using prior {fallback}");
            fallback
        }
        None => fallback,
    }
}
