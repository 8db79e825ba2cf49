//! Bounded match scores.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Predicted gift/recipient fit, always within `1..=99`.
///
/// The only way to build a score is through clamping, so downstream code
/// never has to re-check the bounds.
///
/// # Examples
/// ```
/// use giftwise_core::MatchScore;
///
/// assert_eq!(MatchScore::clamped(85).get(), 85);
/// assert_eq!(MatchScore::clamped(-40).get(), 1);
/// assert_eq!(MatchScore::clamped(250).get(), 99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "i64", into = "u8")
)]
pub struct MatchScore(u8);

impl MatchScore {
    /// Lowest representable score.
    pub const MIN: Self = Self(1);
    /// Highest representable score.
    pub const MAX: Self = Self(99);

    /// Clamp a raw score into `1..=99`.
    #[must_use]
    pub fn clamped(raw: i64) -> Self {
        let bounded = raw.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        // Bounded to 1..=99 above, so the conversion cannot fail.
        Self(u8::try_from(bounded).unwrap_or(Self::MIN.0))
    }

    /// Return the score as a plain integer.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<i64> for MatchScore {
    fn from(raw: i64) -> Self {
        Self::clamped(raw)
    }
}

impl From<MatchScore> for u8 {
    fn from(score: MatchScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
