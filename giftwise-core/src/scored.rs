//! Scored gifts returned by a [`Scorer`](crate::Scorer).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{GiftCandidate, MatchScore};

/// A gift candidate annotated with its final score and the adjustments that
/// produced it.
///
/// Serialises with the candidate's fields inlined next to the scoring
/// metadata, so consumers see one flat record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ScoredGift {
    /// The candidate exactly as supplied.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub gift: GiftCandidate,
    /// Prior plus adjustments, clamped to `1..=99`.
    pub match_score: MatchScore,
    /// Net adjustment applied to the prior.
    pub personalization_delta: i64,
    /// One human-readable entry per adjustment, in evaluation order.
    pub personalization_reasons: Vec<String>,
    /// Whether the net adjustment was positive.
    pub is_personalized: bool,
}

impl ScoredGift {
    /// Build a scored gift from its parts.
    ///
    /// `is_personalized` is derived from `delta` so it cannot disagree with
    /// it.
    #[must_use]
    pub const fn new(
        gift: GiftCandidate,
        match_score: MatchScore,
        delta: i64,
        reasons: Vec<String>,
    ) -> Self {
        Self {
            gift,
            match_score,
            personalization_delta: delta,
            personalization_reasons: reasons,
            is_personalized: delta > 0,
        }
    }

    /// Wrap a candidate without any personalisation applied.
    #[must_use]
    pub const fn unadjusted(gift: GiftCandidate, match_score: MatchScore) -> Self {
        Self::new(gift, match_score, 0, Vec::new())
    }
}
