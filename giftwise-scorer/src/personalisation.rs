//! Personalised re-ranking of gift candidates.
//!
//! Each candidate starts from its prior (the upstream base score, or the
//! default prior when that is missing or out of range). Every caller interest
//! found in the gift's tags, title, or reasoning adds a boost; a title the
//! recipient already received subtracts a penalty. The result is clamped to
//! `1..=99` and the whole list is stably sorted by descending score.

#![forbid(unsafe_code)]

use giftwise_core::{GiftCandidate, RecipientContext, ScoredGift, Scorer};

use crate::{ScoreWeights, ScorerConfigError, matching::GiftText};

/// Reason recorded when the repeat-purchase penalty applies.
pub const REPEAT_GIFT_REASON: &str = "Similar gift given before";

/// Scorer that adjusts upstream priors using recipient interests and gift
/// history.
///
/// # Examples
///
/// ```
/// use giftwise_core::{GiftCandidate, RecipientContext, Scorer};
/// use giftwise_scorer::PersonalisationScorer;
///
/// let shoes = GiftCandidate::new(1, "Trail Running Shoes", 89.0)
///     .unwrap()
///     .with_tags(["hiking", "outdoor"])
///     .with_reasoning("great for trails")
///     .with_base_match_score(70);
/// let context = RecipientContext::new().with_interest("hiking");
///
/// let ranked = PersonalisationScorer::default().score(&[shoes], Some(&context));
/// assert_eq!(ranked[0].match_score.get(), 85);
/// assert_eq!(ranked[0].personalization_reasons, ["Matches hiking interest"]);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PersonalisationScorer {
    weights: ScoreWeights,
}

impl PersonalisationScorer {
    /// Construct a scorer with validated weights.
    ///
    /// # Errors
    /// Returns [`ScorerConfigError::InvalidWeights`] when the weights fail
    /// [`ScoreWeights::validate`].
    pub fn new(weights: ScoreWeights) -> Result<Self, ScorerConfigError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    fn score_gift(&self, gift: &GiftCandidate, context: Option<&RecipientContext>) -> ScoredGift {
        let prior = self.weights.prior(gift.base_match_score);
        let Some(recipient) = context else {
            return ScoredGift::unadjusted(gift.clone(), Self::sanitise(prior));
        };

        let mut adjustment = Adjustment::default();
        if !recipient.interests().is_empty() {
            let text = GiftText::new(gift);
            for interest in recipient.interests() {
                if text.mentions(interest) {
                    adjustment.apply(
                        self.weights.interest_boost,
                        format!("Matches {interest} interest"),
                    );
                }
            }
        }
        if recipient.has_given(&gift.title) {
            adjustment.apply(
                self.weights.repeat_penalty.saturating_neg(),
                REPEAT_GIFT_REASON.to_owned(),
            );
        }

        let match_score = Self::sanitise(prior.saturating_add(adjustment.delta));
        ScoredGift::new(gift.clone(), match_score, adjustment.delta, adjustment.reasons)
    }
}

impl Scorer for PersonalisationScorer {
    fn score(
        &self,
        gifts: &[GiftCandidate],
        context: Option<&RecipientContext>,
    ) -> Vec<ScoredGift> {
        let mut scored: Vec<ScoredGift> = gifts
            .iter()
            .map(|gift| self.score_gift(gift, context))
            .collect();
        Self::rank(&mut scored);
        scored
    }
}

/// Running total of adjustments for one gift.
#[derive(Debug, Default)]
struct Adjustment {
    delta: i64,
    reasons: Vec<String>,
}

impl Adjustment {
    fn apply(&mut self, points: i64, reason: String) {
        self.delta = self.delta.saturating_add(points);
        self.reasons.push(reason);
    }
}
