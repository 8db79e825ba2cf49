//! Rank gift candidates for a recipient.
//!
//! The `Scorer` trait turns a slice of [`GiftCandidate`]s and an optional
//! [`RecipientContext`] into [`ScoredGift`]s ordered by match score.

use crate::{GiftCandidate, MatchScore, RecipientContext, ScoredGift};

/// Score and rank gift candidates.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve concurrent requests. Scoring is infallible and must not mutate the
/// inputs; every candidate appears exactly once in the output.
///
/// Implementations must:
/// - Produce scores within `1..=99` (use [`Scorer::sanitise`]).
/// - Return the list in descending score order, keeping the input order for
///   ties (use [`Scorer::rank`]).
///
/// # Examples
///
/// ```rust
/// use giftwise_core::{GiftCandidate, RecipientContext, ScoredGift, Scorer};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(
///         &self,
///         gifts: &[GiftCandidate],
///         _context: Option<&RecipientContext>,
///     ) -> Vec<ScoredGift> {
///         gifts
///             .iter()
///             .cloned()
///             .map(|gift| ScoredGift::unadjusted(gift, Self::sanitise(50)))
///             .collect()
///     }
/// }
///
/// let gifts = vec![GiftCandidate::new(1, "Mug", 12.0).unwrap()];
/// let scored = FlatScorer.score(&gifts, None);
/// assert_eq!(scored[0].match_score.get(), 50);
/// ```
pub trait Scorer: Send + Sync {
    /// Score `gifts` against `context` and return them ranked.
    fn score(&self, gifts: &[GiftCandidate], context: Option<&RecipientContext>)
    -> Vec<ScoredGift>;

    /// Clamp a raw score into `1..=99`.
    fn sanitise(raw: i64) -> MatchScore {
        MatchScore::clamped(raw)
    }

    /// Stable sort by descending match score.
    fn rank(scored: &mut [ScoredGift]) {
        scored.sort_by(|left, right| right.match_score.cmp(&left.match_score));
    }
}
