//! Recommendation pipeline: fetch, shortlist, then score.
#![forbid(unsafe_code)]

use std::{cmp::Reverse, collections::BTreeSet};

use giftwise_core::{
    Diagnostics, GiftCandidate, GiftCatalogue, RecipientContext, RecommendRequest,
    RecommendResponse, Scorer,
};

use crate::RecommendError;

/// Combine a [`GiftCatalogue`] with a [`Scorer`] to answer
/// [`RecommendRequest`]s.
///
/// Candidates are restricted to the request budget (plus headroom), ordered
/// by their upstream base score, cut to the request limit, and finally
/// scored. Personalisation needs a known recipient: without one the
/// candidates keep their priors.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
///
/// use giftwise_core::test_support::MemoryCatalogue;
/// use giftwise_core::{GiftCandidate, RecommendRequest};
/// use giftwise_scorer::{PersonalisationScorer, Recommender};
///
/// let catalogue = MemoryCatalogue::with_gifts([
///     GiftCandidate::new(1, "Hiking Poles", 45.0).unwrap(),
///     GiftCandidate::new(2, "Designer Watch", 900.0).unwrap(),
/// ]);
/// let recommender = Recommender::new(catalogue, PersonalisationScorer::default());
/// let request = RecommendRequest {
///     interests: vec!["hiking".into()],
///     budget: Some(50.0),
///     ..RecommendRequest::default()
/// };
///
/// let history = BTreeSet::new();
/// let response = recommender.recommend(&request, Some(&history)).unwrap();
/// assert_eq!(response.gifts.len(), 1);
/// assert!(response.gifts[0].is_personalized);
/// ```
#[derive(Debug, Clone)]
pub struct Recommender<C, S> {
    catalogue: C,
    scorer: S,
}

impl<C, S> Recommender<C, S>
where
    C: GiftCatalogue,
    S: Scorer,
{
    /// Pair a catalogue with a scorer.
    pub const fn new(catalogue: C, scorer: S) -> Self {
        Self { catalogue, scorer }
    }

    /// Produce ranked recommendations for `request`.
    ///
    /// `gift_history` holds titles the recipient has already received. Pass
    /// `None` when no recipient is known; the request interests are then
    /// ignored and every candidate keeps its prior.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidRequest`] when the request fails
    /// validation.
    pub fn recommend(
        &self,
        request: &RecommendRequest,
        gift_history: Option<&BTreeSet<String>>,
    ) -> Result<RecommendResponse, RecommendError> {
        request.validate_detailed()?;

        let mut candidates: Vec<GiftCandidate> = self
            .catalogue
            .candidates(&request.candidate_filter())
            .collect();
        let considered = candidates.len();
        // Raw upstream score, missing scores last.
        candidates.sort_by_key(|gift| Reverse(gift.base_match_score));
        candidates.truncate(request.limit);
        log::debug!(
            "catalogue yielded {considered} candidates; scoring {}",
            candidates.len()
        );

        let context = gift_history
            .filter(|_| request.personalise)
            .map(|history| build_context(request, history));
        let gifts = self.scorer.score(&candidates, context.as_ref());

        Ok(RecommendResponse {
            gifts,
            diagnostics: Diagnostics {
                candidates_considered: considered,
                personalised: context.is_some(),
            },
        })
    }
}

fn build_context(request: &RecommendRequest, gift_history: &BTreeSet<String>) -> RecipientContext {
    RecipientContext::new()
        .with_interests(request.interests.iter().cloned())
        .with_gift_history(gift_history.iter().cloned())
}
