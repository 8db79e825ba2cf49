//! Test-only, in-memory `GiftCatalogue` and `Scorer` implementations used by
//! unit and behaviour tests.

use crate::{CandidateFilter, GiftCandidate, GiftCatalogue, RecipientContext, ScoredGift, Scorer};

/// Prior used by [`PriorScorer`] when a candidate has no usable base score.
pub const PRIOR_SCORER_DEFAULT: i64 = 75;

/// In-memory `GiftCatalogue` implementation used in tests.
///
/// The catalogue performs a linear scan and is intended only for small
/// datasets.
#[derive(Default, Debug, Clone)]
pub struct MemoryCatalogue {
    gifts: Vec<GiftCandidate>,
}

impl MemoryCatalogue {
    /// Create a catalogue from a collection of gifts.
    pub fn with_gifts<I>(gifts: I) -> Self
    where
        I: IntoIterator<Item = GiftCandidate>,
    {
        Self {
            gifts: gifts.into_iter().collect(),
        }
    }
}

impl GiftCatalogue for MemoryCatalogue {
    fn candidates(
        &self,
        filter: &CandidateFilter,
    ) -> Box<dyn Iterator<Item = GiftCandidate> + Send + '_> {
        let filter = *filter;
        Box::new(
            self.gifts
                .iter()
                .filter(move |gift| filter.admits(gift))
                .cloned(),
        )
    }
}

/// Test `Scorer` that ignores context and ranks by prior alone.
#[derive(Debug, Copy, Clone, Default)]
pub struct PriorScorer;

impl Scorer for PriorScorer {
    fn score(
        &self,
        gifts: &[GiftCandidate],
        _context: Option<&RecipientContext>,
    ) -> Vec<ScoredGift> {
        let mut scored: Vec<ScoredGift> = gifts
            .iter()
            .map(|gift| {
                let prior = gift.base_match_score.unwrap_or(PRIOR_SCORER_DEFAULT);
                ScoredGift::unadjusted(gift.clone(), Self::sanitise(prior))
            })
            .collect();
        Self::rank(&mut scored);
        scored
    }
}
