//! Gift catalogues: sources of candidates for a recommendation request.

use crate::GiftCandidate;

/// Multiplier applied to a budget to form the price ceiling.
///
/// Gifts up to 20% over budget remain eligible.
pub const BUDGET_HEADROOM: f64 = 1.2;

/// Constraints a catalogue applies when yielding candidates.
///
/// # Examples
/// ```
/// use giftwise_core::{CandidateFilter, GiftCandidate};
///
/// let filter = CandidateFilter::for_budget(50.0);
/// let within = GiftCandidate::new(1, "Book", 59.0).unwrap();
/// let over = GiftCandidate::new(2, "Lamp", 61.0).unwrap();
/// assert!(filter.admits(&within));
/// assert!(!filter.admits(&over));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CandidateFilter {
    /// Inclusive upper bound on price, if any.
    pub max_price: Option<f64>,
}

impl CandidateFilter {
    /// A filter that admits every candidate.
    #[must_use]
    pub const fn unrestricted() -> Self {
        Self { max_price: None }
    }

    /// Build a filter whose ceiling is `budget` plus [`BUDGET_HEADROOM`].
    #[expect(
        clippy::float_arithmetic,
        reason = "the price ceiling scales the budget by a fixed headroom"
    )]
    #[must_use]
    pub fn for_budget(budget: f64) -> Self {
        Self {
            max_price: Some(budget * BUDGET_HEADROOM),
        }
    }

    /// Report whether `gift` satisfies the filter.
    #[must_use]
    pub fn admits(&self, gift: &GiftCandidate) -> bool {
        self.max_price.is_none_or(|ceiling| gift.price <= ceiling)
    }
}

/// Supply gift candidates for recommendation.
///
/// Implementations must be `Send + Sync` so a catalogue can be shared
/// between request handlers.
pub trait GiftCatalogue: Send + Sync {
    /// Return every candidate admitted by `filter`.
    fn candidates(
        &self,
        filter: &CandidateFilter,
    ) -> Box<dyn Iterator<Item = GiftCandidate> + Send + '_>;
}
