//! Facade crate for the Giftwise recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the personalised
//! scorer and the JSON export loaders behind feature flags.

#![forbid(unsafe_code)]

pub use giftwise_core::{
    BUDGET_HEADROOM, CandidateFilter, DEFAULT_LIMIT, Diagnostics, GiftCandidate,
    GiftCandidateError, GiftCatalogue, MatchScore, RecipientContext, RecommendRequest,
    RecommendRequestValidationError, RecommendResponse, ScoredGift, Scorer, Tags,
};

#[cfg(feature = "scorer")]
pub use giftwise_scorer::{
    PersonalisationScorer, REPEAT_GIFT_REASON, RecommendError, Recommender, ScoreWeights,
    ScorerConfigError,
};

#[cfg(feature = "data")]
pub use giftwise_data::{DataError, JsonGiftCatalogue, Recipient, RecipientDirectory, load_gifts};
