//! Core domain types for the Giftwise recommendation engine.
//!
//! The crate defines the canonical gift and recipient records shared by every
//! other Giftwise crate, together with the traits that connect them:
//!
//! - [`GiftCatalogue`] supplies candidate gifts for a request.
//! - [`Scorer`] turns candidates and optional [`RecipientContext`] into a
//!   ranked list of [`ScoredGift`] values.
//!
//! Constructors validate their inputs and return `Result` so malformed records
//! are rejected at the boundary rather than deep inside scoring.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalogue;
pub mod gift;
pub mod recipient;
pub mod request;
pub mod score;
pub mod scored;
pub mod scorer;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalogue::{BUDGET_HEADROOM, CandidateFilter, GiftCatalogue};
pub use gift::{GiftCandidate, GiftCandidateError, Tags};
pub use recipient::RecipientContext;
pub use request::{
    DEFAULT_LIMIT, Diagnostics, RecommendRequest, RecommendRequestValidationError,
    RecommendResponse,
};
pub use score::MatchScore;
pub use scored::ScoredGift;
pub use scorer::Scorer;
