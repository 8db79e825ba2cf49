//! Error types raised while configuring scorers or running recommendations.
#![forbid(unsafe_code)]

use giftwise_core::RecommendRequestValidationError;
use thiserror::Error;

/// Errors raised when configuring a [`PersonalisationScorer`](crate::PersonalisationScorer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScorerConfigError {
    /// Weights were negative or the default prior fell outside `0..=100`.
    #[error("interest boost and repeat penalty must be non-negative and the default prior within 0..=100")]
    InvalidWeights,
}

/// Errors raised by [`Recommender::recommend`](crate::Recommender::recommend).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RecommendError {
    /// The request parameters failed validation.
    #[error("invalid recommendation request: {0}")]
    InvalidRequest(#[from] RecommendRequestValidationError),
}
