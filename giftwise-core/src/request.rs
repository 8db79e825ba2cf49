//! Recommendation requests and responses.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CandidateFilter, ScoredGift};

/// Number of candidates kept when a request does not specify a limit.
pub const DEFAULT_LIMIT: usize = 15;

/// Parameters for one recommendation run.
///
/// # Examples
/// ```rust
/// use giftwise_core::RecommendRequest;
///
/// let request = RecommendRequest {
///     interests: vec!["hiking".into()],
///     budget: Some(50.0),
///     ..RecommendRequest::default()
/// };
/// assert_eq!(request.limit, 15);
/// assert!(request.personalise);
/// assert!(request.validate_detailed().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct RecommendRequest {
    /// Caller-supplied interests used for keyword matching.
    pub interests: Vec<String>,
    /// Spending target; candidates up to 20% above it stay eligible. Zero
    /// means unrestricted.
    pub budget: Option<f64>,
    /// Maximum number of candidates to score.
    pub limit: usize,
    /// Apply interest and history adjustments when `true`.
    pub personalise: bool,
}

impl Default for RecommendRequest {
    fn default() -> Self {
        Self {
            interests: Vec::new(),
            budget: None,
            limit: DEFAULT_LIMIT,
            personalise: true,
        }
    }
}

/// Reasons a [`RecommendRequest`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RecommendRequestValidationError {
    /// The budget was below zero.
    #[error("budget must be non-negative, got {budget}")]
    NegativeBudget {
        /// Rejected budget.
        budget: f64,
    },
    /// The budget was NaN or infinite.
    #[error("budget must be finite")]
    NonFiniteBudget,
    /// A limit of zero would never return anything.
    #[error("limit must be at least 1")]
    ZeroLimit,
}

impl RecommendRequest {
    /// Check the request parameters.
    ///
    /// # Errors
    /// Returns the first [`RecommendRequestValidationError`] encountered.
    pub fn validate_detailed(&self) -> Result<(), RecommendRequestValidationError> {
        if let Some(budget) = self.budget {
            if !budget.is_finite() {
                return Err(RecommendRequestValidationError::NonFiniteBudget);
            }
            if budget < 0.0 {
                return Err(RecommendRequestValidationError::NegativeBudget { budget });
            }
        }
        if self.limit == 0 {
            return Err(RecommendRequestValidationError::ZeroLimit);
        }
        Ok(())
    }

    /// Catalogue filter implied by the budget.
    ///
    /// A zero budget counts as no budget.
    #[must_use]
    pub fn candidate_filter(&self) -> CandidateFilter {
        self.budget
            .filter(|budget| *budget > 0.0)
            .map_or_else(CandidateFilter::unrestricted, CandidateFilter::for_budget)
    }
}

/// Diagnostic information about a recommendation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Diagnostics {
    /// Candidates the catalogue returned before the limit was applied.
    pub candidates_considered: usize,
    /// Whether personalisation signals were applied.
    pub personalised: bool,
}

/// Ranked gifts produced for a request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RecommendResponse {
    /// Gifts in descending match-score order.
    pub gifts: Vec<ScoredGift>,
    /// Run diagnostics.
    pub diagnostics: Diagnostics,
}
