//! Gift candidates supplied by a catalogue for scoring.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Free-form labels attached to a gift.
///
/// Order carries no meaning and duplicates collapse, so the set is ordered
/// only to keep serialised output deterministic.
pub type Tags = BTreeSet<String>;

/// A gift that may be recommended to a recipient.
///
/// `base_match_score` is the upstream prior in `0..=100`. It stays optional
/// because catalogue exports frequently omit it or carry junk; scorers fall
/// back to a default prior instead of rejecting the record.
///
/// # Examples
///
/// ```
/// use giftwise_core::GiftCandidate;
///
/// # fn main() -> Result<(), giftwise_core::GiftCandidateError> {
/// let gift = GiftCandidate::new(1, "Trail Running Shoes", 89.0)?
///     .with_category("Sports & Fitness")
///     .with_tags(["hiking", "outdoor"])
///     .with_base_match_score(70);
/// assert!(gift.tags.contains("hiking"));
/// assert_eq!(gift.base_match_score, Some(70));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GiftCandidate {
    /// Unique identifier.
    pub id: u64,
    /// Display name, scanned for interest matches.
    pub title: String,
    /// Single classification label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    /// Free-text labels, scanned for interest matches.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Tags,
    /// Explanation shown alongside the gift, scanned for interest matches.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reasoning: String,
    /// Upstream prior score, if the source supplied one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_match_score: Option<i64>,
    /// Non-negative price in the catalogue's currency.
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: f64,
}

/// Errors returned by [`GiftCandidate::new`].
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum GiftCandidateError {
    /// The price was below zero.
    #[error("gift price must be non-negative, got {price}")]
    NegativePrice {
        /// Rejected price.
        price: f64,
    },
    /// The price was NaN or infinite.
    #[error("gift price must be finite")]
    NonFinitePrice,
}

impl GiftCandidate {
    /// Validate the price and construct a candidate with empty metadata.
    ///
    /// # Errors
    /// Returns [`GiftCandidateError`] when `price` is negative or not finite.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        price: f64,
    ) -> Result<Self, GiftCandidateError> {
        if !price.is_finite() {
            return Err(GiftCandidateError::NonFinitePrice);
        }
        if price < 0.0 {
            return Err(GiftCandidateError::NegativePrice { price });
        }
        Ok(Self {
            id,
            title: title.into(),
            category: String::new(),
            tags: Tags::new(),
            reasoning: String::new(),
            base_match_score: None,
            price,
        })
    }

    /// Set the category while returning `self` for chaining.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Add tags while returning `self` for chaining.
    ///
    /// Tags are trimmed and blank entries are dropped.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.tags.extend(
            tags.into_iter()
                .map(|tag| tag.as_ref().trim().to_owned())
                .filter(|tag| !tag.is_empty()),
        );
        self
    }

    /// Set the reasoning text while returning `self` for chaining.
    #[must_use]
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    /// Set the upstream prior while returning `self` for chaining.
    #[must_use]
    pub const fn with_base_match_score(mut self, score: i64) -> Self {
        self.base_match_score = Some(score);
        self
    }
}
