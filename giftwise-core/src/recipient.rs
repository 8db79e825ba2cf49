//! Recipient context: caller interests and previously given gifts.
//!
//! Interests are evaluated in insertion order, so the order of the
//! resulting personalisation reasons follows the order interests were added.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Signals used to personalise a ranking for one recipient.
///
/// # Examples
/// ```
/// use giftwise_core::RecipientContext;
///
/// let context = RecipientContext::new()
///     .with_interest("hiking")
///     .with_interest("coffee")
///     .with_gift_history(["Espresso Maker"]);
/// assert_eq!(context.interests(), ["hiking", "coffee"]);
/// assert!(context.has_given("Espresso Maker"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RecipientContext {
    #[cfg_attr(feature = "serde", serde(default))]
    interests: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    gift_history: BTreeSet<String>,
}

impl RecipientContext {
    /// Construct an empty context.
    ///
    /// # Examples
    /// ```
    /// use giftwise_core::RecipientContext;
    ///
    /// let context = RecipientContext::new();
    /// assert!(context.interests().is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interests in the order they were supplied.
    #[must_use]
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Titles of gifts the recipient has already received.
    #[must_use]
    pub const fn gift_history(&self) -> &BTreeSet<String> {
        &self.gift_history
    }

    /// Report whether a gift with exactly this title was given before.
    ///
    /// Matching is exact: case and surrounding whitespace are significant.
    #[must_use]
    pub fn has_given(&self, title: &str) -> bool {
        self.gift_history.contains(title)
    }

    /// Append an interest exactly as supplied.
    ///
    /// Interests are matched as substrings, so an empty interest matches
    /// every gift.
    pub fn push_interest(&mut self, interest: impl Into<String>) {
        self.interests.push(interest.into());
    }

    /// Append an interest while returning `self` for chaining.
    #[must_use]
    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        self.push_interest(interest);
        self
    }

    /// Append several interests while returning `self` for chaining.
    #[must_use]
    pub fn with_interests<I, T>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        for interest in interests {
            self.push_interest(interest);
        }
        self
    }

    /// Record previously given gift titles while returning `self`.
    #[must_use]
    pub fn with_gift_history<I, T>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.gift_history.extend(titles.into_iter().map(Into::into));
        self
    }
}
