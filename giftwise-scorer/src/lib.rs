//! Scoring for Giftwise recommendations.
//!
//! The crate provides two pieces:
//! - **Personalised scoring** via [`PersonalisationScorer`], which implements
//!   the [`Scorer`](giftwise_core::Scorer) trait. Each candidate's upstream
//!   prior is boosted for every caller interest found in its tags, title, or
//!   reasoning, penalised when the recipient already received a gift with
//!   the same title, clamped to `1..=99`, and the list is stably re-ranked.
//! - **The recommendation pipeline** via [`Recommender`], which pulls
//!   budget-filtered candidates from a [`GiftCatalogue`](giftwise_core::GiftCatalogue),
//!   shortlists them by prior, and hands them to a scorer.
//!
//! # Examples
//!
//! ```
//! use giftwise_core::{GiftCandidate, RecipientContext, Scorer};
//! use giftwise_scorer::PersonalisationScorer;
//!
//! let gifts = vec![
//!     GiftCandidate::new(1, "Pour-Over Coffee Set", 35.0)
//!         .unwrap()
//!         .with_tags(["coffee"])
//!         .with_base_match_score(60),
//!     GiftCandidate::new(2, "Desk Lamp", 40.0)
//!         .unwrap()
//!         .with_base_match_score(70),
//! ];
//! let context = RecipientContext::new().with_interest("Coffee");
//!
//! let ranked = PersonalisationScorer::default().score(&gifts, Some(&context));
//! assert_eq!(ranked[0].gift.id, 1);
//! assert_eq!(ranked[0].match_score.get(), 75);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod matching;
mod personalisation;
mod recommend;
mod weights;

pub use error::{RecommendError, ScorerConfigError};
pub use personalisation::{PersonalisationScorer, REPEAT_GIFT_REASON};
pub use recommend::Recommender;
pub use weights::{
    DEFAULT_INTEREST_BOOST, DEFAULT_PRIOR, DEFAULT_REPEAT_PENALTY, ScoreWeights, resolve_prior,
};
