//! Remote record shapes and their mapping onto canonical domain types.
//!
//! The remote store names fields in `PascalCase` while some exports use
//! `camelCase`; both spellings are accepted. List-like fields arrive as
//! comma-separated strings, JSON arrays, or JSON-encoded strings holding an
//! array, so they are captured as raw [`Value`]s and normalised here rather
//! than in the scorer.

#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use giftwise_core::GiftCandidate;
use serde::Deserialize;
use serde_json::Value;

use crate::RecordError;

/// A gift as exported by the remote store.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteGift {
    /// Record identifier.
    #[serde(rename = "Id", alias = "id")]
    pub id: u64,
    /// Display name.
    #[serde(rename = "Title", alias = "title", default)]
    pub title: String,
    /// Classification label.
    #[serde(rename = "Category", alias = "category", default)]
    pub category: String,
    /// Comma-separated string or array of tags.
    #[serde(rename = "Tags", alias = "tags", default)]
    pub tags: Value,
    /// Explanation text.
    #[serde(rename = "Reasoning", alias = "reasoning", default)]
    pub reasoning: String,
    /// Upstream prior; may be missing, numeric, or a numeric string.
    #[serde(
        rename = "MatchScore",
        alias = "matchScore",
        alias = "baseMatchScore",
        default
    )]
    pub match_score: Value,
    /// Price as a number or numeric string.
    #[serde(rename = "Price", alias = "price", default)]
    pub price: Value,
}

impl TryFrom<RemoteGift> for GiftCandidate {
    type Error = RecordError;

    fn try_from(remote: RemoteGift) -> Result<Self, Self::Error> {
        let price = parse_price(&remote.price)?;
        let gift = Self::new(remote.id, remote.title, price).map_err(|source| {
            RecordError::Gift {
                id: remote.id,
                source,
            }
        })?;
        let gift = gift
            .with_category(remote.category)
            .with_tags(parse_list(&remote.tags))
            .with_reasoning(remote.reasoning);
        Ok(match parse_match_score(&remote.match_score) {
            Some(score) => gift.with_base_match_score(score),
            None => gift,
        })
    }
}

/// A gift recipient as exported by the remote store.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteRecipient {
    /// Record identifier.
    #[serde(rename = "Id", alias = "id")]
    pub id: u64,
    /// Display name.
    #[serde(rename = "Name", alias = "name", default)]
    pub name: String,
    /// Comma-separated string or array of interests.
    #[serde(rename = "Interests", alias = "interests", default)]
    pub interests: Value,
    /// Previously given gift titles: an array, a JSON-encoded array, or a
    /// comma-separated string.
    #[serde(rename = "GiftHistory", alias = "giftHistory", default)]
    pub gift_history: Value,
}

/// Canonical recipient record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    /// Record identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Interests in the order the store listed them.
    pub interests: Vec<String>,
    /// Titles of gifts already given.
    pub gift_history: BTreeSet<String>,
}

impl From<RemoteRecipient> for Recipient {
    fn from(remote: RemoteRecipient) -> Self {
        Self {
            id: remote.id,
            name: remote.name,
            interests: parse_list(&remote.interests),
            gift_history: parse_history(&remote.gift_history).into_iter().collect(),
        }
    }
}

/// Interpret a remote match score.
///
/// Whole numbers are kept whether they arrive as integers, floats such as
/// `70.0`, or numeric strings; anything else (fractions, booleans, junk text,
/// `null`) yields `None` so scoring falls back to its default prior.
#[must_use]
pub fn parse_match_score(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(whole_number)),
        Value::String(text) => {
            let trimmed = text.trim();
            trimmed
                .parse()
                .ok()
                .or_else(|| trimmed.parse().ok().and_then(whole_number))
        }
        _ => None,
    }
}

/// `Display` drops the fraction only for whole floats, so integer parsing
/// succeeds exactly when `value` has no fractional part and fits `i64`.
fn whole_number(value: f64) -> Option<i64> {
    value.to_string().parse().ok()
}

/// Interpret a remote price. Missing prices read as zero.
///
/// # Errors
/// Returns [`RecordError::InvalidPrice`] when the value is neither a number
/// nor a numeric string.
pub fn parse_price(value: &Value) -> Result<f64, RecordError> {
    let parsed = match value {
        Value::Null => Some(0.0),
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| RecordError::InvalidPrice {
        raw: value.to_string(),
    })
}

/// Split a comma-separated string or collect a string array.
///
/// Entries are trimmed and blanks dropped; non-string array members are
/// ignored.
#[must_use]
pub fn parse_list(value: &Value) -> Vec<String> {
    match value {
        Value::String(text) => split_csv(text),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}

/// Parse gift history, accepting a JSON-encoded array inside a string.
#[must_use]
pub fn parse_history(value: &Value) -> Vec<String> {
    if let Value::String(text) = value
        && text.trim_start().starts_with('[')
    {
        if let Ok(titles) = serde_json::from_str::<Vec<String>>(text) {
            return titles;
        }
        log::warn!("Gift history looked like JSON but did not parse; treating as comma-separated");
    }
    parse_list(value)
}

fn split_csv(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
