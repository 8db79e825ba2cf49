//! Case-insensitive keyword matching against a gift's text fields.
#![forbid(unsafe_code)]

use giftwise_core::GiftCandidate;

/// Lowercased view of the searchable parts of a gift.
///
/// Built once per gift so each interest only lowercases itself.
pub(crate) struct GiftText {
    tags: Vec<String>,
    title: String,
    reasoning: String,
}

impl GiftText {
    pub(crate) fn new(gift: &GiftCandidate) -> Self {
        Self {
            tags: gift.tags.iter().map(|tag| tag.to_lowercase()).collect(),
            title: gift.title.to_lowercase(),
            reasoning: gift.reasoning.to_lowercase(),
        }
    }

    /// Report whether `interest` occurs in any tag, the title, or the
    /// reasoning. An empty interest occurs everywhere.
    pub(crate) fn mentions(&self, interest: &str) -> bool {
        let needle = interest.to_lowercase();
        self.tags.iter().any(|tag| tag.contains(&needle))
            || self.title.contains(&needle)
            || self.reasoning.contains(&needle)
    }
}
