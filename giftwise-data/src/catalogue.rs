//! Gift catalogue backed by a JSON export.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use giftwise_core::{CandidateFilter, GiftCandidate, GiftCatalogue};
use log::warn;
use serde_json::Value;

use crate::{DataError, RecordError, RemoteGift, source::read_records};

/// Load gift candidates from a JSON array of remote gift records.
///
/// Records that cannot be mapped are skipped with a warning.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be opened or is not a JSON
/// array.
pub fn load_gifts(path: &Utf8Path) -> Result<Vec<GiftCandidate>, DataError> {
    let records = read_records(path)?;
    let total = records.len();
    let gifts: Vec<GiftCandidate> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match map_gift(raw) {
            Ok(gift) => Some(gift),
            Err(err) => {
                warn!("Skipped gift record: path={path}, index={index} ({err})");
                None
            }
        })
        .collect();
    log::debug!("loaded {} of {total} gift records from {path}", gifts.len());
    Ok(gifts)
}

fn map_gift(raw: Value) -> Result<GiftCandidate, RecordError> {
    let remote: RemoteGift =
        serde_json::from_value(raw).map_err(|source| RecordError::Shape { source })?;
    GiftCandidate::try_from(remote)
}

/// In-memory [`GiftCatalogue`] populated from a JSON export.
///
/// # Examples
/// ```
/// use giftwise_core::{CandidateFilter, GiftCandidate, GiftCatalogue};
/// use giftwise_data::JsonGiftCatalogue;
///
/// let catalogue = JsonGiftCatalogue::from_gifts(vec![
///     GiftCandidate::new(1, "Candle", 18.0).unwrap(),
/// ]);
/// assert_eq!(catalogue.candidates(&CandidateFilter::for_budget(10.0)).count(), 0);
/// assert_eq!(catalogue.candidates(&CandidateFilter::for_budget(20.0)).count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonGiftCatalogue {
    gifts: Vec<GiftCandidate>,
}

impl JsonGiftCatalogue {
    /// Load the catalogue from `path`.
    ///
    /// # Errors
    /// Propagates [`load_gifts`] failures.
    pub fn open(path: &Utf8Path) -> Result<Self, DataError> {
        load_gifts(path).map(Self::from_gifts)
    }

    /// Wrap already-loaded gifts.
    #[must_use]
    pub const fn from_gifts(gifts: Vec<GiftCandidate>) -> Self {
        Self { gifts }
    }

    /// Return the number of gifts held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.gifts.len()
    }

    /// Report whether the catalogue is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.gifts.is_empty()
    }
}

impl GiftCatalogue for JsonGiftCatalogue {
    fn candidates(
        &self,
        filter: &CandidateFilter,
    ) -> Box<dyn Iterator<Item = GiftCandidate> + Send + '_> {
        let filter = *filter;
        Box::new(
            self.gifts
                .iter()
                .filter(move |gift| filter.admits(gift))
                .cloned(),
        )
    }
}
