//! Error types raised while loading and mapping catalogue exports.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use giftwise_core::GiftCandidateError;
use thiserror::Error;

/// Errors raised while mapping a single remote record.
///
/// Loaders log and skip records that fail with this error rather than
/// aborting the whole export.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record did not match the expected shape.
    #[error("record does not match the expected shape")]
    Shape {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The price field held something other than a number.
    #[error("price {raw} is not a number")]
    InvalidPrice {
        /// Raw JSON found in the record.
        raw: String,
    },
    /// The mapped values failed domain validation.
    #[error("gift {id} failed validation")]
    Gift {
        /// Identifier of the affected gift.
        id: u64,
        /// Source validation error.
        #[source]
        source: GiftCandidateError,
    },
}

/// Errors raised while reading an export file.
#[derive(Debug, Error)]
pub enum DataError {
    /// Opening the export failed.
    #[error("failed to open {path}")]
    Open {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The export was not a JSON array.
    #[error("failed to parse JSON records in {path}")]
    Parse {
        /// File being parsed.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
